mod tests {
    use fire_strip::control::{ControlProcessor, EdgeDetector};
    use fire_strip::{
        ButtonLevels, Buttons, ControlEvent, Duration, FadeState, LightBus, LightConfig, Renderer,
        TickTimings,
    };

    const PROGRAM_PRESSED: ButtonLevels = ButtonLevels {
        program: false,
        ..ButtonLevels::RELEASED
    };

    #[test]
    fn test_edge_detector_fires_once_per_press() {
        let mut button = EdgeDetector::new(true);
        assert!(!button.update(true));
        assert!(button.update(false));
        assert!(!button.update(false));
        assert!(!button.update(true));
        assert!(button.update(false));
    }

    #[test]
    fn test_button_held_at_startup_is_not_a_press() {
        let mut button = EdgeDetector::new(false);
        assert!(!button.update(false));
    }

    #[test]
    fn test_buttons_post_events() {
        let bus = LightBus::<8>::new();
        let mut buttons = Buttons::new(
            bus.control_sender(),
            ButtonLevels::RELEASED,
            &TickTimings::default(),
        );

        assert_eq!(buttons.poll(PROGRAM_PRESSED).posted, 1);
        assert_eq!(buttons.poll(PROGRAM_PRESSED).posted, 0);
        assert_eq!(buttons.poll(ButtonLevels::RELEASED).posted, 0);
        assert_eq!(
            buttons
                .poll(ButtonLevels {
                    palette: false,
                    power: false,
                    program: true,
                })
                .posted,
            2
        );
    }

    #[test]
    fn test_buttons_report_sampling_interval() {
        let bus = LightBus::<8>::new();
        let mut buttons = Buttons::new(
            bus.control_sender(),
            ButtonLevels::RELEASED,
            &TickTimings::default(),
        );
        assert_eq!(buttons.poll(ButtonLevels::RELEASED).sleep, Duration::from_millis(10));
        assert_eq!(buttons.poll(PROGRAM_PRESSED).sleep, Duration::from_millis(10));

        let timings = TickTimings {
            button_interval: Duration::from_millis(25),
            ..TickTimings::default()
        };
        let mut buttons = Buttons::new(bus.control_sender(), ButtonLevels::RELEASED, &timings);
        assert_eq!(buttons.poll(ButtonLevels::RELEASED).sleep, Duration::from_millis(25));
    }

    #[test]
    fn test_control_processor_accumulates() {
        let channel = fire_strip::bus::ControlChannel::new();
        let sender = channel.sender();
        for event in [
            ControlEvent::PowerToggle,
            ControlEvent::PowerToggle,
            ControlEvent::PowerToggle,
            ControlEvent::ProgramNext,
            ControlEvent::PaletteNext,
            ControlEvent::PaletteNext,
        ] {
            sender.try_send(event).expect("queue has room");
        }

        let mut processor = ControlProcessor::new(channel.receiver());
        let effects = processor.process_pending();
        assert!(effects.toggle_power);
        assert_eq!(effects.program_requests, 1);
        assert_eq!(effects.palette_steps, 2);
        assert!(!processor.process_pending().has_effects());
    }

    #[test]
    fn test_renderer_applies_button_presses() {
        let bus = LightBus::<8>::new();
        let config = LightConfig::default().with_strip_length(8);
        let mut renderer = Renderer::new(&bus, &config).expect("valid config");
        let mut buttons = Buttons::new(
            bus.control_sender(),
            ButtonLevels::RELEASED,
            &TickTimings::default(),
        );

        buttons.poll(ButtonLevels {
            power: false,
            palette: false,
            program: false,
        });
        renderer.render();

        assert!(!renderer.is_powered());
        assert_eq!(renderer.fade_state(), FadeState::FadingOut);
        assert_eq!(renderer.palette_rotation(), 1);
        assert_eq!(bus.palette_rotation(), 1);
    }
}
