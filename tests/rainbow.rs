mod tests {
    use fire_strip::Rgb;
    use fire_strip::color::wheel_point;
    use fire_strip::pattern::{Pattern, RainbowGenerator, step_rainbow};

    #[test]
    fn test_wheel_segment_boundaries() {
        assert_eq!(wheel_point(0), Rgb::new(255, 0, 0));
        assert_eq!(wheel_point(119), Rgb::new(0, 255, 0));
        assert_eq!(wheel_point(120), Rgb::new(0, 255, 0));
        assert_eq!(wheel_point(240), Rgb::new(0, 0, 255));
        assert_eq!(wheel_point(359), Rgb::new(255, 0, 0));
        assert_eq!(wheel_point(60), Rgb::new(127, 128, 0));
        assert_eq!(wheel_point(360), wheel_point(0));
    }

    #[test]
    fn test_wheel_channels_sum_to_full() {
        for angle in 0..360 {
            let color = wheel_point(angle);
            let sum = u16::from(color.r) + u16::from(color.g) + u16::from(color.b);
            assert_eq!(sum, 255, "angle {}", angle);
        }
    }

    #[test]
    fn test_step_rainbow_phase_zero() {
        let mut leds = [Rgb::default(); 10];
        let next = step_rainbow(0, &mut leds);
        assert_eq!(next, 1);
        assert_eq!(leds[0], Rgb::new(255, 0, 0));
        for (i, led) in leds.iter().enumerate() {
            assert_eq!(*led, wheel_point(i as u16));
        }
    }

    #[test]
    fn test_step_rainbow_wraps_phase() {
        let mut leds = [Rgb::default(); 4];
        assert_eq!(step_rainbow(359, &mut leds), 0);
        assert_eq!(leds[0], wheel_point(359));
        assert_eq!(leds[1], wheel_point(0));
    }

    #[test]
    fn test_rainbow_full_cycle_repeats() {
        let mut generator = RainbowGenerator::new();
        let mut first = [Rgb::default(); 16];
        generator.step(&mut first);

        let mut leds = [Rgb::default(); 16];
        for _ in 0..359 {
            generator.step(&mut leds);
        }
        assert_eq!(generator.phase(), 0);

        generator.step(&mut leds);
        assert_eq!(leds, first);
    }

    #[test]
    fn test_long_strip_wraps_around_wheel() {
        let mut leds = [Rgb::default(); 400];
        step_rainbow(30, &mut leds);
        assert_eq!(leds[360], leds[0]);
        assert_eq!(leds[399], leds[39]);
    }
}
