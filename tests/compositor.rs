mod tests {
    use fire_strip::compositor::{composite, flush};
    use fire_strip::output::StripError;
    use fire_strip::{Duration, OutputDriver, Rgb, StripBuffer};
    use smart_leds::{RGB8, SmartLedsWrite};

    const PATTERN: [Rgb; 4] = [
        Rgb { r: 200, g: 100, b: 50 },
        Rgb { r: 255, g: 255, b: 255 },
        Rgb { r: 10, g: 20, b: 30 },
        Rgb { r: 255, g: 0, b: 128 },
    ];

    /// Records staged pixels and committed frames
    #[derive(Default)]
    struct RecordingDriver {
        staged: Vec<(usize, Rgb)>,
        refreshes: usize,
        fail_pixel: Option<usize>,
        fail_refresh: bool,
    }

    impl OutputDriver for RecordingDriver {
        type Error = &'static str;

        fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error> {
            if self.fail_pixel == Some(index) {
                return Err("bus busy");
            }
            self.staged.push((index, color));
            Ok(())
        }

        fn refresh(&mut self, _timeout: Duration) -> Result<(), Self::Error> {
            if self.fail_refresh {
                return Err("timeout");
            }
            self.refreshes += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct VecWriter {
        frames: Vec<Vec<RGB8>>,
    }

    impl SmartLedsWrite for VecWriter {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_zero_reveal_is_black() {
        let mut out = [Rgb::new(9, 9, 9); 4];
        composite(&PATTERN, &[255; 4], 0, &mut out);
        assert!(out.iter().all(|led| *led == Rgb::default()));
    }

    #[test]
    fn test_full_level_passes_pattern_through() {
        let mut out = [Rgb::default(); 4];
        composite(&PATTERN, &[255; 4], 4, &mut out);
        assert_eq!(out, PATTERN);
    }

    #[test]
    fn test_level_scaling_truncates() {
        let mut out = [Rgb::default(); 4];
        composite(&PATTERN, &[64, 64, 0, 1], 4, &mut out);
        // 200 * 64 / 255 = 50.19, 100 * 64 / 255 = 25.09, 50 * 64 / 255 = 12.54
        assert_eq!(out[0], Rgb::new(50, 25, 12));
        assert_eq!(out[1], Rgb::new(64, 64, 64));
        assert_eq!(out[2], Rgb::new(0, 0, 0));
        assert_eq!(out[3], Rgb::new(1, 0, 0));
    }

    #[test]
    fn test_partial_reveal_blanks_tail() {
        let mut out = [Rgb::default(); 4];
        composite(&PATTERN, &[255; 4], 2, &mut out);
        assert_eq!(out[..2], PATTERN[..2]);
        assert_eq!(out[2], Rgb::default());
        assert_eq!(out[3], Rgb::default());
    }

    #[test]
    fn test_flush_writes_every_pixel_once() {
        let mut driver = RecordingDriver::default();
        flush(&mut driver, &PATTERN, Duration::from_millis(100)).expect("flush");
        assert_eq!(driver.refreshes, 1);
        let indices: Vec<usize> = driver.staged.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(driver.staged[3].1, PATTERN[3]);
    }

    #[test]
    fn test_flush_skips_refresh_after_pixel_failure() {
        let mut driver = RecordingDriver {
            fail_pixel: Some(2),
            ..Default::default()
        };
        assert_eq!(
            flush(&mut driver, &PATTERN, Duration::from_millis(100)),
            Err("bus busy")
        );
        assert_eq!(driver.refreshes, 0);
    }

    #[test]
    fn test_flush_surfaces_refresh_failure() {
        let mut driver = RecordingDriver {
            fail_refresh: true,
            ..Default::default()
        };
        assert_eq!(
            flush(&mut driver, &PATTERN, Duration::from_millis(100)),
            Err("timeout")
        );
        assert_eq!(driver.staged.len(), 4);
    }

    #[test]
    fn test_strip_buffer_writes_on_refresh() {
        let mut strip: StripBuffer<VecWriter, 8> = StripBuffer::new(VecWriter::default(), 4);
        flush(&mut strip, &PATTERN, Duration::from_millis(100)).expect("flush");
        assert_eq!(strip.pixels(), &PATTERN);

        let writer = strip.into_inner();
        assert_eq!(writer.frames, vec![PATTERN.to_vec()]);
    }

    #[test]
    fn test_strip_buffer_rejects_out_of_range() {
        let mut strip: StripBuffer<VecWriter, 8> = StripBuffer::new(VecWriter::default(), 4);
        assert_eq!(
            strip.set_pixel(4, Rgb::default()),
            Err(StripError::OutOfRange(4))
        );
    }
}
