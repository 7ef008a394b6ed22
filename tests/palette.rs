mod tests {
    use fire_strip::color::{PALETTE_ROTATIONS, Palette, next_rotation};
    use fire_strip::Rgb;

    const CHANNEL_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)];

    fn channels(color: Rgb) -> [u8; 3] {
        [color.r, color.g, color.b]
    }

    #[test]
    fn test_palette_has_64_entries() {
        for rotation in 0..20 {
            assert_eq!(Palette::build(rotation).len(), 64);
        }
    }

    #[test]
    fn test_palette_third_channel_is_dark() {
        for rotation in 0..12 {
            let (first, second) = CHANNEL_PAIRS[rotation % 6];
            let third = 3 - first - second;
            for entry in Palette::build(rotation).entries() {
                assert_eq!(channels(*entry)[third], 0, "rotation {}", rotation);
            }
        }
    }

    #[test]
    fn test_palette_anchors() {
        let palette = Palette::build(0);
        assert_eq!(palette.color(0), Rgb::new(0, 0, 0));
        assert_eq!(palette.color(31), Rgb::new(248, 0, 0));
        assert_eq!(palette.color(32), Rgb::new(255, 0, 0));
        assert_eq!(palette.color(63), Rgb::new(255, 248, 0));

        let palette = Palette::build(5);
        assert_eq!(palette.color(0), Rgb::new(0, 0, 0));
        assert_eq!(palette.color(63), Rgb::new(0, 248, 255));
    }

    #[test]
    fn test_palette_halves_are_monotonic() {
        for rotation in 0..6 {
            let (first, second) = CHANNEL_PAIRS[rotation];
            let palette = Palette::build(rotation);
            let entries = palette.entries();
            for i in 1..32 {
                assert!(channels(entries[i])[first] > channels(entries[i - 1])[first]);
                assert_eq!(channels(entries[i])[second], 0);
            }
            for i in 32..64 {
                assert_eq!(channels(entries[i])[first], 255);
                if i > 32 {
                    assert!(channels(entries[i])[second] > channels(entries[i - 1])[second]);
                }
            }
        }
    }

    #[test]
    fn test_palette_rotation_wraps() {
        assert_eq!(Palette::build(7), Palette::build(1));
        assert_eq!(Palette::build(6).rotation(), 0);
    }

    #[test]
    fn test_palette_saturates_past_hottest_entry() {
        let palette = Palette::build(0);
        assert_eq!(palette.max_heat(), 63);
        assert_eq!(palette.color(200), palette.color(63));
    }

    #[test]
    fn test_palette_custom_size() {
        let palette = Palette::with_size(0, 16);
        assert_eq!(palette.len(), 16);
        assert_eq!(palette.color(1), Rgb::new(32, 0, 0));
        assert_eq!(palette.color(15), Rgb::new(255, 224, 0));

        // Odd sizes round down
        assert_eq!(Palette::with_size(0, 17).len(), 16);
    }

    #[test]
    fn test_next_rotation_is_bounded() {
        let mut rotation = 0;
        for _ in 0..1000 {
            rotation = next_rotation(rotation);
            assert!(rotation < PALETTE_ROTATIONS);
        }
        assert_eq!(next_rotation(5), 0);
        assert_eq!(next_rotation(2), 3);
    }
}
