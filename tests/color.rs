mod tests {
    use build_light_composer::color::{Hsv, Rgb, hsv2rgb};
    use build_light_composer::{apa102_lut, correct_gamma};

    fn convert(hue: u8, sat: u8, val: u8) -> Rgb {
        hsv2rgb(Hsv { hue, sat, val })
    }

    #[test]
    fn test_hsv2rgb_primaries() {
        assert_eq!(convert(0, 255, 255), Rgb::new(255, 0, 0));
        assert_eq!(convert(86, 255, 255), Rgb::new(0, 255, 0));
        assert_eq!(convert(172, 255, 255), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_hsv2rgb_sector_boundaries() {
        assert_eq!(convert(43, 255, 255), Rgb::new(254, 255, 0));
        assert_eq!(convert(85, 255, 255), Rgb::new(3, 255, 0));
        assert_eq!(convert(129, 255, 255), Rgb::new(0, 254, 255));
        assert_eq!(convert(171, 255, 255), Rgb::new(0, 3, 255));
        assert_eq!(convert(214, 255, 255), Rgb::new(252, 0, 255));
    }

    #[test]
    fn test_hsv2rgb_wheel_end_stays_red() {
        // Hue 255 sits just short of wrapping back to pure red
        assert_eq!(convert(255, 255, 255), Rgb::new(255, 0, 15));
    }

    #[test]
    fn test_hsv2rgb_zero_saturation_is_gray() {
        assert_eq!(convert(0, 0, 200), Rgb::new(200, 200, 200));
        assert_eq!(convert(123, 0, 200), Rgb::new(200, 200, 200));
    }

    #[test]
    fn test_hsv2rgb_zero_value_is_black() {
        assert_eq!(convert(10, 255, 0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_hsv2rgb_mixed_inputs() {
        assert_eq!(convert(100, 128, 200), Rgb::new(99, 200, 132));
        assert_eq!(convert(200, 40, 90), Rgb::new(85, 75, 90));
    }

    #[test]
    fn test_gamma_endpoints() {
        assert_eq!(apa102_lut(0), 0);
        assert_eq!(apa102_lut(255), 255);
    }

    #[test]
    fn test_gamma_curve_samples() {
        assert_eq!(apa102_lut(64), 5);
        assert_eq!(apa102_lut(128), 37);
        assert_eq!(apa102_lut(200), 129);
    }

    #[test]
    fn test_gamma_is_monotonic() {
        for value in 1..=u8::MAX {
            assert!(apa102_lut(value) >= apa102_lut(value - 1));
        }
    }

    #[test]
    fn test_correct_gamma_per_channel() {
        assert_eq!(
            correct_gamma(Rgb::new(0, 255, 128)),
            Rgb::new(0, 255, 37)
        );
    }
}
