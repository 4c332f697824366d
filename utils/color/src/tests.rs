//! Properties that hold across the whole input space.

use proptest::prelude::*;

use crate::{Hsl, Rgb, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};

/// Worst channel drift of `hsl_to_rgb(rgb_to_hsl(c))` over every 8-bit color.
///
/// Quantizing hue to whole degrees costs up to ~2 units on steep hue ramps,
/// and saturation/lightness percentages add the rest.
const HSL_ROUND_TRIP_TOLERANCE: u8 = 5;

fn any_rgb() -> impl Strategy<Value = Rgb> {
    any::<(u8, u8, u8)>().prop_map(Rgb::from)
}

fn any_hsl() -> impl Strategy<Value = Hsl> {
    (0u16..360, 0u8..=100, 0u8..=100).prop_map(Hsl::from)
}

fn max_channel_drift(a: Rgb, b: Rgb) -> u8 {
    a.red
        .abs_diff(b.red)
        .max(a.green.abs_diff(b.green))
        .max(a.blue.abs_diff(b.blue))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2048))]

    #[test]
    fn hex_round_trip_is_lossless(rgb in any_rgb()) {
        prop_assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), Ok(rgb));
    }

    #[test]
    fn lowercase_hex_parses_the_same(rgb in any_rgb()) {
        let lower = rgb_to_hex(rgb).to_ascii_lowercase();
        prop_assert_eq!(hex_to_rgb(&lower), Ok(rgb));
        prop_assert_eq!(hex_to_rgb(&lower[1..]), Ok(rgb));
    }

    #[test]
    fn hsl_round_trip_stays_within_tolerance(rgb in any_rgb()) {
        let back = hsl_to_rgb(rgb_to_hsl(rgb));
        prop_assert!(
            max_channel_drift(rgb, back) <= HSL_ROUND_TRIP_TOLERANCE,
            "{rgb} -> {} -> {back}",
            rgb_to_hsl(rgb)
        );
    }

    #[test]
    fn zero_lightness_is_black(hsl in any_hsl()) {
        let hsl = Hsl::new(hsl.hue, hsl.saturation, 0);
        prop_assert_eq!(hsl_to_rgb(hsl), Rgb::BLACK);
    }

    #[test]
    fn full_lightness_is_white(hsl in any_hsl()) {
        let hsl = Hsl::new(hsl.hue, hsl.saturation, 100);
        prop_assert_eq!(hsl_to_rgb(hsl), Rgb::WHITE);
    }

    #[test]
    fn derived_hsl_is_in_range(rgb in any_rgb()) {
        let hsl = rgb_to_hsl(rgb);
        prop_assert!(hsl.hue < 360);
        prop_assert!(hsl.saturation <= 100);
        prop_assert!(hsl.lightness <= 100);
    }

    #[test]
    fn strings_that_are_not_six_digits_are_rejected(s in "#?[0-9a-fA-F]{0,5}|#?[0-9a-fA-F]{7,9}") {
        prop_assert!(hex_to_rgb(&s).is_err());
    }

    #[test]
    fn a_single_foreign_character_is_rejected(
        prefix in "[0-9a-f]{0,5}",
        bad in "[g-zG-Z ]",
    ) {
        let mut s = prefix;
        s.push_str(&bad);
        while s.len() < 6 {
            s.push('0');
        }
        prop_assert!(hex_to_rgb(&s).is_err());
    }
}

#[test]
fn gray_levels_are_achromatic_and_round_trip_within_one() {
    for level in 0..=255u8 {
        let gray = Rgb::new(level, level, level);
        let hsl = rgb_to_hsl(gray);
        let expected = (f64::from(level) / 255.0 * 100.0 + 0.5).floor();
        assert_eq!(hsl.hue, 0);
        assert_eq!(hsl.saturation, 0);
        assert!((f64::from(hsl.lightness) - expected).abs() < f64::EPSILON);
        assert!(max_channel_drift(gray, hsl_to_rgb(hsl)) <= 1, "{gray}");
    }
}

#[test]
fn ties_resolve_through_the_red_branch() {
    // red == green == max: red branch gives hue from (g - b) / d
    assert_eq!(rgb_to_hsl(Rgb::new(255, 255, 0)).hue, 60);
    // green == blue == max: green branch gives hue from (b - r) / d + 2
    assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 255)).hue, 180);
    // red == blue == max: red branch with the +6 wrap
    assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 255)).hue, 300);
}
