//! End-to-end checks through the public API only.

use image::{DynamicImage, Rgba, RgbaImage};
use legible::{
    Color, FontDescriptor, FontWeight, NO_MIN_ALPHA, Options, Region, contrast_ratio,
    contrast_ratio_over, is_large_font, min_alpha, text_color_from_choices,
    text_color_on_background, text_color_on_image, text_color_passes,
};

const ALPHA_EPSILON: f64 = 0.01;

fn solid(level: u8) -> RgbaImage {
    RgbaImage::from_pixel(100, 100, Rgba([level, level, level, 255]))
}

fn ten_by_ten() -> Region {
    Region::new(0.0, 0.0, 10.0, 10.0)
}

// ── Ratios ──────────────────────────────────────────────────────────

#[test]
fn white_black_is_maximum_ratio() {
    assert!((contrast_ratio(Color::WHITE, Color::BLACK) - 21.0).abs() < 1e-9);
    assert!((contrast_ratio_over(Color::BLACK, Color::WHITE) - 21.0).abs() < 1e-9);
}

// ── Choices ─────────────────────────────────────────────────────────

#[test]
fn choices_pick_black_on_white() {
    let chosen = text_color_from_choices(&[Color::WHITE, Color::BLACK], Color::WHITE, Options::empty());
    assert_eq!(chosen, Some(Color::BLACK));
}

#[test]
fn choices_observe_preferences() {
    let lighter = Color::white(0.1, 1.0);
    let darker = Color::BLACK;
    let choices = [darker, lighter];
    assert_eq!(
        text_color_from_choices(&choices, Color::WHITE, Options::PREFER_LIGHTER),
        Some(lighter)
    );
    assert_eq!(
        text_color_from_choices(&choices, Color::WHITE, Options::PREFER_DARKER),
        Some(darker)
    );
}

#[test]
fn no_choices_no_color() {
    assert_eq!(text_color_from_choices(&[], Color::WHITE, Options::empty()), None);
}

// ── Minimum alpha ───────────────────────────────────────────────────

#[test]
fn min_alpha_reference_values() {
    assert_eq!(min_alpha(Color::WHITE, Color::WHITE, Options::empty()), NO_MIN_ALPHA);

    let normal = min_alpha(Color::BLACK, Color::WHITE, Options::empty());
    let large = min_alpha(Color::BLACK, Color::WHITE, Options::LARGE_FONT);
    assert!((normal - 0.54).abs() < ALPHA_EPSILON, "normal: {normal}");
    assert!((large - 0.42).abs() < ALPHA_EPSILON, "large: {large}");

    let translucent = min_alpha(Color::white(0.0, 0.5), Color::WHITE, Options::empty());
    assert!((normal - translucent).abs() < ALPHA_EPSILON);
}

// ── Standards ───────────────────────────────────────────────────────

#[test]
fn passes_standards() {
    let bg = Color::WHITE;
    let grey = |alpha| Color::white(0.0, alpha);
    let aaa = Options::ENHANCED_CONTRAST;
    let aaa_large = Options::ENHANCED_CONTRAST | Options::LARGE_FONT;

    let table = [
        // alpha, AA normal, AA large, AAA normal, AAA large
        (0.7, true, true, true, true),
        (0.6, true, true, false, true),
        (0.5, false, true, false, false),
        (0.4, false, false, false, false),
    ];
    for (alpha, aa, aa_large, aaa_normal, aaa_lg) in table {
        let text = grey(alpha);
        assert_eq!(text_color_passes(text, bg, Options::empty()), aa, "AA {alpha}");
        assert_eq!(text_color_passes(text, bg, Options::LARGE_FONT), aa_large, "AA large {alpha}");
        assert_eq!(text_color_passes(text, bg, aaa), aaa_normal, "AAA {alpha}");
        assert_eq!(text_color_passes(text, bg, aaa_large), aaa_lg, "AAA large {alpha}");
    }
}

// ── Large fonts ─────────────────────────────────────────────────────

#[test]
fn large_font_classification() {
    let large = |font: FontDescriptor| is_large_font(Some(&font));

    assert!(large(FontDescriptor::bold(14.0)));
    assert!(large(FontDescriptor::regular(18.0)));
    assert!(large(FontDescriptor::regular(20.0)));
    assert!(!large(FontDescriptor::bold(13.0)));
    assert!(!large(FontDescriptor::regular(17.0)));
    assert!(!large(FontDescriptor::regular(14.0)));
    assert!(!is_large_font(None));

    assert!(large(FontDescriptor::with_weight(15.0, FontWeight::Semibold)));
    assert!(!large(FontDescriptor::with_weight(15.0, FontWeight::Medium)));
}

// ── Synthesis ───────────────────────────────────────────────────────

#[test]
fn synthesize_on_solid_backgrounds() {
    assert_eq!(text_color_on_background(Color::BLACK, 1.0, Options::empty()), Color::WHITE);
    assert_eq!(text_color_on_background(Color::WHITE, 1.0, Options::empty()), Color::BLACK);
}

#[test]
fn synthesize_from_random_looking_backgrounds() {
    // Whatever comes back must pass at the alpha it comes back with,
    // unless neither black nor white could.
    for hex in ["#3fa066", "#1d3557", "#e63946", "#f1faee", "#a8dadc", "#777777"] {
        let bg: Color = hex.parse().unwrap();
        for options in [Options::PREFER_LIGHTER, Options::PREFER_DARKER] {
            let text = text_color_on_background(bg, 0.87, options);
            let reachable = min_alpha(Color::WHITE, bg, options) > 0.0
                || min_alpha(Color::BLACK, bg, options) > 0.0;
            if reachable {
                assert!(text_color_passes(text, bg, options), "{hex} {options:?} -> {text:?}");
            }
        }
    }
}

// ── Images ──────────────────────────────────────────────────────────

#[test]
fn image_edge_cases() {
    let bold13 = FontDescriptor::bold(13.0);
    let grey = solid(128);

    let empty = DynamicImage::new_rgba8(0, 0);
    assert_eq!(text_color_on_image(&empty, ten_by_ten(), 1.0, Some(&bold13)), None);

    let off = Region::new(-10.0, -10.0, 10.0, 10.0);
    assert_eq!(text_color_on_image(&grey, off, 1.0, Some(&bold13)), None);
    assert_eq!(text_color_on_image(&grey, Region::default(), 1.0, Some(&bold13)), None);
    assert!(text_color_on_image(&grey, ten_by_ten(), 1.0, Some(&bold13)).is_some());
}

#[test]
fn image_black_and_white() {
    let bold13 = FontDescriptor::bold(13.0);

    let on_white = text_color_on_image(&solid(255), ten_by_ten(), 1.0, Some(&bold13));
    assert_eq!(on_white.map(|c| (c.r, c.alpha)), Some((0.0, 1.0)));

    let on_black = text_color_on_image(&solid(0), ten_by_ten(), 1.0, Some(&bold13));
    assert_eq!(on_black.map(|c| (c.r, c.alpha)), Some((1.0, 1.0)));
}
