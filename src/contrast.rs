//! WCAG 2.0 contrast ratio and pass/fail checks.
//!
//! The ratio is measured between *apparent* colors: translucent text is
//! composited over its background before either luminance is taken.

use legible_color::Color;

use crate::options::{ContrastLevel, ContrastStandard, Options, TextSize, minimum_threshold};

/// WCAG contrast ratio between two opaque colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments. Alpha is not consulted.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio of `text` drawn over an opaque `background`, honoring the
/// text's alpha.
#[must_use]
pub fn contrast_ratio_over(text: Color, background: Color) -> f64 {
    let background = background.opaque();
    contrast_ratio(text.composite_over(background), background)
}

/// Whether `ratio` meets `standard`.
#[inline]
#[must_use]
pub fn passes_standard(ratio: f64, standard: ContrastStandard) -> bool {
    ratio >= standard.threshold()
}

/// Whether `text` (alpha included) is readable on `background` under
/// `options`.
#[must_use]
pub fn text_color_passes(text: Color, background: Color, options: Options) -> bool {
    contrast_ratio_over(text, background) >= minimum_threshold(options)
}

/// A text/background pair scored against every standard at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl ContrastReport {
    /// Score `text` over `background`.
    #[must_use]
    pub fn evaluate(text: Color, background: Color) -> Self {
        Self::from_ratio(contrast_ratio_over(text, background))
    }

    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa_normal: passes_standard(ratio, ContrastStandard::AA_NORMAL),
            aa_large: passes_standard(ratio, ContrastStandard::AA_LARGE),
            aaa_normal: passes_standard(ratio, ContrastStandard::AAA_NORMAL),
            aaa_large: passes_standard(ratio, ContrastStandard::AAA_LARGE),
        }
    }

    /// Whether the report passes a specific standard.
    #[must_use]
    pub const fn passes(&self, standard: ContrastStandard) -> bool {
        match (standard.level, standard.size) {
            (ContrastLevel::Aa, TextSize::Normal) => self.aa_normal,
            (ContrastLevel::Aa, TextSize::Large) => self.aa_large,
            (ContrastLevel::Aaa, TextSize::Normal) => self.aaa_normal,
            (ContrastLevel::Aaa, TextSize::Large) => self.aaa_large,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
