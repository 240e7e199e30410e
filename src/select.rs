//! Text color selection policy.
//!
//! Two entry points:
//!
//! - [`text_color_from_choices`]: filter a caller's palette down to passing
//!   colors and break ties by luminance preference (or input order).
//! - [`text_color_on_background`]: synthesize black or white text at the
//!   caller's target opacity, raising it to fully opaque when the target is
//!   too faint to pass.

use legible_color::Color;
use tracing::debug;

use crate::alpha::try_min_alpha;
use crate::contrast::{contrast_ratio, text_color_passes};
use crate::options::Options;

/// Pick a readable color from `choices`.
///
/// Only colors that pass on `background` (their own alpha included) are
/// considered. With [`Options::PREFER_LIGHTER`] the lightest passing color
/// wins; with [`Options::PREFER_DARKER`] the darkest; otherwise the first
/// passing color in input order. Lightness is the luminance of the color as
/// it appears over `background`, and ties keep input order.
///
/// Returns `None` when `choices` is empty or nothing passes.
#[must_use]
pub fn text_color_from_choices(
    choices: &[Color],
    background: Color,
    options: Options,
) -> Option<Color> {
    let background = background.opaque();
    let apparent_luminance = |c: Color| c.composite_over(background).relative_luminance();
    let mut passing = choices
        .iter()
        .copied()
        .filter(|&c| text_color_passes(c, background, options));

    if options.contains(Options::PREFER_LIGHTER) {
        passing.reduce(|best, c| {
            if apparent_luminance(c) > apparent_luminance(best) { c } else { best }
        })
    } else if options.contains(Options::PREFER_DARKER) {
        passing.reduce(|best, c| {
            if apparent_luminance(c) < apparent_luminance(best) { c } else { best }
        })
    } else {
        passing.next()
    }
}

/// Black or white text for `background`, as close to `target_alpha` as
/// readability allows.
///
/// - If both black and white pass at `target_alpha`, the preference flag
///   decides (darker by default).
/// - If only one does, that one is returned at `target_alpha`.
/// - If neither does, the one needing less opacity is returned fully
///   opaque.
///
/// The returned alpha is never below the chosen color's minimum alpha.
/// `target_alpha` is clamped into [0, 1].
///
/// ```
/// use legible::{Color, Options, text_color_on_background};
///
/// let text = text_color_on_background(Color::BLACK, 0.87, Options::empty());
/// assert_eq!(text, Color::white(1.0, 0.87));
/// ```
#[must_use]
pub fn text_color_on_background(background: Color, target_alpha: f64, options: Options) -> Color {
    let target = target_alpha.clamp(0.0, 1.0);
    let white_min = try_min_alpha(Color::WHITE, background, options);
    let black_min = try_min_alpha(Color::BLACK, background, options);
    let fits = |min: Option<f64>| min.is_some_and(|min| target >= min);

    let chosen = match (fits(white_min), fits(black_min)) {
        (true, true) if options.contains(Options::PREFER_LIGHTER) => Color::WHITE,
        (true, true) | (false, true) => Color::BLACK,
        (true, false) => Color::WHITE,
        (false, false) => {
            let fallback = least_opacity_needed(background, white_min, black_min);
            debug!(
                %background,
                target,
                ?white_min,
                ?black_min,
                "target alpha too faint, falling back to opaque {fallback}"
            );
            return fallback;
        }
    };

    chosen.with_alpha(target)
}

/// Whichever of white or black reaches the threshold at the lower alpha,
/// fully opaque. When neither can, the one with more contrast wins.
fn least_opacity_needed(background: Color, white_min: Option<f64>, black_min: Option<f64>) -> Color {
    match (white_min, black_min) {
        (Some(white), Some(black)) if white < black => Color::WHITE,
        (Some(_), Some(_)) | (None, Some(_)) => Color::BLACK,
        (Some(_), None) => Color::WHITE,
        (None, None) => {
            let background = background.opaque();
            if contrast_ratio(Color::WHITE, background) > contrast_ratio(Color::BLACK, background) {
                Color::WHITE
            } else {
                Color::BLACK
            }
        }
    }
}
