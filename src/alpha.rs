//! Minimum opacity for a text color to stay readable.
//!
//! Compositing interpolates linearly between background (alpha 0) and the
//! opaque text color (alpha 1), so contrast starts at 1:1 and grows as the
//! text becomes more opaque. A coarse scan finds the first passing step,
//! then bisection narrows the bracket around the crossing.

use legible_color::Color;
use tracing::{debug, trace};

use crate::contrast::contrast_ratio_over;
use crate::options::{Options, minimum_threshold};

/// Returned by [`min_alpha`] when no opacity in (0, 1] reaches the threshold.
pub const NO_MIN_ALPHA: f64 = -1.0;

/// Coarse scan resolution. Contrast is monotone for greys and near-greys;
/// the scan keeps the first crossing honest for strongly chromatic pairs.
const SCAN_STEPS: u32 = 64;

/// Halvings of a 1/64 bracket; leaves error far below 0.001.
const BISECT_ITERATIONS: u32 = 24;

/// Minimum alpha at which `text` passes on `background` under `options`,
/// or [`NO_MIN_ALPHA`] (-1) when none does.
///
/// Alpha already present on `text` is ignored.
///
/// ```
/// use legible::{Color, Options, min_alpha};
///
/// let alpha = min_alpha(Color::BLACK, Color::WHITE, Options::empty());
/// assert!((alpha - 0.54).abs() < 0.01);
///
/// assert_eq!(min_alpha(Color::WHITE, Color::WHITE, Options::empty()), -1.0);
/// ```
#[must_use]
pub fn min_alpha(text: Color, background: Color, options: Options) -> f64 {
    try_min_alpha(text, background, options).unwrap_or(NO_MIN_ALPHA)
}

/// Like [`min_alpha`], with `None` in place of the sentinel.
///
/// `None` when the RGB channels of `text` and `background` match, or when
/// even fully opaque `text` fails.
#[must_use]
pub fn try_min_alpha(text: Color, background: Color, options: Options) -> Option<f64> {
    let text = text.opaque();
    let background = background.opaque();

    if text.same_rgb(background) {
        trace!(%text, "text matches background, no alpha can separate them");
        return None;
    }

    let threshold = minimum_threshold(options);
    let passes_at = |alpha: f64| contrast_ratio_over(text.with_alpha(alpha), background) >= threshold;

    // Alpha 0 is the background itself (ratio 1:1), so `lo` always fails.
    let mut lo = 0.0;
    let mut hi = None;
    for step in 1..=SCAN_STEPS {
        let alpha = f64::from(step) / f64::from(SCAN_STEPS);
        if passes_at(alpha) {
            hi = Some(alpha);
            break;
        }
        lo = alpha;
    }

    let Some(mut hi) = hi else {
        debug!(%text, %background, threshold, "opaque text still fails threshold");
        return None;
    };

    for _ in 0..BISECT_ITERATIONS {
        let mid = (lo + hi) * 0.5;
        if passes_at(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    trace!(%text, %background, threshold, alpha = hi, "minimum alpha");
    Some(hi)
}
