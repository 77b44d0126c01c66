//! Truncation detection.

use log::trace;

use crate::measure::{MeasureRequest, Size, TextMeasurer};
use crate::style::TextStyle;

/// How the host cuts off text that overflows its box.
///
/// The widget never renders the cutoff itself; the mode gates whether trim
/// detection runs at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTrimming {
    /// Overflow is not indicated and trim detection is off.
    None,
    /// Overflowing text is cut at the box edge.
    Clip,
    /// Overflowing text is cut and an ellipsis marks the cut.
    Ellipsis,
}

impl Default for TextTrimming {
    fn default() -> Self {
        Self::None
    }
}

/// Which measurement answers "is the text cut off".
///
/// The two policies are not equivalent: wrapping text can overflow
/// vertically while every line fits the width, and one long line overflows
/// the width while staying a single line tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimPolicy {
    /// Compare the unwrapped text width against the box width.
    Width,
    /// Re-measure with wrapping forced at the box width and compare heights.
    /// Sees the vertical overflow of wrapped multi-line text at the cost of
    /// one wrapped measurement.
    WrappedHeight,
}

impl Default for TrimPolicy {
    fn default() -> Self {
        Self::WrappedHeight
    }
}

/// Whether text at `font_size` overflows the actual box under the given
/// policy.
///
/// Empty text, a non-positive font size or a box without laid-out extent
/// never count as trimmed.
pub fn measure_trimmed(
    measurer: &mut dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
    font_size: f32,
    actual: Size,
    policy: TrimPolicy,
) -> bool {
    if text.is_empty() || !(font_size > 0.0) {
        return false;
    }
    if actual.width <= 0.0 || actual.height <= 0.0 {
        return false;
    }

    let request = MeasureRequest::new(text, style, font_size);
    let trimmed = match policy {
        TrimPolicy::Width => measurer.measure(request).width > actual.width,
        TrimPolicy::WrappedHeight => {
            measurer.measure_wrapped(request, actual.width).height > actual.height
        }
    };
    trace!("trim check {:?}: {}", policy, trimmed);
    trimmed
}
