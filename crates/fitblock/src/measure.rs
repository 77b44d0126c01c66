//! Text measurement seam between fitting logic and a text engine.
//!
//! The fitter only ever asks "how big is this text at this font size".
//! Everything about shaping, font loading and line breaking lives behind the
//! [`TextMeasurer`] trait, so the core crate never depends on a specific
//! text engine.

use crate::style::TextStyle;

/// A box extent in layout pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Request to measure one piece of text at a specific font size.
#[derive(Debug, Clone)]
pub struct MeasureRequest<'a> {
    pub text: &'a str,
    /// Font size in pixels
    pub font_size: f32,
    /// Styling snapshot the text is formatted with
    pub style: &'a TextStyle,
}

impl<'a> MeasureRequest<'a> {
    pub fn new(text: &'a str, style: &'a TextStyle, font_size: f32) -> Self {
        Self {
            text,
            font_size,
            style,
        }
    }
}

/// Measured extent of formatted text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasuredText {
    pub width: f32,
    pub height: f32,
}

impl MeasuredText {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Backend-agnostic text measurement.
///
/// Implementors format the requested text with the requested style and font
/// size and report its extent. The fitter calls this once per candidate font
/// size, so implementations should be cheap to call repeatedly. Backends
/// like `fitblock-cosmic` implement this trait.
pub trait TextMeasurer {
    /// Measure text laid out on its natural (unwrapped) lines.
    ///
    /// This should return the minimum bounding box that fits the formatted
    /// text, excluding any padding or margins (those belong to the host's
    /// layout).
    fn measure(&mut self, request: MeasureRequest<'_>) -> MeasuredText;

    /// Measure text wrapped at `max_width`.
    ///
    /// Height-based fitting and trim detection ask this form of the
    /// question: how tall does the text become once the box width forces it
    /// to wrap.
    fn measure_wrapped(&mut self, request: MeasureRequest<'_>, max_width: f32) -> MeasuredText;
}
