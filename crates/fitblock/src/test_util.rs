//! Deterministic measurer for algorithm tests.

use crate::measure::{MeasureRequest, MeasuredText, TextMeasurer};

/// Measures text with linear metrics: every character advances
/// `advance * font_size`, every line is `1.2 * font_size` tall, and wrapping
/// splits the natural width into even lines. Exact and engine-free, so tests
/// can assert sizes instead of ranges.
///
/// Records every requested font size in `sizes`, letting tests assert the
/// exact sequence of candidates the fitter measured.
pub struct LinearMeasurer {
    advance: f32,
    pub sizes: Vec<f32>,
}

impl LinearMeasurer {
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            sizes: Vec::new(),
        }
    }

    fn natural_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.advance
    }

    fn line_height(&self, font_size: f32) -> f32 {
        font_size * 1.2
    }
}

impl Default for LinearMeasurer {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl TextMeasurer for LinearMeasurer {
    fn measure(&mut self, request: MeasureRequest<'_>) -> MeasuredText {
        self.sizes.push(request.font_size);
        if request.text.is_empty() || request.font_size <= 0.0 {
            return MeasuredText::zero();
        }
        MeasuredText::new(
            self.natural_width(request.text, request.font_size),
            self.line_height(request.font_size),
        )
    }

    fn measure_wrapped(&mut self, request: MeasureRequest<'_>, max_width: f32) -> MeasuredText {
        self.sizes.push(request.font_size);
        if request.text.is_empty() || request.font_size <= 0.0 {
            return MeasuredText::zero();
        }
        let natural = self.natural_width(request.text, request.font_size);
        if max_width <= 0.0 || natural <= max_width {
            return MeasuredText::new(natural, self.line_height(request.font_size));
        }
        let lines = (natural / max_width).ceil();
        MeasuredText::new(max_width, lines * self.line_height(request.font_size))
    }
}
