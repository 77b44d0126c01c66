//! `cosmic-text` measurement backend for `fitblock`.
//!
//! # Design goals
//! - **Engine-contained**: the core crate stays free of any text engine;
//!   this crate is the only place that knows about `cosmic-text`.
//! - **Practical**: per-call buffer shaping, no caches to invalidate when
//!   the fitter sweeps candidate font sizes.
//!
//! Fonts come from system discovery by default; callers can add their own
//! faces with [`CosmicMeasurer::load_font_data`].
//!
//! NOTE: This crate only measures. Rasterization and rendering belong to the
//! host toolkit.

#![deny(warnings)]

use cosmic_text::{fontdb, Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Wrap};
use fitblock::{FontStretch, FontStyle, MeasureRequest, MeasuredText, TextMeasurer, TextStyle};

/// Text measurer backed by a `cosmic-text` [`FontSystem`].
///
/// Each measurement shapes a fresh [`Buffer`] with
/// `Metrics::new(size, size * 1.2)`: unconstrained and unwrapped for
/// [`TextMeasurer::measure`], wrapped at the given width for
/// [`TextMeasurer::measure_wrapped`]. Width is the widest layout run, height
/// is the sum of run line heights.
pub struct CosmicMeasurer {
    font_system: FontSystem,
}

impl CosmicMeasurer {
    /// Create a measurer over the fonts discovered on the system.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
        }
    }

    /// Add a font face from raw bytes (e.g. embedded `.ttf`/`.otf` data).
    ///
    /// cosmic-text parses and stores the data; the face becomes selectable
    /// through [`TextStyle::family`].
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.font_system.db_mut().load_font_data(data);
    }

    /// Access the underlying `FontSystem` if callers want to customize
    /// further.
    pub fn font_system_mut(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }

    fn measure_buffer(
        &mut self,
        request: &MeasureRequest<'_>,
        max_width: Option<f32>,
    ) -> MeasuredText {
        if request.text.is_empty() || request.font_size <= 0.0 {
            return MeasuredText::zero();
        }

        let metrics = Metrics::new(request.font_size, request.font_size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        // Height stays unbounded in both modes so every line is shaped and
        // counted.
        match max_width {
            Some(width) => {
                buffer.set_wrap(&mut self.font_system, Wrap::WordOrGlyph);
                buffer.set_size(&mut self.font_system, Some(width), None);
            }
            None => {
                buffer.set_wrap(&mut self.font_system, Wrap::None);
                buffer.set_size(&mut self.font_system, Some(f32::MAX), None);
            }
        }

        let attrs = make_attrs(request.style);
        buffer.set_text(
            &mut self.font_system,
            request.text,
            &attrs,
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut measured = MeasuredText::zero();
        for run in buffer.layout_runs() {
            measured.width = measured.width.max(run.line_w);
            measured.height += run.line_height;
        }
        measured
    }
}

impl Default for CosmicMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CosmicMeasurer {
    fn measure(&mut self, request: MeasureRequest<'_>) -> MeasuredText {
        self.measure_buffer(&request, None)
    }

    fn measure_wrapped(&mut self, request: MeasureRequest<'_>, max_width: f32) -> MeasuredText {
        // A degenerate wrap width falls back to unwrapped measurement.
        let constraint = (max_width > 0.0).then_some(max_width);
        self.measure_buffer(&request, constraint)
    }
}

/// Map the style snapshot onto cosmic-text attributes.
///
/// Family, weight, slope and stretch are honored. Flow direction and locale
/// ride along in the snapshot but are not applied here: cosmic-text derives
/// bidi direction from the text itself.
fn make_attrs(style: &TextStyle) -> Attrs<'_> {
    let mut attrs = Attrs::new()
        .weight(fontdb::Weight(style.weight.0))
        .style(match style.style {
            FontStyle::Normal => fontdb::Style::Normal,
            FontStyle::Italic => fontdb::Style::Italic,
            FontStyle::Oblique => fontdb::Style::Oblique,
        })
        .stretch(match style.stretch {
            FontStretch::UltraCondensed => fontdb::Stretch::UltraCondensed,
            FontStretch::ExtraCondensed => fontdb::Stretch::ExtraCondensed,
            FontStretch::Condensed => fontdb::Stretch::Condensed,
            FontStretch::SemiCondensed => fontdb::Stretch::SemiCondensed,
            FontStretch::Normal => fontdb::Stretch::Normal,
            FontStretch::SemiExpanded => fontdb::Stretch::SemiExpanded,
            FontStretch::Expanded => fontdb::Stretch::Expanded,
            FontStretch::ExtraExpanded => fontdb::Stretch::ExtraExpanded,
            FontStretch::UltraExpanded => fontdb::Stretch::UltraExpanded,
        });
    if let Some(family) = style.family.as_deref() {
        attrs = attrs.family(Family::Name(family));
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitblock::FontWeight;

    #[test]
    fn test_empty_text_measures_zero() {
        let mut measurer = CosmicMeasurer::new();
        let style = TextStyle::default();

        let measured = measurer.measure(MeasureRequest::new("", &style, 16.0));
        assert_eq!(measured.width, 0.0);
        assert_eq!(measured.height, 0.0);
    }

    #[test]
    fn test_non_positive_font_size_measures_zero() {
        let mut measurer = CosmicMeasurer::new();
        let style = TextStyle::default();

        let measured = measurer.measure(MeasureRequest::new("Hello", &style, 0.0));
        assert_eq!(measured.width, 0.0);
        assert_eq!(measured.height, 0.0);

        let wrapped = measurer.measure_wrapped(MeasureRequest::new("Hello", &style, -2.0), 100.0);
        assert_eq!(wrapped.width, 0.0);
        assert_eq!(wrapped.height, 0.0);
    }

    #[test]
    fn test_attrs_mapping_honors_font_attributes() {
        let style = TextStyle::new()
            .with_family("Inter")
            .with_weight(FontWeight::BOLD)
            .with_style(FontStyle::Italic)
            .with_stretch(FontStretch::Condensed);

        let attrs = make_attrs(&style);
        assert_eq!(attrs.weight, fontdb::Weight(700));
        assert_eq!(attrs.style, fontdb::Style::Italic);
        assert_eq!(attrs.stretch, fontdb::Stretch::Condensed);
        assert!(matches!(attrs.family, Family::Name("Inter")));
    }

    #[test]
    fn test_default_attrs_use_default_classification() {
        let style = TextStyle::default();
        let attrs = make_attrs(&style);
        assert_eq!(attrs.weight, fontdb::Weight(400));
        assert_eq!(attrs.style, fontdb::Style::Normal);
        assert_eq!(attrs.stretch, fontdb::Stretch::Normal);
    }
}
