//! Immutable text styling snapshot used as measurement input.

use crate::color::{css, Color};

/// Font slope classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::Normal
    }
}

/// Font weight on the usual 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const EXTRA_LIGHT: Self = Self(200);
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMIBOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
    pub const EXTRA_BOLD: Self = Self(800);
    pub const BLACK: Self = Self(900);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Font width classification, narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStretch {
    UltraCondensed,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
    Normal,
    SemiExpanded,
    Expanded,
    ExtraExpanded,
    UltraExpanded,
}

impl Default for FontStretch {
    fn default() -> Self {
        Self::Normal
    }
}

/// Base direction text flows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    LeftToRight,
    RightToLeft,
}

impl Default for FlowDirection {
    fn default() -> Self {
        Self::LeftToRight
    }
}

/// Snapshot of the attributes text is formatted with.
///
/// The fitter treats this as opaque measurement input: it never mutates a
/// style, it only re-measures the same style at different font sizes. Font
/// size itself is deliberately not part of the snapshot.
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Font family name (backend-defined meaning); `None` selects the
    /// backend's default family
    pub family: Option<String>,
    pub style: FontStyle,
    pub weight: FontWeight,
    pub stretch: FontStretch,
    pub direction: FlowDirection,
    /// Text color; carried with the snapshot, irrelevant to metrics
    pub color: Color,
    /// BCP 47 language tag, e.g. `"en-US"`
    pub locale: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: None,
            style: FontStyle::default(),
            weight: FontWeight::default(),
            stretch: FontStretch::default(),
            direction: FlowDirection::default(),
            color: css::BLACK,
            locale: None,
        }
    }
}

impl TextStyle {
    /// Create a style with default attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family name
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Set the font slope
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the font weight
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the font stretch
    pub fn with_stretch(mut self, stretch: FontStretch) -> Self {
        self.stretch = stretch;
        self
    }

    /// Set the flow direction
    pub fn with_direction(mut self, direction: FlowDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the locale as a BCP 47 language tag
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}
