//! The self-fitting text block widget.

use log::debug;

use crate::fit::{fit_font_size, FitOptions, FitRequest, FONT_SIZE_APPLY_TOLERANCE};
use crate::measure::{Size, TextMeasurer};
use crate::state::FitState;
use crate::style::TextStyle;
use crate::trim::{measure_trimmed, TextTrimming, TrimPolicy};

/// A text block that reports truncation and can shrink its font size to fit
/// the box layout gives it.
///
/// The host owns events and rendering. It forwards content changes through
/// [`TextBlock::set_text`] and layout changes through [`TextBlock::resize`];
/// both re-run fitting (when enabled) and trim detection with the measurer
/// the host provides. Everything else on the widget is plain configuration.
#[derive(Debug)]
pub struct TextBlock {
    text: String,
    style: TextStyle,
    font_size: f32,
    min_font_size: f32,
    shrink_to_fit: bool,
    trimming: TextTrimming,
    trim_policy: TrimPolicy,
    fit_options: FitOptions,
    desired: Size,
    actual: Size,
    is_text_trimmed: bool,
    state: FitState,
}

impl TextBlock {
    /// Create a block with default configuration: font size 16, minimum
    /// font size 1, fitting disabled, trimming off.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
            font_size: 16.0,
            min_font_size: 1.0,
            shrink_to_fit: false,
            trimming: TextTrimming::None,
            trim_policy: TrimPolicy::default(),
            fit_options: FitOptions::default(),
            desired: Size::zero(),
            actual: Size::zero(),
            is_text_trimmed: false,
            state: FitState::new(),
        }
    }

    /// Set the styling snapshot
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the font size
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.set_font_size(font_size);
        self
    }

    /// Set the minimum font size the fitter may shrink to
    pub fn with_min_font_size(mut self, min_font_size: f32) -> Self {
        self.min_font_size = min_font_size;
        self
    }

    /// Enable or disable shrink-to-fit
    pub fn with_shrink_to_fit(mut self, enabled: bool) -> Self {
        self.set_shrink_to_fit(enabled);
        self
    }

    /// Set the trimming mode
    pub fn with_trimming(mut self, trimming: TextTrimming) -> Self {
        self.trimming = trimming;
        self
    }

    /// Set the trim detection policy
    pub fn with_trim_policy(mut self, policy: TrimPolicy) -> Self {
        self.trim_policy = policy;
        self
    }

    /// Set the fitting policy knobs
    pub fn with_fit_options(mut self, options: FitOptions) -> Self {
        self.fit_options = options;
        self
    }

    /// Replace the text content.
    ///
    /// This is the entry point for the host's text-changed notification:
    /// committing a new value refits and re-detects trimming. Setting the
    /// identical string changes nothing, the way a property system only
    /// notifies on value changes.
    pub fn set_text(&mut self, text: impl Into<String>, measurer: &mut impl TextMeasurer) {
        let text = text.into();
        if self.text == text {
            return;
        }
        self.text = text;
        self.refresh(measurer);
    }

    /// Record the box sizes produced by the host's layout pass.
    ///
    /// This is the entry point for the host's size-changed notification.
    /// `desired` is the size the element asked for, `actual` the size it was
    /// finally given.
    pub fn resize(&mut self, desired: Size, actual: Size, measurer: &mut impl TextMeasurer) {
        self.desired = desired;
        self.actual = actual;
        self.refresh(measurer);
    }

    /// Set the font size, as external configuration.
    ///
    /// The new size is recorded as the original size the fitter restores
    /// toward. The next notification refits.
    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
        self.state.observe_font_size(font_size);
    }

    /// Enable or disable shrink-to-fit.
    ///
    /// Toggling it on captures the current font size as the original;
    /// re-setting the current value changes nothing.
    pub fn set_shrink_to_fit(&mut self, enabled: bool) {
        if self.shrink_to_fit == enabled {
            return;
        }
        self.shrink_to_fit = enabled;
        if enabled {
            self.state.capture(self.font_size);
        }
    }

    /// Set the minimum font size the fitter may shrink to.
    ///
    /// Non-positive values mean no floor.
    pub fn set_min_font_size(&mut self, min_font_size: f32) {
        self.min_font_size = min_font_size;
    }

    /// Set the trimming mode
    pub fn set_trimming(&mut self, trimming: TextTrimming) {
        self.trimming = trimming;
    }

    /// Set the trim detection policy
    pub fn set_trim_policy(&mut self, policy: TrimPolicy) {
        self.trim_policy = policy;
    }

    /// Set the fitting policy knobs
    pub fn set_fit_options(&mut self, options: FitOptions) {
        self.fit_options = options;
    }

    /// Set the styling snapshot
    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// The font size external configuration last set, if any.
    pub fn original_font_size(&self) -> Option<f32> {
        self.state.original_font_size()
    }

    pub fn min_font_size(&self) -> f32 {
        self.min_font_size
    }

    pub fn shrink_to_fit(&self) -> bool {
        self.shrink_to_fit
    }

    pub fn trimming(&self) -> TextTrimming {
        self.trimming
    }

    pub fn trim_policy(&self) -> TrimPolicy {
        self.trim_policy
    }

    pub fn fit_options(&self) -> FitOptions {
        self.fit_options
    }

    pub fn desired_size(&self) -> Size {
        self.desired
    }

    pub fn actual_size(&self) -> Size {
        self.actual
    }

    /// Whether the text currently overflows the box.
    ///
    /// Derived state: recomputed by [`TextBlock::set_text`] and
    /// [`TextBlock::resize`], always false while trimming is
    /// [`TextTrimming::None`].
    pub fn is_text_trimmed(&self) -> bool {
        self.is_text_trimmed
    }

    /// Refit (when enabled), then re-detect trimming. Shared tail of both
    /// host notifications.
    fn refresh(&mut self, measurer: &mut dyn TextMeasurer) {
        if self.shrink_to_fit {
            self.shrink_if_needed(measurer);
        }
        self.is_text_trimmed = self.trimming != TextTrimming::None
            && measure_trimmed(
                measurer,
                &self.text,
                &self.style,
                self.font_size,
                self.actual,
                self.trim_policy,
            );
    }

    fn shrink_if_needed(&mut self, measurer: &mut dyn TextMeasurer) {
        let current = self.font_size;
        // Fall back to the current size when nothing was ever configured;
        // that leaves the grow phase nothing to restore toward.
        let original = self
            .state
            .original_font_size()
            .filter(|size| *size > 0.0)
            .unwrap_or(current);

        let fitted = fit_font_size(
            measurer,
            &FitRequest {
                text: &self.text,
                style: &self.style,
                current_font_size: current,
                original_font_size: original,
                min_font_size: self.min_font_size,
                desired: self.desired,
                actual: self.actual,
            },
            self.fit_options,
        );

        let unchanged = (fitted - current).abs() <= FONT_SIZE_APPLY_TOLERANCE;
        if unchanged || fitted < self.min_font_size || !(fitted > 0.0) {
            return;
        }

        debug!("fitted font size {} -> {}", current, fitted);
        let _change = self.state.begin_programmatic_change();
        self.font_size = fitted;
        // Same notification path an external write takes; the active scope
        // keeps it from being recorded as a new original.
        self.state.observe_font_size(fitted);
    }
}
