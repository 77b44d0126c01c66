//! Original font size tracking and fit re-entrancy guarding.

use std::cell::Cell;

/// Tracks the font size a widget was configured with, as opposed to the
/// size the fitter last computed for it.
///
/// The grow phase needs a stable upper bound: the size that was actually
/// asked for. Every font size observed while no programmatic-change scope is
/// active counts as configuration and is recorded. Font size writes made by
/// the fitter itself happen inside a [`FitState::begin_programmatic_change`]
/// scope and leave the recorded original untouched. Without that scope the
/// original would ratchet toward each fitted size and the widget could never
/// grow back.
///
/// Uses interior mutability so an active scope guard can coexist with the
/// widget mutating its own fields. Single-threaded by design, like the
/// widget that owns it.
#[derive(Debug, Default)]
pub struct FitState {
    original_font_size: Cell<Option<f32>>,
    changing_font_size: Cell<bool>,
}

impl FitState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Font size recorded from the last external change, if any was seen.
    pub fn original_font_size(&self) -> Option<f32> {
        self.original_font_size.get()
    }

    /// True while a programmatic-change scope is active.
    pub fn is_changing_font_size(&self) -> bool {
        self.changing_font_size.get()
    }

    /// Record a font size observed on the widget.
    ///
    /// No-op inside a programmatic-change scope: the fitter's own writes
    /// must not be mistaken for configuration.
    pub fn observe_font_size(&self, font_size: f32) {
        if !self.changing_font_size.get() {
            self.original_font_size.set(Some(font_size));
        }
    }

    /// Unconditionally (re)capture the original font size.
    ///
    /// Used when shrink-to-fit is switched on: whatever size the widget has
    /// at that moment becomes the size to restore toward.
    pub fn capture(&self, font_size: f32) {
        self.original_font_size.set(Some(font_size));
    }

    /// Open a scope in which font size writes count as the fitter's own.
    ///
    /// The returned guard restores the previous flag value when dropped, so
    /// the scope cannot leak if measurement panics mid-fit and nested scopes
    /// compose.
    #[must_use]
    pub fn begin_programmatic_change(&self) -> ProgrammaticChange<'_> {
        let was_changing = self.changing_font_size.replace(true);
        ProgrammaticChange {
            state: self,
            was_changing,
        }
    }
}

/// Scope guard marking font size writes as fitter-internal.
///
/// Created by [`FitState::begin_programmatic_change`]; the scope ends when
/// the guard drops.
#[derive(Debug)]
pub struct ProgrammaticChange<'a> {
    state: &'a FitState,
    was_changing: bool,
}

impl Drop for ProgrammaticChange<'_> {
    fn drop(&mut self) {
        self.state.changing_font_size.set(self.was_changing);
    }
}
