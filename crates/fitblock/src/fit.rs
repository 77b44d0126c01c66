//! The font size fitting algorithm.
//!
//! [`fit_font_size`] walks candidate font sizes in whole-unit steps,
//! shrinking while the measured text overflows the box and growing back
//! while room remains, bounded below by the minimum font size and above by
//! the original (configured) font size. The search re-measures the text at
//! every candidate size through the [`TextMeasurer`] seam; nothing here
//! knows how measuring works.

use log::trace;

use crate::measure::{MeasureRequest, MeasuredText, Size, TextMeasurer};
use crate::style::TextStyle;

/// Minimum difference from the current font size before a fit result is
/// worth applying. Candidates move in whole units, so anything closer than
/// this is the same size up to float noise.
pub const FONT_SIZE_APPLY_TOLERANCE: f32 = 0.1;

/// Which box extent bounds the grow phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowBound {
    /// Grow while the text stays inside the actual (allocated) size.
    ActualSize,
    /// Grow while the text stays inside the desired (preferred) size.
    DesiredSize,
}

/// Which axes the fitter constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitAxes {
    /// Fit the measured width only.
    Width,
    /// Fit the width first, then re-fit the result against the height of
    /// the text wrapped at the actual box width. The height pass is capped
    /// by the width result, so the tighter axis wins.
    WidthAndHeight,
}

/// Fitting policy knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitOptions {
    pub axes: FitAxes,
    pub grow_bound: GrowBound,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            axes: FitAxes::Width,
            grow_bound: GrowBound::ActualSize,
        }
    }
}

impl FitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the axes to fit
    pub fn with_axes(mut self, axes: FitAxes) -> Self {
        self.axes = axes;
        self
    }

    /// Set the extent bounding the grow phase
    pub fn with_grow_bound(mut self, grow_bound: GrowBound) -> Self {
        self.grow_bound = grow_bound;
        self
    }
}

/// Inputs for one fitting pass.
#[derive(Debug, Clone)]
pub struct FitRequest<'a> {
    pub text: &'a str,
    pub style: &'a TextStyle,
    /// Font size the widget currently renders at
    pub current_font_size: f32,
    /// Upper bound: the size external configuration last set
    pub original_font_size: f32,
    /// Lower bound for the shrink phase; non-positive means no floor
    pub min_font_size: f32,
    /// Preferred size reported by the host's measure pass
    pub desired: Size,
    /// Final size the host's layout allocated
    pub actual: Size,
}

#[derive(Debug, Clone, Copy)]
enum FitAxis {
    Width,
    Height,
}

impl FitAxis {
    fn of_box(self, size: Size) -> f32 {
        match self {
            FitAxis::Width => size.width,
            FitAxis::Height => size.height,
        }
    }

    fn of_text(self, measured: MeasuredText) -> f32 {
        match self {
            FitAxis::Width => measured.width,
            FitAxis::Height => measured.height,
        }
    }
}

/// Compute the font size that best fits the box, between the minimum and
/// the original font size.
///
/// Per axis the search has two phases. Shrink: while the measured extent
/// overflows the desired extent, step the candidate down one unit, flooring
/// at the minimum. Grow: while one more unit would still fit both the extent
/// measured at the original size and the configured grow bound, step the
/// candidate up, capping at the original. The whole-unit stepping is the
/// point, not a shortcut: it keeps re-measure counts low and makes the
/// apply tolerance meaningful, so this must not be replaced with a binary
/// search.
///
/// Returns the current font size unchanged when it is not a positive number
/// or when the box has no laid-out extent yet.
pub fn fit_font_size(
    measurer: &mut dyn TextMeasurer,
    request: &FitRequest<'_>,
    options: FitOptions,
) -> f32 {
    let current = request.current_font_size;
    // NaN fails this comparison too.
    if !(current > 0.0) {
        return current;
    }
    // Zero actual extent means layout has not run yet.
    if request.actual.width <= 0.0 || request.actual.height <= 0.0 {
        return current;
    }

    let fitted = fit_axis(measurer, request, options, FitAxis::Width, current);
    match options.axes {
        FitAxes::Width => fitted,
        FitAxes::WidthAndHeight => {
            // The width result caps the height pass, so growing for height
            // can never reintroduce a width overflow.
            let height_request = FitRequest {
                original_font_size: fitted,
                ..request.clone()
            };
            fit_axis(measurer, &height_request, options, FitAxis::Height, fitted)
        }
    }
}

fn fit_axis(
    measurer: &mut dyn TextMeasurer,
    request: &FitRequest<'_>,
    options: FitOptions,
    axis: FitAxis,
    start: f32,
) -> f32 {
    let desired_extent = axis.of_box(request.desired);
    if desired_extent <= 0.0 {
        return start;
    }
    let bound_extent = match options.grow_bound {
        GrowBound::ActualSize => axis.of_box(request.actual),
        GrowBound::DesiredSize => desired_extent,
    };

    let floor = request.min_font_size.max(0.0);
    let original = request.original_font_size;
    let mut candidate = start;
    let mut extent = measure_extent(measurer, request, candidate, axis);

    // Shrink one unit at a time until the text fits the desired extent or
    // the candidate reaches the floor.
    while extent > desired_extent && candidate > floor {
        let next = (candidate - 1.0).max(floor);
        if next >= candidate {
            // A whole unit is below f32 resolution at this magnitude.
            break;
        }
        candidate = next;
        extent = measure_extent(measurer, request, candidate, axis);
    }

    // Grow back toward the original while the next step up still fits both
    // the extent the text has at the original size and the configured
    // bound. Never past the original, even from a fractional step below.
    let max_extent = measure_extent(measurer, request, original, axis);
    while candidate < original {
        let next = (candidate + 1.0).min(original);
        if next <= candidate {
            // Same f32 resolution stop as the shrink phase.
            break;
        }
        let next_extent = measure_extent(measurer, request, next, axis);
        if next_extent > max_extent || next_extent > bound_extent {
            break;
        }
        candidate = next;
        extent = next_extent;
    }

    trace!(
        "fit {:?}: {} -> {} (extent {} against desired {})",
        axis,
        start,
        candidate,
        extent,
        desired_extent
    );
    candidate
}

fn measure_extent(
    measurer: &mut dyn TextMeasurer,
    request: &FitRequest<'_>,
    font_size: f32,
    axis: FitAxis,
) -> f32 {
    let measure_request = MeasureRequest::new(request.text, request.style, font_size);
    let measured = match axis {
        FitAxis::Width => measurer.measure(measure_request),
        // Height only means anything once the box width forces wrapping.
        FitAxis::Height => measurer.measure_wrapped(measure_request, request.actual.width),
    };
    axis.of_text(measured)
}
