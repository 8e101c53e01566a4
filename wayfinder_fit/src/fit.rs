// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting a bounding box into a view.

use core::fmt;

use kurbo::{Point, Rect, Size, Vec2};

use crate::params::FitParams;
use crate::transform::FitTransform;

/// Computes the pan and zoom that keep both `a` and `b` visible in a view of
/// `view_size`, with `params.padding` world units clear around them.
///
/// The zoom is the largest factor at which the padded bounding box of the two
/// points fits on both axes, capped at `params.max_scale`. The center of the
/// box is mapped to the center of the view.
///
/// The result does not depend on the order of `a` and `b`.
///
/// The padded box must have a non-zero extent on both axes: coincident points
/// with zero padding divide by zero. This is not checked here; see
/// [`try_compute_fit`].
#[must_use]
pub fn compute_fit(a: Point, b: Point, view_size: Size, params: FitParams) -> FitTransform {
    fit_rect(Rect::from_points(a, b), view_size, params)
}

/// Computes the pan and zoom that fit `bounds` into a view of `view_size`.
///
/// This is the general form of [`compute_fit`]; `bounds` is normalized first so
/// rectangles with swapped corners behave like their normalized equivalent.
#[must_use]
pub fn fit_rect(bounds: Rect, view_size: Size, params: FitParams) -> FitTransform {
    let bounds = bounds.abs();
    let padded_width = bounds.width() + 2.0 * params.padding;
    let padded_height = bounds.height() + 2.0 * params.padding;

    let scale_x = view_size.width / padded_width;
    let scale_y = view_size.height / padded_height;
    let scale = scale_x.min(scale_y).min(params.max_scale);

    let center = bounds.center();
    let position = Vec2::new(
        view_size.width / 2.0 - center.x * scale,
        view_size.height / 2.0 - center.y * scale,
    );
    FitTransform { position, scale }
}

/// Fits the bounding box of an arbitrary set of points, such as a route.
///
/// Returns `None` when `points` is empty. A single point fits like
/// `compute_fit(p, p, ..)`.
#[must_use]
pub fn fit_points(
    points: impl IntoIterator<Item = Point>,
    view_size: Size,
    params: FitParams,
) -> Option<FitTransform> {
    let mut points = points.into_iter();
    let first = points.next()?;
    let bounds = points.fold(Rect::from_points(first, first), |acc, pt| acc.union_pt(pt));
    Some(fit_rect(bounds, view_size, params))
}

/// Checked variant of [`compute_fit`].
///
/// On success the returned scale satisfies `0 < scale <= params.max_scale`.
pub fn try_compute_fit(
    a: Point,
    b: Point,
    view_size: Size,
    params: FitParams,
) -> Result<FitTransform, FitError> {
    if !is_positive(view_size.width) || !is_positive(view_size.height) {
        return Err(FitError::InvalidViewSize);
    }
    if !is_positive(params.max_scale) {
        return Err(FitError::InvalidMaxScale);
    }
    if !a.is_finite() || !b.is_finite() || !params.padding.is_finite() {
        return Err(FitError::DegenerateBounds);
    }

    let bounds = Rect::from_points(a, b);
    let padded_width = bounds.width() + 2.0 * params.padding;
    let padded_height = bounds.height() + 2.0 * params.padding;
    if !is_positive(padded_width) || !is_positive(padded_height) {
        return Err(FitError::DegenerateBounds);
    }

    Ok(fit_rect(bounds, view_size, params))
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Reasons [`try_compute_fit`] rejects its inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FitError {
    /// The view width or height is zero, negative, or not finite.
    InvalidViewSize,
    /// The zoom cap is zero, negative, or not finite.
    InvalidMaxScale,
    /// The padded bounding box has no positive extent on some axis, or an
    /// input coordinate or the padding is not finite.
    DegenerateBounds,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewSize => f.write_str("view size must be finite and positive"),
            Self::InvalidMaxScale => f.write_str("maximum scale must be finite and positive"),
            Self::DegenerateBounds => {
                f.write_str("padded bounds must have a finite, positive width and height")
            }
        }
    }
}

impl core::error::Error for FitError {}
