// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Vec2};

/// How a [`crate::MapView`] keeps the floor plan on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// No clamping; the map may be panned entirely off screen.
    None,
    /// Pull the view back whenever it would stop overlapping the floor bounds.
    #[default]
    KeepSomeVisible,
}

/// World-space shift that brings `visible` back into contact with `bounds`.
///
/// Zero when the rectangles already overlap (or touch) on both axes.
pub(crate) fn overlap_correction(visible: Rect, bounds: Rect) -> Vec2 {
    Vec2::new(
        axis_correction(visible.min_x(), visible.max_x(), bounds.min_x(), bounds.max_x()),
        axis_correction(visible.min_y(), visible.max_y(), bounds.min_y(), bounds.max_y()),
    )
}

fn axis_correction(vis_min: f64, vis_max: f64, lo: f64, hi: f64) -> f64 {
    if vis_max < lo {
        lo - vis_max
    } else if vis_min > hi {
        hi - vis_min
    } else {
        0.0
    }
}
