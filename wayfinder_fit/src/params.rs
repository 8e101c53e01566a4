// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default margin, in floor-plan units, kept clear on each side of the fitted box.
pub const DEFAULT_PADDING: f64 = 100.0;

/// Default zoom cap.
pub const DEFAULT_MAX_SCALE: f64 = 1.5;

/// Tuning for a fit computation.
///
/// `padding` is expressed in floor-plan (world) units and applied on every
/// side of the bounding box before the scale is chosen. `max_scale` caps the
/// resulting zoom so that two nearby points do not blow the map up to an
/// unreadable magnification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitParams {
    /// Margin kept clear on each side of the bounding box, in world units.
    pub padding: f64,
    /// Largest zoom factor the fit may produce.
    pub max_scale: f64,
}

impl FitParams {
    /// Creates fit parameters from an explicit padding and zoom cap.
    #[must_use]
    pub const fn new(padding: f64, max_scale: f64) -> Self {
        Self { padding, max_scale }
    }

    /// Returns a copy with the given padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Returns a copy with the given zoom cap.
    #[must_use]
    pub const fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }
}

impl Default for FitParams {
    fn default() -> Self {
        Self::new(DEFAULT_PADDING, DEFAULT_MAX_SCALE)
    }
}
