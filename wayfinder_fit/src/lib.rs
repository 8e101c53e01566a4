// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfinder Fit: pan/zoom fitting for floor-plan maps.
//!
//! Given two locations on a floor plan (typically the kiosk's own position and
//! a destination) and the size of the map view in pixels, this crate computes
//! the pan offset and uniform zoom that keep both locations visible with a
//! fixed padding margin, never zooming past a configured cap.
//!
//! The computation is a pure function: no state, no allocation, `no_std`.
//! Callers apply the resulting [`FitTransform`] to whatever pan-zoom surface
//! they render into (see `wayfinder_view` for one such surface).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use wayfinder_fit::{FitParams, compute_fit};
//!
//! let kiosk = Point::new(0.0, 0.0);
//! let cafe = Point::new(100.0, 200.0);
//! let view = Size::new(800.0, 600.0);
//!
//! let fit = compute_fit(kiosk, cafe, view, FitParams::default());
//! assert_eq!(fit.scale, 1.5);
//! assert_eq!(fit.position, Vec2::new(325.0, 150.0));
//!
//! // Both points land inside the view.
//! let p = fit.world_to_view(cafe);
//! assert!(p.x <= view.width && p.y <= view.height);
//! ```
//!
//! ## Checked fitting
//!
//! [`compute_fit`] trusts its inputs: if both points coincide and the padding
//! is zero, the padded box has no extent and that axis divides by zero. Use
//! [`try_compute_fit`] when the inputs come from outside the program:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use wayfinder_fit::{FitError, FitParams, try_compute_fit};
//!
//! let p = Point::new(50.0, 50.0);
//! let params = FitParams::default().with_padding(0.0);
//! let err = try_compute_fit(p, p, Size::new(400.0, 400.0), params).unwrap_err();
//! assert_eq!(err, FitError::DegenerateBounds);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod params;
mod transform;

pub use fit::{FitError, compute_fit, fit_points, fit_rect, try_compute_fit};
pub use params::{DEFAULT_MAX_SCALE, DEFAULT_PADDING, FitParams};
pub use transform::FitTransform;
