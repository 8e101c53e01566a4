// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfinder View: the pan/zoom surface a floor-plan map is drawn through.
//!
//! [`MapView`] owns a view rectangle in device pixels and a uniform pan+zoom
//! mapping floor-plan coordinates into it. It is the consumer of
//! [`wayfinder_fit::FitTransform`]: a kiosk computes a fit for "you are here"
//! and the selected destination, then hands it to [`MapView::apply_fit`].
//! After that the user may pan and pinch freely; zoom limits and clamping to
//! the floor bounds still apply.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use wayfinder_fit::FitParams;
//! use wayfinder_view::MapView;
//!
//! let mut view = MapView::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! view.set_floor_bounds(Some(Rect::new(0.0, 0.0, 2_000.0, 1_200.0)));
//!
//! let kiosk = Point::new(0.0, 0.0);
//! let shop = Point::new(100.0, 200.0);
//! let applied = view.fit_points(kiosk, shop, FitParams::default());
//! assert_eq!(applied.scale, 1.5);
//!
//! // Both locations are on screen.
//! let visible = view.visible_world_rect();
//! assert!(visible.contains(kiosk) && visible.contains(shop));
//! ```
//!
//! The view does not render anything and does not interpret input events;
//! hosts translate gestures into [`MapView::pan_by_view`] and
//! [`MapView::zoom_about_view_point`] calls.
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod view;

pub use clamp::ClampMode;
pub use view::MapView;
