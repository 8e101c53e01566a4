// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use wayfinder_fit::{FitParams, FitTransform, compute_fit, fit_rect};

use crate::clamp::{ClampMode, overlap_correction};

/// Pan/zoom view onto a floor plan.
///
/// World (floor-plan) coordinates map into the view rectangle by
/// `view_origin + pan + world * zoom`. `pan` is therefore the same quantity
/// as [`FitTransform::position`], measured from the view rectangle's origin.
#[derive(Clone, Debug)]
pub struct MapView {
    view_rect: Rect,
    floor_bounds: Option<Rect>,
    zoom: f64,
    pan: Vec2,
    min_zoom: f64,
    max_zoom: f64,
    clamp_mode: ClampMode,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl MapView {
    /// Creates a view covering `view_rect` at zoom `1.0` with no pan.
    ///
    /// Zoom is limited to `[1e-3, 1e3]` until [`MapView::set_zoom_limits`]
    /// says otherwise.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut view = Self {
            view_rect,
            floor_bounds: None,
            zoom: 1.0,
            pan: Vec2::ZERO,
            min_zoom: 1e-3,
            max_zoom: 1e3,
            clamp_mode: ClampMode::default(),
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        view.rebuild_transforms();
        view
    }

    /// Returns the view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Returns the size of the view rectangle, the size fits are computed for.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_rect.size()
    }

    /// Moves or resizes the view rectangle, keeping zoom and pan.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
        self.clamp_to_floor();
    }

    /// Sets the extent of the current floor plan, used for clamping and
    /// [`MapView::fit_floor`].
    pub fn set_floor_bounds(&mut self, bounds: Option<Rect>) {
        if self.floor_bounds == bounds {
            return;
        }
        self.floor_bounds = bounds;
        self.clamp_to_floor();
    }

    /// Returns the floor plan extent, if set.
    #[must_use]
    pub fn floor_bounds(&self) -> Option<Rect> {
        self.floor_bounds
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset relative to the view rectangle's origin.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns the configured `(min, max)` zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the zoom limits; swapped arguments are reordered.
    ///
    /// The current zoom is pulled into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom.min(max_zoom);
        self.max_zoom = max_zoom.max(min_zoom);
        self.set_zoom(self.zoom);
    }

    /// Sets the zoom factor about the world origin, clamped to the limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        let zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        if zoom == self.zoom {
            return;
        }
        self.zoom = zoom;
        self.rebuild_transforms();
        self.clamp_to_floor();
    }

    /// Returns the clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets the clamp mode, re-clamping immediately.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_to_floor();
        }
    }

    /// Returns the current pan and zoom as a [`FitTransform`].
    #[must_use]
    pub fn transform(&self) -> FitTransform {
        FitTransform::new(self.pan, self.zoom)
    }

    /// Adopts the pan and zoom of `fit`.
    ///
    /// If the fitted scale falls outside the zoom limits it is clamped, and the
    /// pan is adjusted so the world point that `fit` centered stays centered.
    pub fn apply_fit(&mut self, fit: FitTransform) {
        let zoom = fit.scale.clamp(self.min_zoom, self.max_zoom);
        let half = self.view_size().to_vec2() / 2.0;
        self.pan = if zoom == fit.scale {
            fit.position
        } else {
            let centered = (half - fit.position) / fit.scale;
            half - centered * zoom
        };
        self.zoom = zoom;
        self.rebuild_transforms();
        self.clamp_to_floor();
    }

    /// Fits `a` and `b` into the current view size and applies the result.
    ///
    /// Returns the transform actually in effect, after zoom limits and
    /// clamping.
    pub fn fit_points(&mut self, a: Point, b: Point, params: FitParams) -> FitTransform {
        self.apply_fit(compute_fit(a, b, self.view_size(), params));
        self.transform()
    }

    /// Fits the whole floor plan into view. Returns `None` without touching
    /// the view when no floor bounds are set.
    pub fn fit_floor(&mut self, params: FitParams) -> Option<FitTransform> {
        let bounds = self.floor_bounds?;
        self.apply_fit(fit_rect(bounds, self.view_size(), params));
        Some(self.transform())
    }

    /// Pans by a delta in device pixels.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.pan += delta;
        self.rebuild_transforms();
        self.clamp_to_floor();
    }

    /// Multiplies the zoom by `factor`, keeping `anchor` (in device
    /// coordinates) over the same floor-plan point.
    ///
    /// Non-positive factors are ignored.
    pub fn zoom_about_view_point(&mut self, anchor: Point, factor: f64) {
        if factor.is_nan() || factor <= 0.0 {
            return;
        }
        let zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if zoom == self.zoom {
            return;
        }
        let pinned = self.view_to_world_point(anchor);
        self.zoom = zoom;
        self.rebuild_transforms();
        let drift = anchor - self.world_to_view_point(pinned);
        self.pan_by_view(drift);
    }

    /// Pans so `world_pt` sits at the center of the view.
    pub fn center_on(&mut self, world_pt: Point) {
        let delta = self.view_rect.center() - self.world_to_view_point(world_pt);
        self.pan_by_view(delta);
    }

    /// Returns the floor-plan region currently on screen.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let min = self.view_to_world * Point::new(self.view_rect.min_x(), self.view_rect.min_y());
        let max = self.view_to_world * Point::new(self.view_rect.max_x(), self.view_rect.max_y());
        Rect::from_points(min, max)
    }

    /// Converts a floor-plan point into device coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a device point into floor-plan coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    fn rebuild_transforms(&mut self) {
        let origin = self.view_rect.origin().to_vec2();
        self.world_to_view = Affine::translate(origin) * self.transform().to_affine();
        self.view_to_world = self.world_to_view.inverse();
    }

    fn clamp_to_floor(&mut self) {
        if self.clamp_mode == ClampMode::None {
            return;
        }
        let Some(bounds) = self.floor_bounds.filter(|b| b.width() > 0.0 && b.height() > 0.0)
        else {
            return;
        };
        let correction = overlap_correction(self.visible_world_rect(), bounds);
        if correction != Vec2::ZERO {
            // Moving the visible window by +d in world space moves content by -d * zoom.
            self.pan -= correction * self.zoom;
            self.rebuild_transforms();
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};
    use wayfinder_fit::{FitParams, FitTransform};

    use super::{ClampMode, MapView};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn world_view_roundtrip_with_offset_view_rect() {
        let mut view = MapView::new(Rect::new(40.0, 60.0, 840.0, 660.0));
        view.apply_fit(FitTransform::new(Vec2::new(12.0, -7.0), 0.8));

        let world = Point::new(250.0, -31.0);
        let device = view.world_to_view_point(world);
        assert!(close(device, Point::new(40.0 + 12.0 + 200.0, 60.0 - 7.0 - 24.8)));
        assert!(close(view.view_to_world_point(device), world));
    }

    #[test]
    fn apply_fit_within_limits_is_exact() {
        let mut view = MapView::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let fit = FitTransform::new(Vec2::new(325.0, 150.0), 1.5);
        view.apply_fit(fit);
        assert_eq!(view.transform(), fit);
    }

    #[test]
    fn apply_fit_clamped_zoom_keeps_center() {
        let mut view = MapView::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        view.set_zoom_limits(0.1, 1.0);

        let fit = FitTransform::new(Vec2::new(325.0, 150.0), 1.5);
        let centered_before = fit.view_to_world(Point::new(400.0, 300.0));
        view.apply_fit(fit);

        assert_eq!(view.zoom(), 1.0);
        let centered_after = view.view_to_world_point(Point::new(400.0, 300.0));
        assert!(close(centered_before, centered_after));
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let mut view = MapView::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let anchor = Point::new(200.0, 450.0);
        let before = view.view_to_world_point(anchor);

        view.zoom_about_view_point(anchor, 2.5);
        assert_eq!(view.zoom(), 2.5);
        assert!(close(view.view_to_world_point(anchor), before));

        // Ignored factors.
        view.zoom_about_view_point(anchor, 0.0);
        view.zoom_about_view_point(anchor, f64::NAN);
        assert_eq!(view.zoom(), 2.5);
    }

    #[test]
    fn center_on_moves_point_to_view_center() {
        let mut view = MapView::new(Rect::new(0.0, 0.0, 300.0, 200.0));
        view.set_zoom(2.0);
        view.center_on(Point::new(75.0, 10.0));
        assert!(close(
            view.world_to_view_point(Point::new(75.0, 10.0)),
            Point::new(150.0, 100.0)
        ));
    }

    #[test]
    fn clamping_pulls_view_back_to_floor() {
        let mut view = MapView::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let floor = Rect::new(0.0, 0.0, 50.0, 50.0);
        view.set_floor_bounds(Some(floor));

        view.pan_by_view(Vec2::new(1_000.0, 1_000.0));
        let visible = view.visible_world_rect();
        assert!(visible.min_x() <= floor.max_x() + 1e-9);
        assert!(visible.min_y() <= floor.max_y() + 1e-9);

        view.set_clamp_mode(ClampMode::None);
        view.pan_by_view(Vec2::new(1_000.0, 1_000.0));
        assert!(view.visible_world_rect().max_x() < floor.min_x());
    }

    #[test]
    fn fit_floor_requires_bounds() {
        let mut view = MapView::new(Rect::new(0.0, 0.0, 400.0, 300.0));
        assert!(view.fit_floor(FitParams::default()).is_none());
        assert_eq!(view.transform(), FitTransform::IDENTITY);

        view.set_floor_bounds(Some(Rect::new(0.0, 0.0, 1_800.0, 1_300.0)));
        let fit = view.fit_floor(FitParams::default().with_padding(0.0)).unwrap();
        // 400 / 1800 vs 300 / 1300: width binds.
        assert!((fit.scale - 400.0 / 1_800.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_limits_are_normalized() {
        let mut view = MapView::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        view.set_zoom_limits(4.0, 0.5);
        assert_eq!(view.zoom_limits(), (0.5, 4.0));
        view.set_zoom(10.0);
        assert_eq!(view.zoom(), 4.0);
    }
}
