// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Pan and uniform zoom mapping floor-plan coordinates into view pixels.
///
/// A world point `p` lands at `p * scale + position` in the view. This is the
/// shape pan-zoom widgets usually accept: a translation (`positionX`,
/// `positionY`) applied after scaling about the world origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    /// Translation applied after scaling, in view units.
    pub position: Vec2,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl FitTransform {
    /// The transform that leaves coordinates unchanged.
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform from a pan offset and zoom factor.
    #[must_use]
    pub const fn new(position: Vec2, scale: f64) -> Self {
        Self { position, scale }
    }

    /// Returns the world → view mapping as an affine transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.position) * Affine::scale(self.scale)
    }

    /// Maps a world-space point into view coordinates.
    #[must_use]
    pub fn world_to_view(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.position).to_point()
    }

    /// Maps a view-space point back into world coordinates.
    ///
    /// The result is not finite when `scale` is zero.
    #[must_use]
    pub fn view_to_world(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.position) / self.scale).to_point()
    }
}

impl Default for FitTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::FitTransform;

    #[test]
    fn affine_agrees_with_point_mapping() {
        let t = FitTransform::new(Vec2::new(325.0, 150.0), 1.5);
        let p = Point::new(100.0, 200.0);
        let via_affine = t.to_affine() * p;
        let direct = t.world_to_view(p);
        assert!((via_affine.x - direct.x).abs() < 1e-9);
        assert!((via_affine.y - direct.y).abs() < 1e-9);
        assert_eq!(direct, Point::new(475.0, 450.0));
    }

    #[test]
    fn view_to_world_inverts_world_to_view() {
        let t = FitTransform::new(Vec2::new(-40.0, 12.5), 0.25);
        let p = Point::new(1234.0, -56.0);
        let back = t.view_to_world(t.world_to_view(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn identity_is_default() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(FitTransform::default(), FitTransform::IDENTITY);
        assert_eq!(FitTransform::IDENTITY.world_to_view(p), p);
    }
}
