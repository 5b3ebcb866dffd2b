//! Pinhole camera for ray generation.

use lumen_math::{DVec3, Ray};

/// Camera looking from `eye` toward `target`.
///
/// The image plane sits `focal_distance` in front of the eye. Pixels are
/// `pixel_size` world units wide, so the field of view follows from the
/// image resolution rather than an angle.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: DVec3,
    target: DVec3,
    vup: DVec3,
    focal_distance: f64,

    // Cached basis (set by initialize())
    front: DVec3,
    right: DVec3,
    up: DVec3,
}

impl Camera {
    /// Camera at the origin looking down +Z with +Y up.
    pub fn new() -> Self {
        let mut camera = Self {
            eye: DVec3::ZERO,
            target: DVec3::new(0.0, 0.0, 5.0),
            vup: DVec3::Y,
            focal_distance: 1.0,
            front: DVec3::Z,
            right: DVec3::X,
            up: DVec3::Y,
        };
        camera.initialize();
        camera
    }

    /// Set camera position.
    pub fn with_position(mut self, eye: DVec3, target: DVec3, vup: DVec3) -> Self {
        self.eye = eye;
        self.target = target;
        self.vup = vup;
        self.initialize();
        self
    }

    /// Set the eye to image plane distance.
    pub fn with_focal_distance(mut self, focal_distance: f64) -> Self {
        self.focal_distance = focal_distance;
        self
    }

    /// Recompute the orthonormal basis from eye, target and up hint.
    ///
    /// `right = vup × front`, so with the defaults image columns grow along +X.
    fn initialize(&mut self) {
        self.front = (self.target - self.eye).normalize_or_zero();
        self.right = self.vup.cross(self.front).normalize_or_zero();
        self.up = self.front.cross(self.right);
    }

    pub fn eye(&self) -> DVec3 {
        self.eye
    }

    pub fn focal_distance(&self) -> f64 {
        self.focal_distance
    }

    pub fn front(&self) -> DVec3 {
        self.front
    }

    pub fn right(&self) -> DVec3 {
        self.right
    }

    pub fn up(&self) -> DVec3 {
        self.up
    }

    /// Primary ray through pixel (`row`, `col`) of a `width × height` image,
    /// displaced by the sub-pixel `offset`.
    pub fn get_ray(
        &self,
        row: u32,
        col: u32,
        offset: (f64, f64),
        (width, height): (u32, u32),
        pixel_size: f64,
    ) -> Ray {
        let plane_center = self.eye + self.front * self.focal_distance;
        let across = col as f64 - width as f64 / 2.0 + offset.0;
        let down = height as f64 / 2.0 - row as f64 + offset.1;
        let pixel = plane_center + (self.right * across + self.up * down) * pixel_size;
        Ray::between(self.eye, pixel)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_basis() {
        let camera = Camera::new();

        assert_eq!(camera.eye(), DVec3::ZERO);
        assert!((camera.front() - DVec3::Z).length() < 1e-12);
        assert!((camera.right() - DVec3::X).length() < 1e-12);
        assert!((camera.up() - DVec3::Y).length() < 1e-12);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = Camera::new().with_position(
            DVec3::new(1.0, 2.0, -3.0),
            DVec3::new(-2.0, 0.5, 4.0),
            DVec3::Y,
        );

        for v in [camera.front(), camera.right(), camera.up()] {
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
        assert!(camera.front().dot(camera.right()).abs() < 1e-12);
        assert!(camera.front().dot(camera.up()).abs() < 1e-12);
        assert!(camera.right().dot(camera.up()).abs() < 1e-12);
        assert!(camera.up().y > 0.0);
    }

    #[test]
    fn test_center_ray_points_forward() {
        let camera = Camera::new();
        // Pixel (h/2, w/2) with a zero offset lands on the plane center
        let ray = camera.get_ray(170, 240, (0.0, 0.0), (480, 340), 0.01);

        assert_eq!(ray.origin(), DVec3::ZERO);
        assert!((ray.direction() - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_rows_grow_downward_columns_grow_right() {
        let camera = Camera::new();
        let top_left = camera.get_ray(0, 0, (0.5, 0.5), (480, 340), 0.01);
        let bottom_right = camera.get_ray(339, 479, (0.5, 0.5), (480, 340), 0.01);

        assert!(top_left.direction().y > 0.0);
        assert!(top_left.direction().x < 0.0);
        assert!(bottom_right.direction().y < 0.0);
        assert!(bottom_right.direction().x > 0.0);
    }

    #[test]
    fn test_pixel_footprint() {
        let camera = Camera::new();
        let a = camera.get_ray(10, 10, (0.0, 0.0), (100, 100), 0.01);
        let b = camera.get_ray(10, 11, (0.0, 0.0), (100, 100), 0.01);

        // Neighbouring columns are one pixel_size apart on the unit-distance plane
        let pa = a.at(1.0 / a.direction().z);
        let pb = b.at(1.0 / b.direction().z);
        assert!(((pb - pa).length() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_longer_focal_distance_narrows_view() {
        let near = Camera::new();
        let far = Camera::new().with_focal_distance(2.0);
        assert_eq!(far.focal_distance(), 2.0);

        let a = near.get_ray(0, 0, (0.0, 0.0), (100, 100), 0.01);
        let b = far.get_ray(0, 0, (0.0, 0.0), (100, 100), 0.01);

        // Same plane offset, twice as far away: half the slope
        let slope = |ray: &Ray| ray.direction().x / ray.direction().z;
        assert!((slope(&b) - slope(&a) / 2.0).abs() < 1e-12);
        assert!((slope(&a) + 0.5).abs() < 1e-12);
    }
}
