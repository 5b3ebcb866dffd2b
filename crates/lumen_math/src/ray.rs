use crate::DVec3;

/// A ray in 3D space: an origin and a unit direction.
///
/// Rays are values. Every primary, secondary and shadow ray is built fresh
/// with [`Ray::new`], which normalizes the direction it is given.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// A zero direction stays zero; such a ray hits nothing.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from `from` aimed at the point `to`.
    pub fn between(from: DVec3, to: DVec3) -> Self {
        Self::new(from, to - from)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.0, 4.0, 0.0));

        assert_eq!(ray.origin(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(ray.direction(), DVec3::Y);
    }

    #[test]
    fn test_ray_zero_direction() {
        let ray = Ray::new(DVec3::ONE, DVec3::ZERO);
        assert_eq!(ray.direction(), DVec3::ZERO);
        assert_eq!(ray.at(10.0), DVec3::ONE);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X * 3.0);

        assert_eq!(ray.at(0.0), DVec3::ZERO);
        assert_eq!(ray.at(1.0), DVec3::X);
        assert_eq!(ray.at(2.0), DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_between() {
        let ray = Ray::between(DVec3::ZERO, DVec3::new(0.0, 0.0, 5.0));
        assert_eq!(ray.direction(), DVec3::Z);
        assert_eq!(ray.at(5.0), DVec3::new(0.0, 0.0, 5.0));
    }
}
