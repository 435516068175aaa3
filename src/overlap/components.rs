use bevy::prelude::*;

/// Default overlap radius for pickups
pub const DEFAULT_SPHERE_RADIUS: f32 = 50.0;

/// Sphere used to detect overlaps. Disabled spheres never report overlaps.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CollisionSphere {
    pub radius: f32,
    pub enabled: bool,
}

impl CollisionSphere {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            enabled: true,
        }
    }

    /// Whether two spheres centred at `a` and `b` touch
    pub fn overlaps(&self, a: Vec3, other: &CollisionSphere, b: Vec3) -> bool {
        a.distance(b) <= self.radius + other.radius
    }
}

impl Default for CollisionSphere {
    fn default() -> Self {
        Self::new(DEFAULT_SPHERE_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sphere_is_enabled_with_default_radius() {
        let sphere = CollisionSphere::default();
        assert_eq!(sphere.radius, DEFAULT_SPHERE_RADIUS);
        assert!(sphere.enabled);
    }

    #[test]
    fn spheres_overlap_when_touching() {
        let a = CollisionSphere::new(1.0);
        let b = CollisionSphere::new(2.0);

        assert!(a.overlaps(Vec3::ZERO, &b, Vec3::new(3.0, 0.0, 0.0)));
        assert!(a.overlaps(Vec3::ZERO, &b, Vec3::new(0.0, 0.0, 2.5)));
        assert!(!a.overlaps(Vec3::ZERO, &b, Vec3::new(3.1, 0.0, 0.0)));
    }
}
