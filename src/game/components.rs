use bevy::prelude::*;

/// Marker for everything the level spawns. Torn down when the level is.
#[derive(Component, Debug, Default)]
pub struct LevelEntity;

/// Marker for the demo avatar that walks the pickup ring
#[derive(Component, Debug, Default)]
pub struct Avatar;

/// Circular walk around `center`
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Patrol {
    pub center: Vec3,
    pub radius: f32,
    /// Radians per second
    pub angular_speed: f32,
    pub angle: f32,
}

impl Patrol {
    pub fn new(center: Vec3, radius: f32, angular_speed: f32) -> Self {
        Self {
            center,
            radius,
            angular_speed,
            angle: 0.0,
        }
    }

    pub fn advance(&mut self, delta_secs: f32) {
        self.angle = (self.angle + self.angular_speed * delta_secs).rem_euclid(std::f32::consts::TAU);
    }

    pub fn position(&self) -> Vec3 {
        self.center + point_on_ring(self.radius, self.angle)
    }
}

/// Offset on a horizontal circle of `radius` at `angle` radians
pub fn point_on_ring(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}
