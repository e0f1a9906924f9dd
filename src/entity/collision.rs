use glam::Vec2;

/// An axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// The box enclosing a circle of `radius` centered on `center`.
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        let extent = Vec2::splat(radius);
        Self {
            min: center - extent,
            max: center + extent,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Whether the two boxes share some area. Boxes that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        min.x < max.x && min.y < max.y
    }
}

/// Trait for entities that can participate in collision detection.
pub trait Collidable {
    /// Returns the current bounding box of this entity.
    fn bounds(&self) -> Bounds;

    /// Checks if this entity is colliding with another entity.
    fn is_colliding_with(&self, other: &dyn Collidable) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}
