use crate::core::{Matrix4D, Normal3D, Point3D, Vector};
use std::num::NonZeroU32;

/// Pinhole camera: projects pixel coordinates through a view plane into world-space rays.
#[derive(Debug, PartialEq)]
pub struct Camera {
    width: NonZeroU32,
    height: NonZeroU32,
    position: Point3D,
    focal_length: f64,
    to_world: Matrix4D,
    /// world-space width of the view plane
    view_width: f64,
    /// world-space height of the view plane
    view_height: f64,
}

impl Camera {
    pub fn new(
        width: NonZeroU32,
        height: NonZeroU32,
        position: Point3D,
        look: Normal3D,
        up: Normal3D,
        height_angle: f64,
        focal_length: f64,
    ) -> Self {
        let w = -look;
        let v = (up - w * up.dot(w)).normalised();
        let u = v.cross(w);

        let to_world = Matrix4D::translation(position.x(), position.y(), position.z())
            * Matrix4D::basis(u, v, w);

        let view_height = 2.0 * focal_length * (height_angle / 2.0).tan();
        let view_width = view_height * width.get() as f64 / height.get() as f64;

        Camera {
            width,
            height,
            position,
            focal_length,
            to_world,
            view_width,
            view_height,
        }
    }

    /// The world-space ray through the centre of pixel `(x, y)`, as `(origin, direction)`.
    /// `y` grows downwards, matching image memory order.
    pub fn primary_ray(&self, x: u32, y: u32) -> (Point3D, Normal3D) {
        let normalised_x = (x as f64 + 0.5) / self.width.get() as f64 - 0.5;
        let normalised_y = 0.5 - (y as f64 + 0.5) / self.height.get() as f64;

        let view_point = Point3D::new(
            self.view_width * normalised_x,
            self.view_height * normalised_y,
            -self.focal_length,
        );
        let (x, y, z, _) = &self.to_world * view_point;
        let world_point = Point3D::new(x, y, z);

        (self.position, (world_point - self.position).normalised())
    }

    pub fn width(&self) -> NonZeroU32 {
        self.width
    }

    pub fn height(&self) -> NonZeroU32 {
        self.height
    }
}
