mod point;
pub use point::Point3D;

mod vector;
pub use vector::{Normal3D, Vector, Vector3D};

mod matrix;
pub use matrix::Matrix4D;

mod colour;
pub use colour::Colour;
