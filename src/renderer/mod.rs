mod camera;
pub use camera::Camera;

mod frame;
pub use frame::{EdgeMode, Frame, Plane, View};

mod downsample;
pub use downsample::bilinear_downsample;

mod render;
pub use render::{render, write_image};
