mod material;
pub use material::Material;

mod light;
pub use light::{Light, LightSample};

pub mod optics;

mod world;
pub use world::{Object, World, WorldSettings};
