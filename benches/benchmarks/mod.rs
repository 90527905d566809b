pub mod trivial_scenes;
