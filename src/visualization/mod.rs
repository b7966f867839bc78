pub mod polar_vis2d;
pub mod headless;
