//! High-level runtime engine settings
//!
//! How many sub-steps make up a frame and how the viewer draws them

#[derive(Debug, Clone)]
pub struct Engine {
    pub steps_per_frame: usize, // physics sub-steps per rendered frame
    pub scale: f32, // simulation units -> screen pixels
    pub trail_length: usize, // points kept per body trail, 0 disables trails
    pub debug_vectors: bool, // draw velocity / acceleration / force arrows
}
