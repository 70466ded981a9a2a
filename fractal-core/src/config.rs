use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

/// Parameters of the branching-tree generator.
#[derive(Clone, Copy, Debug)]
pub struct TreeConfig {
    pub trunk_length: f32,
    pub start_angle: f32,
    pub branch_angle_delta: f32,
    pub scale_factor: f32,
    pub min_branch_length: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            trunk_length: 150.0,
            start_angle: -FRAC_PI_2,
            branch_angle_delta: FRAC_PI_6,
            scale_factor: 0.7,
            min_branch_length: 5.0,
        }
    }
}

/// Parameters of the carpet generator.
#[derive(Clone, Copy, Debug)]
pub struct CarpetConfig {
    /// Side length of the grid; must be a power of 3.
    pub size: usize,
}

impl Default for CarpetConfig {
    fn default() -> Self {
        Self { size: 27 }
    }
}
