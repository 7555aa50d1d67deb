//! Default value functions for serde deserialization.

pub fn erosion_margins() -> Vec<f64> {
    vec![1.0, 0.8, 0.6, 0.4, 0.3, 0.2, 0.1, 0.0]
}

pub fn grid_columns() -> usize {
    160
}

pub fn min_dimension() -> usize {
    10
}

pub fn max_expansions() -> usize {
    250_000
}

pub fn snap_radii() -> Vec<i32> {
    vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 14, 16, 18, 20]
}

pub fn visibility_samples() -> usize {
    15
}
