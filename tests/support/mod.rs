//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use armreach::{
    EnvelopeConfig, OccupancyGrid,
    float_types::Real,
    kinematics::{angle_steps, transform},
};
use nalgebra::{Matrix4, Point3};

/// Enumerate every joint over the full `[-max_angle, max_angle]` range without
/// any symmetry shortcut, walking an index array instead of recursing.
pub fn brute_force_grid(config: &EnvelopeConfig) -> OccupancyGrid {
    let steps =
        angle_steps(-config.max_angle, config.max_angle, config.angle_increment).unwrap();
    let d = config.link_length();
    let mut indices = vec![0usize; config.dof];
    let mut grid = OccupancyGrid::new();

    loop {
        let pose = indices
            .iter()
            .enumerate()
            .fold(Matrix4::<Real>::identity(), |acc, (j, &k)| {
                acc * transform(j + 1, config.dof, steps[k].to_radians(), d).unwrap()
            });
        grid.accumulate(&Point3::new(pose[(0, 3)], pose[(1, 3)], pose[(2, 3)]))
            .unwrap();

        // Advance the last joint fastest, carrying towards the base.
        let mut joint = config.dof;
        loop {
            if joint == 0 {
                return grid;
            }
            joint -= 1;
            indices[joint] += 1;
            if indices[joint] < steps.len() {
                break;
            }
            indices[joint] = 0;
        }
    }
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Translation column of a homogeneous transform.
pub fn translation(m: &Matrix4<Real>) -> [Real; 3] {
    [m[(0, 3)], m[(1, 3)], m[(2, 3)]]
}
