//! Numerical approximation of the **work envelope** of an articulated robot arm
//! with `dof` equal-length links.
//!
//! Every combination of joint angles at a fixed step is pushed through the
//! chain of per-joint homogeneous transforms; the resulting end-effector
//! positions are binned into a 5 cm grid over a ±30 cm cube and counted.
//!
//! Only `[-max_angle, 0]` of the first joint is enumerated; the other half is
//! reconstructed by reflecting the grid across `y = 0` (see [`symmetry`]).
//!
//! ```no_run
//! use armreach::{EnvelopeConfig, WorkEnvelope};
//!
//! let config = EnvelopeConfig::new(3, 25.0, 30.0, 90.0);
//! let envelope = WorkEnvelope::compute(&config)?;
//! println!("{}", envelope.summary());
//! # Ok::<(), armreach::errors::EnvelopeError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **parallel**: use rayon to run first-joint tasks on a worker pool
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod enumerate;
pub mod envelope;
pub mod errors;
pub mod float_types;
pub mod grid;
pub mod io;
pub mod kinematics;
pub mod summary;
pub mod symmetry;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::EnvelopeConfig;
pub use envelope::WorkEnvelope;
pub use grid::OccupancyGrid;
pub use kinematics::{JointRole, transform};
pub use summary::{ReachPoint, ResultSummary, summarize};
pub use symmetry::MirrorPolicy;
