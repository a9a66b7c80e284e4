//! Scalar type selection and numeric constants.

#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

#[cfg(feature = "f32")]
pub use core::f32::consts::{FRAC_PI_2, PI};
#[cfg(feature = "f64")]
pub use core::f64::consts::{FRAC_PI_2, PI};

use std::sync::OnceLock;

static TOLERANCE: OnceLock<Real> = OnceLock::new();

/// Slack (degrees) allowed when an angle step lands on the end of its range.
///
/// Read once from the build-time `ARMREACH_TOLERANCE` variable, otherwise a
/// default suited to the active precision.
pub fn tolerance() -> Real {
    *TOLERANCE.get_or_init(|| {
        option_env!("ARMREACH_TOLERANCE")
            .and_then(|raw| raw.parse::<Real>().ok())
            .map_or(if cfg!(feature = "f32") { 1e-4 } else { 1e-9 }, |v| {
                v.max(Real::EPSILON)
            })
    })
}
