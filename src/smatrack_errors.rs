use thiserror::Error;

/// Failure modes of the two-body osculating-element recovery.
///
/// All variants describe a degenerate relative geometry for which the
/// conversion from a Cartesian state to orbital elements is undefined.
/// They are deliberately per-particle: callers scanning a particle array
/// skip the affected body and move on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmaTrackError {
    #[error("primary body is massless; gravitational parameter vanishes")]
    MasslessPrimary,

    #[error("body coincides with the primary; separation vanishes")]
    CoincidentBodies,

    #[error("specific orbital energy vanishes (parabolic limit); semi-major axis is undefined")]
    ParabolicOrbit,
}
