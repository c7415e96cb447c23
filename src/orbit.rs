//! # Osculating two-body orbital elements
//!
//! This module recovers the instantaneous (osculating) two-body orbit of a
//! particle relative to a primary from their Cartesian states: the orbit a
//! body would follow if every perturbation vanished at this instant.
//!
//! ## Method
//!
//! Classical vector recovery, no iteration:
//!
//! - semi-major axis from the vis-viva energy, `a = −μ / (v² − 2μ/d)`;
//! - eccentricity from the Laplace–Runge–Lenz vector;
//! - inclination and node from the specific angular momentum vector;
//! - pericenter argument and true anomaly from clamped arccosines with a
//!   sign disambiguator, all angles normalized to `[0, 2π)`.
//!
//! Hyperbolic states are valid inputs: `a`, the mean motion and the period
//! come out negative, as is conventional in N-body codes. Only genuinely
//! degenerate geometry fails — a massless primary, coincident bodies, or an
//! exactly parabolic state — reported as
//! [`SmaTrackError`](crate::smatrack_errors::SmaTrackError) rather than a
//! panic.
//!
//! ## Degeneracies
//!
//! Angles that become undefined (node for planar orbits, pericenter and true
//! anomaly for circular ones) are conventionally set to `0.0`, so every
//! successful conversion yields finite elements.

use nalgebra::Vector3;

use crate::constants::{Radian, DPI, TINY};
use crate::particle::Particle;
use crate::smatrack_errors::SmaTrackError;

/// Osculating orbital elements of a particle relative to a primary.
///
/// Units
/// -----
/// * `d`, `a`: length unit of the simulation (AU in the heliocentric convention).
/// * `v`: length per time.
/// * `h`: length² per time (specific angular momentum).
/// * `e`: unitless.
/// * angles: radians in `[0, 2π)`.
/// * `mean_motion`: radians per time; `period`: time. Both negative for
///   hyperbolic orbits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Separation between the body and the primary.
    pub d: f64,
    /// Relative speed.
    pub v: f64,
    /// Norm of the specific relative angular momentum.
    pub h: f64,
    /// Semi-major axis (negative for hyperbolic orbits).
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination to the reference plane.
    pub inclination: Radian,
    /// Longitude of the ascending node (0 for planar orbits).
    pub ascending_node_longitude: Radian,
    /// Argument of pericenter (0 for circular orbits).
    pub pericenter_argument: Radian,
    /// True anomaly (0 for circular orbits).
    pub true_anomaly: Radian,
    /// Mean motion, signed like `a`.
    pub mean_motion: f64,
    /// Orbital period, signed like `a`.
    pub period: f64,
}

/// Arccosine of `num/denom` with quadrant disambiguation.
///
/// The cosine is clamped into `[−1, 1]` before `acos`, and a negative
/// `disambiguator` mirrors the result into `(π, 2π)`. A vanishing `denom`
/// means the angle is undefined; the conventional value `0.0` is returned.
fn acos2(num: f64, denom: f64, disambiguator: f64) -> Radian {
    if denom <= TINY {
        return 0.0;
    }
    let cosine = num / denom;
    if cosine > -1.0 && cosine < 1.0 {
        let val = cosine.acos();
        if disambiguator < 0.0 {
            DPI - val
        } else {
            val
        }
    } else if cosine <= -1.0 {
        std::f64::consts::PI
    } else {
        0.0
    }
}

/// Relative Cartesian state of `particle` with respect to `primary`, with the
/// degeneracy checks shared by every element computation.
///
/// Return
/// ----------
/// * `(mu, r, v, d)` — gravitational parameter `G(m + m_primary)`, relative
///   position, relative velocity and separation.
fn relative_state(
    g: f64,
    particle: &Particle,
    primary: &Particle,
) -> Result<(f64, Vector3<f64>, Vector3<f64>, f64), SmaTrackError> {
    if primary.mass <= TINY {
        return Err(SmaTrackError::MasslessPrimary);
    }
    let mu = g * (particle.mass + primary.mass);
    let r = particle.position - primary.position;
    let v = particle.velocity - primary.velocity;
    let d = r.norm();
    if d <= TINY {
        return Err(SmaTrackError::CoincidentBodies);
    }
    Ok((mu, r, v, d))
}

impl Orbit {
    /// Recover the full osculating element set of `particle` relative to
    /// `primary`.
    ///
    /// Arguments
    /// -----------------
    /// * `g`: Gravitational constant of the owning simulation.
    /// * `particle`: The body whose orbit is computed.
    /// * `primary`: The body taken as the gravitational focus.
    ///
    /// Return
    /// ----------
    /// * The [`Orbit`], or a [`SmaTrackError`] for degenerate geometry
    ///   (massless primary, coincident bodies, parabolic energy).
    ///
    /// See also
    /// ------------
    /// * [`Orbit::semi_major_axis`] – Cheaper path when only `a` is needed.
    pub fn from_particles(
        g: f64,
        particle: &Particle,
        primary: &Particle,
    ) -> Result<Self, SmaTrackError> {
        let (mu, r, v, d) = relative_state(g, particle, primary)?;

        let v2 = v.dot(&v);
        let vcirc2 = mu / d;
        let energy_term = v2 - 2.0 * vcirc2;
        if energy_term.abs() <= TINY {
            return Err(SmaTrackError::ParabolicOrbit);
        }
        let a = -mu / energy_term;

        let hvec = r.cross(&v);
        let h = hvec.norm();

        // Laplace-Runge-Lenz vector, pointing at pericenter with norm e
        let vr = r.dot(&v) / d;
        let evec = (r * (v2 - vcirc2) - v * (d * vr)) / mu;
        let e = evec.norm();

        let mean_motion = a.signum() * (mu / (a * a * a).abs()).sqrt();
        let period = DPI / mean_motion;

        let inclination = acos2(hvec.z, h, 1.0);

        // Node vector z_hat x h lies along the ascending node
        let nvec = Vector3::new(-hvec.y, hvec.x, 0.0);
        let node_norm = nvec.norm();
        let ascending_node_longitude = acos2(nvec.x, node_norm, nvec.y);

        let pericenter_argument = acos2(nvec.dot(&evec), node_norm * e, evec.z);
        let true_anomaly = acos2(evec.dot(&r), e * d, vr);

        Ok(Orbit {
            d,
            v: v2.sqrt(),
            h,
            a,
            e,
            inclination,
            ascending_node_longitude,
            pericenter_argument,
            true_anomaly,
            mean_motion,
            period,
        })
    }

    /// Semi-major axis of `particle` relative to `primary`, skipping the
    /// angular elements.
    ///
    /// Same degeneracy checks and same value of `a` as
    /// [`Orbit::from_particles`]; this is the per-particle work item of the
    /// bounds-tracking scan.
    pub fn semi_major_axis(
        g: f64,
        particle: &Particle,
        primary: &Particle,
    ) -> Result<f64, SmaTrackError> {
        let (mu, _, v, d) = relative_state(g, particle, primary)?;

        let energy_term = v.dot(&v) - 2.0 * (mu / d);
        if energy_term.abs() <= TINY {
            return Err(SmaTrackError::ParabolicOrbit);
        }
        Ok(-mu / energy_term)
    }
}
