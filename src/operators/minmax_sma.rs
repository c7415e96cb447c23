//! # Semi-major-axis bounds tracking
//!
//! For every particle that opted in, this operator recomputes the osculating
//! semi-major axis relative to the central body (particle 0) and widens the
//! running `[MinSma, MaxSma]` interval attached to the particle. Over a long
//! integration the interval ends up bracketing every osculating value the
//! particle visited, which is the raw material for stability and diffusion
//! diagnostics.
//!
//! ## Opt-in and skip policy
//!
//! A particle is tracked only if **both**
//! [`ParamKey::MinSma`](crate::particle_params::ParamKey) and
//! [`ParamKey::MaxSma`](crate::particle_params::ParamKey) are attached; the
//! user seeds them (typically both to the initial semi-major axis, or to an
//! inverted interval like `(+inf, -inf)` that the first step collapses).
//! Particles missing either key, the central body itself, and trailing
//! variational particles are left untouched. A particle whose element
//! recovery fails (degenerate geometry) keeps its current bounds for that
//! step — bounds only ever widen, they are never reset.

use crate::constants::Day;
use crate::operators::Operator;
use crate::orbit::Orbit;
use crate::particle_params::ParamKey;
use crate::simulation::Simulation;

/// Operator widening per-particle `[MinSma, MaxSma]` intervals each step.
///
/// Stateless; see the module docs for the opt-in policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackMinMaxSma;

/// Outcome counters of one tracking scan.
///
/// Purely observational: the scan mutates bounds the same way whether or not
/// the report is looked at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackReport {
    /// Particles whose bounds were compared against a fresh semi-major axis
    /// (whether or not either bound moved).
    pub tracked: usize,
    /// Particles in range that do not carry both bound parameters.
    pub skipped: usize,
    /// Particles whose element recovery failed this step.
    pub failed: usize,
}

impl TrackMinMaxSma {
    /// Run one tracking scan over `sim`.
    ///
    /// Scans physical particles 1 .. N − N_var (particle 0 is the reference
    /// body, trailing variational particles are excluded). `dt` is unused.
    /// Never panics and surfaces no errors: per-particle failures are
    /// silently skipped, matching [`update_with_report`](Self::update_with_report)
    /// with the report discarded.
    pub fn update(sim: &mut Simulation, dt: Day) {
        let _ = Self::update_with_report(sim, dt);
    }

    /// Same scan as [`update`](Self::update), returning per-invocation
    /// [`TrackReport`] counters.
    pub fn update_with_report(sim: &mut Simulation, _dt: Day) -> TrackReport {
        let mut report = TrackReport::default();

        let n_real = sim.n_real();
        if n_real < 2 {
            return report;
        }
        let g = sim.g();

        let Some((primary, rest)) = sim.particles_mut().split_first_mut() else {
            return report;
        };

        for particle in &mut rest[..n_real - 1] {
            let (Some(min_sma), Some(max_sma)) = (
                particle.params.get(ParamKey::MinSma),
                particle.params.get(ParamKey::MaxSma),
            ) else {
                report.skipped += 1;
                continue;
            };

            let a = match Orbit::semi_major_axis(g, particle, primary) {
                Ok(a) => a,
                Err(_) => {
                    report.failed += 1;
                    continue;
                }
            };

            // independent comparisons: an inverted seed interval can move both
            if a < min_sma {
                particle.params.set(ParamKey::MinSma, a);
            }
            if a > max_sma {
                particle.params.set(ParamKey::MaxSma, a);
            }
            report.tracked += 1;
        }

        report
    }
}

impl Operator for TrackMinMaxSma {
    fn name(&self) -> &'static str {
        "track_minmax_sma"
    }

    fn step(&self, sim: &mut Simulation, dt: Day) {
        Self::update(sim, dt);
    }
}
