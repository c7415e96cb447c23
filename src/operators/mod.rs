//! # Simulation operators
//!
//! Operators are the per-timestep hooks a host integration loop drives over a
//! [`Simulation`](crate::simulation::Simulation): after (or between) force
//! evaluations, the loop hands the whole state to each registered operator
//! exactly once per step. Operators are stateless; anything they need to
//! remember lives in the per-particle
//! [`ParticleParams`](crate::particle_params::ParticleParams) store, so a
//! simulation remains a plain cloneable value.
//!
//! The one operator shipped here is
//! [`TrackMinMaxSma`](crate::operators::minmax_sma::TrackMinMaxSma).

pub mod minmax_sma;

use crate::constants::Day;
use crate::simulation::Simulation;

/// Per-timestep hook over the full simulation state.
pub trait Operator {
    /// Stable name for host-side registration and reporting.
    fn name(&self) -> &'static str;

    /// Invoked once per step by the host loop. `dt` is the step just taken;
    /// operators with no time-dependent logic ignore it.
    fn step(&self, sim: &mut Simulation, dt: Day);
}
