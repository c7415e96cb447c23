use nalgebra::Vector3;

use smatrack::constants::GAUSS_GRAV_SQUARED;
use smatrack::particle::Particle;
use smatrack::particle_params::ParamKey;
use smatrack::simulation::Simulation;

/// Heliocentric simulation (AU, days, solar masses) holding only the Sun.
pub fn sun_centered_sim() -> Simulation {
    let mut sim = Simulation::new(GAUSS_GRAV_SQUARED);
    sim.add_particle(Particle::new(1.0, Vector3::zeros(), Vector3::zeros()));
    sim
}

/// Massless body at `(r, 0, 0)` launched tangentially so that its osculating
/// semi-major axis is `a` (vis-viva: v² = μ (2/r − 1/a)).
pub fn body_with_sma(mu: f64, r: f64, a: f64) -> Particle {
    let speed = (mu * (2.0 / r - 1.0 / a)).sqrt();
    Particle::massless(Vector3::new(r, 0.0, 0.0), Vector3::new(0.0, speed, 0.0))
}

/// Attach both bound parameters to `particle`.
pub fn with_bounds(mut particle: Particle, min_sma: f64, max_sma: f64) -> Particle {
    particle.params.set(ParamKey::MinSma, min_sma);
    particle.params.set(ParamKey::MaxSma, max_sma);
    particle
}

/// Read back the `(MinSma, MaxSma)` pair of particle `index`.
pub fn bounds_of(sim: &Simulation, index: usize) -> (Option<f64>, Option<f64>) {
    let params = &sim.particle(index).unwrap().params;
    (params.get(ParamKey::MinSma), params.get(ParamKey::MaxSma))
}
