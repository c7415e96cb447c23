//! # Particle state
//!
//! A particle is a point mass with an inertial Cartesian position and
//! velocity, plus a [`ParticleParams`](crate::particle_params::ParticleParams)
//! store for operator-attached quantities. Units are whatever the owning
//! [`Simulation`](crate::simulation::Simulation) uses consistently with its
//! gravitational constant; the tests and benches use AU, days and solar
//! masses.

use nalgebra::Vector3;

use crate::particle_params::ParticleParams;

#[derive(Debug, Clone)]
pub struct Particle {
    pub mass: f64,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub params: ParticleParams,
}

impl Particle {
    /// A massive body with an empty parameter store.
    pub fn new(mass: f64, position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Particle {
            mass,
            position,
            velocity,
            params: ParticleParams::new(),
        }
    }

    /// A test particle: responds to gravity but exerts none.
    pub fn massless(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self::new(0.0, position, velocity)
    }
}
