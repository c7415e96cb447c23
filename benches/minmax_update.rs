use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use smatrack::operators::minmax_sma::TrackMinMaxSma;
use smatrack::particle::Particle;
use smatrack::particle_params::ParamKey;
use smatrack::simulation::Simulation;

/// Sun plus `n` massless bodies on randomized bound elliptic orbits, every
/// body opted into bounds tracking.
fn make_sim(rng: &mut StdRng, n: usize) -> Simulation {
    let mut sim = Simulation::new(1.0);
    sim.add_particle(Particle::new(1.0, Vector3::zeros(), Vector3::zeros()));

    for _ in 0..n {
        let r = rng.random_range(0.5..30.0);
        let theta = rng.random::<f64>() * std::f64::consts::TAU;
        // keep a > r/2 so the vis-viva speed stays real
        let a = r * rng.random_range(0.8..1.6);
        let speed = (2.0 / r - 1.0 / a).sqrt();

        let position = Vector3::new(r * theta.cos(), r * theta.sin(), 0.0);
        let velocity = Vector3::new(-speed * theta.sin(), speed * theta.cos(), 0.0);

        let mut body = Particle::massless(position, velocity);
        body.params.set(ParamKey::MinSma, a);
        body.params.set(ParamKey::MaxSma, a);
        sim.add_particle(body);
    }
    sim
}

fn bench_update(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED_0B17);
    for n in [100_usize, 1_000, 10_000] {
        let sim = make_sim(&mut rng, n);
        c.bench_function(&format!("track_minmax_sma/update/{n}"), |b| {
            b.iter_batched(
                || sim.clone(),
                |mut sim| {
                    TrackMinMaxSma::update(black_box(&mut sim), 0.1);
                    sim
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
