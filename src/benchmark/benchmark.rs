//! Timing harness for the simulation step.
//!
//! `bench_tick` measures the cost of a full `tick()` across growing body
//! counts to show the direct-summation O(N^2) curve.

use std::time::Instant;

use crate::simulation::space::Space;
use crate::simulation::states::{Body, NVec2, Rgb};

/// Build a deterministic N-body space, no rand needed.
fn scattered_space(n: usize) -> Space {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions spread over a few AU
        let x = NVec2::new(
            (i_f * 0.37).sin() * 5.0e11,
            (i_f * 0.13).cos() * 5.0e11,
        );

        bodies.push(Body::new(
            format!("Body {i}"),
            1.0e24,
            1_000_000,
            Rgb::new(255, 255, 255),
            false,
            x,
            NVec2::zeros(),
        ));
    }

    Space::with_bodies(bodies)
}

pub fn bench_tick() {
    // Different system sizes to test
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 5; // ticks per size

    for n in ns {
        let mut space = scattered_space(n);
        space.collision_mode = true;

        // Warm up
        space.tick();

        let t0 = Instant::now();
        for _ in 0..steps {
            space.tick();
        }
        let per_tick = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, tick = {per_tick:9.6} s");
    }
}
