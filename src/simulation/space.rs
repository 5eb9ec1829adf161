//! The space in which the bodies interact.
//!
//! `Space` owns the body collection and the global simulation parameters,
//! and advances the whole system one tick at a time: gravity accumulation,
//! optional collision detection/merge, position integration, and the
//! simulated-time counter.
//!
//! The core is single-threaded and never blocks: `tick()` runs to
//! completion in O(n^2) and mutates state only through the explicit
//! operations below. Callers reading from another thread must synchronize
//! around tick boundaries; `Space` has no interior mutability.

use chrono::{Duration, NaiveDate};
use log::debug;

use crate::simulation::params::CollisionScales;
use crate::simulation::states::{Body, BodyId};

/// Default time step: one simulated hour per tick.
pub const DEFAULT_DT: i64 = 60 * 60;

/// Split disjoint mutable/shared references to two bodies of the slice.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &left[j])
    }
}

/// The simulation container.
pub struct Space {
    bodies: Vec<Body>,
    initial: Vec<Body>, // configuration reloaded by reset()
    nb_planets: usize,
    nb_stars: usize,

    /// When true, stars move under gravity like any other body.
    pub realistic_mode: bool,
    /// When true, each tick detects and resolves collisions.
    pub collision_mode: bool,

    /// Time step per tick (s).
    pub dt: i64,

    timer: i64, // elapsed simulated time (s)
    scales: CollisionScales,
}

impl Space {
    /// Create a space holding the canonical solar system.
    pub fn new() -> Self {
        Self::with_bodies(crate::simulation::scenario::solar_system())
    }

    /// Create a space from an arbitrary initial configuration.
    ///
    /// The configuration is kept aside so `reset()` can reload it.
    pub fn with_bodies(initial: Vec<Body>) -> Self {
        let mut space = Self {
            bodies: Vec::new(),
            initial,
            nb_planets: 0,
            nb_stars: 0,
            realistic_mode: false,
            collision_mode: false,
            dt: DEFAULT_DT,
            timer: 0,
            scales: CollisionScales::default(),
        };
        space.load_initial();
        space
    }

    /// Append the stored initial configuration to the (empty) collection.
    fn load_initial(&mut self) {
        let initial = self.initial.clone();
        for body in initial {
            self.add_body(body);
        }
    }

    /// Simulate one physics frame.
    ///
    /// For every body A (in insertion order): unless A is a star anchored by
    /// non-realistic mode, test collisions against and accumulate gravity
    /// from every other body, then integrate A's position. Integration runs
    /// per body, right after its gravity pass, so later bodies in the same
    /// tick see A already moved.
    ///
    /// Bodies removed by collisions are tombstoned during the pass and
    /// compacted out at the end of the tick, so the collection is never
    /// mutated while it is being traversed.
    pub fn tick(&mut self) {
        let n = self.bodies.len();
        let mut removed = vec![false; n];
        let dt = self.dt as f64;

        for i in 0..n {
            if removed[i] {
                continue;
            }
            // Anchored stars neither move nor initiate collisions, but they
            // still pull on everything else below.
            if !self.realistic_mode && self.bodies[i].star {
                continue;
            }

            for j in 0..n {
                if i == j || removed[j] {
                    continue;
                }

                if self.collision_mode
                    && self.bodies[i].collides_with(&self.bodies[j], &self.scales)
                {
                    self.resolve_collision(i, j, &mut removed);
                }

                if removed[i] {
                    // A was absorbed or annihilated; its remaining pass
                    // would only update state that gets discarded below.
                    break;
                }

                // Gravity is still accumulated when j was merged away in the
                // collision just resolved: j's state is intact until the
                // end-of-tick compaction, and the merge already happened.
                let (a, b) = pair_mut(&mut self.bodies, i, j);
                a.accumulate_gravity(b, dt);
            }

            if !removed[i] {
                self.bodies[i].integrate(dt);
            }
        }

        // Apply the deferred removals in one compaction
        if removed.iter().any(|&r| r) {
            let mut k = 0;
            self.bodies.retain(|_| {
                let keep = !removed[k];
                k += 1;
                keep
            });
        }

        self.timer += self.dt;
    }

    /// Resolve a detected collision between bodies `i` and `j`.
    ///
    /// The lighter body is absorbed by the heavier one (inelastic merge) and
    /// tombstoned. Equal masses annihilate both bodies with no survivor.
    fn resolve_collision(&mut self, i: usize, j: usize, removed: &mut [bool]) {
        if i == j || removed[i] || removed[j] {
            return;
        }

        let (mi, mj) = (self.bodies[i].mass, self.bodies[j].mass);
        if mi < mj {
            let (heavy, light) = pair_mut(&mut self.bodies, j, i);
            debug!("collision: {} absorbs {}", heavy.name, light.name);
            heavy.merge(light);
            self.mark_removed(i, removed);
        } else if mi > mj {
            let (heavy, light) = pair_mut(&mut self.bodies, i, j);
            debug!("collision: {} absorbs {}", heavy.name, light.name);
            heavy.merge(light);
            self.mark_removed(j, removed);
        } else {
            debug!(
                "collision: {} and {} annihilate",
                self.bodies[i].name, self.bodies[j].name
            );
            self.mark_removed(i, removed);
            self.mark_removed(j, removed);
        }
    }

    /// Tombstone a body and update the counters. Idempotent: marking an
    /// already-removed body changes nothing.
    fn mark_removed(&mut self, idx: usize, removed: &mut [bool]) {
        if removed[idx] {
            return;
        }
        removed[idx] = true;
        if self.bodies[idx].star {
            self.nb_stars -= 1;
        } else {
            self.nb_planets -= 1;
        }
    }

    /// Add a body to the simulation.
    pub fn add_body(&mut self, body: Body) {
        if body.star {
            self.nb_stars += 1;
        } else {
            self.nb_planets += 1;
        }
        self.bodies.push(body);
    }

    /// Remove a body by identity. No-op when no body carries that id.
    pub fn remove_body(&mut self, id: BodyId) {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == id) {
            if self.bodies[idx].star {
                self.nb_stars -= 1;
            } else {
                self.nb_planets -= 1;
            }
            self.bodies.remove(idx);
        }
    }

    /// Remove every body of the simulation. The elapsed time is untouched.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.nb_planets = 0;
        self.nb_stars = 0;
    }

    /// Reinit the simulation: empty the space, zero the elapsed time, and
    /// reload the initial configuration.
    pub fn reset(&mut self) {
        self.clear();
        self.timer = 0;
        self.load_initial();
    }

    /// Read view of the body collection, in insertion order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Number of non-star bodies.
    pub fn planet_count(&self) -> usize {
        self.nb_planets
    }

    /// Number of stars.
    pub fn star_count(&self) -> usize {
        self.nb_stars
    }

    /// Elapsed simulated time (s).
    pub fn timer(&self) -> i64 {
        self.timer
    }

    /// Change the display-driven collision scales.
    pub fn set_collision_scales(&mut self, body_scale: f64, star_scale: f64, pos_scale: f64) {
        self.scales = CollisionScales {
            body_radius_scale: body_scale,
            star_radius_scale: star_scale,
            position_scale: pos_scale,
        };
    }

    /// Current collision scales.
    pub fn collision_scales(&self) -> CollisionScales {
        self.scales
    }

    /// Elapsed simulated time as a calendar date offset from year 1,
    /// formatted `dd-mm-yyyy hh:mm:ss` (24-hour clock).
    pub fn elapsed_date(&self) -> String {
        // 0001-01-01 00:00:00 is a valid proleptic Gregorian instant
        let epoch = NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("year-1 epoch is a valid date");
        let date = epoch + Duration::seconds(self.timer);
        date.format("%d-%m-%Y %H:%M:%S").to_string()
    }
}

impl Default for Space {
    fn default() -> Self {
        Self::new()
    }
}
