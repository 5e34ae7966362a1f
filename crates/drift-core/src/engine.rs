use crate::collision::detect_collisions;
use crate::constants::POOL_CAPACITY;
use crate::events::{EngineEvent, EventLog};
use crate::ground::{handle_ground, maybe_spawn};
use crate::output::{OutputState, Outputs};
use crate::params::ParamSnapshot;
use crate::particle::Particle;
use crate::physics::integrate;
use crate::pool::{EntityPool, PoolExhausted};
use crate::state::{ParticleView, TriggerPulse};
use rand::prelude::*;
use std::time::Duration;

pub type ParticlePool = EntityPool<Particle, POOL_CAPACITY>;

/// Falling-particle event engine producing pitch CVs and trigger pulses.
///
/// All state lives in the engine value; nothing is global, so independent
/// engines can run side by side. Each call to [`tick`](Self::tick):
/// - advances the simulation clock and decays both trigger timers
/// - moves every live particle (fall, sway, wall clamp)
/// - retires grounded particles, emitting a quantized pitch CV and trigger
/// - maybe spawns one new particle
/// - checks every live pair for an overlap outside the collision cooldown,
///   emitting a random CV and trigger
///
/// Ground handling runs before collision detection, so a particle that lands
/// in a tick cannot also collide in that tick.
///
/// Typical usage:
/// - Construct with `ParticleEngine::with_seed(seed)` (or `new()`)
/// - Call `tick(dt, &params)` once per control frame and forward the outputs
/// - Use `particles()` and `events()` to drive visuals or logging
pub struct ParticleEngine {
    pool: ParticlePool,
    output: OutputState,
    events: EventLog,
    simulation_time: f64,
    rng: StdRng,
}

impl Default for ParticleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleEngine {
    /// Engine seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Engine with a reproducible random stream.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            pool: ParticlePool::new(),
            output: OutputState::default(),
            events: EventLog::new(),
            simulation_time: 0.0,
            rng,
        }
    }

    /// Return to the initial state: every slot free, clock at zero, timers
    /// and CVs cleared. The random stream is left where it is.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.output = OutputState::default();
        self.events.clear();
        self.simulation_time = 0.0;
    }

    /// Reseed the random stream. If `seed` is None, a new random seed is chosen.
    pub fn reseed(&mut self, seed: Option<u64>) {
        let new_seed = seed.unwrap_or_else(|| self.rng.gen());
        self.rng = StdRng::seed_from_u64(new_seed);
    }

    /// Advance the simulation by `dt` and return this tick's outputs.
    pub fn tick(&mut self, dt: Duration, params: &ParamSnapshot) -> Outputs {
        let params = params.sanitized();
        let dt = dt.as_secs_f32();
        self.events.clear();

        self.simulation_time += dt as f64;
        self.output.decay(dt);

        integrate(&mut self.pool, dt, params.global_fall_speed, params.wind);
        handle_ground(&mut self.pool, &params, &mut self.output, &mut self.events);
        maybe_spawn(&mut self.pool, &mut self.rng, &params, self.simulation_time);
        detect_collisions(
            &mut self.pool,
            &mut self.rng,
            self.simulation_time,
            &mut self.output,
            &mut self.events,
        );

        self.output.outputs()
    }

    /// Place a caller-built particle in the first free slot.
    ///
    /// Bypasses the spawn gate and `max_particles`; only the pool capacity
    /// applies.
    pub fn inject(&mut self, particle: Particle) -> Result<usize, PoolExhausted> {
        self.pool.acquire(particle)
    }

    /// Outputs as of the last tick (or all zero after `reset`).
    pub fn outputs(&self) -> Outputs {
        self.output.outputs()
    }

    pub fn output_state(&self) -> &OutputState {
        &self.output
    }

    /// Events produced by the most recent tick.
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    pub fn simulation_time(&self) -> f64 {
        self.simulation_time
    }

    pub fn active_count(&self) -> usize {
        self.pool.len()
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn particle(&self, slot: usize) -> Option<&Particle> {
        self.pool.get(slot)
    }

    /// Live particles in slot order, for renderers.
    pub fn particles(&self) -> impl Iterator<Item = ParticleView> + '_ {
        self.pool.iter().map(|(slot, p)| ParticleView {
            slot,
            position: p.position,
            radius: p.radius(),
        })
    }

    /// Ground and collision trigger flashes for renderers.
    pub fn trigger_pulses(&self) -> [TriggerPulse; 2] {
        [
            TriggerPulse::from(&self.output.ground_trigger),
            TriggerPulse::from(&self.output.collision_trigger),
        ]
    }
}
