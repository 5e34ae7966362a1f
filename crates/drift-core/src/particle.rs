//! Particle records and their creation rules.
//!
//! Size-derived fields are computed once at construction and exposed only
//! through getters; the physics and collision passes may move a particle and
//! stamp its collision time, nothing else.

use crate::constants::*;
use crate::scale::ScaleId;
use glam::Vec2;
use rand::Rng;

/// One falling particle.
///
/// `radius`, `fall_rate`, `wind_sensitivity` and `scale_degree` are fixed at
/// construction and only readable afterwards; the physics step may touch
/// position, sway phase and collision time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub sway_phase: f32,
    pub sway_rate: f32,
    pub last_collision_time: f64,
    radius: u8,
    fall_rate: f32,
    wind_sensitivity: f32,
    scale_degree: i32,
}

impl Particle {
    /// Build a particle, deriving its fall rate and wind sensitivity from
    /// `radius` and the current `gravity` multiplier.
    ///
    /// A zero radius is bumped to 1 so the derived values stay finite.
    pub fn new(
        position: Vec2,
        radius: u8,
        gravity: f32,
        sway_phase: f32,
        sway_rate: f32,
        scale_degree: i32,
        last_collision_time: f64,
    ) -> Self {
        let radius = radius.max(1);
        Self {
            position,
            sway_phase,
            sway_rate,
            last_collision_time,
            radius,
            fall_rate: fall_rate_for(radius, gravity),
            wind_sensitivity: wind_sensitivity_for(radius),
            scale_degree,
        }
    }

    /// Randomised particle at the top of the screen, as produced by the spawn
    /// policy. The degree is drawn from the current scale's range and the
    /// particle is immediately eligible for a collision.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, gravity: f32, scale: ScaleId, now: f64) -> Self {
        let radius = rng.gen_range(PARTICLE_MIN_SIZE..=PARTICLE_MAX_SIZE);
        let x = rng.gen_range(SCREEN_MIN_X..=SCREEN_MAX_X);
        let sway_phase = rng.gen::<f32>() * std::f32::consts::TAU;
        let sway_rate = rng.gen_range(SWAY_RATE_MIN..=SWAY_RATE_MAX);
        let scale_degree = rng.gen_range(1..=scale.degree_count() as i32);
        Self::new(
            Vec2::new(x, 0.0),
            radius,
            gravity,
            sway_phase,
            sway_rate,
            scale_degree,
            now - COLLISION_COOLDOWN,
        )
    }

    pub fn radius(&self) -> u8 {
        self.radius
    }

    /// Screen units per second, before the global fall-speed multiplier.
    pub fn fall_rate(&self) -> f32 {
        self.fall_rate
    }

    pub fn wind_sensitivity(&self) -> f32 {
        self.wind_sensitivity
    }

    /// 1-based degree into whichever scale is active when the particle lands.
    pub fn scale_degree(&self) -> i32 {
        self.scale_degree
    }

    /// Whether the collision refractory period has elapsed at time `now`.
    pub fn cooled_down(&self, now: f64) -> bool {
        now - self.last_collision_time >= COLLISION_COOLDOWN - COOLDOWN_SLACK
    }

    pub fn is_grounded(&self) -> bool {
        self.position.y >= GROUND_LEVEL
    }

    /// Axis-aligned box overlap; each box spans `radius` from its position.
    pub fn overlaps(&self, other: &Particle) -> bool {
        let (a, b) = (self.position, other.position);
        let (ra, rb) = (self.radius as f32, other.radius as f32);
        a.x < b.x + rb && a.x + ra > b.x && a.y < b.y + rb && a.y + ra > b.y
    }
}

// `now - (now - cooldown)` can round to just under `cooldown`.
const COOLDOWN_SLACK: f64 = 1e-9;

// Bigger particles fall faster.
fn fall_rate_for(radius: u8, gravity: f32) -> f32 {
    (1.5 * radius as f32 + 3.0) / 10.0 * gravity
}

// Smaller particles drift more.
fn wind_sensitivity_for(radius: u8) -> f32 {
    0.7 + 0.3 / radius as f32
}
