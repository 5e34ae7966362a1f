use crate::constants::{SCREEN_MAX_X, SCREEN_MIN_X, WALL_DEFLECTION};
use crate::particle::Particle;
use crate::pool::EntityPool;

/// Advance one particle by `dt` seconds.
///
/// Vertical motion is unbounded; the ground handler decides when a particle
/// is done. Horizontally the particle is held inside the screen and its sway
/// phase is kicked away from whichever wall it hit.
pub fn integrate_particle(p: &mut Particle, dt: f32, global_fall_speed: f32, wind: f32) {
    p.position.y += p.fall_rate() * global_fall_speed * dt;
    p.sway_phase += p.sway_rate * dt;
    p.position.x += p.sway_phase.sin() * wind * p.wind_sensitivity();

    if p.position.x < SCREEN_MIN_X {
        p.position.x = SCREEN_MIN_X;
        p.sway_phase += WALL_DEFLECTION;
    } else if p.position.x > SCREEN_MAX_X {
        p.position.x = SCREEN_MAX_X;
        p.sway_phase -= WALL_DEFLECTION;
    }
}

pub fn integrate<const N: usize>(
    pool: &mut EntityPool<Particle, N>,
    dt: f32,
    global_fall_speed: f32,
    wind: f32,
) {
    for (_, p) in pool.iter_mut() {
        integrate_particle(p, dt, global_fall_speed, wind);
    }
}
