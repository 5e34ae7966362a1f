use crate::constants::{COLLISION_CV_MAX, COLLISION_CV_MIN, COLLISION_CV_STEP};
use crate::events::{EngineEvent, EventLog};
use crate::music::snap_to_step;
use crate::output::OutputState;
use crate::particle::Particle;
use crate::pool::EntityPool;
use rand::Rng;

/// Random collision CV on the 0.1 V grid.
pub fn random_collision_voltage<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let raw = rng.gen_range(COLLISION_CV_MIN..=COLLISION_CV_MAX);
    snap_to_step(raw, COLLISION_CV_STEP).clamp(COLLISION_CV_MIN, COLLISION_CV_MAX)
}

/// Check every unordered pair of live particles once.
///
/// A collision only fires when both particles are out of their own cooldown,
/// and it restarts the cooldown on both. The cooldown is per particle: a
/// particle that just collided with one neighbour is quiet towards all others
/// too.
pub fn detect_collisions<R: Rng + ?Sized, const N: usize>(
    pool: &mut EntityPool<Particle, N>,
    rng: &mut R,
    now: f64,
    output: &mut OutputState,
    events: &mut EventLog,
) {
    for i in 0..N {
        for j in (i + 1)..N {
            let Some((a, b)) = pool.pair_mut(i, j) else {
                continue;
            };
            if !a.overlaps(b) || !a.cooled_down(now) || !b.cooled_down(now) {
                continue;
            }
            a.last_collision_time = now;
            b.last_collision_time = now;
            let voltage = random_collision_voltage(rng);
            output.on_collision(voltage);
            log::debug!("[collision] slots={}/{} cv={:.1}V", i, j, voltage);
            events.push(EngineEvent::Collision {
                first: i,
                second: j,
                voltage,
            });
        }
    }
}
