use crate::constants::SPAWN_CHANCE;
use crate::events::{EngineEvent, EventLog};
use crate::music::{note_to_voltage, scale_note};
use crate::output::OutputState;
use crate::params::ParamSnapshot;
use crate::particle::Particle;
use crate::pool::EntityPool;
use rand::Rng;

/// Retire every particle at or below the ground line.
///
/// Each one sets the pitch CV from its scale degree under the current key
/// and re-arms the ground trigger, so when several land in one tick the
/// highest slot index wins the CV.
pub fn handle_ground<const N: usize>(
    pool: &mut EntityPool<Particle, N>,
    params: &ParamSnapshot,
    output: &mut OutputState,
    events: &mut EventLog,
) {
    for slot in 0..N {
        let Some(p) = pool.get(slot) else {
            continue;
        };
        if !p.is_grounded() {
            continue;
        }
        let note = scale_note(params.scale, p.scale_degree(), params.root_note, params.octave);
        let voltage = note_to_voltage(note);
        output.on_ground(voltage);
        pool.release(slot);
        log::debug!("[ground] slot={} note={} cv={:.3}V", slot, note, voltage);
        events.push(EngineEvent::Ground {
            slot,
            note,
            voltage,
        });
    }
}

/// Maybe add one particle, gated by population and a per-tick random draw.
///
/// Returns the slot used, if any. A full pool is not an error here; the
/// next tick simply tries again.
pub fn maybe_spawn<R: Rng + ?Sized, const N: usize>(
    pool: &mut EntityPool<Particle, N>,
    rng: &mut R,
    params: &ParamSnapshot,
    now: f64,
) -> Option<usize> {
    if pool.len() >= params.max_particles {
        return None;
    }
    if rng.gen::<f32>() <= 1.0 - SPAWN_CHANCE {
        return None;
    }
    let particle = Particle::spawn(rng, params.gravity, params.scale, now);
    match pool.acquire(particle) {
        Ok(slot) => {
            log::trace!(
                "[spawn] slot={} x={:.1} r={} degree={}",
                slot,
                particle.position.x,
                particle.radius(),
                particle.scale_degree()
            );
            Some(slot)
        }
        Err(e) => {
            log::trace!("[spawn] skipped: {e}");
            None
        }
    }
}
