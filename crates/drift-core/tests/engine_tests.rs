// Behavioural tests for the tick orchestrator and its invariants.

use drift_core::*;
use glam::Vec2;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn still_particle(x: f32, y: f32, radius: u8) -> Particle {
    // zero sway rate and phase: no horizontal drift
    Particle::new(Vec2::new(x, y), radius, 1.0, 0.0, 0.0, 1, -COLLISION_COOLDOWN)
}

fn busy_params() -> ParamSnapshot {
    ParamSnapshot {
        global_fall_speed: 25.0,
        gravity: 2.0,
        max_particles: POOL_CAPACITY,
        wind: 1.0,
        ..ParamSnapshot::default()
    }
}

#[test]
fn output_vector_shape_and_trigger_levels() {
    let mut engine = ParticleEngine::with_seed(7);
    let params = busy_params();
    let mut saw_ground = false;
    for _ in 0..20_000 {
        let out = engine.tick(FRAME, &params);
        assert_eq!(out.len(), 4);
        for trig in [out[OUT_GROUND_TRIGGER], out[OUT_COLLISION_TRIGGER]] {
            assert!(trig == 0.0 || trig == 5.0, "trigger level {trig} not 0 or 5");
        }
        saw_ground |= out[OUT_GROUND_TRIGGER] == 5.0;
    }
    assert!(saw_ground, "expected some particles to land");
}

#[test]
fn population_never_exceeds_max_or_capacity() {
    for seed in 0..8 {
        for max in [1, 3, 6, POOL_CAPACITY, 40] {
            let mut engine = ParticleEngine::with_seed(seed);
            let params = ParamSnapshot {
                max_particles: max,
                ..busy_params()
            };
            let limit = max.min(POOL_CAPACITY);
            for _ in 0..3_000 {
                engine.tick(FRAME, &params);
                assert!(
                    engine.active_count() <= limit,
                    "seed {seed}: {} live with max {max}",
                    engine.active_count()
                );
                assert_eq!(engine.active_count(), engine.particles().count());
            }
        }
    }
}

#[test]
fn particles_stay_on_screen_and_above_ground() {
    let mut engine = ParticleEngine::with_seed(11);
    let params = busy_params();
    for _ in 0..20_000 {
        engine.tick(FRAME, &params);
        for view in engine.particles() {
            assert!(
                (SCREEN_MIN_X..=SCREEN_MAX_X).contains(&view.position.x),
                "x={} escaped the screen",
                view.position.x
            );
            assert!(
                view.position.y < GROUND_LEVEL,
                "grounded particle in slot {} survived the tick",
                view.slot
            );
        }
    }
}

#[test]
fn immutable_particle_fields_never_change() {
    let mut engine = ParticleEngine::with_seed(3);
    let base = busy_params();
    let mut tracked: [Option<(u8, f32, f32, i32)>; POOL_CAPACITY] = [None; POOL_CAPACITY];
    for tick in 0..10_000 {
        // change the key and scale underneath live particles
        let params = ParamSnapshot {
            scale: ScaleId::from_index(tick / 500),
            gravity: 0.1 + (tick % 50) as f32 * 0.1,
            ..base
        };
        engine.tick(FRAME, &params);
        for ev in engine.events() {
            if let EngineEvent::Ground { slot, .. } = ev {
                tracked[*slot] = None;
            }
        }
        for (slot, p) in engine.pool().iter() {
            let now = (p.radius(), p.fall_rate(), p.wind_sensitivity(), p.scale_degree());
            match tracked[slot] {
                Some(before) => assert_eq!(before, now, "slot {slot} mutated at tick {tick}"),
                None => tracked[slot] = Some(now),
            }
        }
    }
}

#[test]
fn injected_particle_lands_in_one_tick() {
    let mut engine = ParticleEngine::with_seed(1);
    let params = ParamSnapshot {
        root_note: 0,
        octave: 2,
        scale: ScaleId::Minor,
        global_fall_speed: 1.0,
        gravity: 1.0,
        max_particles: 1,
        wind: 0.0,
    };
    let p = still_particle(128.0, GROUND_LEVEL - 0.01, 2);
    // fall_rate 0.6 * speed 1.0 * dt 1/30 s = 0.02
    assert!((p.fall_rate() - 0.6).abs() < 1e-6);
    let slot = engine.inject(p).unwrap();

    let out = engine.tick(Duration::from_secs_f64(1.0 / 30.0), &params);

    let landed: Vec<_> = engine
        .events()
        .iter()
        .filter_map(|ev| match ev {
            EngineEvent::Ground { slot, note, voltage } => Some((*slot, *note, *voltage)),
            _ => None,
        })
        .collect();
    assert_eq!(landed, vec![(slot, 24, 2.0)]);
    assert_eq!(
        engine.output_state().ground_trigger.remaining(),
        TRIGGER_DURATION
    );
    assert_eq!(out[OUT_GROUND_TRIGGER], 5.0);
    assert_eq!(out[OUT_GROUND_PITCH], 2.0);
}

#[test]
fn overlapping_pair_collides_once_then_respects_cooldown() {
    let mut engine = ParticleEngine::with_seed(99);
    let params = ParamSnapshot {
        global_fall_speed: 0.1,
        max_particles: 2,
        wind: 0.0,
        ..ParamSnapshot::default()
    };
    engine.inject(still_particle(100.0, 20.0, 3)).unwrap();
    engine.inject(still_particle(101.0, 21.0, 3)).unwrap();

    let first = engine.tick(Duration::from_millis(10), &params);
    let collisions: Vec<f32> = engine
        .events()
        .iter()
        .filter_map(|ev| match ev {
            EngineEvent::Collision { voltage, .. } => Some(*voltage),
            _ => None,
        })
        .collect();
    assert_eq!(collisions.len(), 1, "expected exactly one collision draw");
    let cv = collisions[0];
    assert!((-5.0..=5.0).contains(&cv));
    assert!(((cv * 10.0).round() - cv * 10.0).abs() < 1e-3, "{cv} not on 0.1 V grid");
    assert_eq!(first[OUT_COLLISION_CV], cv);
    assert_eq!(first[OUT_COLLISION_TRIGGER], 5.0);

    let second = engine.tick(Duration::from_millis(10), &params);
    assert!(engine.events().is_empty(), "cooldown should block a second draw");
    assert_eq!(second[OUT_COLLISION_CV], first[OUT_COLLISION_CV]);
    assert_eq!(second[OUT_COLLISION_TRIGGER], 5.0, "trigger still decaying");

    // trigger drops once its 50 ms have elapsed but the CV is held
    for _ in 0..10 {
        engine.tick(Duration::from_millis(10), &params);
    }
    let later = engine.outputs();
    assert_eq!(later[OUT_COLLISION_TRIGGER], 0.0);
    assert_eq!(later[OUT_COLLISION_CV], cv);
}

#[test]
fn collisions_respect_per_particle_refractory_period() {
    let mut engine = ParticleEngine::with_seed(5);
    let params = busy_params();
    let mut last_hit: [Option<f64>; POOL_CAPACITY] = [None; POOL_CAPACITY];
    let mut total = 0;
    for _ in 0..30_000 {
        engine.tick(FRAME, &params);
        let now = engine.simulation_time();
        for ev in engine.events() {
            match *ev {
                EngineEvent::Ground { slot, .. } => last_hit[slot] = None,
                EngineEvent::Collision { first, second, .. } => {
                    total += 1;
                    for slot in [first, second] {
                        if let Some(prev) = last_hit[slot] {
                            assert!(
                                now - prev >= COLLISION_COOLDOWN - 1e-9,
                                "slot {slot} retriggered after {:.3}s",
                                now - prev
                            );
                        }
                        last_hit[slot] = Some(now);
                    }
                }
            }
        }
    }
    assert!(total > 0, "expected at least one collision in a busy run");
}

#[test]
fn landed_particle_cannot_collide_in_same_tick() {
    let mut engine = ParticleEngine::with_seed(2);
    let params = ParamSnapshot {
        global_fall_speed: 1.0,
        max_particles: 2,
        wind: 0.0,
        ..ParamSnapshot::default()
    };
    // both cross the ground line this tick while overlapping
    engine.inject(still_particle(50.0, GROUND_LEVEL - 0.001, 3)).unwrap();
    engine.inject(still_particle(51.0, GROUND_LEVEL - 0.001, 3)).unwrap();
    let out = engine.tick(Duration::from_millis(20), &params);
    assert!(engine
        .events()
        .iter()
        .all(|ev| matches!(ev, EngineEvent::Ground { .. })));
    assert_eq!(engine.events().len(), 2);
    assert_eq!(out[OUT_COLLISION_TRIGGER], 0.0);
}

#[test]
fn full_pool_turns_spawn_and_inject_into_no_ops() {
    let mut engine = ParticleEngine::with_seed(8);
    for i in 0..POOL_CAPACITY {
        engine
            .inject(still_particle(i as f32 * 20.0, 0.0, 2))
            .unwrap();
    }
    let err = engine.inject(still_particle(0.0, 0.0, 2)).unwrap_err();
    assert_eq!(err.capacity, POOL_CAPACITY);

    let params = ParamSnapshot {
        global_fall_speed: 0.1,
        max_particles: POOL_CAPACITY,
        wind: 0.0,
        ..ParamSnapshot::default()
    };
    for _ in 0..100 {
        engine.tick(FRAME, &params);
        assert_eq!(engine.active_count(), POOL_CAPACITY);
    }
}

#[test]
fn reset_is_idempotent() {
    let mut engine = ParticleEngine::with_seed(21);
    let params = busy_params();
    for _ in 0..2_000 {
        engine.tick(FRAME, &params);
    }
    engine.reset();
    let pool_once = engine.pool().clone();
    let output_once = *engine.output_state();
    engine.reset();
    assert_eq!(engine.pool(), &pool_once);
    assert_eq!(engine.output_state(), &output_once);
    assert_eq!(engine.pool(), &ParticlePool::new());
    assert_eq!(engine.outputs(), [0.0; 4]);
    assert_eq!(engine.simulation_time(), 0.0);
    assert_eq!(engine.active_count(), 0);
    assert!(engine.events().is_empty());
}

#[test]
fn same_seed_reproduces_outputs() {
    let params = busy_params();
    let mut a = ParticleEngine::with_seed(1234);
    let mut b = ParticleEngine::with_seed(1234);
    for _ in 0..5_000 {
        assert_eq!(a.tick(FRAME, &params), b.tick(FRAME, &params));
    }
}

#[test]
fn malformed_params_are_clamped_not_fatal() {
    let mut engine = ParticleEngine::with_seed(4);
    let params = ParamSnapshot {
        root_note: 99,
        octave: -4,
        scale: ScaleId::Minor,
        global_fall_speed: f32::NAN,
        gravity: 1000.0,
        max_particles: 0,
        wind: f32::INFINITY,
    }
    .with_scale_index(77);
    let clean = params.sanitized();
    assert_eq!(clean.scale, ScaleId::Minor);
    assert_eq!(clean.root_note, 11);
    assert_eq!(clean.octave, 0);
    assert_eq!(clean.global_fall_speed, ParamSnapshot::default().global_fall_speed);
    assert_eq!(clean.gravity, 5.0);
    assert_eq!(clean.max_particles, 1);
    assert_eq!(clean.wind, ParamSnapshot::default().wind);

    for _ in 0..1_000 {
        let out = engine.tick(FRAME, &params);
        assert!(out.iter().all(|v| v.is_finite()));
        assert!(engine.active_count() <= 1);
    }
}

#[test]
fn trigger_pulses_fade_with_timers() {
    let mut engine = ParticleEngine::with_seed(6);
    let params = ParamSnapshot {
        global_fall_speed: 1.0,
        max_particles: 1,
        wind: 0.0,
        ..ParamSnapshot::default()
    };
    engine.inject(still_particle(10.0, GROUND_LEVEL - 0.001, 2)).unwrap();
    engine.tick(Duration::from_millis(10), &params);
    assert_eq!(engine.trigger_pulses()[0].amount, 1.0);
    engine.tick(Duration::from_millis(25), &params);
    let half = engine.trigger_pulses()[0].amount;
    assert!((half - 0.5).abs() < 1e-3, "pulse {half} should be half way");
}
