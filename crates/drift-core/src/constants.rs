// Simulation, timing and output tuning constants shared by the engine and hosts.

// Pool sizing
pub const POOL_CAPACITY: usize = 12; // hard upper bound on live particles

// Screen-space layout (abstract grid; hosts scale to their display)
pub const SCREEN_MIN_X: f32 = 0.0;
pub const SCREEN_MAX_X: f32 = 255.0;
pub const GROUND_LEVEL: f32 = 64.0; // y at or beyond this ends a particle's life

// Particle generation
pub const SPAWN_CHANCE: f32 = 0.2; // per-tick probability of a spawn attempt
pub const PARTICLE_MIN_SIZE: u8 = 2;
pub const PARTICLE_MAX_SIZE: u8 = 5;
pub const SWAY_RATE_MIN: f32 = 0.1; // radians per second
pub const SWAY_RATE_MAX: f32 = 0.3;
pub const WALL_DEFLECTION: f32 = std::f32::consts::FRAC_PI_4; // sway kick on wall contact

// Timing (seconds)
pub const TRIGGER_DURATION: f32 = 0.05;
pub const COLLISION_COOLDOWN: f64 = 3.0;

// Output levels (volts)
pub const TRIGGER_HIGH: f32 = 5.0;
pub const TRIGGER_LOW: f32 = 0.0;
pub const COLLISION_CV_MIN: f32 = -5.0;
pub const COLLISION_CV_MAX: f32 = 5.0;
pub const COLLISION_CV_STEP: f32 = 0.1; // collision CVs land on this grid
pub const SEMITONES_PER_OCTAVE: i32 = 12;
