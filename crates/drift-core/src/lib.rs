pub mod collision;
pub mod constants;
pub mod engine;
pub mod events;
pub mod ground;
pub mod music;
pub mod output;
pub mod params;
pub mod particle;
pub mod physics;
pub mod pool;
pub mod scale;
pub mod state;

pub use constants::*;
pub use engine::*;
pub use events::*;
pub use music::*;
pub use output::*;
pub use params::*;
pub use particle::*;
pub use pool::*;
pub use scale::*;
pub use state::*;
