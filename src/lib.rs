//! Simulation core for a three-lane endless runner.
//!
//! The crate owns the deterministic per-frame simulation: the character
//! state machine, the scrolling entity pool, spawning and collision, and the
//! session controller that sequences them.  Rendering and input wiring are
//! external; they talk to the core through [`entities::Intent`] and
//! [`snapshot::RenderSnapshot`].

pub mod character;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod obstacles;
pub mod particles;
pub mod session;
pub mod snapshot;
pub mod spawner;

pub use config::GameConfig;
pub use error::ConfigError;
pub use session::{Session, TickReport};
