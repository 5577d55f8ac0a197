pub mod aggregate;
pub mod config;
pub mod enneagram;
pub mod error;
pub mod gate;
pub mod io;
pub mod journey;
pub mod paths;
pub mod progress;
pub mod registry;
pub mod service;
pub mod store;
pub mod types;

pub use error::{LifecraftError, Result};
