pub mod enneagram;
pub mod health;
pub mod journey;
pub mod modules;
