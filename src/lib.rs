pub mod app;
pub mod aura;
pub mod config;
pub mod library;
pub mod model;
pub mod palette;
pub mod patterns;
pub mod stats;
pub mod story;
