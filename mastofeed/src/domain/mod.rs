//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Timeline and rendering models
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
