//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and renderers.

pub mod action_service;
pub mod normalizer;
pub mod timeline_service;

pub use action_service::{Action, ActionService};
pub use normalizer::{format_date, normalize};
pub use timeline_service::TimelineService;
