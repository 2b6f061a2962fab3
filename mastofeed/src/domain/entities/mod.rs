//! Domain entities
//!
//! Pure domain models: what the origin sends us and what we render.

pub mod action;
pub mod renderable;
pub mod timeline;

pub use action::ActionKind;
pub use renderable::{ActionLinks, OutputFormat, RenderableItem};
pub use timeline::{Account, MediaAttachment, MediaKind, Post, TimelineEntry};
