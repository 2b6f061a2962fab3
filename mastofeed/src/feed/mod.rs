//! Feed module
//!
//! Description fragments, link construction, and the RSS/HTML/debug renderers.
//! Whole documents are askama templates under `templates/`.

pub mod debug;
pub mod description;
pub mod html;
pub mod links;
pub mod rss;

pub use debug::render_debug;
pub use description::build_description;
pub use html::render_html;
pub use rss::{render_rss, Channel};
