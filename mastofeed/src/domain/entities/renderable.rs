//! Renderable items
//!
//! Display-ready projection of a timeline entry, built fresh for every request.

use std::fmt;

/// Output format a fragment is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// RSS document; fragments are wrapped in CDATA
    Xml,
    /// HTML page; fragments are raw markup
    Html,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Xml => write!(f, "xml"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

/// Where each interaction affordance points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLinks {
    /// Relative proxy path, e.g. `/api/like/42`
    pub like: String,
    /// Relative proxy path, e.g. `/api/boost/42`
    pub boost: String,
    /// Search for the post on the home instance to reply from there
    pub reply: String,
    /// Share the post through the home instance's compose window
    pub external: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableItem {
    /// Format the description fragment was built for
    pub format: OutputFormat,
    pub title: String,
    pub link: String,
    pub description: String,
    pub published_at: String,
    pub avatar_url: String,
    /// Id of the post that carries the content (the boosted one for boosts)
    pub source_id: String,
    pub actions: ActionLinks,
}
