//! Interactions proxied to the origin instance

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Like,
    Boost,
    Reply,
}

impl ActionKind {
    /// Path segment under `/api/`
    pub fn slug(&self) -> &'static str {
        match self {
            ActionKind::Like => "like",
            ActionKind::Boost => "boost",
            ActionKind::Reply => "reply",
        }
    }

    /// Verb taking the post as its object, as in "failed to reply to post"
    pub fn verb(&self) -> &'static str {
        match self {
            ActionKind::Like => "like",
            ActionKind::Boost => "boost",
            ActionKind::Reply => "reply to",
        }
    }

    /// Reported back to the browser on success
    pub fn past_tense(&self) -> &'static str {
        match self {
            ActionKind::Like => "liked",
            ActionKind::Boost => "boosted",
            ActionKind::Reply => "replied",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
