use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest accepted todo text, in characters.
pub const MAX_TODO_CHARS: usize = 200;

/// One todo item as stored under `lifetool-todos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TodoRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_untagged(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Which todos the list currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagFilter {
    #[default]
    All,
    Untagged,
    Tag(String),
}

impl TagFilter {
    /// Parses the raw `lifetool-active-tag` value. Blank input means [`TagFilter::All`].
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "" | "all" => Self::All,
            "untagged" => Self::Untagged,
            tag => Self::Tag(tag.to_string()),
        }
    }

    pub fn as_raw(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Untagged => "untagged",
            Self::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, todo: &TodoRecord) -> bool {
        match self {
            Self::All => true,
            Self::Untagged => todo.is_untagged(),
            Self::Tag(tag) => todo.has_tag(tag),
        }
    }

    /// The tag new todos inherit when added without tags in this view.
    pub fn inherited_tag(&self) -> Option<&str> {
        match self {
            Self::Tag(tag) => Some(tag),
            Self::All | Self::Untagged => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeCounts {
    pub total: usize,
    pub completed: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo cannot be empty")]
    Empty,
    #[error("Todo cannot exceed 200 characters")]
    TooLong,
    #[error("This todo already exists in the selected scope")]
    Duplicate,
}

/// Trims tags, drops blank ones, and removes repeats while keeping first-seen order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}
