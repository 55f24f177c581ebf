//! Core data types for the wishes wall
//!
//! - `Wish`: one posted name + message + timestamp
//! - `WishDraft`: the two text fields of the submission form

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::age::RelativeAge;

/// Name shown when the author leaves the name field blank
pub const GUEST_NAME: &str = "Guest";

/// A single wish on the wall
///
/// Serialized as `{id, name, message, time}`, the layout of the persisted
/// record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wish {
    /// Opaque unique identifier (UUID v4)
    pub id: String,
    /// Display name, never empty
    #[serde(rename = "name")]
    pub author: String,
    /// Message body, never empty
    pub message: String,
    /// Creation time, Unix milliseconds
    #[serde(rename = "time")]
    pub created_at: i64,
}

impl Wish {
    /// Create a wish stamped with the current time
    ///
    /// Returns `None` when the message is empty after trimming.
    pub fn new(author: &str, message: &str) -> Option<Self> {
        Self::with_timestamp(author, message, Utc::now().timestamp_millis())
    }

    /// Create a wish with a specific creation time
    pub fn with_timestamp(author: &str, message: &str, created_at: i64) -> Option<Self> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        let author = match author.trim() {
            "" => GUEST_NAME,
            name => name,
        };

        Some(Self {
            id: Uuid::new_v4().to_string(),
            author: author.to_string(),
            message: message.to_string(),
            created_at,
        })
    }

    /// Age of this wish as seen at `now` (Unix ms)
    pub fn age_at(&self, now: i64) -> RelativeAge {
        RelativeAge::between(self.created_at, now)
    }
}

/// Contents of the submission form
///
/// The name survives a successful submission so several wishes can be posted
/// in a row; the message is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishDraft {
    pub name: String,
    pub message: String,
}

impl WishDraft {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Whether the message field holds anything but whitespace
    pub fn is_submittable(&self) -> bool {
        !self.message.trim().is_empty()
    }
}
