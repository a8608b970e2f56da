//! Editorial draft records and their approval pipeline.
//!
//! Drafts are authored outside this system; the core only consumes them as
//! opaque records and moves `status` forward through the review pipeline.
//! The content body is never interpreted here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review state of an editorial draft.
///
/// The pipeline is forward-only: Pending → Approved → Published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// Submitted, awaiting review.
    Pending,
    /// Reviewed and accepted, not yet live.
    Approved,
    /// Live on the site. Terminal.
    Published,
}

impl DraftStatus {
    /// Canonical lowercase form as stored in draft records.
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStatus::Pending => "pending",
            DraftStatus::Approved => "approved",
            DraftStatus::Published => "published",
        }
    }

    /// The next stage of the pipeline, or `None` once published.
    pub fn advance(&self) -> Option<DraftStatus> {
        match self {
            DraftStatus::Pending => Some(DraftStatus::Approved),
            DraftStatus::Approved => Some(DraftStatus::Published),
            DraftStatus::Published => None,
        }
    }
}

impl fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DraftStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(DraftStatus::Pending),
            "approved" => Ok(DraftStatus::Approved),
            "published" => Ok(DraftStatus::Published),
            _ => Err(format!("Unknown draft status: {s}")),
        }
    }
}

/// An editorial draft as delivered by the content backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub status: DraftStatus,
    pub summary: String,
    /// Opaque body; structure is the editor's concern.
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::DraftStatus;

    #[test]
    fn test_status_from_str() {
        assert_eq!("pending".parse::<DraftStatus>().unwrap(), DraftStatus::Pending);
        assert_eq!(" Approved ".parse::<DraftStatus>().unwrap(), DraftStatus::Approved);
        assert!("draft".parse::<DraftStatus>().is_err());
    }

    #[test]
    fn test_pipeline_is_forward_only() {
        assert_eq!(DraftStatus::Pending.advance(), Some(DraftStatus::Approved));
        assert_eq!(DraftStatus::Approved.advance(), Some(DraftStatus::Published));
        assert_eq!(DraftStatus::Published.advance(), None);
    }
}
