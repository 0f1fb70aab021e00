//! Page outcome definitions for tracking crawl progress
//!
//! Every URL the coordinator claims ends in exactly one of these outcomes.
use serde::Serialize;
use std::fmt;
use url::Url;

/// Category of a failed fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FailureKind {
    /// Connection could not be established or was interrupted
    #[serde(rename = "network_failure")]
    Network,

    /// HTTP error status, or a URL the transport rejected
    #[serde(rename = "protocol_failure")]
    Protocol,

    /// Body could not be interpreted as text
    #[serde(rename = "decode_failure")]
    Decode,
}

impl FailureKind {
    /// Returns the label used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network_failure",
            Self::Protocol => "protocol_failure",
            Self::Decode => "decode_failure",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single fetch attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageOutcome {
    /// Page was fetched and its links were merged into the frontier
    Fetched {
        /// Number of distinct crawlable links on the page
        links_found: usize,
        /// Page title, if the document had one
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },

    /// Fetch failed; the URL stays visited and is never retried
    Failed {
        kind: FailureKind,
        reason: String,
    },
}

impl PageOutcome {
    /// Returns true if the page body was retrieved
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }

    /// Returns the failure category, if this attempt failed
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failed { kind, .. } => Some(*kind),
            Self::Fetched { .. } => None,
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetched { links_found, .. } => write!(f, "fetched ({links_found} links)"),
            Self::Failed { kind, reason } => write!(f, "failed: {kind}: {reason}"),
        }
    }
}

/// One fetch attempt made during a crawl
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    /// The URL that was fetched
    pub url: Url,

    /// Position in completion order, starting at 0
    pub order: usize,

    /// What happened
    #[serde(flatten)]
    pub outcome: PageOutcome,
}
