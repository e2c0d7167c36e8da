//! Action Types
//!
//! Token actions, menu entries and the derived session state.

use serde::{Deserialize, Serialize};

/// Side-effecting bearer operation run in the background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenAction {
    Renew,
    Revoke,
}

impl TokenAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Renew => "renew",
            Self::Revoke => "revoke",
        }
    }
}

impl std::fmt::Display for TokenAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menu entries of the token info screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    NavigateBack,
    Renew,
    Revoke,
}

/// Session state as seen by the presenter.
///
/// Derived from the held bearer on every read; the presenter never sets
/// `Revoked` itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    NoBearer,
    Active,
    Revoked,
}
