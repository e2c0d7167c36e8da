//! Session Retrieval
//!
//! Restoring a persisted bearer.
//!
//! This module provides:
//!
//! - **Storage**: persisted sessions keyed by name
//! - **Credential Provider**: authentication type to credentials mapping
//! - **Bearer Factory**: bearer construction, owned by the auth library adapter
//! - **Retrieval**: the found/miss lookup tying the three together

pub mod factory;
pub mod provider;
pub mod retrieval;
pub mod storage;

pub use factory::{BearerFactory, MockBearerFactory};
pub use provider::{AppCredentialProvider, CredentialProvider};
pub use retrieval::{MissReason, Retrieval, SavedSession};
pub use storage::{InMemoryTokenStorage, MockTokenStorage, StoredSession, TokenStorage};
