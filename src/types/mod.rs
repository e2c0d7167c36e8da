//! Presenter Types
//!
//! Core type definitions shared by the presenter, the bearer contract and
//! session retrieval.

pub mod action;
pub mod config;
pub mod credentials;
pub mod display;
pub mod token;

pub use action::*;
pub use config::*;
pub use credentials::*;
pub use display::*;
pub use token::*;
