//! Core Components
//!
//! Clock and device id infrastructure.

pub mod clock;
pub mod device;

pub use clock::*;
pub use device::*;
