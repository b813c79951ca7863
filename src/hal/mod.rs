//! Hardware Abstraction Layer
//!
//! The seams between the PHY driver and the board it runs on.
//!
//! # Modules
//!
//! - [`mdio`]: MDIO bus trait for PHY register access
//! - [`reset`]: Active-low PHY reset line
//!
//! # Delay Integration
//!
//! Types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod mdio;
pub mod reset;

// Re-export commonly used types
pub use mdio::MdioBus;
pub use reset::{ResetLine, ResetState};
