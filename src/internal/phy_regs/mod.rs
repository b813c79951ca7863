//! PHY Register Definitions
//!
//! Register definitions for PHY devices accessed via MDIO.
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 standard PHY registers (0-15)
//! - [`ksz90x1`] - KSZ9021/KSZ9031/KSZ9131 vendor registers and extended spaces

pub mod ksz90x1;
pub mod standard;
