//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`phy_regs`]: IEEE 802.3 and KSZ90x1 register definitions
//!
//! The standard register maps are re-exported from [`crate::phy`] for
//! board code that needs raw register access.

pub(crate) mod phy_regs;
