//! MDIO (Management Data Input/Output) bus abstraction
//!
//! The PHY driver never talks to hardware directly: every register access
//! goes through an [`MdioBus`] supplied by the host (a MAC's SMI block, a
//! bit-banged GPIO pair, a bootloader's bus layer). Only Clause 22 frames
//! are needed; the KSZ90x1 extended spaces are reached through Clause 22
//! windows.

use crate::error::{ConfigError, ConfigResult, Result};

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Implementations block until the transaction completes. Failures are
/// reported as [`IoError`](crate::error::IoError) and are propagated by the
/// driver without retry.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }
}

/// Validate a Clause 22 address pair
///
/// Bus implementations can call this before starting a frame.
pub const fn check_address(phy_addr: u8, reg_addr: u8) -> ConfigResult<()> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(ConfigError::InvalidPhyAddress);
    }
    if reg_addr > MAX_REG_ADDR {
        return Err(ConfigError::InvalidRegister);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
