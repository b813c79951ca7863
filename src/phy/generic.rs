//! Generic PHY Driver Trait
//!
//! This module defines the common interface for all Ethernet PHY drivers,
//! the identifier matching used to pick a driver for a probed PHY, and the
//! fallback [`GenericPhy`] that only knows the IEEE 802.3 Clause 22 registers.

use crate::error::{ConfigError, Result};
use crate::hal::mdio::MdioBus;

use super::config::PhyConfig;
use super::device::PhyDevice;
use super::features::Features;
use super::genphy;

// =============================================================================
// Driver Identification
// =============================================================================

/// PHY identifier with the bits that must match
///
/// The low bits of PHYIDR2 carry the silicon revision, so drivers match
/// under a mask instead of on the full identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId {
    /// Identifier value
    pub id: u32,
    /// Bits of the identifier that are compared
    pub mask: u32,
}

impl DeviceId {
    /// Create a new identifier/mask pair
    pub const fn new(id: u32, mask: u32) -> Self {
        Self { id, mask }
    }

    /// True if `phy_id` is this device under the mask
    pub const fn matches(&self, phy_id: u32) -> bool {
        (phy_id & self.mask) == (self.id & self.mask)
    }
}

/// Static registration record of a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverInfo {
    /// Human-readable driver name
    pub name: &'static str,
    /// Identifier the driver binds to
    pub id: DeviceId,
    /// Capabilities the driver starts a device with
    pub features: Features,
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Trait for Ethernet PHY drivers
///
/// The host sequencer probes a PHY, binds a driver by identifier, then calls
/// [`startup`](Self::startup) and [`config`](Self::config) with the device
/// handle it owns. The driver mutates the handle's capability sets and
/// negotiation state, never its identity.
///
/// # Extended Registers
///
/// Drivers for PHYs with a vendor extended register space override
/// [`supports_extended`](Self::supports_extended),
/// [`read_extended`](Self::read_extended) and
/// [`write_extended`](Self::write_extended). The defaults report
/// [`ConfigError::NotSupported`].
///
/// # Example Implementation
///
/// ```ignore
/// struct MyPhy;
///
/// impl PhyDriver for MyPhy {
///     fn info(&self) -> &'static DriverInfo { &MY_PHY_INFO }
///
///     fn config<M: MdioBus>(&self, mdio: &mut M, dev: &mut PhyDevice, _cfg: &PhyConfig<'_>) -> Result<()> {
///         genphy::config(mdio, dev)
///     }
///
///     fn startup<M: MdioBus>(&self, mdio: &mut M, dev: &mut PhyDevice) -> Result<()> {
///         genphy::startup(mdio, dev)
///     }
/// }
/// ```
pub trait PhyDriver {
    /// Registration record of this driver
    fn info(&self) -> &'static DriverInfo;

    /// Apply board configuration and set up negotiation
    fn config<M: MdioBus>(
        &self,
        mdio: &mut M,
        dev: &mut PhyDevice,
        cfg: &PhyConfig<'_>,
    ) -> Result<()>;

    /// Bring the link parameters of the handle up to date
    fn startup<M: MdioBus>(&self, mdio: &mut M, dev: &mut PhyDevice) -> Result<()>;

    /// Quiesce the PHY before handing over
    fn shutdown<M: MdioBus>(&self, mdio: &mut M, dev: &mut PhyDevice) -> Result<()> {
        genphy::shutdown(mdio, dev)
    }

    /// True if the extended register accessors are implemented
    fn supports_extended(&self) -> bool {
        false
    }

    /// Read a vendor extended register
    fn read_extended<M: MdioBus>(
        &self,
        _mdio: &mut M,
        _dev: &PhyDevice,
        _devad: u8,
        _reg: u16,
    ) -> Result<u16> {
        Err(ConfigError::NotSupported.into())
    }

    /// Write a vendor extended register
    fn write_extended<M: MdioBus>(
        &self,
        _mdio: &mut M,
        _dev: &PhyDevice,
        _devad: u8,
        _reg: u16,
        _value: u16,
    ) -> Result<()> {
        Err(ConfigError::NotSupported.into())
    }
}

// =============================================================================
// Generic Driver
// =============================================================================

/// Registration record of the generic driver; matches every identifier
pub static GENERIC_INFO: DriverInfo = DriverInfo {
    name: "Generic PHY",
    id: DeviceId::new(0, 0),
    features: Features::GBIT
        .union(Features::AUI)
        .union(Features::FIBRE)
        .union(Features::BNC),
};

/// Clause 22 only driver with no extended register access
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GenericPhy;

impl PhyDriver for GenericPhy {
    fn info(&self) -> &'static DriverInfo {
        &GENERIC_INFO
    }

    fn config<M: MdioBus>(
        &self,
        mdio: &mut M,
        dev: &mut PhyDevice,
        _cfg: &PhyConfig<'_>,
    ) -> Result<()> {
        genphy::config(mdio, dev)
    }

    fn startup<M: MdioBus>(&self, mdio: &mut M, dev: &mut PhyDevice) -> Result<()> {
        genphy::startup(mdio, dev)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
