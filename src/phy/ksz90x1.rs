//! Micrel KSZ90x1 Gigabit PHY Driver
//!
//! Driver for the Micrel (now Microchip) KSZ9021, KSZ9031 and KSZ9131
//! RGMII Gigabit Ethernet transceivers, as used in bootloaders.
//!
//! # Family Differences
//!
//! | Chip | Extended access | Skew step | Extra config |
//! |------|-----------------|-----------|--------------|
//! | KSZ9021 | control/data pair (regs 11-13) | 120 ps | forced master for 1000BASE-T |
//! | KSZ9031 | MMD window (regs 13-14) | 60 ps | FLP burst centering |
//! | KSZ9131 | MMD window (regs 13-14) | n/a | RXC/TXC DLL delays |
//!
//! # Startup
//!
//! [`PhyDriver::startup`] does not wait for auto-negotiation. It reports
//! 100 Mbps full duplex, stops advertising 1000BASE-T and loads a fixed pad
//! skew, so a boot with no cable attached does not stall.
//!
//! # Example
//!
//! ```ignore
//! use micrel_ksz90x1::phy::{ksz90x1, PhyConfig, PhyDriver, PhyInterface};
//!
//! let (drv, mut dev) = ksz90x1::probe(&mut mdio, 0, PhyInterface::RgmiiId)?;
//!
//! drv.startup(&mut mdio, &mut dev)?;
//! drv.config(&mut mdio, &mut dev, &PhyConfig::new().with_node(node))?;
//! ```

use crate::error::{ConfigError, Error, Result};
use crate::hal::mdio::{MAX_PHY_ADDR, MdioBus, check_address};
use crate::internal::phy_regs::ksz90x1::{ksz9021, ksz9031, ksz9131, phy_id, startup};
use crate::internal::phy_regs::standard::{bmcr, ctrl1000, phy_reg};

use super::config::PhyConfig;
use super::device::{Duplex, PhyDevice, PhyInterface, Speed};
use super::ext::{self, MmdMode};
use super::features::Features;
use super::generic::{DeviceId, DriverInfo, PhyDriver};
use super::genphy;
use super::skew::{self, KSZ9021_SKEW, KSZ9031_SKEW};

// =============================================================================
// Registration
// =============================================================================

/// KSZ9021 registration record
pub static KSZ9021_INFO: DriverInfo = DriverInfo {
    name: "Micrel ksz9021",
    id: DeviceId::new(phy_id::KSZ9021, phy_id::KSZ9021_MASK),
    features: Features::GBIT,
};

/// KSZ9031 registration record
pub static KSZ9031_INFO: DriverInfo = DriverInfo {
    name: "Micrel ksz9031",
    id: DeviceId::new(phy_id::KSZ9031, phy_id::KSZ9X31_MASK),
    features: Features::GBIT,
};

/// KSZ9131 registration record
pub static KSZ9131_INFO: DriverInfo = DriverInfo {
    name: "Micrel ksz9131",
    id: DeviceId::new(phy_id::KSZ9131, phy_id::KSZ9X31_MASK),
    features: Features::GBIT,
};

/// Every driver in this module, in match order
pub static DRIVERS: [&DriverInfo; 3] = [&KSZ9021_INFO, &KSZ9031_INFO, &KSZ9131_INFO];

/// KSZ90x1 family member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ksz90x1 {
    /// KSZ9021
    Ksz9021,
    /// KSZ9031
    Ksz9031,
    /// KSZ9131
    Ksz9131,
}

impl Ksz90x1 {
    /// All family members, in the same order as [`DRIVERS`]
    pub const ALL: [Self; 3] = [Self::Ksz9021, Self::Ksz9031, Self::Ksz9131];

    /// Driver bound to a PHY identifier, if any
    pub fn from_phy_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|drv| drv.info().id.matches(id))
    }

    /// Skew registers configured from the hardware description
    pub fn skew_registers(self) -> &'static [skew::SkewRegister] {
        match self {
            Self::Ksz9021 => &KSZ9021_SKEW,
            Self::Ksz9031 => &KSZ9031_SKEW,
            Self::Ksz9131 => &[],
        }
    }
}

// =============================================================================
// Probe
// =============================================================================

/// Identify the PHY at `addr` and create its device handle
///
/// Fails with [`ConfigError::UnknownPhy`] if the identifier matches no
/// KSZ90x1 part.
pub fn probe<M: MdioBus>(
    mdio: &mut M,
    addr: u8,
    interface: PhyInterface,
) -> Result<(Ksz90x1, PhyDevice)> {
    check_address(addr, phy_reg::PHYIDR1)?;

    let id = genphy::read_phy_id(mdio, addr)?;
    let Some(drv) = Ksz90x1::from_phy_id(id) else {
        #[cfg(feature = "defmt")]
        defmt::debug!("PHY {}: id {:#x} is not a KSZ90x1", addr, id);
        return Err(ConfigError::UnknownPhy.into());
    };

    #[cfg(feature = "defmt")]
    defmt::info!("PHY {}: {} (id {:#x})", addr, drv.info().name, id);

    let dev = PhyDevice::new(addr, interface)
        .with_phy_id(id)
        .with_features(drv.info().features);
    Ok((drv, dev))
}

/// Probe every bus address and return the first KSZ90x1 found
pub fn scan_bus<M: MdioBus>(
    mdio: &mut M,
    interface: PhyInterface,
) -> Result<Option<(Ksz90x1, PhyDevice)>> {
    for addr in 0..=MAX_PHY_ADDR {
        match probe(mdio, addr, interface) {
            Ok(found) => return Ok(Some(found)),
            Err(Error::Config(ConfigError::UnknownPhy)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}

// =============================================================================
// KSZ9131 RGMII Delays
// =============================================================================

/// State of a KSZ9131 clock delay line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DllDelay {
    /// Internal clock delay active
    Enabled,
    /// Delay line bypassed
    Disabled,
}

impl DllDelay {
    /// Bypass-bit value for the DLL control register
    pub const fn bits(self) -> u16 {
        match self {
            Self::Enabled => ksz9131::DLL_ENABLE_DELAY,
            Self::Disabled => ksz9131::DLL_DISABLE_DELAY,
        }
    }
}

/// RX and TX clock delays for an interface mode; `None` if not RGMII
pub const fn rgmii_delays(interface: PhyInterface) -> Option<(DllDelay, DllDelay)> {
    match interface {
        PhyInterface::Rgmii => Some((DllDelay::Disabled, DllDelay::Disabled)),
        PhyInterface::RgmiiId => Some((DllDelay::Enabled, DllDelay::Enabled)),
        PhyInterface::RgmiiRxid => Some((DllDelay::Enabled, DllDelay::Disabled)),
        PhyInterface::RgmiiTxid => Some((DllDelay::Disabled, DllDelay::Enabled)),
        _ => None,
    }
}

// =============================================================================
// Driver
// =============================================================================

impl Ksz90x1 {
    /// Load the fixed boot-time pad skew
    fn write_startup_skew<M: MdioBus>(self, mdio: &mut M, dev: &PhyDevice) -> Result<()> {
        match self {
            Self::Ksz9021 => {
                ext::ksz9021_write(mdio, dev.addr, ksz9021::RGMII_RX_DATA_SKEW, startup::RX_DATA_SKEW)?;
                ext::ksz9021_write(mdio, dev.addr, ksz9021::RGMII_TX_DATA_SKEW, startup::TX_DATA_SKEW)?;
                ext::ksz9021_write(mdio, dev.addr, ksz9021::RGMII_CLOCK_SKEW, startup::CLOCK_SKEW)
            }
            Self::Ksz9031 | Self::Ksz9131 => {
                for (reg, value) in [
                    (ksz9031::RGMII_RX_DATA_SKEW, startup::RX_DATA_SKEW),
                    (ksz9031::RGMII_TX_DATA_SKEW, startup::TX_DATA_SKEW),
                    (ksz9031::RGMII_CLOCK_SKEW, startup::CLOCK_SKEW),
                ] {
                    ext::mmd_write(
                        mdio,
                        dev.addr,
                        ksz9031::SKEW_DEVAD,
                        reg,
                        MmdMode::DataNoPostIncrement,
                        value,
                    )?;
                }
                Ok(())
            }
        }
    }

    /// Center the fast link pulse burst timing (KSZ9031 errata)
    fn center_flp_timing<M: MdioBus>(self, mdio: &mut M, dev: &PhyDevice) -> Result<()> {
        self.write_extended(
            mdio,
            dev,
            ksz9031::FLP_DEVAD,
            ksz9031::FLP_BURST_TX_LO,
            ksz9031::FLP_BURST_TX_LO_CENTERED,
        )?;
        self.write_extended(
            mdio,
            dev,
            ksz9031::FLP_DEVAD,
            ksz9031::FLP_BURST_TX_HI,
            ksz9031::FLP_BURST_TX_HI_CENTERED,
        )
    }

    /// Program the KSZ9131 RXC/TXC delay lines for RGMII modes
    fn config_rgmii_delay<M: MdioBus>(self, mdio: &mut M, dev: &PhyDevice) -> Result<()> {
        let Some((rx, tx)) = rgmii_delays(dev.interface) else {
            return Ok(());
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("PHY {}: RXC DLL {}, TXC DLL {}", dev.addr, rx, tx);

        for (reg, delay) in [
            (ksz9131::RXC_DLL_CTRL, rx),
            (ksz9131::TXC_DLL_CTRL, tx),
        ] {
            let val = self.read_extended(mdio, dev, ksz9131::MMD_COMMON_CTRL, reg)?;
            let val = (val & !ksz9131::DLL_CTRL_BYPASS) | delay.bits();
            self.write_extended(mdio, dev, ksz9131::MMD_COMMON_CTRL, reg, val)?;
        }
        Ok(())
    }

    /// Drop 1000BASE-T and restart negotiation (KSZ9031/KSZ9131)
    fn disable_gigabit<M: MdioBus>(self, mdio: &mut M, dev: &mut PhyDevice) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("PHY {}: gigabit disabled", dev.addr);

        let features = self.info().features.without_gigabit();
        dev.advertising = features;
        dev.supported = features;

        let bmcr_val = mdio.read(dev.addr, phy_reg::BMCR)?;
        mdio.write(dev.addr, phy_reg::BMCR, bmcr_val & !bmcr::SPEED_1000)?;
        mdio.write(dev.addr, phy_reg::CTRL1000, 0)?;

        genphy::config_aneg(mdio, dev)?;
        genphy::restart_aneg(mdio, dev)
    }

    fn config_ksz9021<M: MdioBus>(
        self,
        mdio: &mut M,
        dev: &mut PhyDevice,
        cfg: &PhyConfig<'_>,
    ) -> Result<()> {
        skew::configure_all(self.skew_registers(), &self, mdio, dev, &cfg.node)?;

        let mut features = self.info().features;
        if cfg.disable_gigabit {
            #[cfg(feature = "defmt")]
            defmt::debug!("PHY {}: gigabit disabled", dev.addr);
            features = features.without_gigabit();
        }

        // The KSZ9021 must be forced master for 1000BASE-T (chip errata).
        let master = ctrl1000::PREFER_MASTER | ctrl1000::CONFIG_MASTER | ctrl1000::MANUAL_CONFIG;
        let mut ctrl = 0;
        if features.contains(Features::T1000_HALF) {
            ctrl |= ctrl1000::ADVERTISE_1000HALF | master;
        }
        if features.contains(Features::T1000_FULL) {
            ctrl |= ctrl1000::ADVERTISE_1000FULL | master;
        }

        dev.advertising = features;
        dev.supported = features;
        mdio.write(dev.addr, phy_reg::CTRL1000, ctrl)?;

        genphy::config_aneg(mdio, dev)?;
        genphy::restart_aneg(mdio, dev)
    }

    fn config_ksz9031<M: MdioBus>(
        self,
        mdio: &mut M,
        dev: &mut PhyDevice,
        cfg: &PhyConfig<'_>,
    ) -> Result<()> {
        skew::configure_all(self.skew_registers(), &self, mdio, dev, &cfg.node)?;
        self.center_flp_timing(mdio, dev)?;

        if cfg.disable_gigabit {
            return self.disable_gigabit(mdio, dev);
        }
        genphy::config(mdio, dev)
    }

    fn config_ksz9131<M: MdioBus>(
        self,
        mdio: &mut M,
        dev: &mut PhyDevice,
        cfg: &PhyConfig<'_>,
    ) -> Result<()> {
        if dev.interface.is_rgmii() {
            self.config_rgmii_delay(mdio, dev)?;
        }

        if cfg.disable_gigabit {
            return self.disable_gigabit(mdio, dev);
        }
        genphy::config(mdio, dev)
    }
}

impl PhyDriver for Ksz90x1 {
    fn info(&self) -> &'static DriverInfo {
        match self {
            Self::Ksz9021 => &KSZ9021_INFO,
            Self::Ksz9031 => &KSZ9031_INFO,
            Self::Ksz9131 => &KSZ9131_INFO,
        }
    }

    fn config<M: MdioBus>(
        &self,
        mdio: &mut M,
        dev: &mut PhyDevice,
        cfg: &PhyConfig<'_>,
    ) -> Result<()> {
        match self {
            Self::Ksz9021 => self.config_ksz9021(mdio, dev, cfg),
            Self::Ksz9031 => self.config_ksz9031(mdio, dev, cfg),
            Self::Ksz9131 => self.config_ksz9131(mdio, dev, cfg),
        }
    }

    fn startup<M: MdioBus>(&self, mdio: &mut M, dev: &mut PhyDevice) -> Result<()> {
        dev.speed = Speed::Mbps100;
        dev.duplex = Duplex::Full;

        mdio.write(dev.addr, phy_reg::CTRL1000, 0)?;
        self.write_startup_skew(mdio, dev)
    }

    fn supports_extended(&self) -> bool {
        true
    }

    fn read_extended<M: MdioBus>(
        &self,
        mdio: &mut M,
        dev: &PhyDevice,
        devad: u8,
        reg: u16,
    ) -> Result<u16> {
        match self {
            Self::Ksz9021 => ext::ksz9021_read(mdio, dev.addr, reg),
            Self::Ksz9031 | Self::Ksz9131 => {
                ext::mmd_read(mdio, dev.addr, devad, reg, MmdMode::DataNoPostIncrement)
            }
        }
    }

    fn write_extended<M: MdioBus>(
        &self,
        mdio: &mut M,
        dev: &PhyDevice,
        devad: u8,
        reg: u16,
        value: u16,
    ) -> Result<()> {
        match self {
            Self::Ksz9021 => ext::ksz9021_write(mdio, dev.addr, reg, value),
            Self::Ksz9031 | Self::Ksz9131 => {
                ext::mmd_write(mdio, dev.addr, devad, reg, MmdMode::DataPostIncrementRw, value)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
