//! PHY device handle
//!
//! [`PhyDevice`] is the state the host PHY layer keeps for one probed PHY.
//! The host creates it at probe time and owns it for as long as the MDIO bus
//! exists. Drivers read the address and interface mode from it and update
//! the capability sets and negotiation parameters in place.

use super::features::Features;

// =============================================================================
// Link Parameters
// =============================================================================

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    #[default]
    Mbps100,
    /// 1000 Mbps
    Mbps1000,
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// MAC-to-PHY interface mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterface {
    /// Media Independent Interface
    Mii,
    /// Reduced Media Independent Interface
    Rmii,
    /// Gigabit Media Independent Interface
    Gmii,
    /// RGMII, no internal delay in the PHY
    #[default]
    Rgmii,
    /// RGMII, PHY delays both RX and TX clocks
    RgmiiId,
    /// RGMII, PHY delays the RX clock only
    RgmiiRxid,
    /// RGMII, PHY delays the TX clock only
    RgmiiTxid,
    /// Serial Gigabit Media Independent Interface
    Sgmii,
}

impl PhyInterface {
    /// True for any of the four RGMII variants
    pub const fn is_rgmii(self) -> bool {
        matches!(
            self,
            Self::Rgmii | Self::RgmiiId | Self::RgmiiRxid | Self::RgmiiTxid
        )
    }
}

// =============================================================================
// PHY Device
// =============================================================================

/// Host-owned state of one probed PHY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyDevice {
    /// PHY address on the MDIO bus (0-31)
    pub addr: u8,
    /// PHY identifier read at probe time
    pub phy_id: u32,
    /// MAC-to-PHY interface mode
    pub interface: PhyInterface,
    /// Link modes the PHY supports
    pub supported: Features,
    /// Link modes the PHY advertises
    pub advertising: Features,
    /// Current or forced speed
    pub speed: Speed,
    /// Current or forced duplex
    pub duplex: Duplex,
    /// Auto-negotiation enabled
    pub autoneg: bool,
    /// Last known link state
    pub link: bool,
}

impl PhyDevice {
    /// Create a handle for a PHY at `addr`
    ///
    /// Capabilities start empty; drivers fill them in during `config`.
    pub const fn new(addr: u8, interface: PhyInterface) -> Self {
        Self {
            addr,
            phy_id: 0,
            interface,
            supported: Features::empty(),
            advertising: Features::empty(),
            speed: Speed::Mbps10,
            duplex: Duplex::Half,
            autoneg: true,
            link: false,
        }
    }

    /// Set the identifier read at probe time
    pub const fn with_phy_id(mut self, phy_id: u32) -> Self {
        self.phy_id = phy_id;
        self
    }

    /// Set both capability sets
    pub const fn with_features(mut self, features: Features) -> Self {
        self.supported = features;
        self.advertising = features;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgmii_variants() {
        assert!(PhyInterface::Rgmii.is_rgmii());
        assert!(PhyInterface::RgmiiId.is_rgmii());
        assert!(PhyInterface::RgmiiRxid.is_rgmii());
        assert!(PhyInterface::RgmiiTxid.is_rgmii());
        assert!(!PhyInterface::Rmii.is_rgmii());
        assert!(!PhyInterface::Gmii.is_rgmii());
        assert!(!PhyInterface::Sgmii.is_rgmii());
    }

    #[test]
    fn new_device_defaults() {
        let dev = PhyDevice::new(7, PhyInterface::RgmiiId);
        assert_eq!(dev.addr, 7);
        assert_eq!(dev.interface, PhyInterface::RgmiiId);
        assert!(dev.supported.is_empty());
        assert!(dev.autoneg);
        assert!(!dev.link);
    }

    #[test]
    fn builders_set_fields() {
        let dev = PhyDevice::new(1, PhyInterface::Rgmii)
            .with_phy_id(0x0022_1622)
            .with_features(Features::GBIT);
        assert_eq!(dev.phy_id, 0x0022_1622);
        assert_eq!(dev.supported, Features::GBIT);
        assert_eq!(dev.advertising, Features::GBIT);
    }
}
