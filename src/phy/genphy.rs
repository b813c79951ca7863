//! Generic Clause 22 PHY helpers
//!
//! The vendor-neutral negotiation routines every PHY driver falls back on:
//! feature discovery, advertisement programming, auto-negotiation restart,
//! forced mode and link parsing. They only touch IEEE 802.3 standard
//! registers and the capability/negotiation fields of [`PhyDevice`].
//!
//! None of these helpers wait for the link. Boot paths that must not stall
//! on an unplugged cable call them and move on.

use crate::error::Result;
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::standard::{
    anar, bmcr, bmsr, ctrl1000, estatus, phy_reg, stat1000,
};

use super::device::{Duplex, PhyDevice, Speed};
use super::features::Features;

/// Read the PHY identifier: `(PHYIDR1 << 16) | PHYIDR2`
pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
    let id1 = u32::from(mdio.read(phy_addr, phy_reg::PHYIDR1)?);
    let id2 = u32::from(mdio.read(phy_addr, phy_reg::PHYIDR2)?);
    Ok((id1 << 16) | id2)
}

/// Enable and restart auto-negotiation
pub fn restart_aneg<M: MdioBus>(mdio: &mut M, dev: &PhyDevice) -> Result<()> {
    let bmcr_val = mdio.read(dev.addr, phy_reg::BMCR)?;
    mdio.write(
        dev.addr,
        phy_reg::BMCR,
        (bmcr_val | bmcr::AN_ENABLE | bmcr::AN_RESTART) & !bmcr::ISOLATE,
    )
}

/// Program BMCR with the handle's forced speed and duplex
pub fn setup_forced<M: MdioBus>(mdio: &mut M, dev: &PhyDevice) -> Result<()> {
    let mut ctl = 0;

    match dev.speed {
        Speed::Mbps1000 => ctl |= bmcr::SPEED_1000,
        Speed::Mbps100 => ctl |= bmcr::SPEED_100,
        Speed::Mbps10 => {}
    }

    if dev.duplex == Duplex::Full {
        ctl |= bmcr::DUPLEX_FULL;
    }

    mdio.write(dev.addr, phy_reg::BMCR, ctl)
}

/// Write the advertisement registers from `advertising & supported`
///
/// Returns `true` if either register changed. CTRL1000 is only touched when
/// the handle supports a 1000BASE-T mode, and only its advertisement bits are
/// replaced; master/slave bits are preserved.
pub fn config_advert<M: MdioBus>(mdio: &mut M, dev: &PhyDevice) -> Result<bool> {
    let advertise = dev.advertising & dev.supported;
    let mut changed = false;

    let old = mdio.read(dev.addr, phy_reg::ANAR)?;
    let mut adv = old & !anar::ALL;
    for (feature, bit) in [
        (Features::T10_HALF, anar::T10_HD),
        (Features::T10_FULL, anar::T10_FD),
        (Features::T100_HALF, anar::TX_HD),
        (Features::T100_FULL, anar::TX_FD),
        (Features::PAUSE, anar::PAUSE),
        (Features::ASYM_PAUSE, anar::PAUSE_ASYM),
    ] {
        if advertise.contains(feature) {
            adv |= bit;
        }
    }
    if adv != old {
        mdio.write(dev.addr, phy_reg::ANAR, adv)?;
        changed = true;
    }

    if !dev.supported.intersects(Features::GIGABIT) {
        return Ok(changed);
    }

    let old = mdio.read(dev.addr, phy_reg::CTRL1000)?;
    let mut adv = old & !(ctrl1000::ADVERTISE_1000FULL | ctrl1000::ADVERTISE_1000HALF);
    if advertise.contains(Features::T1000_HALF) {
        adv |= ctrl1000::ADVERTISE_1000HALF;
    }
    if advertise.contains(Features::T1000_FULL) {
        adv |= ctrl1000::ADVERTISE_1000FULL;
    }
    if adv != old {
        mdio.write(dev.addr, phy_reg::CTRL1000, adv)?;
        changed = true;
    }

    Ok(changed)
}

/// Configure advertisement and restart auto-negotiation if needed
///
/// With auto-negotiation disabled on the handle the forced mode is written
/// instead. Negotiation is restarted when the advertisement changed, or when
/// BMCR shows negotiation disabled or the PHY isolated.
pub fn config_aneg<M: MdioBus>(mdio: &mut M, dev: &PhyDevice) -> Result<()> {
    if !dev.autoneg {
        return setup_forced(mdio, dev);
    }

    let mut changed = config_advert(mdio, dev)?;
    if !changed {
        let ctl = mdio.read(dev.addr, phy_reg::BMCR)?;
        changed = ctl & bmcr::AN_ENABLE == 0 || ctl & bmcr::ISOLATE != 0;
    }

    if changed {
        restart_aneg(mdio, dev)?;
    }
    Ok(())
}

/// Discover features from BMSR/ESTATUS, trim the handle, configure negotiation
pub fn config<M: MdioBus>(mdio: &mut M, dev: &mut PhyDevice) -> Result<()> {
    let mut features = Features::TP | Features::MII | Features::AUI | Features::FIBRE | Features::BNC;

    let bmsr_val = mdio.read(dev.addr, phy_reg::BMSR)?;
    for (bit, feature) in [
        (bmsr::AN_ABILITY, Features::AUTONEG),
        (bmsr::TX_FD_CAPABLE, Features::T100_FULL),
        (bmsr::TX_HD_CAPABLE, Features::T100_HALF),
        (bmsr::T10_FD_CAPABLE, Features::T10_FULL),
        (bmsr::T10_HD_CAPABLE, Features::T10_HALF),
    ] {
        if bmsr_val & bit != 0 {
            features.insert(feature);
        }
    }

    if bmsr_val & bmsr::ESTATUS != 0 {
        let estatus_val = mdio.read(dev.addr, phy_reg::ESTATUS)?;
        if estatus_val & estatus::T1000_FD != 0 {
            features.insert(Features::T1000_FULL);
        }
        if estatus_val & estatus::T1000_HD != 0 {
            features.insert(Features::T1000_HALF);
        }
    }

    dev.supported = dev.supported & features;
    dev.advertising = dev.advertising & features;

    config_aneg(mdio, dev)
}

/// Refresh the handle's link flag from BMSR
///
/// BMSR latches link failures, so the register is read twice.
pub fn update_link<M: MdioBus>(mdio: &mut M, dev: &mut PhyDevice) -> Result<bool> {
    mdio.read(dev.addr, phy_reg::BMSR)?;
    let bmsr_val = mdio.read(dev.addr, phy_reg::BMSR)?;
    dev.link = bmsr_val & bmsr::LINK_STATUS != 0;
    Ok(dev.link)
}

/// Resolve speed and duplex into the handle
///
/// With auto-negotiation the highest common mode from our advertisement and
/// the link partner's ability wins. Without it BMCR is decoded.
pub fn parse_link<M: MdioBus>(mdio: &mut M, dev: &mut PhyDevice) -> Result<()> {
    if !dev.autoneg {
        let bmcr_val = mdio.read(dev.addr, phy_reg::BMCR)?;
        dev.speed = if bmcr_val & bmcr::SPEED_1000 != 0 {
            Speed::Mbps1000
        } else if bmcr_val & bmcr::SPEED_100 != 0 {
            Speed::Mbps100
        } else {
            Speed::Mbps10
        };
        dev.duplex = if bmcr_val & bmcr::DUPLEX_FULL != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };
        return Ok(());
    }

    dev.speed = Speed::Mbps10;
    dev.duplex = Duplex::Half;

    if dev.supported.intersects(Features::GIGABIT) {
        let lp = mdio.read(dev.addr, phy_reg::STAT1000)?;
        let ours = mdio.read(dev.addr, phy_reg::CTRL1000)?;
        let common = lp & (ours << 2);
        if common & (stat1000::LP_1000FULL | stat1000::LP_1000HALF) != 0 {
            dev.speed = Speed::Mbps1000;
            if common & stat1000::LP_1000FULL != 0 {
                dev.duplex = Duplex::Full;
            }
            return Ok(());
        }
    }

    let common = mdio.read(dev.addr, phy_reg::ANAR)? & mdio.read(dev.addr, phy_reg::ANLPAR)?;
    if common & (anar::TX_FD | anar::TX_HD) != 0 {
        dev.speed = Speed::Mbps100;
        if common & anar::TX_FD != 0 {
            dev.duplex = Duplex::Full;
        }
    } else if common & anar::T10_FD != 0 {
        dev.duplex = Duplex::Full;
    }

    Ok(())
}

/// Update link flag and resolved link parameters without waiting
pub fn startup<M: MdioBus>(mdio: &mut M, dev: &mut PhyDevice) -> Result<()> {
    update_link(mdio, dev)?;
    parse_link(mdio, dev)
}

/// Shutdown hook; the generic layer leaves the PHY running
pub fn shutdown<M: MdioBus>(_mdio: &mut M, _dev: &mut PhyDevice) -> Result<()> {
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
