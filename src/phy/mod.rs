//! Ethernet PHY Drivers
//!
//! This module provides the generic PHY driver trait, the Clause 22
//! negotiation helpers every driver falls back on, and the Micrel KSZ90x1
//! family driver.
//!
//! # Architecture
//!
//! The PHY layer is independent of the MAC, communicating only through the
//! [`MdioBus`](crate::hal::MdioBus) trait. The host owns a [`PhyDevice`]
//! handle per probed PHY and passes it to the driver together with the bus:
//!
//! 1. [`ksz90x1::probe`] reads the identifier and binds a [`Ksz90x1`] driver
//! 2. [`PhyDriver::startup`] sets the boot-time link parameters and pad skew
//! 3. [`PhyDriver::config`] applies board skew from the hardware description,
//!    chip errata and the gigabit directive, then (re)starts negotiation
//!
//! # Supported PHY Chips
//!
//! - [`Ksz90x1::Ksz9021`]: Micrel KSZ9021 (legacy extended registers)
//! - [`Ksz90x1::Ksz9031`]: Micrel KSZ9031 (MMD extended registers)
//! - [`Ksz90x1::Ksz9131`]: Microchip KSZ9131 (MMD, RGMII DLL delays)
//!
//! Any other Clause 22 PHY can be driven by [`GenericPhy`].
//!
//! # Example
//!
//! ```ignore
//! use micrel_ksz90x1::phy::{ksz90x1, HwDescription, PhyConfig, PhyDriver, PhyInterface, Properties};
//!
//! static PHY_NODE: Properties<'static> = Properties::new(&[
//!     ("rxc-skew-ps", 1860),
//!     ("txc-skew-ps", 1860),
//! ]);
//!
//! let (drv, mut dev) = ksz90x1::probe(&mut mdio, 7, PhyInterface::Rgmii)?;
//! drv.startup(&mut mdio, &mut dev)?;
//!
//! let cfg = PhyConfig::new()
//!     .with_node(HwDescription::new().with_phy_node(&PHY_NODE))
//!     .with_disable_gigabit(true);
//! drv.config(&mut mdio, &mut dev, &cfg)?;
//! ```

pub mod config;
pub mod device;
pub mod ext;
pub mod features;
pub mod generic;
pub mod genphy;
pub mod ksz90x1;
pub mod skew;

pub use config::{ConfigNode, HwDescription, NodeSource, PhyConfig, Properties};
pub use device::{Duplex, PhyDevice, PhyInterface, Speed};
pub use features::Features;
pub use generic::{DeviceId, DriverInfo, GenericPhy, PhyDriver};
pub use ksz90x1::{DllDelay, Ksz90x1};
pub use skew::{FieldGroup, SkewField, SkewRegister, SkewValue};

// Re-export IEEE 802.3 standard register definitions
pub use crate::internal::phy_regs::standard::{anar, bmcr, bmsr, ctrl1000, phy_reg};
