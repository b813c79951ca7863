//! Extended register access
//!
//! The KSZ90x1 family keeps its pad skew and timing registers outside the
//! 32-register Clause 22 space. Two access schemes exist:
//!
//! - **KSZ9021**: a control/data register pair. The extended register number
//!   is written to register 11 (bit 15 set for a write), then the value goes
//!   through register 12 or comes back from register 13.
//! - **KSZ9031 / KSZ9131**: the IEEE MMD window in registers 13 and 14.
//!   Select the device address, latch the register number, switch the
//!   window to a data mode, then move the value.
//!
//! Each bus transaction is issued in order and the first failure aborts the
//! access.

use crate::error::Result;
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::ksz90x1::{ksz9021, mmd};

// =============================================================================
// KSZ9021 Control/Data Pair
// =============================================================================

/// Write a KSZ9021 extended register (two bus transactions)
pub fn ksz9021_write<M: MdioBus>(mdio: &mut M, phy_addr: u8, reg: u16, value: u16) -> Result<()> {
    mdio.write(phy_addr, ksz9021::EXTENDED_CTRL, reg | ksz9021::EXTENDED_WRITE)?;
    mdio.write(phy_addr, ksz9021::EXTENDED_DATAW, value)
}

/// Read a KSZ9021 extended register (two bus transactions)
pub fn ksz9021_read<M: MdioBus>(mdio: &mut M, phy_addr: u8, reg: u16) -> Result<u16> {
    mdio.write(phy_addr, ksz9021::EXTENDED_CTRL, reg)?;
    mdio.read(phy_addr, ksz9021::EXTENDED_DATAR)
}

// =============================================================================
// MMD Window
// =============================================================================

/// Function field of the MMD access control register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MmdMode {
    /// Data port carries the register address
    Address,
    /// Data access, address unchanged afterwards
    DataNoPostIncrement,
    /// Data access, address increments after reads and writes
    DataPostIncrementRw,
    /// Data access, address increments after writes only
    DataPostIncrementW,
}

impl MmdMode {
    /// Value of the function field (bits 15:14)
    pub const fn bits(self) -> u16 {
        match self {
            Self::Address => mmd::MODE_ADDRESS,
            Self::DataNoPostIncrement => mmd::MODE_DATA_NO_POST_INC,
            Self::DataPostIncrementRw => mmd::MODE_DATA_POST_INC_RW,
            Self::DataPostIncrementW => mmd::MODE_DATA_POST_INC_W,
        }
    }
}

/// Point the MMD window at `devad`/`reg` and switch it to `mode`
fn mmd_select<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    devad: u8,
    reg: u16,
    mode: MmdMode,
) -> Result<()> {
    let devad = u16::from(devad) & mmd::DEVAD_MASK;
    mdio.write(phy_addr, mmd::ACCESS_CTRL, devad)?;
    mdio.write(phy_addr, mmd::REG_DATA, reg)?;
    mdio.write(phy_addr, mmd::ACCESS_CTRL, mode.bits() | devad)
}

/// Write an MMD register (four bus transactions)
pub fn mmd_write<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    devad: u8,
    reg: u16,
    mode: MmdMode,
    value: u16,
) -> Result<()> {
    mmd_select(mdio, phy_addr, devad, reg, mode)?;
    mdio.write(phy_addr, mmd::REG_DATA, value)
}

/// Read an MMD register (four bus transactions)
pub fn mmd_read<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    devad: u8,
    reg: u16,
    mode: MmdMode,
) -> Result<u16> {
    mmd_select(mdio, phy_addr, devad, reg, mode)?;
    mdio.read(phy_addr, mmd::REG_DATA)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, IoError};
    use crate::test_utils::{ExtModel, MockMdioBus};

    #[test]
    fn ksz9021_write_sets_write_flag() {
        let mut mdio = MockMdioBus::new();
        ksz9021_write(&mut mdio, 1, 0x105, 0x1234).unwrap();

        assert_eq!(mdio.get_writes(), [(1, 0x0B, 0x8105), (1, 0x0C, 0x1234)]);
        assert_eq!(mdio.transactions(), 2);
    }

    #[test]
    fn ksz9021_read_selects_without_write_flag() {
        let mut mdio = MockMdioBus::new().with_model(ExtModel::Ksz9021);
        mdio.set_ext_register(1, 0, 0x104, 0x7777);

        assert_eq!(ksz9021_read(&mut mdio, 1, 0x104).unwrap(), 0x7777);
        assert_eq!(mdio.get_writes(), [(1, 0x0B, 0x0104)]);
        assert_eq!(mdio.transactions(), 2);
    }

    #[test]
    fn ksz9021_round_trip_through_model() {
        let mut mdio = MockMdioBus::new().with_model(ExtModel::Ksz9021);
        ksz9021_write(&mut mdio, 0, 0x106, 0xA5A5).unwrap();
        assert_eq!(mdio.get_ext_register(0, 0, 0x106), Some(0xA5A5));
        assert_eq!(ksz9021_read(&mut mdio, 0, 0x106).unwrap(), 0xA5A5);
    }

    #[test]
    fn mmd_write_sequence() {
        let mut mdio = MockMdioBus::new();
        mmd_write(&mut mdio, 3, 2, 0x08, MmdMode::DataNoPostIncrement, 0x03FF).unwrap();

        assert_eq!(
            mdio.get_writes(),
            [(3, 0x0D, 0x0002), (3, 0x0E, 0x0008), (3, 0x0D, 0x4002), (3, 0x0E, 0x03FF)]
        );
        assert_eq!(mdio.transactions(), 4);
    }

    #[test]
    fn mmd_read_sequence() {
        let mut mdio = MockMdioBus::new().with_model(ExtModel::Mmd);
        mdio.set_ext_register(0, 2, 76, 0x1077);

        let value = mmd_read(&mut mdio, 0, 2, 76, MmdMode::DataNoPostIncrement).unwrap();
        assert_eq!(value, 0x1077);
        assert_eq!(
            mdio.get_writes(),
            [(0, 0x0D, 0x0002), (0, 0x0E, 76), (0, 0x0D, 0x4002)]
        );
        assert_eq!(mdio.transactions(), 4);
    }

    #[test]
    fn mmd_devad_is_masked() {
        let mut mdio = MockMdioBus::new();
        mmd_write(&mut mdio, 0, 0x22, 1, MmdMode::DataPostIncrementRw, 0).unwrap();
        assert_eq!(mdio.get_writes()[0], (0, 0x0D, 0x0002));
        assert_eq!(mdio.get_writes()[2], (0, 0x0D, 0x8002));
    }

    #[test]
    fn mode_bits() {
        assert_eq!(MmdMode::Address.bits(), 0x0000);
        assert_eq!(MmdMode::DataNoPostIncrement.bits(), 0x4000);
        assert_eq!(MmdMode::DataPostIncrementRw.bits(), 0x8000);
        assert_eq!(MmdMode::DataPostIncrementW.bits(), 0xC000);
    }

    #[test]
    fn bus_failure_aborts_sequence() {
        let mut mdio = MockMdioBus::new().fail_after(1);

        let err = mmd_write(&mut mdio, 0, 2, 5, MmdMode::DataPostIncrementRw, 0).unwrap_err();
        assert_eq!(err, Error::Io(IoError::BusFault));
        // Only the first transaction reached the bus.
        assert_eq!(mdio.get_writes().len(), 1);
    }
}
