//! KSZ90x1 Vendor-Specific Register Definitions
//!
//! Register addresses and bit definitions for the Micrel/Microchip
//! KSZ9021, KSZ9031 and KSZ9131 Gigabit PHYs.
//!
//! # Module Organization
//!
//! - `phy_id`: PHY identifier constants
//! - `ksz9021`: Legacy extended register window and skew registers
//! - `mmd`: MMD access window used by KSZ9031/KSZ9131
//! - `ksz9031`: MMD skew and FLP timing registers
//! - `ksz9131`: RGMII DLL control registers
//!
//! # References
//!
//! - KSZ9021RL/RN Datasheet
//! - KSZ9031RNX Datasheet (DS00002117)
//! - KSZ9131RNX Datasheet (DS00002841)

#![allow(dead_code)]

// =============================================================================
// PHY Identifiers
// =============================================================================

/// PHY identifier constants
pub mod phy_id {
    /// KSZ9021 identifier (`PHYIDR1 << 16 | PHYIDR2`)
    pub const KSZ9021: u32 = 0x0022_1610;
    /// KSZ9021 match mask (bit 0 is the silicon revision LSB)
    pub const KSZ9021_MASK: u32 = 0x00FF_FFFE;
    /// KSZ9031 identifier
    pub const KSZ9031: u32 = 0x0022_1620;
    /// KSZ9131 identifier
    pub const KSZ9131: u32 = 0x0022_1640;
    /// KSZ9x31 match mask (ignores the 4-bit silicon revision)
    pub const KSZ9X31_MASK: u32 = 0x00FF_FFF0;
}

// =============================================================================
// KSZ9021 Legacy Extended Registers
// =============================================================================

/// KSZ9021 extended register window and registers behind it
pub mod ksz9021 {
    /// Extended Control Register (selects the extended register)
    pub const EXTENDED_CTRL: u8 = 0x0B;
    /// Extended Data Write Register
    pub const EXTENDED_DATAW: u8 = 0x0C;
    /// Extended Data Read Register
    pub const EXTENDED_DATAR: u8 = 0x0D;
    /// Write flag OR-ed into the extended register number
    pub const EXTENDED_WRITE: u16 = 1 << 15;

    /// RGMII clock and control pad skew
    pub const RGMII_CLOCK_SKEW: u16 = 0x104;
    /// RGMII RX data pad skew
    pub const RGMII_RX_DATA_SKEW: u16 = 0x105;
    /// RGMII TX data pad skew
    pub const RGMII_TX_DATA_SKEW: u16 = 0x106;

    /// Picoseconds per skew register step
    pub const PS_PER_STEP: u32 = 120;
}

// =============================================================================
// MMD Access Window (KSZ9031 / KSZ9131)
// =============================================================================

/// MMD indirect access window bits
pub mod mmd {
    /// MMD Access Control Register
    pub const ACCESS_CTRL: u8 = 0x0D;
    /// MMD Access Register/Data Register
    pub const REG_DATA: u8 = 0x0E;

    /// Function field: register address
    pub const MODE_ADDRESS: u16 = 0x0000;
    /// Function field: data, no post increment
    pub const MODE_DATA_NO_POST_INC: u16 = 0x4000;
    /// Function field: data, post increment on reads and writes
    pub const MODE_DATA_POST_INC_RW: u16 = 0x8000;
    /// Function field: data, post increment on writes only
    pub const MODE_DATA_POST_INC_W: u16 = 0xC000;
    /// Function field mask
    pub const MODE_MASK: u16 = 0xC000;
    /// Device address field mask
    pub const DEVAD_MASK: u16 = 0x001F;
}

// =============================================================================
// KSZ9031 MMD Registers
// =============================================================================

/// KSZ9031 MMD registers
pub mod ksz9031 {
    /// MMD device address holding the RGMII pad skew registers
    pub const SKEW_DEVAD: u8 = 0x02;
    /// RGMII control signal pad skew
    pub const RGMII_CTRL_SIG_SKEW: u16 = 0x04;
    /// RGMII RX data pad skew
    pub const RGMII_RX_DATA_SKEW: u16 = 0x05;
    /// RGMII TX data pad skew
    pub const RGMII_TX_DATA_SKEW: u16 = 0x06;
    /// RGMII clock pad skew
    pub const RGMII_CLOCK_SKEW: u16 = 0x08;

    /// MMD device address holding the FLP burst timing registers
    pub const FLP_DEVAD: u8 = 0x00;
    /// FLP burst transmit timing, low word
    pub const FLP_BURST_TX_LO: u16 = 0x03;
    /// FLP burst transmit timing, high word
    pub const FLP_BURST_TX_HI: u16 = 0x04;
    /// Centered FLP burst timing, low word (16 ms)
    pub const FLP_BURST_TX_LO_CENTERED: u16 = 0x1A80;
    /// Centered FLP burst timing, high word
    pub const FLP_BURST_TX_HI_CENTERED: u16 = 0x0006;

    /// Picoseconds per skew register step
    pub const PS_PER_STEP: u32 = 60;
}

// =============================================================================
// KSZ9131 MMD Registers
// =============================================================================

/// KSZ9131 RGMII DLL control registers
pub mod ksz9131 {
    /// MMD device address of the common control block
    pub const MMD_COMMON_CTRL: u8 = 2;
    /// RXC DLL control register
    pub const RXC_DLL_CTRL: u16 = 76;
    /// TXC DLL control register
    pub const TXC_DLL_CTRL: u16 = 77;
    /// DLL bypass bit
    pub const DLL_CTRL_BYPASS: u16 = 1 << 12;
    /// Value OR-ed in to enable the internal delay
    pub const DLL_ENABLE_DELAY: u16 = 0;
    /// Value OR-ed in to disable the internal delay
    pub const DLL_DISABLE_DELAY: u16 = 1 << 12;
}

// =============================================================================
// Startup Skew Values
// =============================================================================

/// Fixed pad skew values written by the fast-boot startup path
pub mod startup {
    /// RX data pad skew
    pub const RX_DATA_SKEW: u16 = 0x0000;
    /// TX data pad skew
    pub const TX_DATA_SKEW: u16 = 0x0000;
    /// GTX and RX clock pad skew
    pub const CLOCK_SKEW: u16 = 0x03FF;
}
