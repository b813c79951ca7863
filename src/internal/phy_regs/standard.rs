//! IEEE 802.3 PHY Register Definitions
//!
//! This module contains the standard PHY register addresses and bit definitions
//! as specified in IEEE 802.3 Clause 22. These are internal implementation
//! details used by the generic negotiation helpers and the KSZ90x1 driver.
//!
//! # Standard Registers
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BMCR | Basic Mode Control |
//! | 1 | BMSR | Basic Mode Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 4 | ANAR | Auto-Negotiation Advertisement |
//! | 5 | ANLPAR | Link Partner Ability |
//! | 9 | CTRL1000 | 1000BASE-T Control |
//! | 10 | STAT1000 | 1000BASE-T Status |
//! | 13 | MMD_CTRL | MMD Access Control |
//! | 14 | MMD_DATA | MMD Access Address/Data |
//! | 15 | ESTATUS | Extended Status |

// Allow unused constants - these are complete register definitions for reference
#![allow(dead_code)]

// =============================================================================
// Standard PHY Register Addresses
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// Auto-Negotiation Advertisement Register
    pub const ANAR: u8 = 4;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u8 = 5;
    /// Auto-Negotiation Expansion Register
    pub const ANER: u8 = 6;
    /// 1000BASE-T Control Register
    pub const CTRL1000: u8 = 9;
    /// 1000BASE-T Status Register
    pub const STAT1000: u8 = 10;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 13;
    /// MMD Access Data Register
    pub const MMD_DATA: u8 = 14;
    /// Extended Status Register
    pub const ESTATUS: u8 = 15;
}

// =============================================================================
// BMCR - Basic Mode Control Register (Register 0)
// =============================================================================

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select LSB (100 Mbps if set and SPEED_1000 clear)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate PHY from the MAC interface
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation - self-clearing
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
    /// Speed select MSB (1000 Mbps if set)
    pub const SPEED_1000: u16 = 1 << 6;
}

// =============================================================================
// BMSR - Basic Mode Status Register (Register 1)
// =============================================================================

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// 100BASE-T4 capable
    pub const T4_CAPABLE: u16 = 1 << 15;
    /// 100BASE-TX full duplex capable
    pub const TX_FD_CAPABLE: u16 = 1 << 14;
    /// 100BASE-TX half duplex capable
    pub const TX_HD_CAPABLE: u16 = 1 << 13;
    /// 10BASE-T full duplex capable
    pub const T10_FD_CAPABLE: u16 = 1 << 12;
    /// 10BASE-T half duplex capable
    pub const T10_HD_CAPABLE: u16 = 1 << 11;
    /// Extended status register present
    pub const ESTATUS: u16 = 1 << 8;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Remote fault detected
    pub const REMOTE_FAULT: u16 = 1 << 4;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status (1 = link up, 0 = link down)
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Extended register capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

// =============================================================================
// ANAR - Auto-Negotiation Advertisement Register (Register 4)
// =============================================================================

/// ANAR (Auto-Negotiation Advertisement Register) bits
pub mod anar {
    /// Next page indication
    pub const NEXT_PAGE: u16 = 1 << 15;
    /// Remote fault
    pub const REMOTE_FAULT: u16 = 1 << 13;
    /// Asymmetric pause
    pub const PAUSE_ASYM: u16 = 1 << 11;
    /// Pause capable
    pub const PAUSE: u16 = 1 << 10;
    /// 100BASE-T4 advertised
    pub const T4: u16 = 1 << 9;
    /// 100BASE-TX full duplex advertised
    pub const TX_FD: u16 = 1 << 8;
    /// 100BASE-TX half duplex advertised
    pub const TX_HD: u16 = 1 << 7;
    /// 10BASE-T full duplex advertised
    pub const T10_FD: u16 = 1 << 6;
    /// 10BASE-T half duplex advertised
    pub const T10_HD: u16 = 1 << 5;
    /// All speed/duplex/pause bits touched by advertisement updates
    pub const ALL: u16 = PAUSE_ASYM | PAUSE | T4 | TX_FD | TX_HD | T10_FD | T10_HD;
    /// Selector field mask
    pub const SELECTOR: u16 = 0x001F;
    /// IEEE 802.3 selector value
    pub const SELECTOR_IEEE802_3: u16 = 0x0001;
}

// =============================================================================
// CTRL1000 - 1000BASE-T Control Register (Register 9)
// =============================================================================

/// CTRL1000 (1000BASE-T Control Register) bits
pub mod ctrl1000 {
    /// Master/slave manual configuration enable
    pub const MANUAL_CONFIG: u16 = 1 << 12;
    /// Configure as master (when manual configuration is enabled)
    pub const CONFIG_MASTER: u16 = 1 << 11;
    /// Prefer master during resolution
    pub const PREFER_MASTER: u16 = 1 << 10;
    /// Advertise 1000BASE-T full duplex
    pub const ADVERTISE_1000FULL: u16 = 1 << 9;
    /// Advertise 1000BASE-T half duplex
    pub const ADVERTISE_1000HALF: u16 = 1 << 8;
}

// =============================================================================
// STAT1000 - 1000BASE-T Status Register (Register 10)
// =============================================================================

/// STAT1000 (1000BASE-T Status Register) bits
pub mod stat1000 {
    /// Link partner advertises 1000BASE-T full duplex
    pub const LP_1000FULL: u16 = 1 << 11;
    /// Link partner advertises 1000BASE-T half duplex
    pub const LP_1000HALF: u16 = 1 << 10;
}

// =============================================================================
// ESTATUS - Extended Status Register (Register 15)
// =============================================================================

/// ESTATUS (Extended Status Register) bits
pub mod estatus {
    /// 1000BASE-X full duplex capable
    pub const X1000_FD: u16 = 1 << 15;
    /// 1000BASE-X half duplex capable
    pub const X1000_HD: u16 = 1 << 14;
    /// 1000BASE-T full duplex capable
    pub const T1000_FD: u16 = 1 << 13;
    /// 1000BASE-T half duplex capable
    pub const T1000_HD: u16 = 1 << 12;
}
