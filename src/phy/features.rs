//! Link capability bitset
//!
//! [`Features`] uses the classic ethtool `SUPPORTED_*` bit layout that host
//! PHY layers store in their `supported` and `advertising` words, so the
//! value can be handed across the boundary unchanged.

use bitflags::bitflags;

bitflags! {
    /// Set of link modes and port capabilities
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Features: u32 {
        /// 10BASE-T half duplex
        const T10_HALF = 1 << 0;
        /// 10BASE-T full duplex
        const T10_FULL = 1 << 1;
        /// 100BASE-TX half duplex
        const T100_HALF = 1 << 2;
        /// 100BASE-TX full duplex
        const T100_FULL = 1 << 3;
        /// 1000BASE-T half duplex
        const T1000_HALF = 1 << 4;
        /// 1000BASE-T full duplex
        const T1000_FULL = 1 << 5;
        /// Auto-negotiation
        const AUTONEG = 1 << 6;
        /// Twisted pair port
        const TP = 1 << 7;
        /// AUI port
        const AUI = 1 << 8;
        /// MII management interface
        const MII = 1 << 9;
        /// Fibre port
        const FIBRE = 1 << 10;
        /// BNC port
        const BNC = 1 << 11;
        /// Symmetric pause
        const PAUSE = 1 << 13;
        /// Asymmetric pause
        const ASYM_PAUSE = 1 << 14;

        /// Both 1000BASE-T modes
        const GIGABIT = Self::T1000_HALF.bits() | Self::T1000_FULL.bits();

        /// 10/100 PHY feature set
        const BASIC = Self::T10_HALF.bits()
            | Self::T10_FULL.bits()
            | Self::T100_HALF.bits()
            | Self::T100_FULL.bits()
            | Self::AUTONEG.bits()
            | Self::TP.bits()
            | Self::MII.bits();

        /// 10/100/1000 PHY feature set
        const GBIT = Self::BASIC.bits() | Self::GIGABIT.bits();
    }
}

impl Features {
    /// Copy of `self` without the 1000BASE-T modes
    pub const fn without_gigabit(self) -> Self {
        self.difference(Self::GIGABIT)
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Features {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Features({=u32:#x})", self.bits());
    }
}
