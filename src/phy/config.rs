//! Board configuration for PHY bring-up
//!
//! Two inputs steer the driver besides the registers themselves:
//!
//! - a hardware description node with per-board skew properties
//!   (`rxd0-skew-ps`, `txc-skew-ps`, ...), read through [`ConfigNode`]
//! - host directives such as "disable gigabit", resolved once by the host
//!   and passed in [`PhyConfig`]
//!
//! # Node Resolution
//!
//! [`HwDescription`] mirrors how a board describes the PHY. The first node
//! present wins, and every key is read from that node only:
//!
//! 1. the PHY's own node
//! 2. the `ethernet-phy` subnode of the Ethernet MAC node
//! 3. the Ethernet MAC node itself
//!
//! With no node at all every lookup reports "unset" and the driver keeps
//! the hardware defaults.
//!
//! # Example
//!
//! ```ignore
//! static PHY_NODE: Properties<'static> = Properties::new(&[
//!     ("rxc-skew-ps", 1860),
//!     ("txc-skew-ps", 1860),
//! ]);
//!
//! let cfg = PhyConfig::new()
//!     .with_node(HwDescription::new().with_phy_node(&PHY_NODE))
//!     .with_disable_gigabit(false);
//! ```

use core::fmt;

// =============================================================================
// Configuration Nodes
// =============================================================================

/// Source of `u32` properties keyed by name
pub trait ConfigNode {
    /// Read a property; `None` if the key is absent
    fn read_u32(&self, name: &str) -> Option<u32>;
}

/// Static property table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Properties<'a> {
    entries: &'a [(&'a str, u32)],
}

impl<'a> Properties<'a> {
    /// Wrap a `(name, value)` table
    pub const fn new(entries: &'a [(&'a str, u32)]) -> Self {
        Self { entries }
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigNode for Properties<'_> {
    fn read_u32(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|&(_, value)| value)
    }
}

// =============================================================================
// Hardware Description
// =============================================================================

/// Which node a [`HwDescription`] resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NodeSource {
    /// The PHY's own node
    Phy,
    /// `ethernet-phy` subnode of the MAC node
    MacPhySubnode,
    /// The MAC node
    Mac,
    /// No node; all properties unset
    None,
}

/// Candidate hardware description nodes for one PHY
#[derive(Clone, Copy, Default)]
pub struct HwDescription<'a> {
    phy_node: Option<&'a dyn ConfigNode>,
    mac_phy_subnode: Option<&'a dyn ConfigNode>,
    mac_node: Option<&'a dyn ConfigNode>,
}

impl<'a> HwDescription<'a> {
    /// Description with no nodes
    pub const fn new() -> Self {
        Self {
            phy_node: None,
            mac_phy_subnode: None,
            mac_node: None,
        }
    }

    /// Set the PHY's own node
    pub const fn with_phy_node(mut self, node: &'a dyn ConfigNode) -> Self {
        self.phy_node = Some(node);
        self
    }

    /// Set the `ethernet-phy` subnode of the MAC node
    pub const fn with_mac_phy_subnode(mut self, node: &'a dyn ConfigNode) -> Self {
        self.mac_phy_subnode = Some(node);
        self
    }

    /// Set the MAC node
    pub const fn with_mac_node(mut self, node: &'a dyn ConfigNode) -> Self {
        self.mac_node = Some(node);
        self
    }

    /// Node that property lookups use
    pub fn resolve(&self) -> Option<&'a dyn ConfigNode> {
        self.phy_node.or(self.mac_phy_subnode).or(self.mac_node)
    }

    /// Which candidate [`resolve`](Self::resolve) picks
    pub fn source(&self) -> NodeSource {
        if self.phy_node.is_some() {
            NodeSource::Phy
        } else if self.mac_phy_subnode.is_some() {
            NodeSource::MacPhySubnode
        } else if self.mac_node.is_some() {
            NodeSource::Mac
        } else {
            NodeSource::None
        }
    }
}

impl ConfigNode for HwDescription<'_> {
    fn read_u32(&self, name: &str) -> Option<u32> {
        self.resolve().and_then(|node| node.read_u32(name))
    }
}

impl fmt::Debug for HwDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HwDescription")
            .field("source", &self.source())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HwDescription<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "HwDescription {{ source: {} }}", self.source());
    }
}

// =============================================================================
// Driver Configuration
// =============================================================================

/// Inputs to a driver's `config` entry point
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyConfig<'a> {
    /// Hardware description nodes for skew lookup
    pub node: HwDescription<'a>,
    /// Drop 1000BASE-T from the advertised and supported modes
    pub disable_gigabit: bool,
}

impl<'a> PhyConfig<'a> {
    /// Configuration with no node and gigabit enabled
    pub const fn new() -> Self {
        Self {
            node: HwDescription::new(),
            disable_gigabit: false,
        }
    }

    /// Set the hardware description nodes
    pub const fn with_node(mut self, node: HwDescription<'a>) -> Self {
        self.node = node;
        self
    }

    /// Set the gigabit-disable directive
    pub const fn with_disable_gigabit(mut self, disable: bool) -> Self {
        self.disable_gigabit = disable;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    static PHY: Properties<'static> = Properties::new(&[("rxc-skew-ps", 900)]);
    static SUBNODE: Properties<'static> = Properties::new(&[("txc-skew-ps", 480)]);
    static MAC: Properties<'static> = Properties::new(&[("rxc-skew-ps", 60), ("txc-skew-ps", 60)]);

    #[test]
    fn properties_lookup() {
        assert_eq!(PHY.read_u32("rxc-skew-ps"), Some(900));
        assert_eq!(PHY.read_u32("txc-skew-ps"), None);
        assert_eq!(PHY.len(), 1);
        assert!(Properties::new(&[]).is_empty());
    }

    #[test]
    fn phy_node_wins() {
        let hw = HwDescription::new()
            .with_mac_node(&MAC)
            .with_mac_phy_subnode(&SUBNODE)
            .with_phy_node(&PHY);
        assert_eq!(hw.source(), NodeSource::Phy);
        assert_eq!(hw.read_u32("rxc-skew-ps"), Some(900));
    }

    #[test]
    fn no_per_key_fallback() {
        // The PHY node has no txc-skew-ps; the MAC node's value must not leak in.
        let hw = HwDescription::new().with_phy_node(&PHY).with_mac_node(&MAC);
        assert_eq!(hw.read_u32("txc-skew-ps"), None);
    }

    #[test]
    fn subnode_before_mac_node() {
        let hw = HwDescription::new()
            .with_mac_node(&MAC)
            .with_mac_phy_subnode(&SUBNODE);
        assert_eq!(hw.source(), NodeSource::MacPhySubnode);
        assert_eq!(hw.read_u32("txc-skew-ps"), Some(480));
        assert_eq!(hw.read_u32("rxc-skew-ps"), None);
    }

    #[test]
    fn mac_node_last() {
        let hw = HwDescription::new().with_mac_node(&MAC);
        assert_eq!(hw.source(), NodeSource::Mac);
        assert_eq!(hw.read_u32("rxc-skew-ps"), Some(60));
    }

    #[test]
    fn empty_description_reads_unset() {
        let hw = HwDescription::new();
        assert_eq!(hw.source(), NodeSource::None);
        assert!(hw.resolve().is_none());
        assert_eq!(hw.read_u32("rxc-skew-ps"), None);
    }

    #[test]
    fn phy_config_builder() {
        let cfg = PhyConfig::new()
            .with_node(HwDescription::new().with_phy_node(&PHY))
            .with_disable_gigabit(true);
        assert!(cfg.disable_gigabit);
        assert_eq!(cfg.node.source(), NodeSource::Phy);
        assert!(!PhyConfig::default().disable_gigabit);
    }

    #[test]
    fn description_reports_source_when_formatted() {
        extern crate std;
        use std::format;

        let hw = HwDescription::new().with_mac_phy_subnode(&SUBNODE);
        assert_eq!(format!("{hw:?}"), "HwDescription { source: MacPhySubnode }");

        let cfg = PhyConfig::new().with_node(hw);
        assert!(format!("{cfg:?}").contains("source: MacPhySubnode"));
    }

    #[cfg(feature = "defmt")]
    #[test]
    fn config_types_are_defmt_format() {
        fn assert_format<T: defmt::Format>() {}

        assert_format::<HwDescription<'static>>();
        assert_format::<PhyConfig<'static>>();
        assert_format::<NodeSource>();
    }
}
