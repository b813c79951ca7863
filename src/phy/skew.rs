//! RGMII pad skew configuration
//!
//! The KSZ90x1 parts delay each RGMII pad by a programmable number of steps.
//! Several pads share one 16-bit extended register, each in its own bit
//! field. Boards describe the wanted delay in picoseconds per pad
//! (`rxd0-skew-ps`, `txc-skew-ps`, ...) and this module turns those values
//! into register words.
//!
//! # Encoding
//!
//! For every field of a [`SkewRegister`]:
//!
//! - property absent: the field's hardware default code
//! - property present: `ps / ps_per_step`, truncated, saturating at the
//!   largest code the field width can hold
//!
//! The codes are ORed at their offsets into one word. A register is only
//! written if at least one of its properties is present; otherwise the
//! hardware keeps whatever it holds.
//!
//! ```ignore
//! // rxd1-skew-ps = 1000 on a KSZ9021 (120 ps/step)
//! //   1000 / 120 = 8 -> bits 7:4 = 0x8, other pads keep 0x7
//! let skew = KSZ9021_SKEW[0].compute(&node);
//! assert_eq!(skew.value, 0x7787);
//! ```

use crate::error::{ConfigError, ConfigResult, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::ksz90x1::{ksz9021, ksz9031};

use super::config::ConfigNode;
use super::device::PhyDevice;
use super::generic::PhyDriver;

/// Maximum number of fields sharing one skew register
pub const MAX_GROUP_FIELDS: usize = 4;

// =============================================================================
// Fields
// =============================================================================

/// One pad's bit field inside a skew register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SkewField {
    /// Configuration property holding the delay in picoseconds
    pub name: &'static str,
    /// Width in bits (1-16)
    pub size: u8,
    /// Bit position of the least significant bit (0-15)
    pub offset: u8,
    /// Code used when the property is absent
    pub default: u16,
}

impl SkewField {
    /// Create a new field description
    pub const fn new(name: &'static str, size: u8, offset: u8, default: u16) -> Self {
        Self {
            name,
            size,
            offset,
            default,
        }
    }

    /// Largest code the field can hold
    pub const fn max_code(&self) -> u16 {
        match 1u32.checked_shl(self.size as u32) {
            Some(v) if v <= 0x1_0000 => (v - 1) as u16,
            _ => u16::MAX,
        }
    }

    /// Field bits in register position
    pub const fn mask(&self) -> u16 {
        match (self.max_code() as u32).checked_shl(self.offset as u32) {
            Some(v) => v as u16,
            None => 0,
        }
    }

    /// Code for a delay of `ps` picoseconds
    ///
    /// Truncating division, saturating at [`max_code`](Self::max_code). A
    /// zero step saturates as well.
    pub const fn code_for_ps(&self, ps: u32, ps_per_step: u32) -> u16 {
        let max = self.max_code() as u32;
        match ps.checked_div(ps_per_step) {
            Some(code) if code <= max => code as u16,
            _ => max as u16,
        }
    }
}

/// Validated set of fields sharing one register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldGroup {
    fields: &'static [SkewField],
}

impl FieldGroup {
    /// Check a field table
    ///
    /// Valid tables have 1 to [`MAX_GROUP_FIELDS`] fields, each 1-16 bits
    /// wide and inside the 16-bit register, no two fields overlapping and
    /// every default within its width.
    pub const fn validate(fields: &[SkewField]) -> bool {
        if fields.is_empty() || fields.len() > MAX_GROUP_FIELDS {
            return false;
        }

        let mut used: u16 = 0;
        let mut i = 0;
        while i < fields.len() {
            let field = &fields[i];
            if field.size == 0 || field.size as u32 + field.offset as u32 > 16 {
                return false;
            }
            if field.default > field.max_code() {
                return false;
            }
            let mask = field.mask();
            if used & mask != 0 {
                return false;
            }
            used |= mask;
            i += 1;
        }
        true
    }

    /// Build a group from a static table
    ///
    /// # Panics
    ///
    /// Panics if the table fails [`validate`](Self::validate). In a `const`
    /// or `static` initializer this is a compile error.
    pub const fn new(fields: &'static [SkewField]) -> Self {
        assert!(Self::validate(fields), "invalid skew field group");
        Self { fields }
    }

    /// Build a group, reporting an invalid table as an error
    pub const fn try_new(fields: &'static [SkewField]) -> ConfigResult<Self> {
        if Self::validate(fields) {
            Ok(Self { fields })
        } else {
            Err(ConfigError::InvalidFieldGroup)
        }
    }

    /// Fields in table order
    pub const fn fields(&self) -> &'static [SkewField] {
        self.fields
    }

    /// Register word with every field at its default
    pub fn default_value(&self) -> u16 {
        self.fields
            .iter()
            .fold(0, |acc, f| acc | (f.default << f.offset))
    }
}

// =============================================================================
// Registers
// =============================================================================

/// Result of encoding a skew register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SkewValue {
    /// Encoded register word
    pub value: u16,
    /// True if at least one property was present
    pub changed: bool,
}

/// Extended register holding a group of skew fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SkewRegister {
    reg: u16,
    devad: u8,
    group: FieldGroup,
    ps_per_step: u32,
}

impl SkewRegister {
    /// Describe a skew register
    ///
    /// # Panics
    ///
    /// Panics if `ps_per_step` is zero.
    pub const fn new(reg: u16, devad: u8, group: FieldGroup, ps_per_step: u32) -> Self {
        assert!(ps_per_step > 0, "skew step must be non-zero");
        Self {
            reg,
            devad,
            group,
            ps_per_step,
        }
    }

    /// Extended register number
    pub const fn reg(&self) -> u16 {
        self.reg
    }

    /// MMD device address (0 for the KSZ9021 legacy space)
    pub const fn devad(&self) -> u8 {
        self.devad
    }

    /// Fields packed into the register
    pub const fn group(&self) -> FieldGroup {
        self.group
    }

    /// Delay represented by one code step
    pub const fn ps_per_step(&self) -> u32 {
        self.ps_per_step
    }

    /// Encode the register word from a configuration node
    pub fn compute<N: ConfigNode + ?Sized>(&self, node: &N) -> SkewValue {
        let mut value = 0;
        let mut changed = false;

        for field in self.group.fields() {
            let code = match node.read_u32(field.name) {
                Some(ps) => {
                    changed = true;
                    field.code_for_ps(ps, self.ps_per_step)
                }
                None => field.default,
            };
            value |= code << field.offset;
        }

        SkewValue { value, changed }
    }

    /// Encode and write the register if any of its properties is present
    ///
    /// Returns `true` if a write was issued. Fails with
    /// [`ConfigError::NotSupported`] before any bus traffic if the driver has
    /// no extended register access.
    pub fn configure<D, M, N>(
        &self,
        driver: &D,
        mdio: &mut M,
        dev: &PhyDevice,
        node: &N,
    ) -> Result<bool>
    where
        D: PhyDriver,
        M: MdioBus,
        N: ConfigNode + ?Sized,
    {
        if !driver.supports_extended() {
            return Err(ConfigError::NotSupported.into());
        }

        let skew = self.compute(node);
        if !skew.changed {
            return Ok(false);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "PHY {}: skew devad {} reg {:#x} = {:#x}",
            dev.addr,
            self.devad,
            self.reg,
            skew.value
        );

        driver.write_extended(mdio, dev, self.devad, self.reg, skew.value)?;
        Ok(true)
    }
}

/// Configure a list of skew registers in order
///
/// Stops at the first failure. Returns the number of registers written.
pub fn configure_all<D, M, N>(
    regs: &[SkewRegister],
    driver: &D,
    mdio: &mut M,
    dev: &PhyDevice,
    node: &N,
) -> Result<usize>
where
    D: PhyDriver,
    M: MdioBus,
    N: ConfigNode + ?Sized,
{
    let mut written = 0;
    for reg in regs {
        if reg.configure(driver, mdio, dev, node)? {
            written += 1;
        }
    }
    Ok(written)
}

// =============================================================================
// KSZ90x1 Tables
// =============================================================================

/// RX data pads, shared by the whole family
pub const KSZ90X1_RXD: [SkewField; 4] = [
    SkewField::new("rxd0-skew-ps", 4, 0, 0x7),
    SkewField::new("rxd1-skew-ps", 4, 4, 0x7),
    SkewField::new("rxd2-skew-ps", 4, 8, 0x7),
    SkewField::new("rxd3-skew-ps", 4, 12, 0x7),
];

/// TX data pads, shared by the whole family
pub const KSZ90X1_TXD: [SkewField; 4] = [
    SkewField::new("txd0-skew-ps", 4, 0, 0x7),
    SkewField::new("txd1-skew-ps", 4, 4, 0x7),
    SkewField::new("txd2-skew-ps", 4, 8, 0x7),
    SkewField::new("txd3-skew-ps", 4, 12, 0x7),
];

/// KSZ9021 clock and control pads
pub const KSZ9021_CLK: [SkewField; 4] = [
    SkewField::new("txen-skew-ps", 4, 0, 0x7),
    SkewField::new("txc-skew-ps", 4, 4, 0x7),
    SkewField::new("rxdv-skew-ps", 4, 8, 0x7),
    SkewField::new("rxc-skew-ps", 4, 12, 0x7),
];

/// KSZ9031 control pads
pub const KSZ9031_CTL: [SkewField; 2] = [
    SkewField::new("txen-skew-ps", 4, 0, 0x7),
    SkewField::new("rxdv-skew-ps", 4, 4, 0x7),
];

/// KSZ9031 clock pads (5-bit fields)
pub const KSZ9031_CLK: [SkewField; 2] = [
    SkewField::new("rxc-skew-ps", 5, 0, 0xf),
    SkewField::new("txc-skew-ps", 5, 5, 0xf),
];

/// KSZ9021 skew registers in programming order: RX data, TX data, clock
pub static KSZ9021_SKEW: [SkewRegister; 3] = [
    SkewRegister::new(
        ksz9021::RGMII_RX_DATA_SKEW,
        0,
        FieldGroup::new(&KSZ90X1_RXD),
        ksz9021::PS_PER_STEP,
    ),
    SkewRegister::new(
        ksz9021::RGMII_TX_DATA_SKEW,
        0,
        FieldGroup::new(&KSZ90X1_TXD),
        ksz9021::PS_PER_STEP,
    ),
    SkewRegister::new(
        ksz9021::RGMII_CLOCK_SKEW,
        0,
        FieldGroup::new(&KSZ9021_CLK),
        ksz9021::PS_PER_STEP,
    ),
];

/// KSZ9031 skew registers in programming order: control, RX, TX, clock
pub static KSZ9031_SKEW: [SkewRegister; 4] = [
    SkewRegister::new(
        ksz9031::RGMII_CTRL_SIG_SKEW,
        ksz9031::SKEW_DEVAD,
        FieldGroup::new(&KSZ9031_CTL),
        ksz9031::PS_PER_STEP,
    ),
    SkewRegister::new(
        ksz9031::RGMII_RX_DATA_SKEW,
        ksz9031::SKEW_DEVAD,
        FieldGroup::new(&KSZ90X1_RXD),
        ksz9031::PS_PER_STEP,
    ),
    SkewRegister::new(
        ksz9031::RGMII_TX_DATA_SKEW,
        ksz9031::SKEW_DEVAD,
        FieldGroup::new(&KSZ90X1_TXD),
        ksz9031::PS_PER_STEP,
    ),
    SkewRegister::new(
        ksz9031::RGMII_CLOCK_SKEW,
        ksz9031::SKEW_DEVAD,
        FieldGroup::new(&KSZ9031_CLK),
        ksz9031::PS_PER_STEP,
    ),
];

// =============================================================================
// Unit Tests
// =============================================================================
