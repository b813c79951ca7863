//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the PHY drivers
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::vec::Vec;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use crate::error::{IoError, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::ksz90x1::{ksz9021, mmd};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Which extended register window the mock emulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtModel {
    /// Plain register file, no extended window
    #[default]
    Plain,
    /// KSZ9021 control/data pair in registers 11-13
    Ksz9021,
    /// IEEE MMD window in registers 13-14
    Mmd,
}

/// Latched state of one PHY's MMD window
#[derive(Debug, Default)]
struct MmdWindow {
    ctrl: u16,
    addresses: HashMap<u8, u16>,
}

impl MmdWindow {
    fn devad(&self) -> u8 {
        (self.ctrl & mmd::DEVAD_MASK) as u8
    }

    fn mode(&self) -> u16 {
        self.ctrl & mmd::MODE_MASK
    }
}

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// This allows setting up expected register values and verifying writes.
/// With an [`ExtModel`] selected, the extended windows behave like the
/// silicon so extended registers can be seeded and read back.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new().with_model(ExtModel::Mmd);
/// mdio.set_ext_register(0, 2, 8, 0x03FF);
///
/// let drv = Ksz90x1::Ksz9031;
/// assert_eq!(drv.read_extended(&mut mdio, &dev, 2, 8).unwrap(), 0x03FF);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Extended window emulation
    model: ExtModel,
    /// Extended register values: (phy_addr, devad, reg) -> value
    ext_regs: RefCell<BTreeMap<(u8, u8, u16), u16>>,
    /// Record of stored extended writes: (phy_addr, devad, reg, value)
    ext_write_log: RefCell<Vec<(u8, u8, u16, u16)>>,
    /// KSZ9021 control register per PHY
    ksz9021_select: RefCell<HashMap<u8, u16>>,
    /// MMD window per PHY
    mmd_windows: RefCell<HashMap<u8, MmdWindow>>,
    /// Number of bus transactions attempted
    transactions: Cell<usize>,
    /// Transactions after this count fail with a bus fault
    fail_after: Option<usize>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Emulate an extended register window
    pub fn with_model(mut self, model: ExtModel) -> Self {
        self.model = model;
        self
    }

    /// Fail every transaction after the first `count`
    pub fn fail_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Seed an extended register (`devad` 0 for the KSZ9021 space)
    pub fn set_ext_register(&self, phy_addr: u8, devad: u8, reg: u16, value: u16) {
        self.ext_regs
            .borrow_mut()
            .insert((phy_addr, devad, reg), value);
    }

    /// Get the current value of an extended register
    pub fn get_ext_register(&self, phy_addr: u8, devad: u8, reg: u16) -> Option<u16> {
        self.ext_regs.borrow().get(&(phy_addr, devad, reg)).copied()
    }

    /// All extended registers, ordered by key
    pub fn ext_snapshot(&self) -> Vec<((u8, u8, u16), u16)> {
        self.ext_regs
            .borrow()
            .iter()
            .map(|(&key, &value)| (key, value))
            .collect()
    }

    /// All Clause 22 registers, ordered by key
    pub fn register_snapshot(&self) -> Vec<((u8, u8), u16)> {
        let mut regs: Vec<_> = self
            .registers
            .borrow()
            .iter()
            .map(|(&key, &value)| (key, value))
            .collect();
        regs.sort_unstable();
        regs
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Get all extended writes the emulated window stored
    pub fn get_ext_writes(&self) -> Vec<(u8, u8, u16, u16)> {
        self.ext_write_log.borrow().clone()
    }

    /// Clear the write logs
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
        self.ext_write_log.borrow_mut().clear();
    }

    /// Number of bus transactions attempted so far
    pub fn transactions(&self) -> usize {
        self.transactions.get()
    }

    /// Count a transaction and decide whether it fails
    fn begin_transaction(&self) -> Result<()> {
        let n = self.transactions.get();
        self.transactions.set(n + 1);
        match self.fail_after {
            Some(limit) if n >= limit => Err(IoError::BusFault.into()),
            _ => Ok(()),
        }
    }

    fn store_ext(&self, phy_addr: u8, devad: u8, reg: u16, value: u16) {
        self.set_ext_register(phy_addr, devad, reg, value);
        self.ext_write_log
            .borrow_mut()
            .push((phy_addr, devad, reg, value));
    }

    fn ext_value(&self, phy_addr: u8, devad: u8, reg: u16) -> u16 {
        self.get_ext_register(phy_addr, devad, reg).unwrap_or(0)
    }

    /// Emulated read; `None` falls through to the register file
    fn model_read(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        match self.model {
            ExtModel::Ksz9021 if reg_addr == ksz9021::EXTENDED_DATAR => {
                let select = self
                    .ksz9021_select
                    .borrow()
                    .get(&phy_addr)
                    .copied()
                    .unwrap_or(0);
                Some(self.ext_value(phy_addr, 0, select & !ksz9021::EXTENDED_WRITE))
            }
            ExtModel::Mmd if reg_addr == mmd::REG_DATA => {
                let mut windows = self.mmd_windows.borrow_mut();
                let window = windows.entry(phy_addr).or_default();
                let devad = window.devad();
                let mode = window.mode();
                let addr = window.addresses.entry(devad).or_insert(0);
                if mode == mmd::MODE_ADDRESS {
                    return Some(*addr);
                }
                let value = self.ext_value(phy_addr, devad, *addr);
                if mode == mmd::MODE_DATA_POST_INC_RW {
                    *addr = addr.wrapping_add(1);
                }
                Some(value)
            }
            _ => None,
        }
    }

    /// Emulated write side effects on the extended windows
    fn model_write(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        match self.model {
            ExtModel::Ksz9021 if reg_addr == ksz9021::EXTENDED_CTRL => {
                self.ksz9021_select.borrow_mut().insert(phy_addr, value);
            }
            ExtModel::Ksz9021 if reg_addr == ksz9021::EXTENDED_DATAW => {
                let select = self
                    .ksz9021_select
                    .borrow()
                    .get(&phy_addr)
                    .copied()
                    .unwrap_or(0);
                if select & ksz9021::EXTENDED_WRITE != 0 {
                    self.store_ext(phy_addr, 0, select & !ksz9021::EXTENDED_WRITE, value);
                }
            }
            ExtModel::Mmd if reg_addr == mmd::ACCESS_CTRL => {
                self.mmd_windows
                    .borrow_mut()
                    .entry(phy_addr)
                    .or_default()
                    .ctrl = value;
            }
            ExtModel::Mmd if reg_addr == mmd::REG_DATA => {
                let mut windows = self.mmd_windows.borrow_mut();
                let window = windows.entry(phy_addr).or_default();
                let devad = window.devad();
                let mode = window.mode();
                let addr = window.addresses.entry(devad).or_insert(0);
                if mode == mmd::MODE_ADDRESS {
                    *addr = value;
                    return;
                }
                self.store_ext(phy_addr, devad, *addr, value);
                if mode == mmd::MODE_DATA_POST_INC_RW || mode == mmd::MODE_DATA_POST_INC_W {
                    *addr = addr.wrapping_add(1);
                }
            }
            _ => {}
        }
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        self.begin_transaction()?;

        if let Some(value) = self.model_read(phy_addr, reg_addr) {
            return Ok(value);
        }

        // Return from register map (default 0 if not set)
        Ok(self
            .registers
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
            .unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.begin_transaction()?;

        // Log the write
        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));

        self.model_write(phy_addr, reg_addr, value);

        // Actually update the register
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);

        Ok(())
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += u64::from(ns);
    }
}

// =============================================================================
// Mock GPIO
// =============================================================================

/// Mock output pin recording every level driven
#[derive(Debug, Default)]
pub struct MockPin {
    levels: Vec<bool>,
    fail: bool,
}

impl MockPin {
    /// Pin that accepts every level change
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin whose every level change fails
    pub fn failing() -> Self {
        Self {
            levels: Vec::new(),
            fail: true,
        }
    }

    /// Levels driven so far, `true` = high
    pub fn levels(&self) -> Vec<bool> {
        self.levels.clone()
    }

    fn drive(&mut self, high: bool) -> core::result::Result<(), ErrorKind> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.levels.push(high);
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.drive(true)
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that a register was written with a specific value
#[macro_export]
macro_rules! assert_reg_written {
    ($mdio:expr, $phy:expr, $reg:expr, $value:expr) => {
        let writes = $mdio.get_writes();
        assert!(
            writes
                .iter()
                .any(|w| w.0 == $phy && w.1 == $reg && w.2 == $value),
            "Expected write to PHY {} reg {} with value 0x{:04X}, but got: {:?}",
            $phy,
            $reg,
            $value,
            writes
        );
    };
}

/// Assert that an extended register was stored with a specific value
#[macro_export]
macro_rules! assert_ext_written {
    ($mdio:expr, $phy:expr, $devad:expr, $reg:expr, $value:expr) => {
        let writes = $mdio.get_ext_writes();
        assert!(
            writes
                .iter()
                .any(|w| w.0 == $phy && w.1 == $devad && w.2 == $reg && w.3 == $value),
            "Expected extended write to PHY {} devad {} reg 0x{:X} with value 0x{:04X}, but got: {:?}",
            $phy,
            $devad,
            $reg,
            $value,
            writes
        );
    };
}
