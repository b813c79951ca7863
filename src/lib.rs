//! Micrel KSZ90x1 PHY Driver
//!
//! A `no_std`, `no_alloc` driver for the Micrel/Microchip KSZ9021, KSZ9031
//! and KSZ9131 Gigabit Ethernet PHYs, written for bootloader bring-up.
//!
//! The driver configures a PHY that the host has already found on an MDIO
//! bus: RGMII pad skew from the board's hardware description, KSZ9031 link
//! pulse timing, KSZ9131 clock delay lines, an optional "no gigabit"
//! directive, and a fast startup path that does not wait for the link.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **PHY Layer** ([`phy`]): driver trait, KSZ90x1 driver, skew engine,
//!    generic Clause 22 negotiation helpers
//! 2. **HAL Layer** ([`hal`]): MDIO bus trait and the PHY reset line
//! 3. **Errors** ([`error`]): split configuration/bus errors with integer
//!    status codes for C-style host layers
//!
//! ## Standard Compliance
//!
//! - **IEEE 802.3 Clause 22**: basic registers and the MMD access window
//!   (registers 13/14)
//! - **Micrel KSZ9021**: vendor extended register pair (registers 11-13)
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for public types and debug logging
//!
//! # Example
//!
//! ```ignore
//! use micrel_ksz90x1::phy::{ksz90x1, PhyConfig, PhyDriver, PhyInterface};
//! use micrel_ksz90x1::hal::ResetLine;
//!
//! // Pulse the reset pin before the first MDIO access
//! let mut reset = ResetLine::new(reset_pin);
//! reset.hardware_reset(&mut delay)?;
//!
//! // Identify the PHY and bind a driver
//! let (drv, mut dev) = ksz90x1::probe(&mut mdio, 0, PhyInterface::RgmiiId)?;
//!
//! // Boot-time link parameters, then board configuration
//! drv.startup(&mut mdio, &mut dev)?;
//! drv.config(&mut mdio, &mut dev, &PhyConfig::new().with_disable_gigabit(true))?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ConfigResult, Error, IoError, IoResult, Result};
pub use hal::{MdioBus, ResetLine, ResetState};
pub use phy::{
    DeviceId, DriverInfo, Duplex, Features, GenericPhy, HwDescription, Ksz90x1, PhyConfig,
    PhyDevice, PhyDriver, PhyInterface, Properties, Speed,
};
