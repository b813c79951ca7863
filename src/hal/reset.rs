//! PHY Reset Line HAL
//!
//! Drives the active-low `RESET_N` pin of a KSZ90x1 PHY. The soft reset
//! through BMCR is usually enough, but a hardware reset re-latches the strap
//! pins (PHY address, RGMII clock mode) and recovers a PHY in an unknown
//! state before the driver's `startup` and `config` run.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::{ConfigError, Result};

// =============================================================================
// Timing
// =============================================================================

/// Reset assertion time in microseconds (minimum 10 ms per datasheet)
pub const RESET_PULSE_US: u32 = 10_000;

/// Delay after reset release before the first MDIO access (minimum 100 µs)
pub const RESET_RECOVERY_US: u32 = 100;

// =============================================================================
// Reset State
// =============================================================================

/// Current level of the reset line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetState {
    /// PHY held in reset
    Asserted,
    /// PHY running
    Released,
}

// =============================================================================
// Reset Line
// =============================================================================

/// Active-low PHY reset pin
#[derive(Debug)]
pub struct ResetLine<RST: OutputPin> {
    pin: RST,
    state: ResetState,
}

impl<RST: OutputPin> ResetLine<RST> {
    /// Take ownership of the reset pin and drive it inactive (high)
    pub fn new(mut pin: RST) -> Self {
        let _ = pin.set_high();
        Self {
            pin,
            state: ResetState::Released,
        }
    }

    /// Pulse the reset line and wait until the PHY accepts MDIO traffic
    ///
    /// # Timing
    /// - Reset pulse: [`RESET_PULSE_US`]
    /// - Recovery time: [`RESET_RECOVERY_US`]
    pub fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.assert_reset()?;
        delay.delay_us(RESET_PULSE_US);
        self.deassert_reset()?;
        delay.delay_us(RESET_RECOVERY_US);

        #[cfg(feature = "defmt")]
        defmt::debug!("PHY hardware reset complete");

        Ok(())
    }

    /// Hold the PHY in reset
    pub fn assert_reset(&mut self) -> Result<()> {
        self.pin.set_low().map_err(|_| ConfigError::GpioError)?;
        self.state = ResetState::Asserted;
        Ok(())
    }

    /// Release the PHY from reset
    ///
    /// Wait at least [`RESET_RECOVERY_US`] before accessing the PHY.
    pub fn deassert_reset(&mut self) -> Result<()> {
        self.pin.set_high().map_err(|_| ConfigError::GpioError)?;
        self.state = ResetState::Released;
        Ok(())
    }

    /// Last level driven on the line
    pub fn state(&self) -> ResetState {
        self.state
    }

    /// Consume the helper and return the pin
    pub fn into_inner(self) -> RST {
        self.pin
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::{MockDelay, MockPin};

    #[test]
    fn new_drives_pin_high() {
        let line = ResetLine::new(MockPin::new());
        assert_eq!(line.state(), ResetState::Released);
        assert_eq!(line.into_inner().levels(), [true]);
    }

    #[test]
    fn hardware_reset_pulses_low_then_high() {
        let mut delay = MockDelay::new();
        let mut line = ResetLine::new(MockPin::new());

        line.hardware_reset(&mut delay).unwrap();

        assert_eq!(line.state(), ResetState::Released);
        assert_eq!(line.into_inner().levels(), [true, false, true]);
        assert_eq!(
            delay.total_ns(),
            u64::from(RESET_PULSE_US + RESET_RECOVERY_US) * 1_000
        );
    }

    #[test]
    fn assert_holds_reset() {
        let mut line = ResetLine::new(MockPin::new());
        line.assert_reset().unwrap();
        assert_eq!(line.state(), ResetState::Asserted);
    }

    #[test]
    fn pin_failure_maps_to_gpio_error() {
        let mut delay = MockDelay::new();
        let mut line = ResetLine::new(MockPin::failing());

        let err = line.hardware_reset(&mut delay).unwrap_err();
        assert_eq!(err, Error::Config(ConfigError::GpioError));
        assert_eq!(delay.total_ns(), 0);
    }
}
