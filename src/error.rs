//! Error types for the KSZ90x1 PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Driver capability and configuration table failures
//! - [`IoError`]: MDIO bus transaction failures
//!
//! The unified [`Error`] enum wraps both domains and is returned by every
//! driver entry point. Host PHY layers that speak integer status codes can
//! use [`Error::errno`].

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and capability errors
///
/// These errors occur before any bus traffic, when the driver or the
/// caller-provided data cannot support the requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Driver has no extended register access
    NotSupported,
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// Register address outside the Clause 22 range
    InvalidRegister,
    /// Skew field group violates its layout rules
    InvalidFieldGroup,
    /// PHY identifier does not match any known driver
    UnknownPhy,
    /// Reset GPIO could not be driven
    GpioError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::NotSupported => "extended access not supported",
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::InvalidRegister => "invalid register address",
            ConfigError::InvalidFieldGroup => "invalid skew field group",
            ConfigError::UnknownPhy => "unknown PHY identifier",
            ConfigError::GpioError => "GPIO error",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// MDIO bus transaction errors
///
/// Raised by [`MdioBus`](crate::hal::MdioBus) implementations and propagated
/// unchanged. The driver never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Bus transaction failed
    BusFault,
    /// Bus transaction timed out in the transport
    Timeout,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::BusFault => "MDIO bus fault",
            IoError::Timeout => "MDIO operation timed out",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match phy.config(&mut mdio, &mut dev, &cfg) {
///     Err(Error::Config(ConfigError::NotSupported)) => { /* ... */ }
///     Err(Error::Io(IoError::BusFault)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl Error {
    /// Negative errno value for hosts that report integer status codes
    pub const fn errno(&self) -> i32 {
        match self {
            Error::Config(ConfigError::NotSupported) => -errno::EOPNOTSUPP,
            Error::Config(ConfigError::UnknownPhy) => -errno::ENODEV,
            Error::Config(ConfigError::GpioError) => -errno::EIO,
            Error::Config(_) => -errno::EINVAL,
            Error::Io(IoError::BusFault) => -errno::EIO,
            Error::Io(IoError::Timeout) => -errno::ETIMEDOUT,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for bus operations
pub type IoResult<T> = core::result::Result<T, IoError>;

/// Errno values used by [`Error::errno`]
pub mod errno {
    /// I/O error
    pub const EIO: i32 = 5;
    /// No such device
    pub const ENODEV: i32 = 19;
    /// Invalid argument
    pub const EINVAL: i32 = 22;
    /// Operation not supported
    pub const EOPNOTSUPP: i32 = 95;
    /// Connection timed out
    pub const ETIMEDOUT: i32 = 110;
}

// =============================================================================
// Unit Tests
// =============================================================================
