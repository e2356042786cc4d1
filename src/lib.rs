#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Blocking, `no_std` driver for the NXP MPR121 12-channel capacitive touch
//! controller, wired as a phone-style 12-key keypad.
//!
//! The crate sits directly on top of the raw register map and provides:
//!
//! - A reset sequence that brings the controller from any state into run mode
//!   with known baseline-filter and threshold tuning
//! - Touch/release threshold configuration that transparently enters and
//!   leaves stop mode around the write
//! - Filtered and baseline data readout for tuning and diagnostics
//! - The raw 12-bit touch bitmap, plus keypad decoding through [`Key`]
//! - `embedded-hal` 1.0 blocking I²C, so the driver works across MCU families
//!
//! ```no_run
//! use embedded_hal::i2c::{I2c, SevenBitAddress};
//! use mpr121::{Key, Mpr121};
//!
//! fn example<I2C, E>(i2c: &mut I2C) -> Result<(), mpr121::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//! {
//!   let mut keypad = Mpr121::new(i2c);
//!   keypad.reset()?;
//!
//!   if let Some(key) = keypad.scan()? {
//!     let _symbol: char = key.into();
//!   }
//!   let _star = keypad.is_touched(Key::Star)?;
//!   Ok(())
//! }
//! ```
mod config;
mod control;
mod data;
mod init;
mod keypad;
mod reg;
mod rw;
#[cfg(test)]
mod sim;

use embedded_hal::i2c::{I2c, SevenBitAddress};

pub use config::*;
pub use keypad::*;
pub use reg::{DEFAULT_ADDRESS, ELECTRODES};
use reg::*;

/// Errors that can occur while interacting with the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error.
  I2c(E),
  /// CONFIG2 did not read back its power-on value after a soft reset, so the
  /// device is either not an MPR121 or did not reset.
  ResetFailed { config2: u8 },
  /// Electrode index outside `0..12`.
  InvalidElectrode(u8),
  /// Character that is not one of `0`-`9`, `*` or `#`.
  InvalidKey(char),
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::I2c(e) => write!(f, "I2C error: {e:?}"),
      Self::ResetFailed { config2 } => {
        write!(f, "device did not reset to default state (CONFIG2 = {config2:#04x}, expected {CONFIG2_RESET_VALUE:#04x})")
      }
      Self::InvalidElectrode(e) => write!(f, "electrode {e} out of range 0-{}", ELECTRODES - 1),
      Self::InvalidKey(c) => write!(f, "{c:?} is not a keypad symbol"),
    }
  }
}

/// Driver for an MPR121 on a shared or dedicated I²C bus.
///
/// The bus is held for the lifetime of the driver. Pass `&mut I2C` to borrow
/// it instead of moving it in; [`Mpr121::release`] hands it back either way.
/// The device address is fixed at construction.
///
/// Construction does not touch the bus. Call [`Mpr121::reset`] once at
/// start-up to put the controller into run mode.
pub struct Mpr121<I> {
  i2c: I,
  address: u8,
}

impl<I, E> Mpr121<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Create a driver for a controller at [`DEFAULT_ADDRESS`].
  pub fn new(i2c: I) -> Self {
    Self::new_with_address(i2c, DEFAULT_ADDRESS)
  }

  /// Create a driver for a controller at a non-default address (0x5B-0x5D
  /// depending on how the ADDR pin is strapped).
  pub fn new_with_address(i2c: I, address: u8) -> Self {
    Self { i2c, address }
  }

  /// 7-bit bus address the driver talks to.
  pub fn address(&self) -> u8 {
    self.address
  }

  /// Destroy the driver and return the bus.
  pub fn release(self) -> I {
    self.i2c
  }

  pub(crate) fn check_electrode(electrode: u8) -> Result<u8, Error<E>> {
    if electrode < ELECTRODES {
      Ok(electrode)
    } else {
      Err(Error::InvalidElectrode(electrode))
    }
  }
}
