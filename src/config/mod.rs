use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Mpr121, Reg};

mod afe;
mod filter;
mod thresholds;

pub(crate) use afe::*;
pub(crate) use filter::*;
pub use thresholds::*;

impl<I, E> Mpr121<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Write the baseline filter, debounce and AFE settings of `tuning`.
  ///
  /// The caller must have put the device into stop mode.
  pub(crate) fn write_tuning(&mut self, tuning: &Tuning) -> Result<(), Error<E>> {
    self.write_filter(&tuning.filter)?;
    self.write_reg(Reg::Debounce, tuning.debounce)?;
    self.write_reg(Reg::Config1, tuning.afe.config1())?;
    self.write_reg(Reg::Config2, tuning.afe.config2())
  }
}

/// Everything [`Mpr121::reset`] programs before re-entering run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tuning {
  pub(crate) thresholds: Thresholds,
  pub(crate) filter: BaselineFilter,
  /// Touch and release debounce counts, both zero.
  pub(crate) debounce: u8,
  pub(crate) afe: AfeConfig,
}

impl Tuning {
  pub(crate) const DEFAULT: Self = Self {
    thresholds: Thresholds::DEFAULT,
    filter: BaselineFilter::DEFAULT,
    debounce: 0,
    afe: AfeConfig::DEFAULT,
  };
}
