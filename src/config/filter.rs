use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Mpr121, Reg};

impl<I, E> Mpr121<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  pub(crate) fn write_filter(&mut self, filter: &BaselineFilter) -> Result<(), Error<E>> {
    let rising = &filter.rising;
    self.write_reg(Reg::MaxHalfDeltaRising, rising.max_half_delta)?;
    self.write_reg(Reg::NoiseHalfDeltaRising, rising.noise_half_delta)?;
    self.write_reg(Reg::NoiseCountLimitRising, rising.noise_count_limit)?;
    self.write_reg(Reg::FilterDelayCountRising, rising.filter_delay_count)?;

    let falling = &filter.falling;
    self.write_reg(Reg::MaxHalfDeltaFalling, falling.max_half_delta)?;
    self.write_reg(Reg::NoiseHalfDeltaFalling, falling.noise_half_delta)?;
    self.write_reg(Reg::NoiseCountLimitFalling, falling.noise_count_limit)?;
    self.write_reg(Reg::FilterDelayCountFalling, falling.filter_delay_count)?;

    // No max half delta while touched; the baseline is held.
    let touched = &filter.touched;
    self.write_reg(Reg::NoiseHalfDeltaTouched, touched.noise_half_delta)?;
    self.write_reg(Reg::NoiseCountLimitTouched, touched.noise_count_limit)?;
    self.write_reg(Reg::FilterDelayCountTouched, touched.filter_delay_count)
  }
}

/// Baseline tracking filter, one stage per direction of change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BaselineFilter {
  /// Filtered data above baseline.
  pub(crate) rising: FilterStage,
  /// Filtered data below baseline.
  pub(crate) falling: FilterStage,
  /// Electrode in touch state; `max_half_delta` does not apply.
  pub(crate) touched: FilterStage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FilterStage {
  pub(crate) max_half_delta: u8,
  pub(crate) noise_half_delta: u8,
  pub(crate) noise_count_limit: u8,
  pub(crate) filter_delay_count: u8,
}

impl FilterStage {
  const fn new(max_half_delta: u8, noise_half_delta: u8, noise_count_limit: u8, filter_delay_count: u8) -> Self {
    Self { max_half_delta, noise_half_delta, noise_count_limit, filter_delay_count }
  }
}

impl BaselineFilter {
  pub(crate) const DEFAULT: Self = Self {
    rising: FilterStage::new(0x01, 0x01, 0x0E, 0x00),
    falling: FilterStage::new(0x01, 0x05, 0x01, 0x00),
    touched: FilterStage::new(0x00, 0x00, 0x00, 0x00),
  };
}
