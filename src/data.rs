use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Mpr121, Reg};

impl<I, E> Mpr121<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Filtered capacitance reading of one electrode (10 significant bits).
  pub fn filtered_data(&mut self, electrode: u8) -> Result<u16, Error<E>> {
    let e = Self::check_electrode(electrode)?;
    self.read_u16(Reg::FilteredData.offset(e, 2))
  }

  /// Baseline of one electrode, scaled to the range of [`Mpr121::filtered_data`].
  ///
  /// The device only keeps the upper 8 of the 10 baseline bits, so the two
  /// lowest bits of the result are always zero.
  pub fn baseline_data(&mut self, electrode: u8) -> Result<u16, Error<E>> {
    let e = Self::check_electrode(electrode)?;
    let raw = self.read_u8(Reg::Baseline.offset(e, 1))?;
    Ok(u16::from(raw) << 2)
  }

  /// Touch status word; bit `n` is set while electrode `n` is touched.
  ///
  /// Only the low 12 bits carry electrode state. The upper bits are returned
  /// as read.
  pub fn touched(&mut self) -> Result<u16, Error<E>> {
    self.read_u16(Reg::TouchStatus.into())
  }
}
