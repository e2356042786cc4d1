use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Mpr121, Reg, ELECTRODES};

impl<I, E> Mpr121<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Set the touch/release thresholds of one electrode, or of all twelve when
  /// `electrode` is `None`.
  ///
  /// Thresholds can only be written in stop mode, so a running device is
  /// stopped for the duration of the write and then put back into its previous
  /// mode. The run/stop state seen by the caller is unchanged.
  ///
  /// Fails with [`Error::InvalidElectrode`] before any bus activity if
  /// `electrode` is out of range.
  pub fn set_thresholds(&mut self, thresholds: Thresholds, electrode: Option<u8>) -> Result<(), Error<E>> {
    let (first, last) = match electrode {
      Some(e) => {
        let e = Self::check_electrode(e)?;
        (e, e)
      }
      None => (0, ELECTRODES - 1),
    };

    self.in_stop_mode(|dev| {
      for i in first..=last {
        // Touch threshold lands at the even offset, release right after it.
        dev.write_u16(Reg::TouchThreshold.offset(i, 2), thresholds.to_word())?;
      }
      Ok(())
    })?;

    #[cfg(feature = "defmt")]
    defmt::debug!("mpr121: thresholds {} set on electrodes {}..={}", thresholds, first, last);
    Ok(())
  }

  /// Read back the threshold pair of a single electrode.
  pub fn thresholds(&mut self, electrode: u8) -> Result<Thresholds, Error<E>> {
    let e = Self::check_electrode(electrode)?;
    let word = self.read_u16(Reg::TouchThreshold.offset(e, 2))?;
    Ok(Thresholds::from_word(word))
  }
}

/// Touch/release hysteresis pair for one electrode.
///
/// An electrode reports touched once its filtered data drops below baseline by
/// more than `touch`, and released once the difference falls back under
/// `release`. `release` is normally the smaller of the two; the hardware does
/// not require it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
  pub touch: u8,
  pub release: u8,
}

impl Thresholds {
  /// Thresholds applied to every electrode by [`Mpr121::reset`].
  pub const DEFAULT: Self = Self::new(15, 7);

  pub const fn new(touch: u8, release: u8) -> Self {
    Self { touch, release }
  }

  pub(crate) const fn to_word(self) -> u16 {
    u16::from_le_bytes([self.touch, self.release])
  }

  pub(crate) const fn from_word(word: u16) -> Self {
    let [touch, release] = word.to_le_bytes();
    Self { touch, release }
  }
}

impl Default for Thresholds {
  fn default() -> Self {
    Self::DEFAULT
  }
}
