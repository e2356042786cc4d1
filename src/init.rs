use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::config::Tuning;
use crate::control::{RUN_ALL_ELECTRODES, STOP_MODE};
use crate::{Error, Mpr121, Reg, CONFIG2_RESET_VALUE, SOFT_RESET_MAGIC};

impl<I, E> Mpr121<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Reset the controller and bring it up in run mode with the driver's
  /// default tuning.
  ///
  /// The sequence is: soft reset, stop mode, check that CONFIG2 holds its
  /// power-on value, default thresholds (touch 15, release 7) on all
  /// electrodes, baseline filter and AFE tuning, and finally run mode with all
  /// 12 electrodes enabled.
  ///
  /// Any bus error aborts the sequence where it happened; call `reset` again
  /// to retry. [`Error::ResetFailed`] means the device did not come back with
  /// its power-on defaults.
  pub fn reset(&mut self) -> Result<(), Error<E>> {
    let tuning = Tuning::DEFAULT;

    self.write_reg(Reg::SoftReset, SOFT_RESET_MAGIC)?;
    // Configuration registers are read-only unless in stop mode.
    self.write_reg(Reg::ElectrodeConfig, STOP_MODE)?;

    let config2 = self.read_reg(Reg::Config2)?;
    if config2 != CONFIG2_RESET_VALUE {
      return Err(Error::ResetFailed { config2 });
    }

    self.set_thresholds(tuning.thresholds, None)?;
    // Overwrites the CONFIG2 power-on value checked above.
    self.write_tuning(&tuning)?;
    self.write_reg(Reg::ElectrodeConfig, RUN_ALL_ELECTRODES)?;

    #[cfg(feature = "defmt")]
    defmt::debug!("mpr121@{=u8:#x}: reset complete, {} electrodes running", self.address, crate::ELECTRODES);
    Ok(())
  }
}
