use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Mpr121, Reg};

/// Electrode configuration that stops all sampling. Tuning registers are only
/// writable while ECR holds this value.
pub(crate) const STOP_MODE: u8 = 0x00;

/// Run mode with all 12 electrodes enabled, proximity detection off and
/// baseline tracking enabled (initial baseline loaded from the 5 high bits of
/// the first filtered sample, CL=0b10).
pub(crate) const RUN_ALL_ELECTRODES: u8 = 0x8F;

impl<I, E> Mpr121<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Raw electrode configuration register (ECR). Zero means stop mode.
  pub fn electrode_config(&mut self) -> Result<u8, Error<E>> {
    self.read_reg(Reg::ElectrodeConfig)
  }

  /// `true` while the controller is sampling electrodes (run mode).
  pub fn is_running(&mut self) -> Result<bool, Error<E>> {
    Ok(self.electrode_config()? != STOP_MODE)
  }

  /// Run `f` with the controller in stop mode and put ECR back afterwards.
  ///
  /// If the device was running, ECR is cleared before `f` and the saved value
  /// is written back on every exit path, including when `f` fails. An error
  /// from `f` takes precedence over one from the restore. A device already in
  /// stop mode is left alone.
  pub(crate) fn in_stop_mode<T, F>(&mut self, f: F) -> Result<T, Error<E>>
  where
    F: FnOnce(&mut Self) -> Result<T, Error<E>>,
  {
    let config = self.electrode_config()?;
    if config == STOP_MODE {
      return f(self);
    }

    self.write_reg(Reg::ElectrodeConfig, STOP_MODE)?;
    #[cfg(feature = "defmt")]
    defmt::trace!("mpr121: entered stop mode (ECR was {=u8:#x})", config);

    let result = f(self);
    let restored = self.write_reg(Reg::ElectrodeConfig, config);
    let value = result?;
    restored?;

    #[cfg(feature = "defmt")]
    defmt::trace!("mpr121: restored ECR {=u8:#x}", config);
    Ok(value)
  }
}
