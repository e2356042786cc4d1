/******************************************************************************
 * Refer to the MPR121 datasheet for more information, available here:       *
 * - https://www.nxp.com/docs/en/data-sheet/MPR121.pdf                        *
 * ========================================================================== *
 *                       MPR121 - Registers & Memory Map                      *
*******************************************************************************/

/// Default 7-bit bus address (ADDR pin tied to GND).
pub const DEFAULT_ADDRESS: u8 = 0x5A;

/// Number of sense electrodes.
pub const ELECTRODES: u8 = 12;

/// Magic byte that triggers a soft reset when written to [`Reg::SoftReset`].
pub(crate) const SOFT_RESET_MAGIC: u8 = 0x63;

/// CONFIG2 value after a soft reset: CDT=1 (0.5us), SFI=0 (4 samples), ESI=4 (16ms).
pub(crate) const CONFIG2_RESET_VALUE: u8 = 0x24;

#[allow(dead_code)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg {
  // Touch status (0x00..0x01), out-of-range status (0x02..0x03)
  TouchStatus = 0x00,
  OutOfRangeStatus = 0x02,

  // Electrode filtered data, 2 bytes per electrode (0x04..0x1B), proximity channel (0x1C..0x1D)
  FilteredData = 0x04,
  // Baseline value, upper 8 of 10 bits, 1 byte per electrode (0x1E..0x2A)
  Baseline = 0x1E,

  // Baseline filtering control (0x2B..0x35)
  MaxHalfDeltaRising = 0x2B,
  NoiseHalfDeltaRising = 0x2C,
  NoiseCountLimitRising = 0x2D,
  FilterDelayCountRising = 0x2E,
  MaxHalfDeltaFalling = 0x2F,
  NoiseHalfDeltaFalling = 0x30,
  NoiseCountLimitFalling = 0x31,
  FilterDelayCountFalling = 0x32,
  NoiseHalfDeltaTouched = 0x33,
  NoiseCountLimitTouched = 0x34,
  FilterDelayCountTouched = 0x35,

  // Touch/release thresholds, interleaved per electrode (0x41..0x58)
  TouchThreshold = 0x41,
  ReleaseThreshold = 0x42,

  // Debounce & AFE configuration (0x5B..0x5E)
  Debounce = 0x5B,
  Config1 = 0x5C,
  Config2 = 0x5D,
  ElectrodeConfig = 0x5E,

  SoftReset = 0x80,
}

impl From<Reg> for u8 {
  fn from(r: Reg) -> Self {
    r as u8
  }
}

impl Reg {
  /// Address of the `index`-th entry of a register array that starts at
  /// `self` and holds `stride` bytes per entry.
  pub(crate) const fn offset(self, index: u8, stride: u8) -> u8 {
    self as u8 + index * stride
  }
}
