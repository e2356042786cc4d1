/// Analog front end settings held in CONFIG1 and CONFIG2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AfeConfig {
  /// First filter iterations (FFI), 2 bits: 0 = 6 samples, 1 = 10, 2 = 18, 3 = 34.
  pub(crate) first_filter_iterations: u8,
  /// Global charge/discharge current (CDC) in µA, 6 bits.
  pub(crate) charge_current: u8,
  /// Global charge/discharge time (CDT), 3 bits: 1 = 0.5 µs, doubling per step.
  pub(crate) charge_time: u8,
  /// Second filter iterations (SFI), 2 bits: 0 = 4 samples, 1 = 6, 2 = 10, 3 = 18.
  pub(crate) second_filter_iterations: u8,
  /// Electrode sample interval (ESI), 3 bits: 2^n ms.
  pub(crate) sample_interval: u8,
}

impl AfeConfig {
  /// CONFIG1 = 0x10, CONFIG2 = 0x20.
  pub(crate) const DEFAULT: Self = Self {
    first_filter_iterations: 0,
    charge_current: 16,
    charge_time: 1,
    second_filter_iterations: 0,
    sample_interval: 0,
  };

  pub(crate) const fn config1(&self) -> u8 {
    (self.first_filter_iterations & 0b11) << 6 | (self.charge_current & 0b11_1111)
  }

  pub(crate) const fn config2(&self) -> u8 {
    (self.charge_time & 0b111) << 5 | (self.second_filter_iterations & 0b11) << 3 | (self.sample_interval & 0b111)
  }
}
