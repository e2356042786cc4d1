//! 12-key keypad on top of the raw touch bitmap.
//!
//! The pads are routed to the controller in a 3-wide layout that does not
//! follow the phone-style key order, so every key goes through a fixed
//! key-to-electrode remapping before its status bit is tested.

use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Mpr121, ELECTRODES};

impl<I, E> Mpr121<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// `true` while the electrode wired to `key` is touched.
  pub fn is_touched(&mut self, key: Key) -> Result<bool, Error<E>> {
    Ok(key.is_set_in(self.touched()?))
  }

  /// First touched key in [`Key::ALL`] order, or `None` when nothing is
  /// touched.
  ///
  /// The status word is read once, so all keys are judged against the same
  /// snapshot. Only one key is reported even if several are held down.
  pub fn scan(&mut self) -> Result<Option<Key>, Error<E>> {
    let status = self.touched()?;
    Ok(Key::ALL.into_iter().find(|key| key.is_set_in(status)))
  }
}

/// Logical key of the 12-key pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Key {
  Zero = 0,
  One = 1,
  Two = 2,
  Three = 3,
  Four = 4,
  Five = 5,
  Six = 6,
  Seven = 7,
  Eight = 8,
  Nine = 9,
  Star = 10,
  Hash = 11,
}

impl Key {
  /// All keys in scan priority order: digits ascending, then `*`, then `#`.
  pub const ALL: [Key; 12] = [
    Key::Zero,
    Key::One,
    Key::Two,
    Key::Three,
    Key::Four,
    Key::Five,
    Key::Six,
    Key::Seven,
    Key::Eight,
    Key::Nine,
    Key::Star,
    Key::Hash,
  ];

  /// Logical index: the digit value, 10 for `*`, 11 for `#`.
  pub const fn index(self) -> u8 {
    self as u8
  }

  pub const fn from_index(index: u8) -> Option<Self> {
    if index < ELECTRODES {
      Some(Self::ALL[index as usize])
    } else {
      None
    }
  }

  /// Physical electrode the key's pad is wired to.
  pub const fn electrode(self) -> u8 {
    ELECTRODE_OF_KEY[self as usize]
  }

  pub const fn as_char(self) -> char {
    match self {
      Key::Star => '*',
      Key::Hash => '#',
      digit => (b'0' + digit as u8) as char,
    }
  }

  const fn is_set_in(self, status: u16) -> bool {
    status & (1 << self.electrode()) != 0
  }
}

impl From<Key> for char {
  fn from(key: Key) -> Self {
    key.as_char()
  }
}

impl TryFrom<char> for Key {
  type Error = InvalidKey;

  fn try_from(c: char) -> Result<Self, Self::Error> {
    match c {
      '*' => Ok(Key::Star),
      '#' => Ok(Key::Hash),
      '0'..='9' => Ok(Key::ALL[c as usize - '0' as usize]),
      _ => Err(InvalidKey(c)),
    }
  }
}

/// Character that is not a keypad symbol. Converts into [`Error::InvalidKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidKey(pub char);

impl<E> From<InvalidKey> for Error<E> {
  fn from(InvalidKey(c): InvalidKey) -> Self {
    Error::InvalidKey(c)
  }
}

impl core::fmt::Display for Key {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.as_char())
  }
}

const ELECTRODE_OF_KEY: [u8; 12] = {
  let mut map = [0u8; 12];
  let mut k = 0;
  while k < 12 {
    map[k] = electrode_of_key(k as u8);
    k += 1;
  }
  map
};

/// Wiring of logical key `k` (0-9, 10 = `*`, 11 = `#`) to a physical electrode.
///
/// ```text
/// k == 0  -> 4
/// k == 11 -> 8
/// else:   y = 3 - k / 3
///         if k % 3 == 0 { y += 1 }
///         x = k - (3 - y) * 3 - 1
///         electrode = 4 * x + y
/// ```
const fn electrode_of_key(k: u8) -> u8 {
  match k {
    0 => 4,
    11 => 8,
    _ => {
      let k = k as i16;
      let mut y = 3 - k / 3;
      if k % 3 == 0 {
        y += 1;
      }
      let x = k - (3 - y) * 3 - 1;
      (4 * x + y) as u8
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sim::{Sim, SimError};

  const GOLDEN: [(Key, u8); 12] = [
    (Key::Zero, 4),
    (Key::One, 3),
    (Key::Two, 7),
    (Key::Three, 11),
    (Key::Four, 2),
    (Key::Five, 6),
    (Key::Six, 10),
    (Key::Seven, 1),
    (Key::Eight, 5),
    (Key::Nine, 9),
    (Key::Star, 0),
    (Key::Hash, 8),
  ];

  fn pad(status: u16) -> Mpr121<Sim> {
    let mut sim = Sim::new();
    sim.set_touched(status);
    Mpr121::new(sim)
  }

  #[test]
  fn remapping_matches_wiring_table() {
    for (key, electrode) in GOLDEN {
      assert_eq!(key.electrode(), electrode, "{key:?}");
      assert_eq!(electrode_of_key(key.index()), electrode);
    }
  }

  #[test]
  fn remapping_is_a_permutation() {
    let mut seen = 0u16;
    for key in Key::ALL {
      seen |= 1 << key.electrode();
    }
    assert_eq!(seen, 0x0FFF);
  }

  #[test]
  fn chars_round_trip() {
    let symbols = "0123456789*#";
    for (key, c) in Key::ALL.into_iter().zip(symbols.chars()) {
      assert_eq!(key.as_char(), c);
      assert_eq!(Key::try_from(c), Ok(key));
    }
    for c in ['a', ' ', '+', 'A', '\0'] {
      assert_eq!(Key::try_from(c), Err(InvalidKey(c)));
    }
  }

  #[test]
  fn invalid_symbol_fails_before_bus_activity() {
    fn press(dev: &mut Mpr121<Sim>, c: char) -> Result<bool, Error<SimError>> {
      let key = Key::try_from(c)?;
      dev.is_touched(key)
    }
    let mut dev = pad(1 << 8);
    assert_eq!(press(&mut dev, '#'), Ok(true));
    assert_eq!(press(&mut dev, 'x'), Err(Error::InvalidKey('x')));
    assert_eq!(dev.release().log.len(), 1);
  }

  #[test]
  fn index_bounds() {
    assert_eq!(Key::from_index(0), Some(Key::Zero));
    assert_eq!(Key::from_index(11), Some(Key::Hash));
    assert_eq!(Key::from_index(12), None);
    for key in Key::ALL {
      assert_eq!(Key::from_index(key.index()), Some(key));
    }
  }

  #[test]
  fn is_touched_tests_the_mapped_bit() {
    for (key, electrode) in GOLDEN {
      let mut dev = pad(1 << electrode);
      for other in Key::ALL {
        assert_eq!(dev.is_touched(other).unwrap(), other == key);
      }
    }
  }

  #[test]
  fn scan_reports_nothing_when_idle() {
    assert_eq!(pad(0).scan().unwrap(), None);
    // Reserved upper bits are not keys.
    assert_eq!(pad(0xF000).scan().unwrap(), None);
  }

  #[test]
  fn scan_follows_priority_order() {
    // Keys 0 and 1 held: electrodes 4 and 3.
    assert_eq!(pad(1 << 4 | 1 << 3).scan().unwrap(), Some(Key::Zero));
    // `*` and `#` held: electrodes 0 and 8.
    assert_eq!(pad(1 << 0 | 1 << 8).scan().unwrap(), Some(Key::Star));
    assert_eq!(pad(1 << 8).scan().unwrap().map(char::from), Some('#'));
    assert_eq!(pad(0x0FFF).scan().unwrap(), Some(Key::Zero));
    // Nine beats star even though star sits on electrode 0.
    assert_eq!(pad(1 << 0 | 1 << 9).scan().unwrap(), Some(Key::Nine));
  }

  #[test]
  fn scan_reads_status_once() {
    let mut dev = pad(0);
    dev.scan().unwrap();
    assert_eq!(dev.release().log.len(), 1);
  }
}
