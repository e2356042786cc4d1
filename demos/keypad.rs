//! Poll the keypad and report key presses.
#![allow(unused)]
use embedded_hal::i2c::{I2c, SevenBitAddress};
use mpr121::{Key, Mpr121, Thresholds};

#[allow(dead_code)]
fn poll<I2C, E>(i2c: I2C, mut on_key: impl FnMut(char)) -> Result<(), mpr121::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
{
  let mut keypad = Mpr121::new(i2c);
  keypad.reset()?;

  // Make `#` less sensitive than the rest of the pad.
  keypad.set_thresholds(Thresholds::new(24, 12), Some(Key::Hash.electrode()))?;

  let mut last = None;
  loop {
    let key = keypad.scan()?;
    if key != last {
      if let Some(key) = key {
        on_key(key.into());
      }
      last = key;
    }
  }
}

fn main() {}
