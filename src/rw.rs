use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Mpr121, Reg};

// Each helper is exactly one bus transaction. Multi-byte accesses rely on the
// device auto-incrementing its register pointer; words are little-endian.
impl<I, E> Mpr121<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  pub(crate) fn read_u8(&mut self, reg: u8) -> Result<u8, Error<E>> {
    let mut buf = [0u8; 1];
    self.read_bytes(reg, &mut buf)?;
    Ok(buf[0])
  }

  pub(crate) fn write_u8(&mut self, reg: u8, value: u8) -> Result<(), Error<E>> {
    self.write_bytes(reg, [value])
  }

  pub(crate) fn read_u16(&mut self, reg: u8) -> Result<u16, Error<E>> {
    let mut buf = [0u8; 2];
    self.read_bytes(reg, &mut buf)?;
    Ok(u16::from_le_bytes(buf))
  }

  pub(crate) fn write_u16(&mut self, reg: u8, value: u16) -> Result<(), Error<E>> {
    self.write_bytes(reg, value.to_le_bytes())
  }

  pub(crate) fn read_reg(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    self.read_u8(reg.into())
  }

  pub(crate) fn write_reg(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    self.write_u8(reg.into(), value)
  }

  fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
    self.i2c.write_read(self.address, &[reg], buf).map_err(Error::I2c)
  }

  fn write_bytes<const N: usize>(&mut self, reg: u8, data: [u8; N]) -> Result<(), Error<E>> {
    let () = Payload::<N>::FITS;
    let mut buf = [0u8; MAX_PAYLOAD + 1];
    buf[0] = reg;
    buf[1..=N].copy_from_slice(&data);
    self.i2c.write(self.address, &buf[..=N]).map_err(Error::I2c)
  }
}

/// Longest register write the driver issues (one word).
const MAX_PAYLOAD: usize = 2;

struct Payload<const N: usize>;

impl<const N: usize> Payload<N> {
  // Evaluated at monomorphization, so an oversized write fails to compile.
  const FITS: () = assert!(N <= MAX_PAYLOAD, "register write payload too long");
}
