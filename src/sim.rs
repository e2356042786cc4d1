//! Register-level MPR121 stand-in for unit tests.

use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

use crate::reg::{Reg, CONFIG2_RESET_VALUE, SOFT_RESET_MAGIC};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SimError;

impl i2c::Error for SimError {
  fn kind(&self) -> ErrorKind {
    ErrorKind::NoAcknowledge(i2c::NoAcknowledgeSource::Address)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Op {
  Read { reg: u8, len: usize },
  Write { reg: u8, data: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Txn {
  pub(crate) address: u8,
  pub(crate) op: Op,
}

pub(crate) struct Sim {
  pub(crate) regs: [u8; 256],
  /// Successful transactions, in order.
  pub(crate) log: Vec<Txn>,
  /// Zero-based index of the attempted transaction that fails with a NACK.
  pub(crate) fail_at: Option<usize>,
  /// CONFIG2 value the device comes back with after a soft reset.
  pub(crate) config2_after_reset: u8,
  attempts: usize,
}

impl Sim {
  pub(crate) fn new() -> Self {
    let mut sim = Self {
      regs: [0; 256],
      log: Vec::new(),
      fail_at: None,
      config2_after_reset: CONFIG2_RESET_VALUE,
      attempts: 0,
    };
    sim.power_on();
    sim
  }

  /// Power-on register state, with the electrodes left running.
  pub(crate) fn running(config: u8) -> Self {
    let mut sim = Self::new();
    sim.regs[Reg::ElectrodeConfig as usize] = config;
    sim
  }

  pub(crate) fn set_touched(&mut self, status: u16) {
    let [lo, hi] = status.to_le_bytes();
    self.regs[Reg::TouchStatus as usize] = lo;
    self.regs[Reg::TouchStatus as usize + 1] = hi;
  }

  /// Bytes written to `reg`, in order.
  pub(crate) fn writes_to(&self, reg: Reg) -> Vec<u8> {
    self
      .log
      .iter()
      .filter_map(|t| match &t.op {
        Op::Write { reg: r, data } if *r == reg as u8 => Some(data[0]),
        _ => None,
      })
      .collect()
  }

  fn power_on(&mut self) {
    self.regs = [0; 256];
    self.regs[Reg::Config1 as usize] = 0x10;
    self.regs[Reg::Config2 as usize] = self.config2_after_reset;
  }

  fn stopped(&self) -> bool {
    self.regs[Reg::ElectrodeConfig as usize] == 0
  }

  fn store(&mut self, reg: u8, value: u8) {
    if reg == Reg::SoftReset as u8 {
      if value == SOFT_RESET_MAGIC {
        self.power_on();
      }
      return;
    }
    // Configuration registers are read-only while electrodes are running.
    let tuning = (Reg::MaxHalfDeltaRising as u8..=0x7F).contains(&reg) && reg != Reg::ElectrodeConfig as u8;
    if tuning && !self.stopped() {
      return;
    }
    self.regs[reg as usize] = value;
  }
}

impl ErrorType for Sim {
  type Error = SimError;
}

impl I2c<SevenBitAddress> for Sim {
  fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    let attempt = self.attempts;
    self.attempts += 1;
    if self.fail_at == Some(attempt) {
      return Err(SimError);
    }

    let mut pointer = 0u8;
    let mut op = None;
    for operation in operations.iter_mut() {
      match operation {
        Operation::Write(bytes) => {
          let Some((&reg, data)) = bytes.split_first() else { continue };
          pointer = reg;
          for (i, &b) in data.iter().enumerate() {
            self.store(reg.wrapping_add(i as u8), b);
          }
          if !data.is_empty() {
            op = Some(Op::Write { reg, data: data.to_vec() });
          }
        }
        Operation::Read(buf) => {
          for (i, b) in buf.iter_mut().enumerate() {
            *b = self.regs[pointer.wrapping_add(i as u8) as usize];
          }
          op = Some(Op::Read { reg: pointer, len: buf.len() });
        }
      }
    }

    if let Some(op) = op {
      self.log.push(Txn { address, op });
    }
    Ok(())
  }
}
