//! Register-access driver for the Exar `XRA1201` / `XRA1201P` 16-bit I2C GPIO expander.
//!
//! Every GPIO function of the chip (state, output value, polarity, direction, pull-ups, interrupt
//! configuration, ...) is a 16-bit value spread over two 8-bit registers.  The driver splits and
//! combines these values, bit _n_ always being pin P_n_.
//!
//! [`Driver`] is the register access layer and takes the device id (0 to 31) on every call.
//! [`Xra1201`] wraps it in a [`DriverMutex`] and hands out [`Device`] handles bound to one chip:
//!
//! ```
//! # use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
//! # let mut i2c = Mock::new(&[
//! #     Transaction::write(0x15, vec![0x06, 0xff]),
//! #     Transaction::write(0x15, vec![0x07, 0x00]),
//! #     Transaction::write(0x15, vec![0x02, 0x01]),
//! #     Transaction::write(0x15, vec![0x03, 0x80]),
//! #     Transaction::write_read(0x15, vec![0x00], vec![0x01]),
//! #     Transaction::write_read(0x15, vec![0x01], vec![0x80]),
//! # ]);
//! let xra = xra1201::Xra1201::new(i2c.clone());
//! let mut dev = xra.device(5);
//!
//! // P8-P15 outputs, P0-P7 inputs
//! dev.set_pin_direction(0x00ff).unwrap();
//! dev.set_output_value(0x8001).unwrap();
//! assert_eq!(dev.get_gpio_state().unwrap(), 0x8001);
//! # i2c.done();
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

mod bus;
pub mod dev;
mod driver;
mod mutex;
pub mod regs;

pub use bus::I2cBus;
pub use driver::Driver;
pub use mutex::DriverMutex;
pub use regs::{slave_address, Register, Variant, BASE_ADDRESS, MAX_DEVICE_ID};

pub(crate) use bus::I2cExt;

pub use dev::xra1201::{Device, Xra1201};
