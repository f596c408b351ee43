//! Support for the `XRA1201` / `XRA1201P` "16-bit I2C GPIO expander"
//!
//! Up to 32 of these chips can share one I2C bus.  [`Xra1201`] owns the bus and hands out a
//! [`Device`] handle per chip.  Each handle method locks the driver mutex for the full 16-bit
//! access, so the two register halves are never interleaved with accesses made through another
//! handle of the same `Xra1201`.
use crate::driver::Driver;
use crate::regs::{self, Register};

/// `XRA1201` "16-bit I2C GPIO expander", all chips on one bus
pub struct Xra1201<M>(M);

impl<I2C> Xra1201<core::cell::RefCell<Driver<I2C>>>
where
    I2C: crate::I2cBus,
{
    pub fn new(i2c: I2C) -> Self {
        Self::with_mutex(i2c)
    }
}

impl<I2C, M> Xra1201<M>
where
    I2C: crate::I2cBus,
    M: crate::DriverMutex<Driver = Driver<I2C>>,
{
    pub fn with_mutex(i2c: I2C) -> Self {
        Self(crate::DriverMutex::create(Driver::new(i2c)))
    }

    /// Handle for the chip with device id `id` (0 to 31).
    pub fn device(&self, id: u8) -> Device<'_, M> {
        debug_assert!(id <= regs::MAX_DEVICE_ID, "invalid XRA1201 device id {}", id);
        debug!("xra1201: device {=u8} at {=u8:#x}", id, regs::slave_address(id));
        Device {
            id,
            driver: &self.0,
        }
    }

    /// Run `f` with exclusive access to the register driver.
    ///
    /// `f` must not call back into a [`Device`] handle of this `Xra1201`; the mutex is already
    /// held, so a `RefCell` panics and a `std::sync::Mutex` deadlocks.
    pub fn lock<R, F: FnOnce(&mut Driver<I2C>) -> R>(&self, f: F) -> R {
        self.0.lock(f)
    }

    pub fn into_inner(self) -> M {
        self.0
    }
}

/// One `XRA1201` on the bus.
///
/// Obtained from [`Xra1201::device()`].  The methods mirror those of [`Driver`] with the device id
/// already filled in.
pub struct Device<'a, M> {
    id: u8,
    driver: &'a M,
}

impl<'a, I2C, M> Device<'a, M>
where
    I2C: crate::I2cBus,
    M: crate::DriverMutex<Driver = Driver<I2C>>,
{
    pub fn id(&self) -> u8 {
        self.id
    }

    /// 7-bit slave address of this chip.
    pub fn address(&self) -> u8 {
        regs::slave_address(self.id)
    }

    pub fn write_reg<R: Into<u8>>(&mut self, addr: R, data: u16) -> Result<(), I2C::BusError> {
        self.driver.lock(|drv| drv.write_reg(self.id, addr, data))
    }

    pub fn read_reg<R: Into<u8>>(&self, addr: R) -> Result<u16, I2C::BusError> {
        self.driver.lock(|drv| drv.read_reg(self.id, addr))
    }

    pub fn read(&self, reg: Register) -> Result<u16, I2C::BusError> {
        self.driver.lock(|drv| drv.read(self.id, reg))
    }

    pub fn write(&mut self, reg: Register, data: u16) -> Result<(), I2C::BusError> {
        self.driver.lock(|drv| drv.write(self.id, reg, data))
    }

    /// Current level of all pins.  Clears the interrupt output of the chip.
    pub fn get_gpio_state(&self) -> Result<u16, I2C::BusError> {
        self.read(Register::GpioState)
    }

    pub fn set_output_value(&mut self, data: u16) -> Result<(), I2C::BusError> {
        self.write(Register::OutputControl, data)
    }

    pub fn get_output_value(&self) -> Result<u16, I2C::BusError> {
        self.read(Register::OutputControl)
    }

    pub fn set_input_polarity_inversion(&mut self, data: u16) -> Result<(), I2C::BusError> {
        self.write(Register::InputPolarityInversion, data)
    }

    pub fn get_input_polarity_inversion(&self) -> Result<u16, I2C::BusError> {
        self.read(Register::InputPolarityInversion)
    }

    /// `0` = output, `1` = input
    pub fn set_pin_direction(&mut self, data: u16) -> Result<(), I2C::BusError> {
        self.write(Register::GpioConfiguration, data)
    }

    pub fn get_pin_direction(&self) -> Result<u16, I2C::BusError> {
        self.read(Register::GpioConfiguration)
    }

    pub fn set_input_pullup_enable(&mut self, data: u16) -> Result<(), I2C::BusError> {
        self.write(Register::InputPullUpEnable, data)
    }

    pub fn get_input_pullup_enable(&self) -> Result<u16, I2C::BusError> {
        self.read(Register::InputPullUpEnable)
    }

    pub fn set_interrupt_enable(&mut self, data: u16) -> Result<(), I2C::BusError> {
        self.write(Register::InputInterruptEnable, data)
    }

    pub fn get_interrupt_enable(&self) -> Result<u16, I2C::BusError> {
        self.read(Register::InputInterruptEnable)
    }

    pub fn set_output_three_state_enable(&mut self, data: u16) -> Result<(), I2C::BusError> {
        self.write(Register::OutputThreeStateControl, data)
    }

    pub fn get_output_three_state_enable(&self) -> Result<u16, I2C::BusError> {
        self.read(Register::OutputThreeStateControl)
    }

    pub fn get_interrupt_status(&self) -> Result<u16, I2C::BusError> {
        self.read(Register::InputInterruptStatus)
    }

    pub fn set_interrupt_rising_edge_enable(&mut self, data: u16) -> Result<(), I2C::BusError> {
        self.write(Register::RisingEdgeInterruptEnable, data)
    }

    pub fn get_interrupt_rising_edge_enable(&self) -> Result<u16, I2C::BusError> {
        self.read(Register::RisingEdgeInterruptEnable)
    }

    pub fn set_interrupt_falling_edge_enable(&mut self, data: u16) -> Result<(), I2C::BusError> {
        self.write(Register::FallingEdgeInterruptEnable, data)
    }

    pub fn get_interrupt_falling_edge_enable(&self) -> Result<u16, I2C::BusError> {
        self.read(Register::FallingEdgeInterruptEnable)
    }

    pub fn set_interrupt_filter_enable(&mut self, data: u16) -> Result<(), I2C::BusError> {
        self.write(Register::InputFilterEnable, data)
    }

    pub fn get_interrupt_filter_enable(&self) -> Result<u16, I2C::BusError> {
        self.read(Register::InputFilterEnable)
    }
}
