//! Register access layer.
//!
//! [`Driver`] owns the I2C bus and talks to any of the up to 32 `XRA1201` chips on it.  Every
//! call names the chip by its device id (0 to 31), which is added to [`BASE_ADDRESS`] to form the
//! slave address.
//!
//! The 16-bit accessors are each two separate single-byte transactions, low byte first.  Nothing
//! is cached: getters always read the chip and setters always write it.
//!
//! [`BASE_ADDRESS`]: crate::regs::BASE_ADDRESS
use crate::regs::{self, Register};
use crate::I2cExt;

/// Register access layer for all `XRA1201` chips on one I2C bus.
pub struct Driver<I2C> {
    i2c: I2C,
}

impl<I2C> Driver<I2C> {
    /// Take ownership of the bus.  No transaction is issued.
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give back the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

fn address(id: u8) -> u8 {
    debug_assert!(id <= regs::MAX_DEVICE_ID, "invalid XRA1201 device id {}", id);
    regs::slave_address(id)
}

impl<I2C: crate::I2cBus> Driver<I2C> {
    /// Write the low byte of `data` to register `addr`.
    ///
    /// The register address is not checked, writing to one of the read-only registers (GSR or
    /// ISR) is up to the caller.
    pub fn write_reg<R: Into<u8>>(
        &mut self,
        id: u8,
        addr: R,
        data: u16,
    ) -> Result<(), I2C::BusError> {
        let addr = addr.into();
        debug_assert!(addr <= regs::LAST_REGISTER, "invalid XRA1201 register {:#x}", addr);
        self.i2c.write_reg(address(id), addr, data as u8)
    }

    /// Read register `addr`.  The upper byte of the result is always zero.
    pub fn read_reg<R: Into<u8>>(&mut self, id: u8, addr: R) -> Result<u16, I2C::BusError> {
        let addr = addr.into();
        debug_assert!(addr <= regs::LAST_REGISTER, "invalid XRA1201 register {:#x}", addr);
        Ok(self.i2c.read_reg(address(id), addr)? as u16)
    }

    /// Read both halves of `reg` and combine them to the 16-bit pin value.
    pub fn read(&mut self, id: u8, reg: Register) -> Result<u16, I2C::BusError> {
        self.i2c.read_reg16(address(id), reg)
    }

    /// Write the 16-bit pin value `data` to both halves of `reg`, P0-P7 first.
    pub fn write(&mut self, id: u8, reg: Register, data: u16) -> Result<(), I2C::BusError> {
        debug_assert!(!reg.is_read_only(), "{:?} is read-only", reg);
        self.i2c.write_reg16(address(id), reg, data)
    }

    /// Current level of all pins (GSR).
    ///
    /// Input pins are inverted as configured in the polarity inversion register, output pins
    /// report the last value written to the output control register.  Reading this clears the
    /// chip's interrupt output.
    pub fn get_gpio_state(&mut self, id: u8) -> Result<u16, I2C::BusError> {
        self.read(id, Register::GpioState)
    }

    /// Drive the output pins (OCR).
    pub fn set_output_value(&mut self, id: u8, data: u16) -> Result<(), I2C::BusError> {
        self.write(id, Register::OutputControl, data)
    }

    pub fn get_output_value(&mut self, id: u8) -> Result<u16, I2C::BusError> {
        self.read(id, Register::OutputControl)
    }

    /// Invert the value read back for input pins with their bit set (PIR).
    pub fn set_input_polarity_inversion(&mut self, id: u8, data: u16) -> Result<(), I2C::BusError> {
        self.write(id, Register::InputPolarityInversion, data)
    }

    pub fn get_input_polarity_inversion(&mut self, id: u8) -> Result<u16, I2C::BusError> {
        self.read(id, Register::InputPolarityInversion)
    }

    /// Pin direction (GCR): a `0` bit makes the pin an output, a `1` bit an input.
    pub fn set_pin_direction(&mut self, id: u8, data: u16) -> Result<(), I2C::BusError> {
        self.write(id, Register::GpioConfiguration, data)
    }

    pub fn get_pin_direction(&mut self, id: u8) -> Result<u16, I2C::BusError> {
        self.read(id, Register::GpioConfiguration)
    }

    /// Enable the internal pull-up of input pins (PUR).
    pub fn set_input_pullup_enable(&mut self, id: u8, data: u16) -> Result<(), I2C::BusError> {
        self.write(id, Register::InputPullUpEnable, data)
    }

    pub fn get_input_pullup_enable(&mut self, id: u8) -> Result<u16, I2C::BusError> {
        self.read(id, Register::InputPullUpEnable)
    }

    /// Enable interrupts on input pins (IER).
    pub fn set_interrupt_enable(&mut self, id: u8, data: u16) -> Result<(), I2C::BusError> {
        self.write(id, Register::InputInterruptEnable, data)
    }

    pub fn get_interrupt_enable(&mut self, id: u8) -> Result<u16, I2C::BusError> {
        self.read(id, Register::InputInterruptEnable)
    }

    /// Put output pins into three-state mode (TSCR).
    pub fn set_output_three_state_enable(
        &mut self,
        id: u8,
        data: u16,
    ) -> Result<(), I2C::BusError> {
        self.write(id, Register::OutputThreeStateControl, data)
    }

    pub fn get_output_three_state_enable(&mut self, id: u8) -> Result<u16, I2C::BusError> {
        self.read(id, Register::OutputThreeStateControl)
    }

    /// Pins which caused an interrupt (ISR).
    pub fn get_interrupt_status(&mut self, id: u8) -> Result<u16, I2C::BusError> {
        self.read(id, Register::InputInterruptStatus)
    }

    /// Generate interrupts on rising edges of input pins (REIR).
    pub fn set_interrupt_rising_edge_enable(
        &mut self,
        id: u8,
        data: u16,
    ) -> Result<(), I2C::BusError> {
        self.write(id, Register::RisingEdgeInterruptEnable, data)
    }

    pub fn get_interrupt_rising_edge_enable(&mut self, id: u8) -> Result<u16, I2C::BusError> {
        self.read(id, Register::RisingEdgeInterruptEnable)
    }

    /// Generate interrupts on falling edges of input pins (FEIR).
    pub fn set_interrupt_falling_edge_enable(
        &mut self,
        id: u8,
        data: u16,
    ) -> Result<(), I2C::BusError> {
        self.write(id, Register::FallingEdgeInterruptEnable, data)
    }

    pub fn get_interrupt_falling_edge_enable(&mut self, id: u8) -> Result<u16, I2C::BusError> {
        self.read(id, Register::FallingEdgeInterruptEnable)
    }

    /// Filter input pins before they generate interrupts (IFR).
    pub fn set_interrupt_filter_enable(&mut self, id: u8, data: u16) -> Result<(), I2C::BusError> {
        self.write(id, Register::InputFilterEnable, data)
    }

    pub fn get_interrupt_filter_enable(&mut self, id: u8) -> Result<u16, I2C::BusError> {
        self.read(id, Register::InputFilterEnable)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::Driver;
    use crate::regs::Register;
    use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    /// Register file of every chip on the bus.  Writes land in the register, reads echo it back.
    #[derive(Default)]
    pub(crate) struct FakeBus {
        pub regs: std::collections::HashMap<(u8, u8), u8>,
        pub log: Vec<(u8, Vec<u8>)>,
    }

    impl ErrorType for FakeBus {
        type Error = core::convert::Infallible;
    }

    impl I2c for FakeBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            let mut pointer = 0;
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        self.log.push((address, bytes.to_vec()));
                        pointer = bytes[0];
                        if let Some(value) = bytes.get(1) {
                            self.regs.insert((address, pointer), *value);
                        }
                    }
                    Operation::Read(buf) => {
                        for b in buf.iter_mut() {
                            *b = self.regs.get(&(address, pointer)).copied().unwrap_or(0);
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn output_value_round_trip() {
        let mut drv = Driver::new(FakeBus::default());
        for v in [0x0000, 0x0001, 0x00ff, 0x8000, 0xa55a, 0xffff] {
            drv.set_output_value(7, v).unwrap();
            assert_eq!(drv.get_output_value(7).unwrap(), v);
        }
    }

    #[test]
    fn pin_direction_round_trip() {
        let mut drv = Driver::new(FakeBus::default());
        drv.set_pin_direction(0, 0x00FF).unwrap();
        assert_eq!(drv.get_pin_direction(0).unwrap(), 0x00FF);
        // other chips stay untouched
        assert_eq!(drv.get_pin_direction(1).unwrap(), 0x0000);
    }

    #[test]
    fn getters_do_not_write() {
        let mut drv = Driver::new(FakeBus::default());
        for reg in Register::ALL {
            drv.read(3, reg).unwrap();
        }
        let bus = drv.release();
        assert!(bus.regs.is_empty());
        assert!(bus.log.iter().all(|(addr, bytes)| *addr == 0x13 && bytes.len() == 1));
        assert_eq!(bus.log.len(), 2 * Register::ALL.len());
    }

    #[test]
    fn setters_write_low_then_high() {
        let v: u16 = 0xbeef;
        let mut expectations = Vec::new();
        for reg in Register::ALL.iter().filter(|r| !r.is_read_only()) {
            expectations.push(mock_i2c::Transaction::write(0x19, vec![reg.low(), 0xef]));
            expectations.push(mock_i2c::Transaction::write(0x19, vec![reg.high(), 0xbe]));
        }
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut drv = Driver::new(bus.clone());
        drv.set_output_value(9, v).unwrap();
        drv.set_input_polarity_inversion(9, v).unwrap();
        drv.set_pin_direction(9, v).unwrap();
        drv.set_input_pullup_enable(9, v).unwrap();
        drv.set_interrupt_enable(9, v).unwrap();
        drv.set_output_three_state_enable(9, v).unwrap();
        drv.set_interrupt_rising_edge_enable(9, v).unwrap();
        drv.set_interrupt_falling_edge_enable(9, v).unwrap();
        drv.set_interrupt_filter_enable(9, v).unwrap();

        bus.done();
    }

    #[test]
    fn getters_combine_low_and_high() {
        let mut expectations = Vec::new();
        for reg in Register::ALL {
            expectations.push(mock_i2c::Transaction::write_read(
                0x2f,
                vec![reg.low()],
                vec![0x34],
            ));
            expectations.push(mock_i2c::Transaction::write_read(
                0x2f,
                vec![reg.high()],
                vec![0x12],
            ));
        }
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut drv = Driver::new(bus.clone());
        assert_eq!(drv.get_gpio_state(31).unwrap(), 0x1234);
        assert_eq!(drv.get_output_value(31).unwrap(), 0x1234);
        assert_eq!(drv.get_input_polarity_inversion(31).unwrap(), 0x1234);
        assert_eq!(drv.get_pin_direction(31).unwrap(), 0x1234);
        assert_eq!(drv.get_input_pullup_enable(31).unwrap(), 0x1234);
        assert_eq!(drv.get_interrupt_enable(31).unwrap(), 0x1234);
        assert_eq!(drv.get_output_three_state_enable(31).unwrap(), 0x1234);
        assert_eq!(drv.get_interrupt_status(31).unwrap(), 0x1234);
        assert_eq!(drv.get_interrupt_rising_edge_enable(31).unwrap(), 0x1234);
        assert_eq!(drv.get_interrupt_falling_edge_enable(31).unwrap(), 0x1234);
        assert_eq!(drv.get_interrupt_filter_enable(31).unwrap(), 0x1234);

        bus.done();
    }

    #[test]
    fn gpio_state() {
        let expectations = [
            mock_i2c::Transaction::write_read(0x15, vec![0x00], vec![0x81]),
            mock_i2c::Transaction::write_read(0x15, vec![0x01], vec![0x40]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut drv = Driver::new(bus.clone());
        assert_eq!(drv.get_gpio_state(5).unwrap(), 0x4081);

        bus.done();
    }

    #[test]
    fn interrupt_filter_enable() {
        let expectations = [
            mock_i2c::Transaction::write(0x12, vec![0x14, 0xff]),
            mock_i2c::Transaction::write(0x12, vec![0x15, 0xff]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut drv = Driver::new(bus.clone());
        drv.set_interrupt_filter_enable(2, 0xFFFF).unwrap();

        bus.done();
    }

    #[test]
    fn primitives() {
        let expectations = [
            // only the low byte is sent
            mock_i2c::Transaction::write(0x10, vec![0x08, 0xcd]),
            mock_i2c::Transaction::write_read(0x10, vec![0x08], vec![0xcd]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut drv = Driver::new(bus.clone());
        drv.write_reg(0, 0x08u8, 0xabcd).unwrap();
        assert_eq!(drv.read_reg(0, Register::InputPullUpEnable).unwrap(), 0x00cd);

        bus.done();
    }

    #[test]
    fn bus_errors_propagate() {
        let expectations = [
            mock_i2c::Transaction::write(0x10, vec![0x02, 0x00]).with_error(ErrorKind::Other),
            mock_i2c::Transaction::write_read(0x10, vec![0x0e], vec![0x01]),
            mock_i2c::Transaction::write_read(0x10, vec![0x0f], vec![0x00])
                .with_error(ErrorKind::Other),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut drv = Driver::new(bus.clone());
        // the high byte is never attempted after a failed low byte
        assert_eq!(drv.set_output_value(0, 0xff00), Err(ErrorKind::Other));
        assert_eq!(drv.get_interrupt_status(0), Err(ErrorKind::Other));

        bus.done();
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "invalid XRA1201 device id 32")]
    fn device_id_out_of_range() {
        let mut drv = Driver::new(FakeBus::default());
        let _ = drv.read(32, Register::OutputControl);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "invalid XRA1201 register 0x16")]
    fn register_out_of_range() {
        let mut drv = Driver::new(FakeBus::default());
        let _ = drv.write_reg(0, 0x16u8, 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "GpioState is read-only")]
    fn write_to_read_only_register() {
        let mut drv = Driver::new(FakeBus::default());
        let _ = drv.write(0, Register::GpioState, 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "InputInterruptStatus is read-only")]
    fn write_to_interrupt_status() {
        let mut drv = Driver::new(FakeBus::default());
        let _ = drv.write(0, Register::InputInterruptStatus, 0xffff);
    }
}
