use embedded_hal::i2c as hal_i2c;

/// Blanket trait for types implementing `i2c::I2c`
pub trait I2cBus: hal_i2c::I2c {
    type BusError: From<<Self as hal_i2c::ErrorType>::Error>;
}

impl<T, E> I2cBus for T
where
    T: hal_i2c::I2c<Error = E>,
    E: hal_i2c::Error,
{
    type BusError = E;
}

pub(crate) trait I2cExt {
    type Error;

    fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error>;
    fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error>;

    /// Write a 16-bit value as two single-byte writes, low byte to `reg`, high byte to `reg + 1`.
    fn write_reg16<R: Into<u8>>(
        &mut self,
        addr: u8,
        reg: R,
        value: u16,
    ) -> Result<(), Self::Error> {
        let reg = reg.into();
        self.write_reg(addr, reg, (value & 0xFF) as u8)?;
        self.write_reg(addr, reg + 1, ((value >> 8) & 0xFF) as u8)
    }

    /// Read two single-byte registers `reg` and `reg + 1` and combine them as `low | high << 8`.
    fn read_reg16<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u16, Self::Error> {
        let reg = reg.into();
        let low = self.read_reg(addr, reg)? as u16;
        let high = self.read_reg(addr, reg + 1)? as u16;
        Ok(low | (high << 8))
    }
}

impl<I2C: I2cBus> I2cExt for I2C {
    type Error = I2C::BusError;

    fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error> {
        let reg = reg.into();
        trace!("write {=u8:#x}: [{=u8:#x}] <- {=u8:#x}", addr, reg, value);
        self.write(addr, &[reg, value])?;
        Ok(())
    }

    fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error> {
        let reg = reg.into();
        let mut buf = [0x00];
        self.write_read(addr, &[reg], &mut buf)?;
        trace!("read {=u8:#x}: [{=u8:#x}] -> {=u8:#x}", addr, reg, buf[0]);
        Ok(buf[0])
    }
}
