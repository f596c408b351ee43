//! Register map of the `XRA1201`.
//!
//! Every logical function of the chip spans two 8-bit registers: "register 1" holds pins P0-P7
//! and "register 2", located at the next address, holds pins P8-P15.

/// Base of the 7-bit slave address.  The device id is added on top of this.
pub const BASE_ADDRESS: u8 = 0x10;

/// Highest device id; the address pins allow 32 chips on one bus.
pub const MAX_DEVICE_ID: u8 = 31;

/// Highest valid register address (`IFR2`).
pub(crate) const LAST_REGISTER: u8 = 0x15;

/// 7-bit I2C slave address of the chip with device id `id`.
pub const fn slave_address(id: u8) -> u8 {
    BASE_ADDRESS + id
}

/// Chip variant.
///
/// The variants only differ in the power-up default of the pull-up register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// `XRA1201`, pull-ups disabled at power-up.
    #[default]
    Xra1201,
    /// `XRA1201P`, pull-ups enabled at power-up.
    Xra1201P,
}

/// The 16-bit logical registers.  The discriminant is the "register 1" (P0-P7) address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// GSR: GPIO state (read-only).  Reading it clears the interrupt output.
    GpioState = 0x00,
    /// OCR: output control, the level driven on output pins
    OutputControl = 0x02,
    /// PIR: input polarity inversion: 0=as-is; 1=inverted
    InputPolarityInversion = 0x04,
    /// GCR: GPIO configuration: 0=output; 1=input
    GpioConfiguration = 0x06,
    /// PUR: internal pull-up enable for input pins
    InputPullUpEnable = 0x08,
    /// IER: input interrupt enable
    InputInterruptEnable = 0x0A,
    /// TSCR: output three-state control: 1=output driver disabled
    OutputThreeStateControl = 0x0C,
    /// ISR: input interrupt status (read-only)
    InputInterruptStatus = 0x0E,
    /// REIR: interrupt on rising edge enable
    RisingEdgeInterruptEnable = 0x10,
    /// FEIR: interrupt on falling edge enable
    FallingEdgeInterruptEnable = 0x12,
    /// IFR: input filter enable
    InputFilterEnable = 0x14,
}

impl Register {
    /// Every register pair, in address order.
    pub const ALL: [Register; 11] = [
        Register::GpioState,
        Register::OutputControl,
        Register::InputPolarityInversion,
        Register::GpioConfiguration,
        Register::InputPullUpEnable,
        Register::InputInterruptEnable,
        Register::OutputThreeStateControl,
        Register::InputInterruptStatus,
        Register::RisingEdgeInterruptEnable,
        Register::FallingEdgeInterruptEnable,
        Register::InputFilterEnable,
    ];

    /// Address of the register holding P0-P7.
    pub const fn low(self) -> u8 {
        self as u8
    }

    /// Address of the register holding P8-P15.
    pub const fn high(self) -> u8 {
        self as u8 + 1
    }

    /// GSR and ISR only reflect the chip's state and must not be written.
    pub const fn is_read_only(self) -> bool {
        matches!(self, Register::GpioState | Register::InputInterruptStatus)
    }

    /// Value of the register after power-up, as given in the datasheet.
    ///
    /// `None` for the GPIO state register, which mirrors the pins.
    pub const fn default_value(self, variant: Variant) -> Option<u16> {
        match self {
            Register::GpioState => None,
            Register::OutputControl => Some(0xFFFF),
            Register::InputPolarityInversion => Some(0x0000),
            Register::GpioConfiguration => Some(0xFFFF),
            Register::InputPullUpEnable => match variant {
                Variant::Xra1201 => Some(0x0000),
                Variant::Xra1201P => Some(0xFFFF),
            },
            Register::InputInterruptEnable => Some(0x0000),
            Register::OutputThreeStateControl => Some(0x0000),
            Register::InputInterruptStatus => Some(0x0000),
            Register::RisingEdgeInterruptEnable => Some(0x0000),
            Register::FallingEdgeInterruptEnable => Some(0x0000),
            Register::InputFilterEnable => Some(0xFFFF),
        }
    }
}

impl From<Register> for u8 {
    fn from(r: Register) -> u8 {
        r as u8
    }
}
