use bitfield::bitfield;

/// Expected content of the part id register (little endian on the wire).
pub const PART_ID: u16 = 0x0160;

/// ENS160 register map.
pub(crate) mod addr {
    /// 2-byte part number, little endian.
    pub const PART_ID: u8 = 0x00;
    /// 1-byte operating mode.
    pub const OPMODE: u8 = 0x10;
    /// 1-byte INTn pin configuration.
    pub const CONFIG: u8 = 0x11;
    /// 1-byte additional system commands.
    pub const COMMAND: u8 = 0x12;
    /// 2-byte host ambient temperature input.
    pub const TEMP_IN: u8 = 0x13;
    /// 2-byte host relative humidity input.
    pub const RH_IN: u8 = 0x15;
    /// 1-byte device status.
    pub const DEVICE_STATUS: u8 = 0x20;
    /// 1-byte air quality index according to UBA.
    pub const DATA_AQI: u8 = 0x21;
    /// 2-byte TVOC concentration in ppb.
    pub const DATA_TVOC: u8 = 0x22;
    /// 2-byte ethanol concentration in ppb. Shares its address with TVOC.
    pub const DATA_ETOH: u8 = 0x22;
    /// 2-byte equivalent CO2 concentration in ppm.
    pub const DATA_ECO2: u8 = 0x24;
    /// 8-byte baseline resistances, four little endian words.
    pub const DATA_BL: u8 = 0x28;
    /// 2-byte temperature used in the calculations.
    pub const DATA_T: u8 = 0x30;
    /// 2-byte relative humidity used in the calculations.
    pub const DATA_RH: u8 = 0x32;
    /// First of the eight general purpose read registers.
    pub const GPR_READ0: u8 = 0x48;
    /// General purpose read register holding the firmware major version.
    pub const GPR_READ4: u8 = 0x4C;
}

/// Operating mode of the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OperatingMode {
    /// DEEP SLEEP mode (low power standby).
    DeepSleep = 0x00,
    /// IDLE mode (low power). Configuration registers are writable.
    Idle = 0x01,
    /// STANDARD gas sensing mode.
    Standard = 0x02,
    /// Transient reset request.
    Reset = 0xF0,
}

impl TryFrom<u8> for OperatingMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::DeepSleep),
            0x01 => Ok(Self::Idle),
            0x02 => Ok(Self::Standard),
            0xF0 => Ok(Self::Reset),
            other => Err(other),
        }
    }
}

/// Values of the command register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// No operation / normal operation.
    Normal = 0x00,
    /// Load the firmware version into GPR_READ4..6.
    GetAppVersion = 0x0E,
    /// Clear the general purpose read registers.
    ClearGpr = 0xCC,
}

/// Validity of the reported data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityFlag {
    /// Normal operation.
    Normal,
    /// Warm-up phase, the first three minutes after power-on.
    WarmUp,
    /// Initial start-up phase, the first full hour of operation, once in the sensor lifetime.
    InitialStartUp,
    /// Invalid output.
    Invalid,
}

impl From<u8> for ValidityFlag {
    fn from(v: u8) -> Self {
        match v & 0b11 {
            0b00 => Self::Normal,
            0b01 => Self::WarmUp,
            0b10 => Self::InitialStartUp,
            _ => Self::Invalid,
        }
    }
}

/// Output driver of the INTn pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptPinDriver {
    #[default]
    OpenDrain,
    PushPull,
}

impl From<InterruptPinDriver> for u8 {
    fn from(d: InterruptPinDriver) -> u8 {
        match d {
            InterruptPinDriver::OpenDrain => 0,
            InterruptPinDriver::PushPull => 1,
        }
    }
}

impl From<u8> for InterruptPinDriver {
    fn from(b: u8) -> Self {
        match b {
            1 => Self::PushPull,
            _ => Self::OpenDrain,
        }
    }
}

/// Active level of the INTn pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptPinPolarity {
    #[default]
    ActiveLow,
    ActiveHigh,
}

impl From<InterruptPinPolarity> for u8 {
    fn from(p: InterruptPinPolarity) -> u8 {
        match p {
            InterruptPinPolarity::ActiveLow => 0,
            InterruptPinPolarity::ActiveHigh => 1,
        }
    }
}

impl From<u8> for InterruptPinPolarity {
    fn from(b: u8) -> Self {
        match b {
            1 => Self::ActiveHigh,
            _ => Self::ActiveLow,
        }
    }
}

bitfield! {
    /// Snapshot of the DEVICE_STATUS register.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct StatusRegister(u8);
    impl Debug;
    /// New data is available in the GPR_READ registers.
    pub new_gpr_data, _: 0;
    /// New data is available in the DATA_x registers.
    pub new_data, _: 1;
    pub u8, into ValidityFlag, validity_state, _: 3, 2;
    /// An error was detected, e.g. an invalid operating mode was selected.
    pub error, _: 6;
    /// An operating mode is running.
    pub mode, _: 7;
}

impl StatusRegister {
    /// Wraps a raw DEVICE_STATUS value.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw DEVICE_STATUS value.
    pub fn bits(&self) -> u8 {
        self.0
    }
}

bitfield! {
    /// Content of the CONFIG register controlling the INTn pin.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct InterruptConfigRegister(u8);
    impl Debug;
    /// INTn pin is enabled.
    pub irq_enabled, set_irq_enabled: 0;
    /// INTn asserts when new data is available in the DATA_x registers.
    pub irq_data_enabled, set_irq_data_enabled: 1;
    /// INTn asserts when new data is available in the GPR_READ registers.
    pub irq_gpr_enabled, set_irq_gpr_enabled: 3;
    pub u8, from into InterruptPinDriver, irq_pin_driver, set_irq_pin_driver: 5, 5;
    pub u8, from into InterruptPinPolarity, irq_pin_polarity, set_irq_pin_polarity: 6, 6;
}

impl InterruptConfigRegister {
    /// Bits 2, 4 and 7 are reserved and must be written as zero.
    const RESERVED_MASK: u8 = 0b1001_0100;

    /// Wraps a raw CONFIG value, reserved bits included.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw CONFIG value as read, reserved bits included.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Register value with all reserved bits cleared, as it goes on the wire.
    pub fn to_writable(&self) -> u8 {
        self.0 & !Self::RESERVED_MASK
    }
}
