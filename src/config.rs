use crate::registers::{InterruptPinDriver, InterruptPinPolarity};

/// I2C address with the ADDR pin pulled low.
pub const I2C_ADDRESS_LOW: u8 = 0x52;
/// I2C address with the ADDR pin pulled high.
pub const I2C_ADDRESS_HIGH: u8 = 0x53;
/// Default SCL clock in Hz.
pub const DEFAULT_BUS_SPEED_HZ: u32 = 100_000;

/// Device configuration, copied into the driver on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// 7-bit I2C address.
    pub address: u8,
    /// SCL clock the bus was set up with. The bus owner configures the clock,
    /// the driver only reports it.
    pub bus_speed_hz: u32,
    /// Enable the INTn pin.
    pub irq_enabled: bool,
    /// Assert INTn when new data is available in the DATA_x registers.
    pub irq_data_enabled: bool,
    /// Assert INTn when new data is available in the GPR_READ registers.
    pub irq_gpr_enabled: bool,
    /// INTn output driver.
    pub irq_pin_driver: InterruptPinDriver,
    /// INTn active level.
    pub irq_pin_polarity: InterruptPinPolarity,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            address: I2C_ADDRESS_HIGH,
            bus_speed_hz: DEFAULT_BUS_SPEED_HZ,
            irq_enabled: false,
            irq_data_enabled: false,
            irq_gpr_enabled: false,
            irq_pin_driver: InterruptPinDriver::OpenDrain,
            irq_pin_polarity: InterruptPinPolarity::ActiveLow,
        }
    }
}

impl DeviceConfig {
    /// Addresses above 0x7F cannot be expressed in 7-bit addressing.
    pub(crate) fn is_valid(&self) -> bool {
        self.address <= 0x7F
    }
}
