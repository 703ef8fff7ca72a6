use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use log::{debug, error, warn};

use crate::aqi::AqiUbaIndex;
use crate::codec;
use crate::config::DeviceConfig;
use crate::error::Error;
use crate::registers::{
    addr, Command, InterruptConfigRegister, OperatingMode, StatusRegister, ValidityFlag, PART_ID,
};
use crate::timing::{self, Clock};
use crate::types::{AirQualityData, AirQualityRawData, CompensationFactors, FirmwareVersion};

const TEMPERATURE_MIN: f32 = -40.0;
const TEMPERATURE_MAX: f32 = 125.0;
const HUMIDITY_MIN: f32 = 0.0;
const HUMIDITY_MAX: f32 = 100.0;

/// Shorthand for all functions returning an error in this module.
type Result<T, E> = core::result::Result<T, Error<E>>;

/// ENS160 device driver.
///
/// One instance drives one physical sensor. All operations are blocking and
/// include the settle delays the device needs; callers sharing an instance
/// across tasks have to serialize access themselves.
pub struct Ens160<I2C, D, C> {
    i2c: I2C,
    delay: D,
    clock: C,
    config: DeviceConfig,
    part_id: u16,
}

impl<I2C, D, C> Ens160<I2C, D, C>
where
    I2C: I2c,
    D: DelayNs,
    C: Clock,
{
    /// Probes, resets and configures the sensor.
    ///
    /// After the power-up delay the device address is probed, the reset sequence
    /// applies the interrupt configuration from `config` and leaves the sensor in
    /// standard mode, and the part id is read and cached.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if the address is not a 7-bit address,
    /// [`Error::DeviceNotFound`] if the probe is not acknowledged, otherwise any
    /// transport failure. On failure the bus handle is dropped together with the
    /// partially set up driver, a half initialized driver is never returned.
    pub fn new(i2c: I2C, delay: D, clock: C, config: DeviceConfig) -> Result<Self, I2C::Error> {
        if !config.is_valid() {
            error!("ENS160 address {:#04x} is not a 7-bit address", config.address);
            return Err(Error::InvalidArgument);
        }

        let mut sensor = Self {
            i2c,
            delay,
            clock,
            config,
            part_id: 0,
        };

        sensor.delay.delay_ms(timing::POWER_UP_DELAY_MS);
        sensor.probe()?;

        if let Err(e) = sensor.initialize() {
            error!("ENS160 initialization failed: {:?}", e);
            return Err(e);
        }

        Ok(sensor)
    }

    fn probe(&mut self) -> Result<(), I2C::Error> {
        let address = self.config.address;
        self.i2c.write(address, &[]).map_err(|e| match e.kind() {
            ErrorKind::NoAcknowledge(_) => {
                error!("ENS160 not found at address {:#04x}", address);
                Error::DeviceNotFound { address }
            }
            _ => Error::TransportFailure(e),
        })?;

        debug!(
            "ENS160 found at {:#04x} ({} Hz bus)",
            address, self.config.bus_speed_hz
        );
        Ok(())
    }

    fn initialize(&mut self) -> Result<(), I2C::Error> {
        self.delay.delay_ms(timing::CMD_DELAY_MS);

        self.reset()?;

        self.part_id = self.read_part_id()?;
        if self.part_id != PART_ID {
            warn!(
                "ENS160 unexpected part id {:#06x}, expected {:#06x}",
                self.part_id, PART_ID
            );
        }

        self.delay.delay_ms(timing::APP_START_DELAY_MS);
        Ok(())
    }

    /// Soft-resets the sensor and restores the configured interrupt setup.
    ///
    /// The sequence is: reset mode, read back the interrupt configuration,
    /// idle mode, clear the general purpose registers, write the interrupt
    /// configuration and finally enter standard mode.
    pub fn reset(&mut self) -> Result<(), I2C::Error> {
        self.set_mode_register(OperatingMode::Reset)?;
        self.delay.delay_ms(timing::RESET_DELAY_MS);

        let mut irq_config = self.get_interrupt_config()?;

        // configuration registers only take writes in idle mode
        self.enable_idle_mode()?;
        self.clear_general_purpose_registers()?;

        irq_config.set_irq_enabled(self.config.irq_enabled);
        irq_config.set_irq_data_enabled(self.config.irq_data_enabled);
        irq_config.set_irq_gpr_enabled(self.config.irq_gpr_enabled);
        irq_config.set_irq_pin_driver(self.config.irq_pin_driver);
        irq_config.set_irq_pin_polarity(self.config.irq_pin_polarity);
        self.set_interrupt_config(irq_config)?;

        self.enable_standard_mode()?;

        debug!("ENS160 reset complete");
        Ok(())
    }

    /// Waits for new data and reads the calculated air quality values.
    ///
    /// # Errors
    /// [`Error::Timeout`] if the sensor does not report new data within 1.5 s,
    /// e.g. because it is not in standard mode.
    pub fn get_measurement(&mut self) -> Result<AirQualityData, I2C::Error> {
        self.wait_for_status(StatusRegister::new_data)?;

        let aqi = self.read_byte(addr::DATA_AQI)?;
        let tvoc = self.read_word(addr::DATA_TVOC)?;
        let etoh = self.read_word(addr::DATA_ETOH)?;
        let eco2 = self.read_word(addr::DATA_ECO2)?;

        self.delay.delay_ms(timing::CMD_DELAY_MS);

        Ok(AirQualityData {
            uba_aqi: AqiUbaIndex::from_register(aqi),
            tvoc,
            etoh,
            eco2,
        })
    }

    /// Waits for new GPR data and reads the raw sensing and baseline resistances.
    pub fn get_raw_measurement(&mut self) -> Result<AirQualityRawData, I2C::Error> {
        self.wait_for_status(StatusRegister::new_gpr_data)?;

        let resistance = self.read_resistances(addr::GPR_READ0)?;
        self.delay.delay_ms(timing::CMD_DELAY_MS);

        let baseline = self.read_resistances(addr::DATA_BL)?;
        self.delay.delay_ms(timing::CMD_DELAY_MS);

        Ok(AirQualityRawData {
            resistance,
            baseline,
        })
    }

    /// Polls the status register every millisecond until `ready` holds.
    fn wait_for_status(&mut self, ready: fn(&StatusRegister) -> bool) -> Result<(), I2C::Error> {
        let start = self.clock.now_us();

        loop {
            let status = self.read_status()?;
            if ready(&status) {
                return Ok(());
            }

            self.delay.delay_ms(timing::DATA_POLL_INTERVAL_MS);

            if timing::has_elapsed(start, self.clock.now_us(), timing::DATA_POLL_TIMEOUT_MS) {
                warn!(
                    "ENS160 no new data within {} ms (status {:#04x})",
                    timing::DATA_POLL_TIMEOUT_MS,
                    status.bits()
                );
                return Err(Error::Timeout);
            }
        }
    }

    fn read_resistances(&mut self, register: u8) -> Result<[f64; 4], I2C::Error> {
        let mut buffer = [0u8; 8];
        self.read_into(register, &mut buffer)?;

        let mut ohms = [0.0; 4];
        for (value, word) in ohms.iter_mut().zip(buffer.chunks_exact(2)) {
            *value = codec::decode_resistance(u16::from_le_bytes([word[0], word[1]]));
        }
        Ok(ohms)
    }

    /// Returns the compensation temperature and humidity last written by the host.
    pub fn get_compensation_factors(&mut self) -> Result<CompensationFactors, I2C::Error> {
        let temperature = self.read_word(addr::TEMP_IN)?;
        let humidity = self.read_word(addr::RH_IN)?;

        self.delay.delay_ms(timing::CMD_DELAY_MS);

        Ok(CompensationFactors {
            temperature: codec::decode_temperature(temperature),
            humidity: codec::decode_humidity(humidity),
        })
    }

    /// Writes ambient temperature [°C] and relative humidity [%RH] for compensation.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if the temperature is outside -40..=125 °C or
    /// the humidity outside 0..=100 %RH. Nothing is written in that case.
    pub fn set_compensation_factors(
        &mut self,
        temperature: f32,
        humidity: f32,
    ) -> Result<(), I2C::Error> {
        if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&temperature) {
            warn!("ENS160 compensation temperature {} °C out of range", temperature);
            return Err(Error::InvalidArgument);
        }
        if !(HUMIDITY_MIN..=HUMIDITY_MAX).contains(&humidity) {
            warn!("ENS160 compensation humidity {} %RH out of range", humidity);
            return Err(Error::InvalidArgument);
        }

        self.write_word(addr::TEMP_IN, codec::encode_temperature(temperature))?;
        self.write_word(addr::RH_IN, codec::encode_humidity(humidity))?;

        self.delay.delay_ms(timing::CMD_DELAY_MS);
        Ok(())
    }

    /// Returns the temperature and humidity the sensor actually uses in its calculations.
    pub fn get_applied_compensation(&mut self) -> Result<CompensationFactors, I2C::Error> {
        let temperature = self.read_word(addr::DATA_T)?;
        let humidity = self.read_word(addr::DATA_RH)?;

        self.delay.delay_ms(timing::CMD_DELAY_MS);

        Ok(CompensationFactors {
            temperature: codec::decode_temperature(temperature),
            humidity: codec::decode_humidity(humidity),
        })
    }

    /// Reads the part id register. The value read during initialization is
    /// available through [`Ens160::part_id`].
    pub fn read_part_id(&mut self) -> Result<u16, I2C::Error> {
        let part_id = self.read_word(addr::PART_ID)?;
        self.delay.delay_ms(timing::CMD_DELAY_MS);
        Ok(part_id)
    }

    /// Reads the firmware version. The sensor has to be in idle mode.
    pub fn get_firmware_version(&mut self) -> Result<FirmwareVersion, I2C::Error> {
        self.set_command(Command::GetAppVersion)?;

        let mut buffer = [0u8; 3];
        self.read_into(addr::GPR_READ4, &mut buffer)?;
        self.delay.delay_ms(timing::CMD_DELAY_MS);

        Ok(FirmwareVersion {
            major: buffer[0],
            minor: buffer[1],
            release: buffer[2],
        })
    }

    /// Reads the status register.
    pub fn get_status(&mut self) -> Result<StatusRegister, I2C::Error> {
        let status = self.read_status()?;
        self.delay.delay_ms(timing::CMD_DELAY_MS);
        Ok(status)
    }

    /// Returns `true` if new data is available in the DATA_x registers.
    pub fn get_data_status(&mut self) -> Result<bool, I2C::Error> {
        self.get_status().map(|status| status.new_data())
    }

    /// Returns `true` if new data is available in the GPR_READ registers.
    pub fn get_gpr_data_status(&mut self) -> Result<bool, I2C::Error> {
        self.get_status().map(|status| status.new_gpr_data())
    }

    /// Returns the validity of the reported data.
    pub fn get_validity_status(&mut self) -> Result<ValidityFlag, I2C::Error> {
        self.get_status().map(|status| status.validity_state())
    }

    /// Returns `true` if the sensor flagged an error, e.g. an invalid operating mode.
    pub fn get_error_status(&mut self) -> Result<bool, I2C::Error> {
        self.get_status().map(|status| status.error())
    }

    /// Returns `true` if an operating mode is running.
    pub fn get_mode_status(&mut self) -> Result<bool, I2C::Error> {
        self.get_status().map(|status| status.mode())
    }

    /// Reads the operating mode register.
    ///
    /// # Errors
    /// [`Error::InvalidMode`] if the register holds an undefined mode.
    pub fn get_operating_mode(&mut self) -> Result<OperatingMode, I2C::Error> {
        let mode = self.read_byte(addr::OPMODE)?;
        self.delay.delay_ms(timing::MODE_DELAY_MS);
        OperatingMode::try_from(mode).map_err(Error::InvalidMode)
    }

    /// Switches the operating mode. [`OperatingMode::Reset`] runs the full
    /// [`Ens160::reset`] sequence.
    pub fn set_operating_mode(&mut self, mode: OperatingMode) -> Result<(), I2C::Error> {
        match mode {
            OperatingMode::Reset => self.reset(),
            mode => self.set_mode_register(mode),
        }
    }

    /// Enters standard gas sensing mode.
    pub fn enable_standard_mode(&mut self) -> Result<(), I2C::Error> {
        self.set_mode_register(OperatingMode::Standard)
    }

    /// Enters idle mode. Required before writing configuration or reading the firmware version.
    pub fn enable_idle_mode(&mut self) -> Result<(), I2C::Error> {
        self.set_mode_register(OperatingMode::Idle)
    }

    /// Enters deep sleep, the low power standby mode.
    pub fn enable_deep_sleep_mode(&mut self) -> Result<(), I2C::Error> {
        self.set_mode_register(OperatingMode::DeepSleep)
    }

    /// Reads the interrupt pin configuration register.
    pub fn get_interrupt_config(&mut self) -> Result<InterruptConfigRegister, I2C::Error> {
        let config = self.read_byte(addr::CONFIG)?;
        self.delay.delay_ms(timing::CMD_DELAY_MS);
        Ok(InterruptConfigRegister::from_bits(config))
    }

    /// Writes the interrupt pin configuration register. Reserved bits are
    /// always written as zero.
    pub fn set_interrupt_config(
        &mut self,
        config: InterruptConfigRegister,
    ) -> Result<(), I2C::Error> {
        self.write_byte(addr::CONFIG, config.to_writable())?;
        self.delay.delay_ms(timing::CMD_DELAY_MS);
        Ok(())
    }

    /// Clears the general purpose read registers.
    pub fn clear_general_purpose_registers(&mut self) -> Result<(), I2C::Error> {
        self.set_command(Command::Normal)?;
        self.set_command(Command::ClearGpr)?;
        self.delay.delay_ms(timing::CLEAR_GPR_DELAY_MS);
        self.set_command(Command::Normal)
    }

    fn set_command(&mut self, command: Command) -> Result<(), I2C::Error> {
        self.write_byte(addr::COMMAND, command as u8)?;
        self.delay.delay_ms(timing::CMD_DELAY_MS);
        Ok(())
    }

    fn set_mode_register(&mut self, mode: OperatingMode) -> Result<(), I2C::Error> {
        self.write_byte(addr::OPMODE, mode as u8)?;
        self.delay.delay_ms(timing::MODE_DELAY_MS);
        Ok(())
    }

    /// Status read without settle delay, used by the polling loop.
    fn read_status(&mut self) -> Result<StatusRegister, I2C::Error> {
        self.read_byte(addr::DEVICE_STATUS)
            .map(StatusRegister::from_bits)
    }

    fn read_into(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), I2C::Error> {
        self.i2c
            .write_read(self.config.address, &[register], buffer)
            .map_err(Error::TransportFailure)
    }

    fn read_byte(&mut self, register: u8) -> Result<u8, I2C::Error> {
        let mut buffer = [0u8; 1];
        self.read_into(register, &mut buffer)?;
        Ok(buffer[0])
    }

    fn read_word(&mut self, register: u8) -> Result<u16, I2C::Error> {
        let mut buffer = [0u8; 2];
        self.read_into(register, &mut buffer)?;
        Ok(u16::from_le_bytes(buffer))
    }

    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c
            .write(self.config.address, &[register, value])
            .map_err(Error::TransportFailure)
    }

    fn write_word(&mut self, register: u8, value: u16) -> Result<(), I2C::Error> {
        let [lo, hi] = value.to_le_bytes();
        self.i2c
            .write(self.config.address, &[register, lo, hi])
            .map_err(Error::TransportFailure)
    }
}

impl<I2C, D, C> Ens160<I2C, D, C> {
    /// Part id read during initialization.
    pub fn part_id(&self) -> u16 {
        self.part_id
    }

    /// Configuration the driver was created with.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Removes the driver from the bus and hands the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Releases the bus and drops the driver with everything it owns.
    pub fn destroy(self) {
        debug!("ENS160 at {:#04x} destroyed", self.config.address);
        drop(self.release());
    }
}
