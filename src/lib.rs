//! This crate provides a platform agnostic `no_std` driver for the ScioSense ENS160
//! digital metal-oxide multi-gas sensor. The driver is compatible with the
//! [`embedded-hal`](https://crates.io/crates/embedded-hal) 1.0 traits.
//!
//! ## Supported features
//! * Probe, soft-reset and interrupt pin setup on creation
//! * Switch between deep sleep, idle and standard operating modes
//! * Poll for and read calculated air quality data (AQI-UBA, TVOC, ETOH, eCO2)
//! * Poll for and read raw sensing and baseline resistances
//! * Get/set temperature and humidity compensation
//! * Read the device status, part id and firmware version
//! * Look up the UBA classification of an air quality index
//!
//! ## Usage
//!
//! The driver owns an I2C bus (or a shared-bus device proxy), a [`DelayNs`]
//! implementation and a monotonic [`Clock`] used to bound data-ready polling.
//!
//! ```ignore
//! use ens160_rs::{DeviceConfig, Ens160};
//!
//! let mut sensor = Ens160::new(i2c, delay, clock, DeviceConfig::default())?;
//! sensor.set_compensation_factors(22.5, 41.0)?;
//! let data = sensor.get_measurement()?;
//! log::info!("AQI {} ({})", data.uba_aqi as u8, data.uba_aqi.definition().rating);
//! ```
//!
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

mod aqi;
mod codec;
mod config;
mod ens160;
mod error;
mod registers;
mod timing;
mod types;

pub use aqi::{index_to_definition, AqiUbaIndex, AqiUbaRow, AQI_UBA_DEFINITIONS};
pub use codec::{
    decode_humidity, decode_resistance, decode_temperature, encode_humidity, encode_temperature,
};
pub use config::{DeviceConfig, DEFAULT_BUS_SPEED_HZ, I2C_ADDRESS_HIGH, I2C_ADDRESS_LOW};
pub use ens160::Ens160;
pub use error::Error;
pub use registers::{
    Command, InterruptConfigRegister, InterruptPinDriver, InterruptPinPolarity, OperatingMode,
    StatusRegister, ValidityFlag, PART_ID,
};
pub use timing::Clock;
pub use types::{AirQualityData, AirQualityRawData, CompensationFactors, FirmwareVersion};

/// Version of this driver crate.
pub const DRIVER_VERSION: &str = env!("CARGO_PKG_VERSION");
