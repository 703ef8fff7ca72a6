use crate::aqi::AqiUbaIndex;

/// ENS160 calculated air quality data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirQualityData {
    /// Air Quality Index according to UBA [1..5, 0 if unknown]
    pub uba_aqi: AqiUbaIndex,
    /// Total Volatile Organic Compounds [ppb] [0..65000]
    pub tvoc: u16,
    /// Ethanol concentration [ppb]
    pub etoh: u16,
    /// Equivalent CO2 concentration [ppm] [400..65000]
    pub eco2: u16,
}

/// ENS160 raw resistance data of the four hot plates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirQualityRawData {
    /// Sensing resistance of hot plates 0..3 [Ω]
    pub resistance: [f64; 4],
    /// Baseline resistance of hot plates 0..3 [Ω]
    pub baseline: [f64; 4],
}

/// Temperature and humidity used to compensate the gas readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompensationFactors {
    /// Ambient temperature [°C]
    pub temperature: f32,
    /// Relative humidity [%RH]
    pub humidity: f32,
}

/// Firmware version reported by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    /// Major version [GPR_READ4]
    pub major: u8,
    /// Minor version [GPR_READ5]
    pub minor: u8,
    /// Release number [GPR_READ6]
    pub release: u8,
}
