//! Conversions between raw register words and physical units.

/// Offset between Kelvin and degrees Celsius.
const KELVIN_OFFSET: f64 = 273.15;
/// LSB per Kelvin of the temperature registers.
const TEMPERATURE_SCALE: f64 = 64.0;
/// LSB per %RH of the humidity registers.
const HUMIDITY_SCALE: f32 = 512.0;
/// Raw resistance units per doubling.
const RESISTANCE_SCALE: u16 = 2048;

/// Decodes a `TEMP_IN`/`DATA_T` register word to degrees Celsius.
pub fn decode_temperature(raw: u16) -> f32 {
    (f64::from(raw) / TEMPERATURE_SCALE - KELVIN_OFFSET) as f32
}

/// Encodes degrees Celsius to the `TEMP_IN` register format (Kelvin × 64, truncated).
///
/// The offset is applied in `f64`, in `f32` the sum rounds up across an LSB
/// boundary for some inputs.
pub fn encode_temperature(celsius: f32) -> u16 {
    ((f64::from(celsius) + KELVIN_OFFSET) * TEMPERATURE_SCALE) as u16
}

/// Decodes a `RH_IN`/`DATA_RH` register word to %RH.
pub fn decode_humidity(raw: u16) -> f32 {
    f32::from(raw) / HUMIDITY_SCALE
}

/// Encodes %RH to the `RH_IN` register format (%RH × 512, truncated).
pub fn encode_humidity(humidity: f32) -> u16 {
    (humidity * HUMIDITY_SCALE) as u16
}

/// Decodes a raw resistance word to ohms: `2^(raw / 2048)`.
pub fn decode_resistance(raw: u16) -> f64 {
    // whole doublings are applied exactly, libm only handles the fraction
    let whole = raw / RESISTANCE_SCALE;
    let fraction = f64::from(raw % RESISTANCE_SCALE) / f64::from(RESISTANCE_SCALE);
    libm::exp2(fraction) * f64::from(1u32 << whole)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_boundaries() {
        assert_eq!(decode_temperature(0), -273.15);
        assert!((decode_temperature(u16::MAX) - 750.834_4).abs() < 1e-3);
        assert_eq!(encode_temperature(-40.0), 14921);
        assert_eq!(encode_temperature(25.0), 19081);
        assert_eq!(encode_temperature(125.0), 25481);
    }

    #[test]
    fn temperature_encode_truncates_without_f32_rounding() {
        // (-39.9625 + 273.15) * 64 is 14923.99.. but 14924 after f32 rounding
        assert_eq!(encode_temperature(-39.9625), 14923);
        assert_eq!(encode_temperature(-39.9625 + 1.0 / 64.0), 14924);
    }

    #[test]
    fn humidity_boundaries() {
        assert_eq!(decode_humidity(0), 0.0);
        assert_eq!(decode_humidity(u16::MAX), 127.998_046_875);
        assert_eq!(encode_humidity(0.0), 0);
        assert_eq!(encode_humidity(50.0), 25600);
        assert_eq!(encode_humidity(100.0), 51200);
    }

    #[test]
    fn temperature_survives_encoding_within_one_step() {
        let mut t = -40.0f32;
        while t <= 125.0 {
            let decoded = decode_temperature(encode_temperature(t));
            assert!(
                (decoded - t).abs() <= 1.0 / 64.0,
                "{t} came back as {decoded}"
            );
            t += 0.37;
        }
    }

    #[test]
    fn humidity_survives_encoding_within_one_step() {
        let mut h = 0.0f32;
        while h <= 100.0 {
            let decoded = decode_humidity(encode_humidity(h));
            assert!(
                (decoded - h).abs() <= 1.0 / 512.0 + 1e-4,
                "{h} came back as {decoded}"
            );
            h += 0.13;
        }
    }

    #[test]
    fn resistance() {
        assert_eq!(decode_resistance(0), 1.0);
        assert_eq!(decode_resistance(2048), 2.0);
        assert_eq!(decode_resistance(20480), 1024.0);
        assert!((decode_resistance(1024) - core::f64::consts::SQRT_2).abs() < 1e-12);
        assert!(decode_resistance(u16::MAX) > 2.1e9);
    }
}
