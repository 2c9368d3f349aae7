// Temperature scales do not share a zero point, so they cannot be chained
// through a multiplicative base unit. Each ordered pair has its own formula.

use serde::Serialize;

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Convert a temperature reading between two scales
pub fn convert_temperature(from: TemperatureScale, to: TemperatureScale, value: f64) -> f64 {
    use TemperatureScale::*;

    match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Fahrenheit, Celsius) => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0 + KELVIN_OFFSET,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
    }
}
