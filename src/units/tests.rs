#[cfg(test)]
mod tests {
    use super::super::engine::convert;
    use super::super::table::CATALOG;
    use super::super::types::Category;
    use approx::assert_relative_eq;

    const SAMPLES: [f64; 9] = [0.0, 1.0, -1.0, 0.5, 42.0, -273.15, 1e-6, 123456.789, 3.6e9];

    fn all_pairs() -> Vec<(&'static str, &'static str, &'static str)> {
        let mut pairs = Vec::new();
        for def in CATALOG.iter() {
            for a in def.units {
                for b in def.units {
                    pairs.push((def.category.name(), a.name, b.name));
                }
            }
        }
        pairs
    }

    #[test]
    fn test_identity_is_exact() {
        for def in CATALOG.iter() {
            for unit in def.units {
                for v in SAMPLES {
                    let result = convert(def.category.name(), unit.name, unit.name, v).unwrap();
                    assert_eq!(result.to_bits(), v.to_bits(), "{} {}", def.category, unit.name);
                }
            }
        }
    }

    #[test]
    fn test_identity_keeps_nan() {
        let result = convert("Temperature", "Kelvin", "Kelvin", f64::NAN).unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_round_trip_every_pair() {
        for (category, a, b) in all_pairs() {
            for v in SAMPLES {
                let there = convert(category, a, b, v).unwrap();
                let back = convert(category, b, a, there).unwrap();
                assert_relative_eq!(back, v, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_transitive_through_third_unit() {
        for def in CATALOG.iter() {
            let category = def.category.name();
            for a in def.units {
                for b in def.units {
                    for c in def.units {
                        let direct = convert(category, a.name, c.name, 10.0).unwrap();
                        let step = convert(category, a.name, b.name, 10.0).unwrap();
                        let chained = convert(category, b.name, c.name, step).unwrap();
                        assert_relative_eq!(chained, direct, epsilon = 1e-9, max_relative = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_linearity_outside_temperature() {
        for (category, a, b) in all_pairs() {
            if category == Category::Temperature.name() {
                continue;
            }
            for scale in [2.0, -3.0, 0.125, 1e5] {
                let scaled_first = convert(category, a, b, scale * 7.5).unwrap();
                let scaled_after = scale * convert(category, a, b, 7.5).unwrap();
                assert_relative_eq!(scaled_first, scaled_after, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_temperature_is_not_linear() {
        let once = convert("Temperature", "Celsius", "Fahrenheit", 10.0).unwrap();
        let twice = convert("Temperature", "Celsius", "Fahrenheit", 20.0).unwrap();
        assert_ne!(twice, 2.0 * once);
    }

    #[test]
    fn test_reference_values() {
        let cases = [
            ("Weight", "Milligram", "Gram", 1500.0, 1.5),
            ("Length", "Centimeter", "Millimeter", 1.0, 10.0),
            ("Liquid", "Liter", "Milliliter", 0.25, 250.0),
            ("Time", "Hour", "Minute", 1.5, 90.0),
            ("Area", "Acre", "Square Meter", 1.0, 4046.8564224),
            ("Area", "Square Centimeter", "Square Millimeter", 1.0, 100.0),
            ("Energy", "Kilocalorie", "Calorie", 1.0, 1000.0),
            ("Energy", "Kilowatt-hour", "Kilojoule", 1.0, 3600.0),
            ("Power", "Horsepower", "Watt", 2.0, 1491.4),
            ("Electric Current", "Kiloampere", "Milliampere", 1.0, 1e6),
            ("Data Storage", "Terabyte", "Kilobyte", 1.0, 1_073_741_824.0),
            ("Temperature", "Fahrenheit", "Kelvin", 32.0, 273.15),
            ("Temperature", "Kelvin", "Fahrenheit", 373.15, 212.0),
        ];

        for (category, from, to, value, expected) in cases {
            let result = convert(category, from, to, value).unwrap();
            assert_relative_eq!(result, expected, max_relative = 1e-12);
        }
    }
}
