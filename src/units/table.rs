use crate::units::error::ConversionError;
use crate::units::temperature::TemperatureScale;
use crate::units::types::{Category, CategoryDef, UnitDef, UnitScale};
use serde::Serialize;

const WEIGHT: &[UnitDef] = &[
    UnitDef::factor("Kilogram", 1000.0),
    UnitDef::factor("Gram", 1.0),
    UnitDef::factor("Milligram", 0.001),
];

const LENGTH: &[UnitDef] = &[
    UnitDef::factor("Meter", 1.0),
    UnitDef::factor("Centimeter", 0.01),
    UnitDef::factor("Millimeter", 0.001),
];

const LIQUID: &[UnitDef] = &[
    UnitDef::factor("Liter", 1.0),
    UnitDef::factor("Milliliter", 0.001),
];

const TIME: &[UnitDef] = &[
    UnitDef::factor("Hour", 3600.0),
    UnitDef::factor("Minute", 60.0),
    UnitDef::factor("Second", 1.0),
];

const TEMPERATURE: &[UnitDef] = &[
    UnitDef::affine("Celsius", TemperatureScale::Celsius),
    UnitDef::affine("Fahrenheit", TemperatureScale::Fahrenheit),
    UnitDef::affine("Kelvin", TemperatureScale::Kelvin),
];

const AREA: &[UnitDef] = &[
    UnitDef::factor("Square Meter", 1.0),
    UnitDef::factor("Square Kilometer", 1e6),
    UnitDef::factor("Square Centimeter", 1e-4),
    UnitDef::factor("Square Millimeter", 1e-6),
    UnitDef::factor("Hectare", 10_000.0),
    UnitDef::factor("Acre", 4046.8564224),
];

const ENERGY: &[UnitDef] = &[
    UnitDef::factor("Joule", 1.0),
    UnitDef::factor("Kilojoule", 1000.0),
    UnitDef::factor("Calorie", 4.184),
    UnitDef::factor("Kilocalorie", 4184.0),
    UnitDef::factor("Watt-hour", 3600.0),
    UnitDef::factor("Kilowatt-hour", 3.6e6),
];

const POWER: &[UnitDef] = &[
    UnitDef::factor("Watt", 1.0),
    UnitDef::factor("Kilowatt", 1000.0),
    UnitDef::factor("Horsepower", 745.7),
];

const ELECTRIC_CURRENT: &[UnitDef] = &[
    UnitDef::factor("Ampere", 1.0),
    UnitDef::factor("Milliampere", 0.001),
    UnitDef::factor("Kiloampere", 1000.0),
];

// Binary multiples: 1024^n bytes
const DATA_STORAGE: &[UnitDef] = &[
    UnitDef::factor("Byte", 1.0),
    UnitDef::factor("Kilobyte", 1024.0),
    UnitDef::factor("Megabyte", 1_048_576.0),
    UnitDef::factor("Gigabyte", 1_073_741_824.0),
    UnitDef::factor("Terabyte", 1_099_511_627_776.0),
];

/// The compiled-in unit table, in display order
pub static CATALOG: [CategoryDef; 10] = [
    CategoryDef {
        category: Category::Weight,
        base_unit: Some("gram"),
        units: WEIGHT,
    },
    CategoryDef {
        category: Category::Length,
        base_unit: Some("meter"),
        units: LENGTH,
    },
    CategoryDef {
        category: Category::Liquid,
        base_unit: Some("liter"),
        units: LIQUID,
    },
    CategoryDef {
        category: Category::Time,
        base_unit: Some("second"),
        units: TIME,
    },
    CategoryDef {
        category: Category::Temperature,
        base_unit: None,
        units: TEMPERATURE,
    },
    CategoryDef {
        category: Category::Area,
        base_unit: Some("square meter"),
        units: AREA,
    },
    CategoryDef {
        category: Category::Energy,
        base_unit: Some("joule"),
        units: ENERGY,
    },
    CategoryDef {
        category: Category::Power,
        base_unit: Some("watt"),
        units: POWER,
    },
    CategoryDef {
        category: Category::ElectricCurrent,
        base_unit: Some("ampere"),
        units: ELECTRIC_CURRENT,
    },
    CategoryDef {
        category: Category::DataStorage,
        base_unit: Some("byte"),
        units: DATA_STORAGE,
    },
];

/// Table entry for a category
pub fn category_def(category: Category) -> &'static CategoryDef {
    // CATALOG rows follow the declaration order of Category
    &CATALOG[category as usize]
}

/// Resolve a category by display name
pub fn lookup_category(name: &str) -> Result<&'static CategoryDef, ConversionError> {
    let category: Category = name.parse()?;
    Ok(category_def(category))
}

/// Resolve a unit within a category, rejecting units of other categories
pub fn lookup_unit(category: Category, unit: &str) -> Result<&'static UnitDef, ConversionError> {
    category_def(category)
        .unit(unit)
        .ok_or_else(|| ConversionError::UnrecognizedUnit {
            category: category.name().to_string(),
            unit: unit.to_string(),
        })
}

/// Category names in display order
pub fn categories() -> Vec<&'static str> {
    CATALOG.iter().map(|def| def.category.name()).collect()
}

/// Ordered unit names for a category
pub fn units_for(category: &str) -> Result<Vec<&'static str>, ConversionError> {
    Ok(lookup_category(category)?.unit_names())
}

/// Find a unit by name ignoring ASCII case, returning its canonical spelling
pub fn find_unit_ignore_case(category: Category, unit: &str) -> Option<&'static UnitDef> {
    category_def(category)
        .units
        .iter()
        .find(|u| u.name.eq_ignore_ascii_case(unit))
}

/// Serializable view of the catalog, used by `export`
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub name: &'static str,
    pub base_unit: Option<&'static str>,
    pub units: Vec<UnitSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitSummary {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
}

pub fn catalog_summary() -> Vec<CategorySummary> {
    CATALOG
        .iter()
        .map(|def| CategorySummary {
            name: def.category.name(),
            base_unit: def.base_unit,
            units: def
                .units
                .iter()
                .map(|u| UnitSummary {
                    name: u.name,
                    factor: match u.scale {
                        UnitScale::Factor(f) => Some(f),
                        UnitScale::Affine(_) => None,
                    },
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_covers_every_category_in_order() {
        let names: Vec<_> = CATALOG.iter().map(|d| d.category).collect();
        assert_eq!(names, Category::ALL.to_vec());
    }

    #[test]
    fn test_unit_names_unique_within_category() {
        for def in CATALOG.iter() {
            let unique: HashSet<_> = def.units.iter().map(|u| u.name).collect();
            assert_eq!(unique.len(), def.units.len(), "{}", def.category);
        }
    }

    #[test]
    fn test_only_temperature_is_affine() {
        for def in CATALOG.iter() {
            let affine = def
                .units
                .iter()
                .all(|u| matches!(u.scale, UnitScale::Affine(_)));
            assert_eq!(affine, def.category == Category::Temperature);
            assert_eq!(def.base_unit.is_none(), affine);
        }
    }

    #[test]
    fn test_units_for_preserves_order() {
        assert_eq!(
            units_for("Time").unwrap(),
            vec!["Hour", "Minute", "Second"]
        );
        assert_eq!(
            units_for("Data Storage").unwrap(),
            vec!["Byte", "Kilobyte", "Megabyte", "Gigabyte", "Terabyte"]
        );
        assert!(units_for("Speed").is_err());
    }

    #[test]
    fn test_lookup_unit_rejects_other_categories() {
        assert!(lookup_unit(Category::Weight, "Gram").is_ok());
        assert_eq!(
            lookup_unit(Category::Weight, "Liter"),
            Err(ConversionError::UnrecognizedUnit {
                category: "Weight".to_string(),
                unit: "Liter".to_string(),
            })
        );
    }

    #[test]
    fn test_find_unit_ignore_case() {
        let unit = find_unit_ignore_case(Category::Area, "square meter").unwrap();
        assert_eq!(unit.name, "Square Meter");
        assert!(find_unit_ignore_case(Category::Area, "Meter").is_none());
    }

    #[test]
    fn test_catalog_summary_omits_temperature_factors() {
        let summary = catalog_summary();
        let temperature = summary.iter().find(|c| c.name == "Temperature").unwrap();
        assert!(temperature.units.iter().all(|u| u.factor.is_none()));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json[0]["name"], "Weight");
        assert_eq!(json[0]["units"][0]["factor"], 1000.0);
    }
}
