use crate::units::error::ConversionError;
use crate::units::temperature::TemperatureScale;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A measurement domain with its own closed set of units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Weight,
    Length,
    Liquid,
    Time,
    Temperature,
    Area,
    Energy,
    Power,
    #[serde(rename = "Electric Current")]
    ElectricCurrent,
    #[serde(rename = "Data Storage")]
    DataStorage,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 10] = [
        Category::Weight,
        Category::Length,
        Category::Liquid,
        Category::Time,
        Category::Temperature,
        Category::Area,
        Category::Energy,
        Category::Power,
        Category::ElectricCurrent,
        Category::DataStorage,
    ];

    /// Display name, which is also the identifier callers pass in
    pub fn name(&self) -> &'static str {
        match self {
            Category::Weight => "Weight",
            Category::Length => "Length",
            Category::Liquid => "Liquid",
            Category::Time => "Time",
            Category::Temperature => "Temperature",
            Category::Area => "Area",
            Category::Energy => "Energy",
            Category::Power => "Power",
            Category::ElectricCurrent => "Electric Current",
            Category::DataStorage => "Data Storage",
        }
    }

    /// Look up a category by its exact display name
    pub fn from_name(name: &str) -> Option<Self> {
        Category::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_name(s).ok_or_else(|| ConversionError::UnrecognizedCategory(s.to_string()))
    }
}

/// How a unit relates to the rest of its category
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitScale {
    /// Value of one unit expressed in the category's base unit
    Factor(f64),
    /// Temperature scale, converted with pairwise affine formulas
    Affine(TemperatureScale),
}

/// A single entry of the unit table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub name: &'static str,
    pub scale: UnitScale,
}

impl UnitDef {
    pub const fn factor(name: &'static str, factor: f64) -> Self {
        Self {
            name,
            scale: UnitScale::Factor(factor),
        }
    }

    pub const fn affine(name: &'static str, scale: TemperatureScale) -> Self {
        Self {
            name,
            scale: UnitScale::Affine(scale),
        }
    }
}

/// A category together with its base unit and ordered unit list
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub category: Category,
    /// Reference unit for linear categories; `None` for Temperature
    pub base_unit: Option<&'static str>,
    pub units: &'static [UnitDef],
}

impl CategoryDef {
    pub fn unit(&self, name: &str) -> Option<&'static UnitDef> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
            assert_eq!(category.to_string(), category.name());
        }
    }

    #[test]
    fn test_category_lookup_is_exact() {
        assert_eq!(Category::from_name("weight"), None);
        assert_eq!(Category::from_name("ElectricCurrent"), None);
        assert!(matches!(
            "Volume".parse::<Category>(),
            Err(ConversionError::UnrecognizedCategory(name)) if name == "Volume"
        ));
    }

    #[test]
    fn test_category_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::DataStorage).unwrap();
        assert_eq!(json, "\"Data Storage\"");
    }
}
