use crate::units::error::ConversionError;
use crate::units::table::{lookup_category, lookup_unit};
use crate::units::temperature::convert_temperature;
use crate::units::types::{Category, UnitScale};
use log::debug;

/// Convert `value` from `source` to `target` within the named category
///
/// Unknown categories and units that are not part of the category's unit
/// list are rejected. Non-finite values propagate arithmetically.
pub fn convert(
    category: &str,
    source: &str,
    target: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let def = lookup_category(category)?;
    convert_units(def.category, source, target, value)
}

/// Same as [`convert`] for callers that already hold a [`Category`]
pub fn convert_units(
    category: Category,
    source: &str,
    target: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let from = lookup_unit(category, source)?;
    let to = lookup_unit(category, target)?;

    if from.name == to.name {
        return Ok(value);
    }

    let result = match (from.scale, to.scale) {
        // Source -> base unit -> target
        (UnitScale::Factor(from_factor), UnitScale::Factor(to_factor)) => {
            value * from_factor / to_factor
        }
        (UnitScale::Affine(from_scale), UnitScale::Affine(to_scale)) => {
            convert_temperature(from_scale, to_scale, value)
        }
        // A category never mixes linear and affine units
        _ => {
            return Err(ConversionError::UnrecognizedUnit {
                category: category.name().to_string(),
                unit: target.to_string(),
            })
        }
    };

    debug!(
        "{}: {} {} -> {} {}",
        category, value, from.name, result, to.name
    );

    Ok(result)
}
