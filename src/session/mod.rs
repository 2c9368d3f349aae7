// Two-field converter state, independent of any UI toolkit.
// The side the user edited last drives the other side; only the dependent
// side is ever written, so updates cannot feed back into each other.

use crate::config::Config;
use crate::units::engine::convert_units;
use crate::units::error::ConversionError;
use crate::units::formatter::format_significant;
use crate::units::input::parse_numeric_input;
use crate::units::table::{category_def, lookup_category, lookup_unit};
use crate::units::types::Category;
use log::debug;
use std::collections::HashMap;


/// One of the two linked input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Source => Side::Target,
            Side::Target => Side::Source,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConverterSession {
    category: Option<Category>,
    source_unit: Option<&'static str>,
    target_unit: Option<&'static str>,
    source_text: String,
    target_text: String,
    last_edited: Side,
    significant_digits: usize,
    // Configured unit pairs, resolved to canonical names
    preferred_units: HashMap<Category, (&'static str, &'static str)>,
}

impl ConverterSession {
    pub fn new(significant_digits: usize) -> Self {
        Self {
            category: None,
            source_unit: None,
            target_unit: None,
            source_text: String::new(),
            target_text: String::new(),
            last_edited: Side::Source,
            significant_digits: significant_digits.max(1),
            preferred_units: HashMap::new(),
        }
    }

    /// Build a session from configuration
    ///
    /// Unit pairs that do not resolve against the table are skipped; the
    /// config's own validation reports them. A valid `default_category` is
    /// selected right away.
    pub fn from_config(config: &Config) -> Self {
        let mut session = Self::new(config.significant_digits);

        for (name, pair) in &config.defaults {
            let Ok(def) = lookup_category(name) else {
                continue;
            };
            if let (Some(from), Some(to)) = (def.unit(&pair.from), def.unit(&pair.to)) {
                session
                    .preferred_units
                    .insert(def.category, (from.name, to.name));
            }
        }

        if let Some(name) = &config.default_category {
            if session.select_category(name).is_err() {
                debug!("ignoring unknown default category '{}'", name);
            }
        }

        session
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn source_unit(&self) -> Option<&'static str> {
        self.source_unit
    }

    pub fn target_unit(&self) -> Option<&'static str> {
        self.target_unit
    }

    pub fn last_edited(&self) -> Side {
        self.last_edited
    }

    pub fn significant_digits(&self) -> usize {
        self.significant_digits
    }

    /// Units offered for the current category, in table order
    pub fn units(&self) -> Vec<&'static str> {
        self.category
            .map(|c| category_def(c).unit_names())
            .unwrap_or_default()
    }

    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Source => &self.source_text,
            Side::Target => &self.target_text,
        }
    }

    /// Switch category and pick default units
    ///
    /// The first two units of the category are selected unless a preferred
    /// pair is configured for it. A single-unit category uses its only unit
    /// on both sides.
    pub fn select_category(&mut self, name: &str) -> Result<(), ConversionError> {
        let def = lookup_category(name)?;

        let (source, target) = match self.preferred_units.get(&def.category) {
            Some(&pair) => pair,
            None => {
                let first = def.units[0].name;
                let second = def.units.get(1).map_or(first, |u| u.name);
                (first, second)
            }
        };

        debug!(
            "category -> {} ({} -> {})",
            def.category, source, target
        );

        self.category = Some(def.category);
        self.source_unit = Some(source);
        self.target_unit = Some(target);
        self.recompute()
    }

    pub fn select_source_unit(&mut self, name: &str) -> Result<(), ConversionError> {
        let unit = self.resolve_unit(name)?;
        self.source_unit = Some(unit);
        self.recompute()
    }

    pub fn select_target_unit(&mut self, name: &str) -> Result<(), ConversionError> {
        let unit = self.resolve_unit(name)?;
        self.target_unit = Some(unit);
        self.recompute()
    }

    /// Replace the text of one field and update the other
    pub fn edit(&mut self, side: Side, text: &str) -> Result<(), ConversionError> {
        match side {
            Side::Source => self.source_text = text.to_string(),
            Side::Target => self.target_text = text.to_string(),
        }
        self.last_edited = side;
        self.recompute()
    }

    fn resolve_unit(&self, name: &str) -> Result<&'static str, ConversionError> {
        let category = self
            .category
            .ok_or_else(|| ConversionError::UnrecognizedCategory(String::new()))?;
        Ok(lookup_unit(category, name)?.name)
    }

    /// Rewrite the dependent side from the last edited one
    fn recompute(&mut self) -> Result<(), ConversionError> {
        let (Some(category), Some(source), Some(target)) =
            (self.category, self.source_unit, self.target_unit)
        else {
            return Ok(());
        };

        let driving = self.last_edited;
        let (from, to) = match driving {
            Side::Source => (source, target),
            Side::Target => (target, source),
        };

        let output = match parse_numeric_input(self.text(driving)) {
            Ok(value) => {
                let result = convert_units(category, from, to, value)?;
                format_significant(result, self.significant_digits)
            }
            Err(_) => String::new(),
        };

        debug!("{:?} field -> '{}'", driving.opposite(), output);

        match driving.opposite() {
            Side::Source => self.source_text = output,
            Side::Target => self.target_text = output,
        }

        Ok(())
    }
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(crate::units::formatter::DEFAULT_SIGNIFICANT_DIGITS)
    }
}
