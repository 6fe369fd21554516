/*
 * Copyright 2025 Jordan GmbH
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Calculator form: service types, fields and the raw input a visitor typed.

use std::fmt;
use std::str::FromStr;

use lokalleads_types::FlowInput;
use serde::{Deserialize, Serialize};

/// Service the calculator estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Heating,
    Bathroom,
    Maintenance,
}

impl CalculatorKind {
    pub fn title(self) -> &'static str {
        match self {
            CalculatorKind::Heating => "Heizungsrechner",
            CalculatorKind::Bathroom => "Badrechner",
            CalculatorKind::Maintenance => "Wartungsrechner",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CalculatorKind::Heating => "Berechnen Sie die Kosten für Ihre neue Heizungsanlage",
            CalculatorKind::Bathroom => "Ermitteln Sie die Kosten für Ihre Badsanierung",
            CalculatorKind::Maintenance => "Kalkulieren Sie Ihre jährlichen Wartungskosten",
        }
    }

    /// Service-specific fields, in display order.
    pub fn fields(self) -> &'static [FormField] {
        match self {
            CalculatorKind::Heating => &[
                FormField::Area,
                FormField::CurrentHeating,
                FormField::InsulationYear,
            ],
            CalculatorKind::Bathroom => &[FormField::RoomSize, FormField::BathroomType],
            CalculatorKind::Maintenance => &[
                FormField::SystemAge,
                FormField::SystemType,
                FormField::LastMaintenance,
            ],
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CalculatorKind::Heating => "heating",
            CalculatorKind::Bathroom => "bathroom",
            CalculatorKind::Maintenance => "maintenance",
        })
    }
}

impl FromStr for CalculatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heating" => Ok(CalculatorKind::Heating),
            "bathroom" => Ok(CalculatorKind::Bathroom),
            "maintenance" => Ok(CalculatorKind::Maintenance),
            other => Err(format!(
                "unknown calculator type {other:?} (expected heating, bathroom or maintenance)"
            )),
        }
    }
}

/// A single-valued form field. The bathroom equipment multi-select is
/// handled separately by [`FormData::toggle_equipment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Area,
    CurrentHeating,
    InsulationYear,
    RoomSize,
    BathroomType,
    SystemAge,
    SystemType,
    LastMaintenance,
    Name,
    Email,
    Phone,
}

impl FormField {
    /// Key used for this field in flow inputs.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Area => "area",
            FormField::CurrentHeating => "currentHeating",
            FormField::InsulationYear => "insulationYear",
            FormField::RoomSize => "roomSize",
            FormField::BathroomType => "bathroomType",
            FormField::SystemAge => "systemAge",
            FormField::SystemType => "systemType",
            FormField::LastMaintenance => "lastMaintenance",
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Area => "Wohnfläche (m²)",
            FormField::CurrentHeating => "Aktuelles Heizsystem",
            FormField::InsulationYear => "Baujahr der Dämmung",
            FormField::RoomSize => "Badezimmergröße (m²)",
            FormField::BathroomType => "Badezimmer-Typ",
            FormField::SystemAge => "Alter der Anlage (Jahre)",
            FormField::SystemType => "Anlagentyp",
            FormField::LastMaintenance => "Letzte Wartung (Jahre)",
            FormField::Name => "Ihr Name",
            FormField::Email => "Ihre E-Mail",
            FormField::Phone => "Ihre Telefonnummer",
        }
    }

    /// Options for select fields, `None` for free input.
    pub fn options(self) -> Option<&'static [SelectOption]> {
        match self {
            FormField::CurrentHeating => Some(HEATING_TYPES),
            FormField::BathroomType => Some(BATHROOM_TYPES),
            FormField::SystemType => Some(SYSTEM_TYPES),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const HEATING_TYPES: &[SelectOption] = &[
    opt("gas", "Gasheizung"),
    opt("oil", "Ölheizung"),
    opt("electric", "Elektroheizung"),
    opt("none", "Keine Heizung"),
];

pub const BATHROOM_TYPES: &[SelectOption] = &[
    opt("standard", "Standard"),
    opt("comfort", "Komfort"),
    opt("luxury", "Luxus"),
    opt("barrier-free", "Barrierefrei"),
];

pub const SYSTEM_TYPES: &[SelectOption] = &[
    opt("gas", "Gasheizung"),
    opt("oil", "Ölheizung"),
    opt("heat-pump", "Wärmepumpe"),
    opt("solar", "Solaranlage"),
];

pub const EQUIPMENT_ITEMS: &[&str] = &[
    "Neue Badewanne",
    "Dusche",
    "Waschtisch",
    "WC",
    "Fliesen",
    "Fußbodenheizung",
];

/// Raw form input, kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub area: String,
    pub current_heating: String,
    pub insulation_year: String,
    pub room_size: String,
    pub bathroom_type: String,
    pub equipment: Vec<String>,
    pub system_age: String,
    pub system_type: String,
    pub last_maintenance: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Area => &self.area,
            FormField::CurrentHeating => &self.current_heating,
            FormField::InsulationYear => &self.insulation_year,
            FormField::RoomSize => &self.room_size,
            FormField::BathroomType => &self.bathroom_type,
            FormField::SystemAge => &self.system_age,
            FormField::SystemType => &self.system_type,
            FormField::LastMaintenance => &self.last_maintenance,
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Area => &mut self.area,
            FormField::CurrentHeating => &mut self.current_heating,
            FormField::InsulationYear => &mut self.insulation_year,
            FormField::RoomSize => &mut self.room_size,
            FormField::BathroomType => &mut self.bathroom_type,
            FormField::SystemAge => &mut self.system_age,
            FormField::SystemType => &mut self.system_type,
            FormField::LastMaintenance => &mut self.last_maintenance,
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    /// Check or uncheck one equipment item. Order of first selection is kept.
    pub fn toggle_equipment(&mut self, item: &str, checked: bool) {
        if checked {
            if !self.equipment.iter().any(|e| e == item) {
                self.equipment.push(item.to_string());
            }
        } else {
            self.equipment.retain(|e| e != item);
        }
    }

    /// Name and email are both filled in.
    pub fn has_contact(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Convert the fields of `kind` into flow inputs.
    ///
    /// Empty fields are left out. Numeric fields that do not parse are left
    /// out as well and logged.
    pub fn flow_inputs(&self, kind: CalculatorKind) -> Vec<FlowInput> {
        let mut inputs = Vec::new();
        for &field in kind.fields() {
            let raw = self.get(field).trim();
            if raw.is_empty() {
                continue;
            }
            let input = match field {
                FormField::InsulationYear => raw
                    .parse::<i64>()
                    .ok()
                    .map(|v| FlowInput::new(field.key(), v)),
                FormField::Area
                | FormField::RoomSize
                | FormField::SystemAge
                | FormField::LastMaintenance => {
                    parse_decimal(raw).map(|v| FlowInput::new(field.key(), v))
                }
                _ => Some(FlowInput::new(field.key(), raw)),
            };
            match input {
                Some(input) => inputs.push(input),
                None => log::warn!("Skipping {}: {raw:?} is not a number", field.key()),
            }
        }
        if kind == CalculatorKind::Bathroom && !self.equipment.is_empty() {
            inputs.push(FlowInput::new("equipment", self.equipment.join(",")));
        }
        inputs
    }
}

/// Parse a decimal number, accepting a decimal comma.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lokalleads_types::FlowValue;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            CalculatorKind::Heating,
            CalculatorKind::Bathroom,
            CalculatorKind::Maintenance,
        ] {
            assert_eq!(kind.to_string().parse::<CalculatorKind>().unwrap(), kind);
        }
        assert!("solar".parse::<CalculatorKind>().is_err());
    }

    #[test]
    fn heating_inputs_parse_numbers_and_skip_empty() {
        let mut form = FormData::default();
        form.set(FormField::Area, "120,5");
        form.set(FormField::InsulationYear, "2010");
        form.set(FormField::SystemAge, "7");

        let inputs = form.flow_inputs(CalculatorKind::Heating);
        assert_eq!(
            inputs,
            vec![
                FlowInput::new("area", 120.5),
                FlowInput::new("insulationYear", 2010_i64),
            ]
        );
    }

    #[test]
    fn bathroom_inputs_join_equipment() {
        let mut form = FormData::default();
        form.set(FormField::RoomSize, "8");
        form.set(FormField::BathroomType, "comfort");
        form.toggle_equipment("Dusche", true);
        form.toggle_equipment("WC", true);
        form.toggle_equipment("Dusche", true);

        let inputs = form.flow_inputs(CalculatorKind::Bathroom);
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[1].value, FlowValue::Text("comfort".into()));
        assert_eq!(inputs[2], FlowInput::new("equipment", "Dusche,WC"));
    }

    #[test]
    fn unparsable_numbers_are_skipped() {
        let mut form = FormData::default();
        form.set(FormField::SystemAge, "alt");
        form.set(FormField::SystemType, "heat-pump");
        let inputs = form.flow_inputs(CalculatorKind::Maintenance);
        assert_eq!(inputs, vec![FlowInput::new("systemType", "heat-pump")]);
    }

    #[test]
    fn unchecking_equipment_removes_it() {
        let mut form = FormData::default();
        form.toggle_equipment("Fliesen", true);
        form.toggle_equipment("Fliesen", false);
        assert!(form.equipment.is_empty());
    }

    #[test]
    fn contact_requires_name_and_email() {
        let mut form = FormData::default();
        form.set(FormField::Name, "Erika");
        assert!(!form.has_contact());
        form.set(FormField::Email, "   ");
        assert!(!form.has_contact());
        form.set(FormField::Email, "erika@example.de");
        assert!(form.has_contact());
    }

    #[test]
    fn select_fields_expose_options() {
        assert_eq!(FormField::SystemType.options().unwrap().len(), 4);
        assert!(FormField::Area.options().is_none());
    }
}
