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

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use jordan_calculator::form::{
    SelectOption, BATHROOM_TYPES, EQUIPMENT_ITEMS, HEATING_TYPES, SYSTEM_TYPES,
};
use jordan_calculator::{Calculator, CalculatorConfig, CalculatorKind, FormField};

fn select(options: &'static [SelectOption]) -> PossibleValuesParser {
    PossibleValuesParser::new(options.iter().map(|option| option.value))
}

/// Jordan GmbH cost calculator
///
/// Prices heating, bathroom and maintenance jobs with the same rules as the
/// website calculators. With --use-api and --ident-name the LokalLeads API
/// is asked first and the local formula is used as fallback.
///
/// LOKALLEADS_ENDPOINT, LOKALLEADS_IDENT_NAME and LOKALLEADS_USE_API provide
/// defaults for the global flags.
#[derive(Parser, Debug)]
#[clap(name = "jordan-calc")]
pub struct Opt {
    /// LokalLeads GraphQL endpoint.
    #[clap(long = "endpoint", global = true)]
    pub endpoint: Option<String>,

    /// LokalLeads integration identifier.
    #[clap(long = "ident-name", global = true)]
    pub ident_name: Option<String>,

    /// Use the LokalLeads API for pricing and callback requests.
    #[clap(long = "use-api", global = true)]
    pub use_api: bool,

    /// Ask the API for debug details with the calculation.
    #[clap(long = "debug", global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub mode: Mode,
}

impl Opt {
    /// Apply command-line overrides on top of the environment configuration.
    pub fn apply(&self, mut config: CalculatorConfig) -> CalculatorConfig {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(ident_name) = &self.ident_name {
            config.ident_name = ident_name.trim().to_string();
        }
        if self.use_api {
            config.use_api = true;
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Estimate the cost of a job.
    #[clap(subcommand)]
    Estimate(Service),

    /// Print the LokalLeads integration configuration as JSON.
    Integration(IntegrationArgs),
}

#[derive(Args, Debug, Clone)]
pub struct IntegrationArgs {
    /// Cookie token forwarded to the integration lookup.
    #[clap(long = "cookie-token")]
    pub cookie_token: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Service {
    /// Heizungsrechner: new heating system.
    Heating(HeatingArgs),

    /// Badrechner: bathroom renovation.
    Bathroom(BathroomArgs),

    /// Wartungsrechner: yearly maintenance.
    Maintenance(MaintenanceArgs),
}

#[derive(Args, Debug, Clone)]
pub struct HeatingArgs {
    /// Living area in m².
    #[clap(long = "area")]
    pub area: String,

    #[clap(long = "current-heating", value_parser = select(HEATING_TYPES))]
    pub current_heating: Option<String>,

    /// Year the insulation was installed.
    #[clap(long = "insulation-year")]
    pub insulation_year: Option<String>,

    #[clap(flatten)]
    pub contact: ContactArgs,
}

#[derive(Args, Debug, Clone)]
pub struct BathroomArgs {
    /// Bathroom size in m².
    #[clap(long = "room-size")]
    pub room_size: String,

    #[clap(long = "bathroom-type", value_parser = select(BATHROOM_TYPES))]
    pub bathroom_type: Option<String>,

    /// Requested equipment; repeat for several items.
    #[clap(
        long = "equipment",
        short = 'e',
        value_parser = PossibleValuesParser::new(EQUIPMENT_ITEMS.iter().copied())
    )]
    pub equipment: Vec<String>,

    #[clap(flatten)]
    pub contact: ContactArgs,
}

#[derive(Args, Debug, Clone)]
pub struct MaintenanceArgs {
    /// Age of the system in years.
    #[clap(long = "system-age")]
    pub system_age: String,

    #[clap(long = "system-type", value_parser = select(SYSTEM_TYPES))]
    pub system_type: Option<String>,

    /// Years since the last maintenance.
    #[clap(long = "last-maintenance")]
    pub last_maintenance: Option<String>,

    #[clap(flatten)]
    pub contact: ContactArgs,
}

/// Request a callback after the estimate. Name and email are required.
#[derive(Args, Debug, Clone, Default)]
pub struct ContactArgs {
    #[clap(long = "name")]
    pub name: Option<String>,

    #[clap(long = "email")]
    pub email: Option<String>,

    #[clap(long = "phone")]
    pub phone: Option<String>,
}

impl ContactArgs {
    pub fn is_requested(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.phone.is_some()
    }

    pub fn fill(&self, calculator: &mut Calculator) {
        let fields = [
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Phone, &self.phone),
        ];
        for (field, value) in fields {
            set_optional(calculator, field, value);
        }
    }
}

impl Service {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            Service::Heating(_) => CalculatorKind::Heating,
            Service::Bathroom(_) => CalculatorKind::Bathroom,
            Service::Maintenance(_) => CalculatorKind::Maintenance,
        }
    }

    pub fn contact(&self) -> &ContactArgs {
        match self {
            Service::Heating(args) => &args.contact,
            Service::Bathroom(args) => &args.contact,
            Service::Maintenance(args) => &args.contact,
        }
    }

    /// Copy the service fields into the calculator form.
    pub fn fill(&self, calculator: &mut Calculator) {
        match self {
            Service::Heating(args) => {
                calculator.set_field(FormField::Area, args.area.as_str());
                set_optional(calculator, FormField::CurrentHeating, &args.current_heating);
                set_optional(calculator, FormField::InsulationYear, &args.insulation_year);
            }
            Service::Bathroom(args) => {
                calculator.set_field(FormField::RoomSize, args.room_size.as_str());
                set_optional(calculator, FormField::BathroomType, &args.bathroom_type);
                for item in &args.equipment {
                    calculator.toggle_equipment(item, true);
                }
            }
            Service::Maintenance(args) => {
                calculator.set_field(FormField::SystemAge, args.system_age.as_str());
                set_optional(calculator, FormField::SystemType, &args.system_type);
                set_optional(calculator, FormField::LastMaintenance, &args.last_maintenance);
            }
        }
    }
}

fn set_optional(calculator: &mut Calculator, field: FormField, value: &Option<String>) {
    if let Some(value) = value {
        calculator.set_field(field, value.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_maintenance_estimate() {
        let opt = Opt::try_parse_from([
            "jordan-calc",
            "estimate",
            "maintenance",
            "--system-age",
            "12",
            "--system-type",
            "heat-pump",
        ])
        .unwrap();
        let Mode::Estimate(service) = &opt.mode else {
            panic!("expected estimate mode");
        };
        assert_eq!(service.kind(), CalculatorKind::Maintenance);
        assert!(!service.contact().is_requested());
    }

    #[test]
    fn parses_bathroom_equipment_and_contact() {
        let opt = Opt::try_parse_from([
            "jordan-calc",
            "--use-api",
            "--ident-name",
            "jordan-bad",
            "estimate",
            "bathroom",
            "--room-size",
            "8",
            "-e",
            "Dusche",
            "-e",
            "WC",
            "--name",
            "Erika",
            "--email",
            "erika@example.de",
        ])
        .unwrap();
        let Mode::Estimate(Service::Bathroom(args)) = &opt.mode else {
            panic!("expected bathroom estimate");
        };
        assert_eq!(args.equipment, vec!["Dusche", "WC"]);
        assert!(args.contact.is_requested());

        let config = opt.apply(CalculatorConfig::default());
        assert!(config.use_api);
        assert_eq!(config.ident_name, "jordan-bad");
    }

    #[test]
    fn select_values_follow_form_options() {
        for option in SYSTEM_TYPES {
            let opt = Opt::try_parse_from([
                "jordan-calc",
                "estimate",
                "maintenance",
                "--system-age",
                "3",
                "--system-type",
                option.value,
            ])
            .unwrap();
            let Mode::Estimate(Service::Maintenance(args)) = &opt.mode else {
                panic!("expected maintenance estimate");
            };
            assert_eq!(args.system_type.as_deref(), Some(option.value));
        }

        let mut argv = vec!["jordan-calc", "estimate", "bathroom", "--room-size", "8"];
        for item in EQUIPMENT_ITEMS {
            argv.extend(["-e", *item]);
        }
        let opt = Opt::try_parse_from(argv).unwrap();
        let Mode::Estimate(Service::Bathroom(args)) = &opt.mode else {
            panic!("expected bathroom estimate");
        };
        assert_eq!(args.equipment, EQUIPMENT_ITEMS);
    }

    #[test]
    fn rejects_unknown_select_value() {
        let result = Opt::try_parse_from([
            "jordan-calc",
            "estimate",
            "heating",
            "--area",
            "100",
            "--current-heating",
            "coal",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn overrides_keep_environment_defaults() {
        let opt = Opt::try_parse_from(["jordan-calc", "integration"]).unwrap();
        let env = CalculatorConfig {
            endpoint: "http://localhost:4000/graphql".into(),
            ident_name: "jordan".into(),
            use_api: true,
        };
        assert_eq!(opt.apply(env.clone()), env);
    }
}
