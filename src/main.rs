//! Dental CLI - single-clinic scheduling tool
//!
//! Usage: dental [COMMAND]
//!
//! Commands:
//!   register-patient  Register a new patient
//!   add-dentist       Add a dentist to the roster
//!   schedule          Book an appointment (rejects double-bookings)
//!   appointments      List appointments
//!   cancel            Cancel an appointment
//!   patients          List registered patients
//!   dentists          List the dentist roster
//!
//! With no command the binary opens the interactive menu.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use dental::config::{Config, ConfigWarning};
use dental::create_clinic_service;
use dental::presentation::output::{create_renderer, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default(Some(&cwd))?;
    print_config_warnings(&warnings);

    let data_dir = config.data_dir(cli.data_dir.as_deref());
    let service = create_clinic_service(&data_dir);

    let Some(command) = cli.command else {
        return commands::menu::cmd_menu(&service);
    };

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };
    let renderer = create_renderer(format);

    match command {
        Commands::RegisterPatient { name, phone } => {
            commands::patients::cmd_register_patient(&service, &name, &phone, renderer.as_ref())
        }
        Commands::AddDentist { name, specialty } => {
            commands::dentists::cmd_add_dentist(&service, &name, &specialty, renderer.as_ref())
        }
        Commands::Schedule { patient, dentist, start, end, notes } => {
            commands::appointments::cmd_schedule(
                &service,
                &patient,
                &dentist,
                &start,
                &end,
                notes.as_deref(),
                renderer.as_ref(),
            )
        }
        Commands::Appointments { patient } => {
            commands::appointments::cmd_appointments(
                &service,
                patient.as_deref(),
                renderer.as_ref(),
            )
        }
        Commands::Cancel { id } => {
            commands::appointments::cmd_cancel(&service, &id, renderer.as_ref())
        }
        Commands::Patients => commands::patients::cmd_patients(&service, renderer.as_ref()),
        Commands::Dentists => commands::dentists::cmd_dentists(&service, renderer.as_ref()),
    }
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        match warning.line {
            Some(line) => eprintln!(
                "warning: unknown config key '{}' in {}:{}",
                warning.key,
                warning.file.display(),
                line
            ),
            None => eprintln!(
                "warning: unknown config key '{}' in {}",
                warning.key,
                warning.file.display()
            ),
        }

        if let Some(suggestion) = &warning.suggestion {
            eprintln!("   Did you mean '{suggestion}'?");
        }
    }
}
