use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dental - single-clinic scheduling tool
#[derive(Parser, Debug)]
#[command(name = "dental")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'dental' without arguments for the interactive menu.")]
pub struct Cli {
    /// Output one JSON object per line (for scripts)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the clinic data files
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new patient
    RegisterPatient {
        /// Full name of the patient
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },

    /// Add a dentist to the roster
    AddDentist {
        /// Full name of the dentist
        #[arg(long)]
        name: String,

        /// Clinical specialty
        #[arg(long)]
        specialty: String,
    },

    /// Book an appointment (rejects double-bookings)
    Schedule {
        /// Patient id
        #[arg(long)]
        patient: String,

        /// Dentist id
        #[arg(long)]
        dentist: String,

        /// Start time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        start: String,

        /// End time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        end: String,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List appointments
    Appointments {
        /// Only appointments for this patient
        #[arg(long)]
        patient: Option<String>,
    },

    /// Cancel an appointment
    Cancel {
        /// Appointment id
        #[arg(long)]
        id: String,
    },

    /// List registered patients
    Patients,

    /// List the dentist roster
    Dentists,
}
