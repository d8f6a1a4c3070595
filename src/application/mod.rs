//! Application Layer
//!
//! Use cases that orchestrate domain entities through the repository
//! ports. No I/O details live here.

mod clinic;

pub use clinic::ClinicService;
