//! Presentation Layer
//!
//! This layer handles:
//! - Creating the service with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates the clinic service with proper dependencies
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use dental::presentation::factory;
//!
//! let service = factory::create_clinic_service(Path::new("data"));
//! let patient = service.register_patient("Alice", "555-0100")?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_clinic_service, ConcreteClinicService};
