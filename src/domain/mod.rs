//! Domain Layer
//!
//! The core of the clinic: business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Patient, Dentist, Appointment)
//! - `value_objects/` - Immutable value types (AppointmentStatus)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - All persistence goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
