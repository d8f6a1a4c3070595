//! Dentist entity - a provider whose calendar appointments are booked against

/// A dentist on the clinic roster
///
/// Conflict checks run per dentist: two scheduled appointments for the
/// same dentist must never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dentist {
    /// Unique identifier (UUID string)
    id: String,
    /// Full name
    name: String,
    /// Free-text specialty (e.g. "orthodontics")
    specialty: String,
}

impl Dentist {
    /// Create a new Dentist
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialty: specialty.into(),
        }
    }

    /// Builder: replace the name, keeping the id
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: replace the specialty, keeping the id
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    // --- Getters ---

    /// Get the dentist id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the full name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the specialty
    pub fn specialty(&self) -> &str {
        &self.specialty
    }
}
