//! Patient entity - a person receiving care at the clinic

/// A registered patient
///
/// Patients are immutable records; edits produce a new value with the
/// same id (update-by-replacement).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    /// Unique identifier (UUID string)
    id: String,
    /// Full name
    name: String,
    /// Contact phone number
    phone: String,
}

impl Patient {
    /// Create a new Patient
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Builder: replace the name, keeping the id
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: replace the phone number, keeping the id
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    // --- Getters ---

    /// Get the patient id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the full name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the phone number
    pub fn phone(&self) -> &str {
        &self.phone
    }
}
