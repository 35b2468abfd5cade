//! Validated contact submission - the record that gets persisted.

use serde::Serialize;

/// A contact submission that passed validation.
///
/// Only [`ContactValidator`](crate::ContactValidator) constructs this type,
/// so holding one means every field constraint holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    project: String,
    services: Vec<String>,
}

impl ContactSubmission {
    pub(crate) fn new(
        name: String,
        email: String,
        company: Option<String>,
        project: String,
        services: Vec<String>,
    ) -> Self {
        Self {
            name,
            email,
            company,
            project,
            services,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }

    pub(crate) fn into_parts(self) -> (String, String, Option<String>, String, Vec<String>) {
        (
            self.name,
            self.email,
            self.company,
            self.project,
            self.services,
        )
    }
}
