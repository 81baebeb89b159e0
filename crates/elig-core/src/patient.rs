use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Read-only patient record handed to every evaluation function.
///
/// The combinators only pass it through. Leaf criteria read what they need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: String,
    /// `None` when the tumor has not been curated to any doid.
    #[serde(default)]
    pub tumor_doids: Option<BTreeSet<String>>,
}

impl PatientRecord {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            tumor_doids: None,
        }
    }

    pub fn with_tumor_doids<I, S>(mut self, doids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tumor_doids = Some(doids.into_iter().map(Into::into).collect());
        self
    }
}
