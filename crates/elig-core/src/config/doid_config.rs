use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, EligResult, OntologyError};

/// A combined adeno-squamous doid with its squamous and adeno counterparts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AdenoSquamousMapping {
    pub adeno_squamous_doid: String,
    pub squamous_doid: String,
    pub adeno_doid: String,
}

/// A child → parent ontology edge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoidRelationship {
    pub child: String,
    pub parent: String,
}

/// Manually curated exceptions layered over the disease ontology.
///
/// Built once at startup and shared read-only (typically behind an `Arc`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoidManualConfig {
    pub main_cancer_doids: BTreeSet<String>,
    /// One extra parent per doid.
    pub additional_doids_per_doid: BTreeMap<String, String>,
    pub adeno_squamous_mappings: BTreeSet<AdenoSquamousMapping>,
    /// Reserved for pruning; closures do not consult it.
    pub child_to_parent_relationships_to_exclude: BTreeSet<DoidRelationship>,
}

impl DoidManualConfig {
    /// The curated overlay shipped with the crate.
    pub fn create() -> Self {
        Self {
            main_cancer_doids: defaults::MAIN_CANCER_DOIDS
                .iter()
                .map(|doid| doid.to_string())
                .collect(),
            additional_doids_per_doid: defaults::ADDITIONAL_DOIDS_PER_DOID
                .iter()
                .map(|(child, parent)| (child.to_string(), parent.to_string()))
                .collect(),
            adeno_squamous_mappings: defaults::ADENO_SQUAMOUS_MAPPINGS
                .iter()
                .map(|(adeno_squamous, squamous, adeno)| AdenoSquamousMapping {
                    adeno_squamous_doid: adeno_squamous.to_string(),
                    squamous_doid: squamous.to_string(),
                    adeno_doid: adeno.to_string(),
                })
                .collect(),
            child_to_parent_relationships_to_exclude:
                defaults::CHILD_TO_PARENT_RELATIONSHIPS_TO_EXCLUDE
                    .iter()
                    .map(|(child, parent)| DoidRelationship {
                        child: child.to_string(),
                        parent: parent.to_string(),
                    })
                    .collect(),
        }
    }

    /// An overlay with no exceptions at all.
    pub fn empty() -> Self {
        Self {
            main_cancer_doids: BTreeSet::new(),
            additional_doids_per_doid: BTreeMap::new(),
            adeno_squamous_mappings: BTreeSet::new(),
            child_to_parent_relationships_to_exclude: BTreeSet::new(),
        }
    }

    /// Reject overlays that cannot be applied to a graph.
    pub fn validate(&self) -> EligResult<()> {
        for (child, parent) in &self.additional_doids_per_doid {
            if child.is_empty() || parent.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "additional_doids_per_doid".to_string(),
                    reason: format!("empty doid in edge '{child}' -> '{parent}'"),
                }
                .into());
            }
            if child == parent {
                return Err(OntologyError::SelfReferencingManualEdge {
                    doid: child.clone(),
                }
                .into());
            }
        }
        if self.main_cancer_doids.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidValue {
                field: "main_cancer_doids".to_string(),
                reason: "empty doid".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for DoidManualConfig {
    fn default() -> Self {
        Self::create()
    }
}
