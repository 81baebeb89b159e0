use serde::{Deserialize, Serialize};

/// An ICD code: a main code with an optional extension code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IcdCode {
    pub main_code: String,
    #[serde(default)]
    pub extension_code: Option<String>,
}

impl IcdCode {
    pub fn new(main_code: impl Into<String>, extension_code: Option<String>) -> Self {
        Self {
            main_code: main_code.into(),
            extension_code,
        }
    }
}

/// Anything coded with ICD codes, e.g. a comorbidity.
pub trait HasIcdCodes {
    fn icd_codes(&self) -> &[IcdCode];
}

/// Result of matching instances against target ICD codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcdMatches<T> {
    /// Instances whose code (or an ancestor of it) equals a target code, extension included.
    pub full_matches: Vec<T>,
    /// Instances matching a target's main code while their own extension is unknown.
    pub main_code_matches_with_unknown_extension: Vec<T>,
}

impl<T> IcdMatches<T> {
    pub fn is_empty(&self) -> bool {
        self.full_matches.is_empty() && self.main_code_matches_with_unknown_extension.is_empty()
    }
}

impl<T> Default for IcdMatches<T> {
    fn default() -> Self {
        Self {
            full_matches: Vec::new(),
            main_code_matches_with_unknown_extension: Vec::new(),
        }
    }
}

/// ICD hierarchy matcher. Implemented outside the core; leaf criteria depend on this contract only.
pub trait IcdMatcher: Send + Sync {
    fn find_instances_matching_any_icd_code<T>(
        &self,
        candidates: &[T],
        target_codes: &[IcdCode],
    ) -> IcdMatches<T>
    where
        T: HasIcdCodes + Clone;
}
