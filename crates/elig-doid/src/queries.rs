//! Membership queries over a patient's tumor doids.
//!
//! `None` stands for a patient whose tumor doids were never configured. Queries
//! that need the ontology are methods on [`DoidModel`]; the rest are plain set
//! checks and never expand closures.

use std::collections::BTreeSet;

use elig_core::EvaluationResult;

use crate::graph::closure;
use crate::model::DoidModel;

/// Present and non-empty.
pub fn has_configured_doids(tumor_doids: Option<&BTreeSet<String>>) -> bool {
    tumor_doids.is_some_and(|doids| !doids.is_empty())
}

/// The patient has exactly one doid and it is `doid_to_match`.
pub fn is_of_exact_doid(tumor_doids: Option<&BTreeSet<String>>, doid_to_match: &str) -> bool {
    tumor_doids.is_some_and(|doids| doids.len() == 1 && doids.contains(doid_to_match))
}

/// The patient carries every doid of at least one combination.
pub fn has_at_least_one_combination_of_doids(
    tumor_doids: Option<&BTreeSet<String>>,
    valid_doid_combinations: &[BTreeSet<String>],
) -> bool {
    tumor_doids.is_some_and(|doids| {
        valid_doid_combinations
            .iter()
            .any(|combination| combination.is_subset(doids))
    })
}

pub fn is_of_doid_combination_type(
    tumor_doids: Option<&BTreeSet<String>>,
    valid_doid_combination: &BTreeSet<String>,
) -> bool {
    has_at_least_one_combination_of_doids(
        tumor_doids,
        std::slice::from_ref(valid_doid_combination),
    )
}

impl DoidModel {
    /// Union of the closures of every tumor doid.
    pub fn create_full_expanded_doid_tree(
        &self,
        tumor_doids: Option<&BTreeSet<String>>,
    ) -> BTreeSet<String> {
        match tumor_doids {
            Some(doids) => closure::expanded_tree(self.graph(), doids),
            None => BTreeSet::new(),
        }
    }

    pub fn is_of_doid_type(
        &self,
        tumor_doids: Option<&BTreeSet<String>>,
        doid_to_match: &str,
    ) -> bool {
        self.create_full_expanded_doid_tree(tumor_doids)
            .contains(doid_to_match)
    }

    pub fn is_of_at_least_one_doid_type(
        &self,
        tumor_doids: Option<&BTreeSet<String>>,
        doids_to_match: &BTreeSet<String>,
    ) -> bool {
        !self
            .create_full_expanded_doid_tree(tumor_doids)
            .is_disjoint(doids_to_match)
    }

    /// Some term of the expanded tree contains one of `doid_terms_to_match`, ignoring case.
    pub fn is_of_at_least_one_doid_term(
        &self,
        tumor_doids: Option<&BTreeSet<String>>,
        doid_terms_to_match: &BTreeSet<String>,
    ) -> bool {
        let lower_case_queries: Vec<String> = doid_terms_to_match
            .iter()
            .map(|term| term.to_lowercase())
            .collect();
        self.create_full_expanded_doid_tree(tumor_doids)
            .iter()
            .filter_map(|doid| self.resolve_term_for_doid(doid))
            .any(|term| {
                let term = term.to_lowercase();
                lower_case_queries.iter().any(|query| term.contains(query.as_str()))
            })
    }

    /// Every tumor doid must descend from `doids_to_match`.
    ///
    /// FAIL when that does not hold, when any tumor doid descends from `fail_doids`
    /// or when there are no tumor doids at all. Otherwise WARN when any descends
    /// from `warn_doids`, and PASS if not.
    pub fn evaluate_all_doids_match_with_fail_and_warns(
        &self,
        tumor_doids: Option<&BTreeSet<String>>,
        doids_to_match: &BTreeSet<String>,
        fail_doids: &BTreeSet<String>,
        warn_doids: &BTreeSet<String>,
    ) -> EvaluationResult {
        let Some(doids) = tumor_doids.filter(|doids| !doids.is_empty()) else {
            return EvaluationResult::Fail;
        };

        let mut all_doids_match = true;
        let mut has_fail_doid = false;
        let mut has_warn_doid = false;
        for doid in doids {
            let expanded = self.doid_with_parents(doid);
            all_doids_match &= !expanded.is_disjoint(doids_to_match);
            has_fail_doid |= !expanded.is_disjoint(fail_doids);
            has_warn_doid |= !expanded.is_disjoint(warn_doids);
        }

        if !all_doids_match || has_fail_doid {
            EvaluationResult::Fail
        } else if has_warn_doid {
            EvaluationResult::Warn
        } else {
            EvaluationResult::Pass
        }
    }

    /// Every tumor doid descends from `doid_to_match`.
    pub fn is_of_exclusive_doid_type(
        &self,
        tumor_doids: Option<&BTreeSet<String>>,
        doid_to_match: &str,
    ) -> bool {
        let doids_to_match = BTreeSet::from([doid_to_match.to_string()]);
        self.evaluate_all_doids_match_with_fail_and_warns(
            tumor_doids,
            &doids_to_match,
            &BTreeSet::new(),
            &BTreeSet::new(),
        ) == EvaluationResult::Pass
    }
}
