//! Governorate → district → village dropdown cascade.
//!
//! Changing a parent clears and disables every dropdown below it, then asks
//! for a fetch of the direct child's options. The child is enabled only when
//! that fetch returns at least one item. Responses are matched against the
//! latest [`CascadeFetch`] token per level, so a late answer for a parent the
//! user already moved away from is dropped.

use contracts::domain::a002_lookup::aggregate::{CategoryCode, LookupItem};

use crate::shared::api_utils::ApiError;
use crate::shared::request_seq::{RequestSeq, ResponseOutcome};

pub const DISTRICTS_ERROR: &str = "Failed to load districts";
pub const VILLAGES_ERROR: &str = "Failed to load villages";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependentSelect {
    pub options: Vec<LookupItem>,
    /// Empty when nothing is selected
    pub selected: String,
    pub enabled: bool,
}

impl DependentSelect {
    pub fn reset(&mut self) {
        self.options.clear();
        self.selected.clear();
        self.enabled = false;
    }

    pub fn populate(&mut self, items: Vec<LookupItem>) {
        self.enabled = !items.is_empty();
        self.options = items;
    }

    /// Accepts the empty selection or one of the current options
    pub fn select(&mut self, id: &str) -> bool {
        if !self.enabled {
            return false;
        }
        if !id.is_empty() && !self.options.iter().any(|o| o.id == id) {
            return false;
        }
        self.selected = id.to_string();
        true
    }

    pub fn selected_id(&self) -> Option<&str> {
        if self.selected.is_empty() {
            None
        } else {
            Some(&self.selected)
        }
    }
}

/// Child options to load for a newly selected parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeFetch {
    pub category: CategoryCode,
    pub parent_id: String,
    pub token: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationCascade {
    pub governorates: Vec<LookupItem>,
    pub governorate: String,
    pub districts: DependentSelect,
    pub villages: DependentSelect,
    district_seq: RequestSeq,
    village_seq: RequestSeq,
}

impl LocationCascade {
    pub fn set_governorates(&mut self, items: Vec<LookupItem>) {
        self.governorates = items;
    }

    pub fn select_governorate(&mut self, id: &str) -> Option<CascadeFetch> {
        self.governorate = id.to_string();
        self.districts.reset();
        self.villages.reset();
        self.village_seq.invalidate();
        let token = self.district_seq.issue();
        if id.is_empty() {
            return None;
        }
        Some(CascadeFetch {
            category: CategoryCode::District,
            parent_id: id.to_string(),
            token,
        })
    }

    pub fn select_district(&mut self, id: &str) -> Option<CascadeFetch> {
        if !self.districts.select(id) {
            return None;
        }
        self.villages.reset();
        let token = self.village_seq.issue();
        if id.is_empty() {
            return None;
        }
        Some(CascadeFetch {
            category: CategoryCode::Village,
            parent_id: id.to_string(),
            token,
        })
    }

    pub fn select_village(&mut self, id: &str) -> bool {
        self.villages.select(id)
    }

    /// Feeds a child-options response back in
    ///
    /// On failure the child stays empty and disabled.
    pub fn apply(
        &mut self,
        fetch: &CascadeFetch,
        result: Result<Vec<LookupItem>, ApiError>,
    ) -> ResponseOutcome {
        let (seq, select, error) = match fetch.category {
            CategoryCode::District => (&self.district_seq, &mut self.districts, DISTRICTS_ERROR),
            CategoryCode::Village => (&self.village_seq, &mut self.villages, VILLAGES_ERROR),
            CategoryCode::Gender | CategoryCode::Governorate => return ResponseOutcome::Stale,
        };
        if !seq.is_current(fetch.token) {
            return ResponseOutcome::Stale;
        }
        match result {
            Ok(items) => {
                log::debug!(
                    "{} options for {}: {}",
                    fetch.category.label(),
                    fetch.parent_id,
                    items.len()
                );
                select.populate(items);
                ResponseOutcome::Applied
            }
            Err(e) => {
                log::error!("{} lookup for {}: {}", fetch.category.label(), fetch.parent_id, e);
                select.reset();
                ResponseOutcome::Failed(error.to_string())
            }
        }
    }

    /// Restores a saved location using option lists loaded up front
    ///
    /// Bypasses the cascade so no fetch is triggered, and drops any fetch
    /// still in flight.
    pub fn prefill(
        &mut self,
        governorate: &str,
        district: &str,
        village: &str,
        districts: Vec<LookupItem>,
        villages: Vec<LookupItem>,
    ) {
        self.district_seq.invalidate();
        self.village_seq.invalidate();
        self.governorate = governorate.to_string();

        self.districts.populate(districts);
        self.districts.selected = district.to_string();
        self.villages.populate(villages);
        self.villages.selected = village.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: CategoryCode, parent: &str) -> LookupItem {
        LookupItem {
            id: id.to_string(),
            category_code: Some(category.code()),
            parent_id: Some(parent.to_string()),
            code: id.to_uppercase(),
            name: format!("Item {}", id),
        }
    }

    fn districts(parent: &str, n: usize) -> Vec<LookupItem> {
        (1..=n)
            .map(|i| item(&format!("{}-d{}", parent, i), CategoryCode::District, parent))
            .collect()
    }

    #[test]
    fn test_governorate_without_districts_leaves_district_disabled() {
        let mut cascade = LocationCascade::default();
        let fetch = cascade.select_governorate("g1").unwrap();
        assert_eq!(fetch.category, CategoryCode::District);
        assert_eq!(cascade.apply(&fetch, Ok(Vec::new())), ResponseOutcome::Applied);
        assert!(!cascade.districts.enabled);
        assert!(cascade.districts.options.is_empty());
    }

    #[test]
    fn test_governorate_with_districts_enables_exactly_those() {
        let mut cascade = LocationCascade::default();
        let fetch = cascade.select_governorate("g1").unwrap();
        cascade.apply(&fetch, Ok(districts("g1", 3)));
        assert!(cascade.districts.enabled);
        assert_eq!(cascade.districts.options.len(), 3);
        assert!(!cascade.villages.enabled);
    }

    #[test]
    fn test_changing_governorate_clears_children() {
        let mut cascade = LocationCascade::default();
        let fetch = cascade.select_governorate("g1").unwrap();
        cascade.apply(&fetch, Ok(districts("g1", 2)));
        let villages_fetch = cascade.select_district("g1-d1").unwrap();
        cascade.apply(
            &villages_fetch,
            Ok(vec![item("v1", CategoryCode::Village, "g1-d1")]),
        );
        assert!(cascade.select_village("v1"));

        cascade.select_governorate("g2");
        assert_eq!(cascade.districts, DependentSelect::default());
        assert_eq!(cascade.villages, DependentSelect::default());
    }

    #[test]
    fn test_late_districts_for_old_governorate_are_dropped() {
        let mut cascade = LocationCascade::default();
        let old = cascade.select_governorate("g1").unwrap();
        let new = cascade.select_governorate("g2").unwrap();
        cascade.apply(&new, Ok(districts("g2", 1)));
        assert_eq!(cascade.apply(&old, Ok(districts("g1", 4))), ResponseOutcome::Stale);
        assert_eq!(cascade.districts.options[0].id, "g2-d1");
    }

    #[test]
    fn test_clearing_governorate_requests_nothing() {
        let mut cascade = LocationCascade::default();
        let pending = cascade.select_governorate("g1").unwrap();
        assert!(cascade.select_governorate("").is_none());
        assert_eq!(
            cascade.apply(&pending, Ok(districts("g1", 2))),
            ResponseOutcome::Stale
        );
        assert!(!cascade.districts.enabled);
    }

    #[test]
    fn test_failed_district_lookup() {
        let mut cascade = LocationCascade::default();
        let fetch = cascade.select_governorate("g1").unwrap();
        let outcome = cascade.apply(&fetch, Err(ApiError::Network("offline".into())));
        assert_eq!(outcome.error(), Some(DISTRICTS_ERROR));
        assert!(!cascade.districts.enabled);
    }

    #[test]
    fn test_district_must_be_enabled_and_known() {
        let mut cascade = LocationCascade::default();
        assert!(cascade.select_district("x").is_none());
        let fetch = cascade.select_governorate("g1").unwrap();
        cascade.apply(&fetch, Ok(districts("g1", 1)));
        assert!(cascade.select_district("unknown").is_none());
        assert_eq!(cascade.districts.selected_id(), None);
    }

    #[test]
    fn test_prefill_skips_fetches_and_drops_pending() {
        let mut cascade = LocationCascade::default();
        let pending = cascade.select_governorate("g9").unwrap();
        cascade.prefill(
            "g1",
            "g1-d1",
            "v1",
            districts("g1", 2),
            vec![item("v1", CategoryCode::Village, "g1-d1")],
        );
        assert_eq!(cascade.apply(&pending, Ok(Vec::new())), ResponseOutcome::Stale);
        assert_eq!(cascade.governorate, "g1");
        assert_eq!(cascade.districts.selected_id(), Some("g1-d1"));
        assert!(cascade.villages.enabled);
        assert_eq!(cascade.villages.selected_id(), Some("v1"));
    }
}
