use contracts::domain::a001_customer::aggregate::{CustomerDto, CustomerListResponse, CustomerQuery};
use contracts::shared::pagination::{skip_for_page, PaginationInfo};
use leptos::prelude::*;

use crate::shared::api_utils::ApiError;
use crate::shared::config::DEFAULT_PAGE_SIZE;
use crate::shared::debounce::DebouncedTerm;
use crate::shared::request_seq::{RequestSeq, ResponseOutcome};

pub const LOAD_ERROR: &str = "Failed to load customers. Please try again.";
pub const DETAIL_ERROR: &str = "Failed to load customer details. Please try again.";
pub const DELETE_ERROR: &str = "Failed to delete customer. Please try again.";
pub const EXPORT_ERROR: &str = "Failed to export PDF. Please try again.";

/// A list fetch to perform; the token must be handed back with the response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub token: u64,
    pub query: CustomerQuery,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailModal {
    #[default]
    Closed,
    Loading {
        id: String,
        token: u64,
    },
    Loaded(CustomerDto),
}

impl DetailModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, DetailModal::Closed)
    }

    pub fn customer_id(&self) -> Option<&str> {
        match self {
            DetailModal::Closed => None,
            DetailModal::Loading { id, .. } => Some(id),
            DetailModal::Loaded(dto) => Some(&dto.id),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CustomerListState {
    // rows on screen
    pub items: Vec<CustomerDto>,
    pub pagination: PaginationInfo,

    // requested position
    pub page: usize,
    pub page_size: usize,

    // search box text, and the debounced term actually applied
    pub search_input: String,
    search: DebouncedTerm,

    // load flags
    pub is_loading: bool,
    pub is_loaded: bool,
    pub load_failed: bool,
    // the last response answered a page past the end
    overshot: bool,

    pub detail: DetailModal,

    seq: RequestSeq,
    detail_seq: RequestSeq,
}

impl Default for CustomerListState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl CustomerListState {
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            items: Vec::new(),
            pagination: PaginationInfo::first(page_size),
            page: 1,
            page_size,
            search_input: String::new(),
            search: DebouncedTerm::default(),
            is_loading: false,
            is_loaded: false,
            load_failed: false,
            overshot: false,
            detail: DetailModal::Closed,
            seq: RequestSeq::default(),
            detail_seq: RequestSeq::default(),
        }
    }

    pub fn search_term(&self) -> &str {
        self.search.settled()
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        self.pagination.page_window()
    }

    pub fn is_empty(&self) -> bool {
        self.is_loaded
            && !self.is_loading
            && !self.load_failed
            && !self.overshot
            && self.items.is_empty()
    }

    /// Fetch for the requested page with the applied search term
    pub fn load(&mut self) -> ListRequest {
        self.is_loading = true;
        ListRequest {
            token: self.seq.issue(),
            query: CustomerQuery {
                skip: skip_for_page(self.page, self.page_size),
                take: self.page_size,
                search: self.search.settled().to_string(),
            },
        }
    }

    /// Jumps to `page`; rows on screen stay until the new page arrives
    pub fn go_to_page(&mut self, page: usize) -> Option<ListRequest> {
        if !self.pagination.contains_page(page) || page == self.page {
            return None;
        }
        log::debug!("customer list: page {} -> {}", self.page, page);
        self.page = page;
        Some(self.load())
    }

    /// New page size restarts at page 1 with an empty table
    pub fn set_page_size(&mut self, page_size: usize) -> Option<ListRequest> {
        if page_size == 0 || page_size == self.page_size {
            return None;
        }
        self.page_size = page_size;
        self.page = 1;
        self.items.clear();
        Some(self.load())
    }

    /// Records a keystroke; returns the debounce ticket to settle later
    pub fn search_input(&mut self, text: String) -> u64 {
        self.search_input = text;
        self.search.input()
    }

    /// Applies the typed term once the debounce window has elapsed
    pub fn settle_search(&mut self, ticket: u64) -> Option<ListRequest> {
        let term = self.search_input.trim().to_string();
        let applied = self.search.settle(ticket, &term)?;
        log::debug!("customer list: search {:?}", applied);
        self.page = 1;
        self.items.clear();
        Some(self.load())
    }

    /// Drops the search and reloads the first page
    pub fn refresh(&mut self) -> ListRequest {
        self.search_input.clear();
        self.search.reset("");
        self.page = 1;
        self.load()
    }

    pub fn apply_page(
        &mut self,
        token: u64,
        result: Result<CustomerListResponse, ApiError>,
    ) -> ResponseOutcome {
        if !self.seq.is_current(token) {
            return ResponseOutcome::Stale;
        }
        self.is_loading = false;
        self.is_loaded = true;
        match result {
            Ok(response) => {
                let requested = self.page;
                let skip = skip_for_page(requested, self.page_size);
                self.pagination =
                    PaginationInfo::calculate(response.total_count, skip, self.page_size);
                self.page = self.pagination.current_page;
                self.overshot = response.items.is_empty()
                    && response.total_count > 0
                    && self.page < requested;
                self.items = response.items;
                self.load_failed = false;
                ResponseOutcome::Applied
            }
            Err(e) => {
                log::error!("customer list: {}", e);
                self.load_failed = true;
                self.overshot = false;
                self.items.clear();
                self.page = 1;
                self.pagination = PaginationInfo::first(self.page_size);
                ResponseOutcome::Failed(LOAD_ERROR.to_string())
            }
        }
    }

    /// Refetches the last valid page when the rows shrank under a request
    /// for a later page
    pub fn refetch_clamped(&mut self) -> Option<ListRequest> {
        if !std::mem::take(&mut self.overshot) {
            return None;
        }
        log::debug!("customer list: page past the end, reloading page {}", self.page);
        Some(self.load())
    }

    /// Reload after `deleted_id` was removed on the server
    ///
    /// Steps back one page when the deleted row was the only one on a page
    /// beyond the first.
    pub fn after_delete(&mut self, deleted_id: &str) -> ListRequest {
        let was_only_row = self.items.len() == 1;
        self.items.retain(|c| c.id != deleted_id);
        if was_only_row && self.page > 1 {
            self.page -= 1;
        }
        if self.detail.customer_id() == Some(deleted_id) {
            self.close_detail();
        }
        log::info!("customer {} deleted, reloading page {}", deleted_id, self.page);
        self.load()
    }

    /// Opens the modal in its loading state; returns the fetch token
    pub fn open_detail(&mut self, id: &str) -> u64 {
        let token = self.detail_seq.issue();
        self.detail = DetailModal::Loading {
            id: id.to_string(),
            token,
        };
        token
    }

    /// A failed fetch closes the modal instead of leaving it loading
    pub fn apply_detail(
        &mut self,
        token: u64,
        result: Result<CustomerDto, ApiError>,
    ) -> ResponseOutcome {
        let pending = matches!(self.detail, DetailModal::Loading { token: t, .. } if t == token);
        if !pending || !self.detail_seq.is_current(token) {
            return ResponseOutcome::Stale;
        }
        match result {
            Ok(dto) => {
                self.detail = DetailModal::Loaded(dto);
                ResponseOutcome::Applied
            }
            Err(e) => {
                log::error!("customer details: {}", e);
                self.close_detail();
                ResponseOutcome::Failed(DETAIL_ERROR.to_string())
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = DetailModal::Closed;
        self.detail_seq.invalidate();
    }
}

pub fn delete_confirmation(full_name: &str) -> String {
    format!(
        "Are you sure you want to delete customer \"{}\"?\n\nThis action cannot be undone.",
        full_name
    )
}

pub fn create_state() -> RwSignal<CustomerListState> {
    RwSignal::new(CustomerListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str) -> CustomerDto {
        CustomerDto {
            id: id.to_string(),
            full_name: format!("Customer {}", id),
            ..Default::default()
        }
    }

    fn page_of(total: usize, ids: &[&str]) -> Result<CustomerListResponse, ApiError> {
        Ok(CustomerListResponse {
            total_count: total,
            items: ids.iter().map(|id| customer(id)).collect(),
        })
    }

    /// State showing `page` of a table with `total` rows, `ids` on screen
    fn loaded_at(page: usize, total: usize, ids: &[&str]) -> CustomerListState {
        let mut state = CustomerListState::default();
        state.page = page;
        let request = state.load();
        assert_eq!(
            state.apply_page(request.token, page_of(total, ids)),
            ResponseOutcome::Applied
        );
        state
    }

    #[test]
    fn test_initial_load_query() {
        let mut state = CustomerListState::default();
        let request = state.load();
        assert_eq!(
            request.query,
            CustomerQuery {
                skip: 0,
                take: 6,
                search: String::new(),
            }
        );
        assert!(state.is_loading);
    }

    #[test]
    fn test_page_change_keeps_rows_until_response() {
        let mut state = loaded_at(1, 14, &["1", "2", "3", "4", "5", "6"]);
        let request = state.go_to_page(3).unwrap();
        assert_eq!(request.query.skip, 12);
        assert_eq!(state.items.len(), 6);

        state.apply_page(request.token, page_of(14, &["13", "14"]));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.pagination.current_page, 3);
        assert!(!state.pagination.has_next);
    }

    #[test]
    fn test_out_of_range_page_is_ignored() {
        let mut state = loaded_at(1, 14, &["1"]);
        assert!(state.go_to_page(0).is_none());
        assert!(state.go_to_page(4).is_none());
        assert!(state.go_to_page(1).is_none());
        assert_eq!(state.go_to_page(2).unwrap().query.skip, 6);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = loaded_at(1, 30, &["1"]);
        let slow = state.go_to_page(2).unwrap();
        let fast = state.go_to_page(3).unwrap();

        assert_eq!(
            state.apply_page(fast.token, page_of(30, &["13"])),
            ResponseOutcome::Applied
        );
        assert_eq!(
            state.apply_page(slow.token, page_of(30, &["7"])),
            ResponseOutcome::Stale
        );
        assert_eq!(state.items[0].id, "13");
        assert_eq!(state.pagination.current_page, 3);
    }

    #[test]
    fn test_search_resets_to_first_page_and_clears_rows() {
        let mut state = loaded_at(2, 14, &["7", "8"]);
        let ticket = state.search_input(" ali ".to_string());
        let request = state.settle_search(ticket).unwrap();
        assert_eq!(request.query.skip, 0);
        assert_eq!(request.query.search, "ali");
        assert!(state.items.is_empty());
        assert_eq!(state.search_term(), "ali");
    }

    #[test]
    fn test_search_is_debounced_and_deduplicated() {
        let mut state = loaded_at(1, 3, &["1", "2", "3"]);
        let first = state.search_input("a".to_string());
        let second = state.search_input("al".to_string());
        assert!(state.settle_search(first).is_none());
        assert!(state.settle_search(second).is_some());

        // trailing space does not change the applied term
        let third = state.search_input("al ".to_string());
        assert!(state.settle_search(third).is_none());
    }

    #[test]
    fn test_page_size_change_resets() {
        let mut state = loaded_at(2, 14, &["7"]);
        let request = state.set_page_size(12).unwrap();
        assert_eq!(request.query.skip, 0);
        assert_eq!(request.query.take, 12);
        assert!(state.items.is_empty());
        assert!(state.set_page_size(12).is_none());
    }

    #[test]
    fn test_page_size_is_requested_before_response() {
        let mut state = loaded_at(1, 14, &["1"]);
        state.set_page_size(24);
        assert_eq!(state.page_size, 24);
        assert_eq!(state.pagination.page_size, 6);
    }

    #[test]
    fn test_rows_shrinking_under_later_page_refetches_last_page() {
        let mut state = loaded_at(1, 18, &["1", "2", "3", "4", "5", "6"]);
        let request = state.go_to_page(3).unwrap();
        assert_eq!(request.query.skip, 12);

        // rows were deleted elsewhere while page 3 was loading
        state.apply_page(request.token, page_of(12, &[]));
        assert_eq!(state.page, 2);
        assert_eq!(state.pagination.total_pages, 2);
        assert!(!state.is_empty());

        let refetch = state.refetch_clamped().unwrap();
        assert_eq!(refetch.query.skip, 6);
        assert!(!state.is_empty());
        assert!(state.refetch_clamped().is_none());

        state.apply_page(refetch.token, page_of(12, &["7", "8", "9", "10", "11", "12"]));
        assert_eq!(state.items.len(), 6);
        assert!(state.refetch_clamped().is_none());
    }

    #[test]
    fn test_empty_table_does_not_refetch() {
        let mut state = loaded_at(1, 0, &[]);
        assert!(state.refetch_clamped().is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn test_refresh_clears_search() {
        let mut state = CustomerListState::default();
        let ticket = state.search_input("mona".to_string());
        state.settle_search(ticket);
        let request = state.refresh();
        assert_eq!(request.query.search, "");
        assert_eq!(state.search_input, "");
    }

    #[test]
    fn test_deleting_only_row_on_last_page_steps_back() {
        let mut state = loaded_at(3, 13, &["13"]);
        assert_eq!(state.pagination.total_pages, 3);

        let request = state.after_delete("13");
        assert_eq!(state.page, 2);
        assert_eq!(request.query.skip, 6);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_deleting_only_row_on_first_page_stays() {
        let mut state = loaded_at(1, 1, &["1"]);
        let request = state.after_delete("1");
        assert_eq!(request.query.skip, 0);
    }

    #[test]
    fn test_delete_of_viewed_customer_closes_modal() {
        let mut state = loaded_at(1, 2, &["1", "2"]);
        let token = state.open_detail("2");
        state.apply_detail(token, Ok(customer("2")));
        assert!(state.detail.is_open());

        state.after_delete("2");
        assert_eq!(state.detail, DetailModal::Closed);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_failed_load_resets_pagination() {
        let mut state = loaded_at(2, 14, &["7"]);
        let request = state.load();
        let outcome = state.apply_page(request.token, Err(ApiError::Network("offline".into())));
        assert_eq!(outcome.error(), Some(LOAD_ERROR));
        assert!(state.items.is_empty());
        assert_eq!(state.pagination, PaginationInfo::first(6));
        assert!(!state.is_empty());

        let retry = state.load();
        state.apply_page(retry.token, page_of(0, &[]));
        assert!(state.is_empty());
    }

    #[test]
    fn test_failed_detail_closes_modal() {
        let mut state = CustomerListState::default();
        let token = state.open_detail("9");
        let outcome = state.apply_detail(token, Err(ApiError::from_status(404, "")));
        assert_eq!(outcome.error(), Some(DETAIL_ERROR));
        assert!(!state.detail.is_open());
    }

    #[test]
    fn test_detail_after_close_is_stale() {
        let mut state = CustomerListState::default();
        let token = state.open_detail("9");
        state.close_detail();
        assert_eq!(
            state.apply_detail(token, Ok(customer("9"))),
            ResponseOutcome::Stale
        );
        assert!(!state.detail.is_open());
    }

    #[test]
    fn test_delete_confirmation_text() {
        assert_eq!(
            delete_confirmation("Ali Hassan"),
            "Are you sure you want to delete customer \"Ali Hassan\"?\n\nThis action cannot be undone."
        );
    }
}
