//! Lookup resolver: reference data for the customer dropdowns.
//!
//! An empty result is a valid answer; a failed request is reported as an
//! error so callers can tell "no options" from "dropdown unavailable".

use contracts::domain::a002_lookup::aggregate::{
    CategoryCode, LookupItem, LookupSearchParams, LookupSearchResponse,
};

use crate::shared::api_utils::{execute, read_json, ApiClient, ApiError};

pub fn search_path(params: &LookupSearchParams) -> String {
    let mut path = format!(
        "/Lookups/search?categoryCode={}",
        params.category_code.code()
    );
    if let Some(parent_id) = &params.parent_id {
        path.push_str("&parentId=");
        path.push_str(&urlencoding::encode(parent_id));
    }
    path.push_str(&format!("&skip={}&take={}", params.skip, params.take));
    path
}

pub async fn search(
    client: &ApiClient,
    params: &LookupSearchParams,
) -> Result<Vec<LookupItem>, ApiError> {
    let response = execute(client.get(&search_path(params))).await?;
    let body: LookupSearchResponse = read_json(response).await?;
    log::debug!(
        "lookup {} -> {} of {} items",
        params.category_code.label(),
        body.items.len(),
        body.total_count
    );
    Ok(body.items)
}

pub async fn genders(client: &ApiClient) -> Result<Vec<LookupItem>, ApiError> {
    search(client, &LookupSearchParams::new(CategoryCode::Gender)).await
}

pub async fn governorates(client: &ApiClient) -> Result<Vec<LookupItem>, ApiError> {
    search(client, &LookupSearchParams::new(CategoryCode::Governorate)).await
}

pub async fn districts_of(
    client: &ApiClient,
    governorate_id: &str,
) -> Result<Vec<LookupItem>, ApiError> {
    children_of(client, CategoryCode::District, governorate_id).await
}

pub async fn villages_of(
    client: &ApiClient,
    district_id: &str,
) -> Result<Vec<LookupItem>, ApiError> {
    children_of(client, CategoryCode::Village, district_id).await
}

/// Items of `category` whose parent is `parent_id`
pub async fn children_of(
    client: &ApiClient,
    category: CategoryCode,
    parent_id: &str,
) -> Result<Vec<LookupItem>, ApiError> {
    if parent_id.trim().is_empty() {
        return Err(ApiError::MissingId("Parent id"));
    }
    search(
        client,
        &LookupSearchParams::new(category).with_parent(parent_id),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_path_without_parent() {
        let params = LookupSearchParams::new(CategoryCode::Governorate);
        assert_eq!(
            search_path(&params),
            "/Lookups/search?categoryCode=2&skip=0&take=50"
        );
    }

    #[test]
    fn test_search_path_encodes_parent() {
        let params = LookupSearchParams::new(CategoryCode::Village).with_parent("a b&c");
        assert_eq!(
            search_path(&params),
            "/Lookups/search?categoryCode=4&parentId=a%20b%26c&skip=0&take=50"
        );
    }
}
