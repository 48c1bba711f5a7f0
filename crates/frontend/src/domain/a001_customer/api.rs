//! Customer data gateway: single-shot REST calls, no retries.

use contracts::domain::a001_customer::aggregate::{
    Customer, CustomerDto, CustomerListResponse, CustomerQuery,
};

use crate::shared::api_utils::{execute, execute_json, read_json, ApiClient, ApiError};

pub fn list_path(query: &CustomerQuery) -> String {
    let mut path = format!("/Customer?skip={}&take={}", query.skip, query.take);
    if let Some(term) = query.search_term() {
        path.push_str("&search=");
        path.push_str(&urlencoding::encode(term));
    }
    path
}

fn item_path(id: &str) -> Result<String, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::MissingId("Customer id"));
    }
    Ok(format!("/Customer/{}", urlencoding::encode(id)))
}

pub async fn get_by_id(client: &ApiClient, id: &str) -> Result<CustomerDto, ApiError> {
    let response = execute(client.get(&item_path(id)?)).await?;
    read_json(response).await
}

pub async fn list(
    client: &ApiClient,
    query: &CustomerQuery,
) -> Result<CustomerListResponse, ApiError> {
    let response = execute(client.get(&list_path(query))).await?;
    read_json(response).await
}

/// Creates the customer when it has no id, updates it otherwise
pub async fn create_or_update(
    client: &ApiClient,
    customer: &Customer,
) -> Result<CustomerDto, ApiError> {
    let response = execute_json(client.post("/customer/createOrUpdate"), customer).await?;
    read_json(response).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    execute(client.delete(&item_path(id)?)).await?;
    Ok(())
}

/// Binary PDF of the whole customer table
pub async fn export_pdf(client: &ApiClient) -> Result<Vec<u8>, ApiError> {
    let response = execute(client.get("/Customer/export")).await?;
    response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path_omits_blank_search() {
        let query = CustomerQuery {
            skip: 12,
            take: 6,
            search: "   ".to_string(),
        };
        assert_eq!(list_path(&query), "/Customer?skip=12&take=6");
    }

    #[test]
    fn test_list_path_encodes_search() {
        let query = CustomerQuery {
            skip: 0,
            take: 6,
            search: " Ali Hassan ".to_string(),
        };
        assert_eq!(list_path(&query), "/Customer?skip=0&take=6&search=Ali%20Hassan");
    }

    #[test]
    fn test_item_path_requires_id() {
        assert_eq!(item_path(""), Err(ApiError::MissingId("Customer id")));
        assert_eq!(item_path("42").as_deref(), Ok("/Customer/42"));
    }
}
