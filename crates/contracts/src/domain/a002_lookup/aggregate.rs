use serde::{Deserialize, Serialize};

/// Default page size for lookup searches
pub const LOOKUP_TAKE: usize = 50;

/// Lookup category, sent over the wire as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryCode {
    Gender = 1,
    Governorate = 2,
    District = 3,
    Village = 4,
}

impl CategoryCode {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryCode::Gender => "Gender",
            CategoryCode::Governorate => "Governorate",
            CategoryCode::District => "District",
            CategoryCode::Village => "Village",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupItem {
    pub id: String,
    /// Raw code as sent; unknown or missing codes are accepted
    #[serde(default)]
    pub category_code: Option<u8>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSearchParams {
    pub category_code: CategoryCode,
    pub parent_id: Option<String>,
    pub skip: usize,
    pub take: usize,
}

impl LookupSearchParams {
    pub fn new(category_code: CategoryCode) -> Self {
        Self {
            category_code,
            parent_id: None,
            skip: 0,
            take: LOOKUP_TAKE,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupSearchResponse {
    pub total_count: usize,
    pub items: Vec<LookupItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_item_from_wire() {
        let body = r#"{"totalCount":1,"items":[
            {"id":"d1","categoryCode":3,"parentId":"g1","code":"D1","name":"Nasr City"}
        ]}"#;
        let response: LookupSearchResponse = serde_json::from_str(body).unwrap();
        let item = &response.items[0];
        assert_eq!(item.category_code, Some(CategoryCode::District.code()));
        assert_eq!(item.parent_id.as_deref(), Some("g1"));
    }

    #[test]
    fn test_unknown_category_keeps_the_response() {
        let body = r#"{"totalCount":3,"items":[
            {"id":"v1","categoryCode":4,"name":"Kafr Saad"},
            {"id":"x","categoryCode":9,"name":"Other"},
            {"id":"y","name":"No code"}
        ]}"#;
        let response: LookupSearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.items.len(), 3);
        assert_eq!(response.items[1].category_code, Some(9));
        assert_eq!(response.items[2].category_code, None);
    }

    #[test]
    fn test_wire_codes() {
        assert_eq!(CategoryCode::Gender.code(), 1);
        assert_eq!(CategoryCode::Governorate.code(), 2);
        assert_eq!(CategoryCode::Village.code(), 4);
    }

    #[test]
    fn test_search_params_defaults() {
        let params = LookupSearchParams::new(CategoryCode::District).with_parent("g7");
        assert_eq!(params.skip, 0);
        assert_eq!(params.take, 50);
        assert_eq!(params.parent_id.as_deref(), Some("g7"));
    }
}
