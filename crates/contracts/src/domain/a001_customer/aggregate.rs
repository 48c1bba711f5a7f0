use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Customer record as accepted by `POST /customer/createOrUpdate`.
///
/// The same shape serves create and update: `id` is omitted on create and
/// carried on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: String,
    #[serde(rename = "nationalID")]
    pub national_id: String,
    pub gender_id: String,
    pub governorate_id: String,
    pub district_id: String,
    pub village_id: String,
    /// ISO 8601 timestamp
    pub birth_date: String,
    pub salary: f64,
}

/// Customer projection returned by the list and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDto {
    pub id: String,
    pub full_name: String,
    #[serde(rename = "nationalID")]
    pub national_id: String,
    pub gender_id: String,
    pub governorate_id: String,
    pub district_id: String,
    pub village_id: String,
    pub salary: f64,
    pub birth_date: String,
    pub age: Option<u32>,
    pub created_date: Option<String>,
    pub created_by: Option<String>,
    pub is_active: bool,
    pub gender: Option<Value>,
    pub governorate: Option<Value>,
    pub district: Option<Value>,
    pub village: Option<Value>,
}

impl CustomerDto {
    pub fn gender_name(&self) -> Option<String> {
        navigation_name(&self.gender)
    }

    pub fn governorate_name(&self) -> Option<String> {
        navigation_name(&self.governorate)
    }

    pub fn district_name(&self) -> Option<String> {
        navigation_name(&self.district)
    }

    pub fn village_name(&self) -> Option<String> {
        navigation_name(&self.village)
    }
}

/// Navigation properties are loosely typed on the wire; only `name` is used.
fn navigation_name(value: &Option<Value>) -> Option<String> {
    value
        .as_ref()?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

impl From<&CustomerDto> for Customer {
    fn from(dto: &CustomerDto) -> Self {
        Self {
            id: Some(dto.id.clone()),
            full_name: dto.full_name.clone(),
            national_id: dto.national_id.clone(),
            gender_id: dto.gender_id.clone(),
            governorate_id: dto.governorate_id.clone(),
            district_id: dto.district_id.clone(),
            village_id: dto.village_id.clone(),
            birth_date: dto.birth_date.clone(),
            salary: dto.salary,
        }
    }
}

/// Body of `GET /Customer?skip&take&search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerListResponse {
    pub total_count: usize,
    pub items: Vec<CustomerDto>,
}

/// Offset-based list query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerQuery {
    pub skip: usize,
    pub take: usize,
    pub search: String,
}

impl CustomerQuery {
    /// Search term as sent to the server; blank terms are not sent at all.
    pub fn search_term(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_omits_id() {
        let customer = Customer {
            id: None,
            full_name: "Mona Adel".to_string(),
            national_id: "29001011234567".to_string(),
            gender_id: "g1".to_string(),
            governorate_id: "gov1".to_string(),
            district_id: "d1".to_string(),
            village_id: "v1".to_string(),
            birth_date: "1990-01-01T00:00:00.000Z".to_string(),
            salary: 4500.0,
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["nationalID"], "29001011234567");
        assert_eq!(json["fullName"], "Mona Adel");
        assert_eq!(json.as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_update_payload_carries_id() {
        let mut customer: Customer = (&CustomerDto {
            id: "c-1".to_string(),
            full_name: "Omar".to_string(),
            ..Default::default()
        })
            .into();
        customer.salary = 10.0;
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], "c-1");
        assert_eq!(json.as_object().unwrap().len(), 9);
    }

    #[test]
    fn test_list_response_tolerates_sparse_rows() {
        let body = r#"{
            "totalCount": 14,
            "items": [{
                "id": "a",
                "fullName": "Sara",
                "nationalID": "12345678901234",
                "salary": 1200.5,
                "birthDate": "1995-05-05T00:00:00",
                "createdBy": null,
                "governorate": { "id": "x", "name": "Cairo" },
                "village": null
            }]
        }"#;
        let response: CustomerListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_count, 14);
        let row = &response.items[0];
        assert_eq!(row.full_name, "Sara");
        assert_eq!(row.governorate_name().as_deref(), Some("Cairo"));
        assert_eq!(row.village_name(), None);
        assert_eq!(row.gender_name(), None);
    }

    #[test]
    fn test_search_term_trimmed() {
        let mut query = CustomerQuery {
            skip: 0,
            take: 6,
            search: "   ".to_string(),
        };
        assert_eq!(query.search_term(), None);
        query.search = "  ali ".to_string();
        assert_eq!(query.search_term(), Some("ali"));
    }
}
