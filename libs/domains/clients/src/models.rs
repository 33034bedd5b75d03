use chrono::{DateTime, NaiveDate, Utc};
use domain_addresses::{Address, AddressInput};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn validate_birth_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date > Utc::now().date_naive() {
        return Err(ValidationError::new("birth_date_in_future"));
    }
    Ok(())
}

/// Client with its embedded address
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Client {
    pub id: Uuid,
    pub client_name: String,
    pub client_surname: String,
    /// Date of birth, `YYYY-MM-DD`
    pub birth_date: NaiveDate,
    pub gender: String,
    /// Set by the server when the client is created
    pub registration_date: DateTime<Utc>,
    pub address_id: Uuid,
    pub address: Address,
}

impl Client {
    pub(crate) fn from_parts(model: crate::entity::Model, address: Address) -> Self {
        Self {
            id: model.id,
            client_name: model.client_name,
            client_surname: model.client_surname,
            birth_date: model.birthday,
            gender: model.gender,
            registration_date: model.registration_date.into(),
            address_id: model.address_id,
            address,
        }
    }
}

/// DTO for creating a client together with its address
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClient {
    #[validate(length(min = 1, max = 255))]
    pub client_name: String,
    /// Also accepted as `client_sure_name`
    #[serde(alias = "client_sure_name")]
    #[validate(length(min = 1, max = 255))]
    pub client_surname: String,
    #[validate(custom(function = "validate_birth_date"))]
    pub birth_date: NaiveDate,
    #[validate(length(min = 1, max = 32))]
    pub gender: String,
    #[validate(nested)]
    pub address: AddressInput,
}

/// Pagination for `GET /clients`. Absent or zero means unbounded.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ClientListParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Exact-match search for `GET /client`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ClientSearch {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub surname: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "client_name": "Ada",
            "client_sure_name": "Lovelace",
            "birth_date": "1815-12-10",
            "gender": "female",
            "address": { "country": "UK", "city": "London", "street": "St James's Square" }
        })
    }

    #[test]
    fn test_legacy_surname_alias_is_accepted() {
        let input: CreateClient = serde_json::from_value(payload()).unwrap();
        assert_eq!(input.client_surname, "Lovelace");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_future_birth_date_is_rejected() {
        let mut input: CreateClient = serde_json::from_value(payload()).unwrap();
        input.birth_date = Utc::now().date_naive() + Days::new(2);

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("birth_date"));
    }

    #[test]
    fn test_nested_address_is_validated() {
        let mut input: CreateClient = serde_json::from_value(payload()).unwrap();
        input.address.street = String::new();

        assert!(input.validate().is_err());
    }
}
