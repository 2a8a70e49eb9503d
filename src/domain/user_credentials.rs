//! User credentials domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored user record, keyed by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    pub email: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub dob: Option<NaiveDate>,
    pub phone_number: Option<String>,
}

/// Insert payload.
///
/// Width limits mirror the column definitions of `user_credentials`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewUserCredentials {
    #[validate(length(min = 1, max = 50, message = "email must be 1-50 characters"))]
    pub email: String,
    #[validate(length(max = 25, message = "firstname must be at most 25 characters"))]
    pub firstname: Option<String>,
    #[validate(length(max = 25, message = "lastname must be at most 25 characters"))]
    pub lastname: Option<String>,
    pub dob: Option<NaiveDate>,
    #[validate(length(max = 15, message = "phone_number must be at most 15 characters"))]
    pub phone_number: Option<String>,
}

/// Replacement values for every mutable column. `None` clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UserCredentialsUpdate {
    #[validate(length(max = 25, message = "firstname must be at most 25 characters"))]
    pub firstname: Option<String>,
    #[validate(length(max = 25, message = "lastname must be at most 25 characters"))]
    pub lastname: Option<String>,
    pub dob: Option<NaiveDate>,
    #[validate(length(max = 15, message = "phone_number must be at most 15 characters"))]
    pub phone_number: Option<String>,
}

/// Public projection returned by the lookup endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    #[schema(example = "varun@gmail.com")]
    pub email: String,
    #[schema(example = "Varun")]
    pub firstname: Option<String>,
    #[schema(example = "Reddi")]
    pub lastname: Option<String>,
}

impl From<UserCredentials> for UserSummary {
    fn from(user: UserCredentials) -> Self {
        Self {
            email: user.email,
            firstname: user.firstname,
            lastname: user.lastname,
        }
    }
}

impl std::fmt::Display for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn or_none<T: std::fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "None".to_string())
        }

        write!(
            f,
            "{} {} {} {} {}",
            or_none(&self.firstname),
            or_none(&self.lastname),
            or_none(&self.dob),
            self.email,
            or_none(&self.phone_number)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn varun() -> NewUserCredentials {
        NewUserCredentials {
            email: "varun@gmail.com".to_string(),
            firstname: Some("Varun".to_string()),
            lastname: Some("Reddi".to_string()),
            dob: NaiveDate::from_ymd_opt(2000, 1, 1),
            phone_number: Some("9876543210".to_string()),
        }
    }

    #[test]
    fn accepts_values_within_column_widths() {
        assert!(varun().validate().is_ok());
    }

    #[test]
    fn rejects_oversized_phone_number() {
        let mut user = varun();
        user.phone_number = Some("1".repeat(16));
        let errors = user.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone_number"));
    }

    #[test]
    fn rejects_empty_email() {
        let mut user = varun();
        user.email = String::new();
        assert!(user.validate().is_err());
    }

    #[test]
    fn summary_drops_private_fields() {
        let user = UserCredentials {
            email: "varun@gmail.com".to_string(),
            firstname: Some("Varun".to_string()),
            lastname: None,
            dob: NaiveDate::from_ymd_opt(2000, 1, 1),
            phone_number: Some("9876543210".to_string()),
        };

        let json = serde_json::to_value(UserSummary::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "varun@gmail.com",
                "firstname": "Varun",
                "lastname": null
            })
        );
    }
}
