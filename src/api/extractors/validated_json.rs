//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::errors::AppError;

/// Body fields whose names contain one of these are never echoed back
const SECRET_FIELD_MARKERS: [&str; 2] = ["password", "secret"];

/// Validated JSON extractor that automatically validates requests.
///
/// A JSON body that does not fit `T` or fails validation is rejected with
/// the submitted fields echoed back, so the client can correct and
/// resubmit them. Secret fields are left out of the echo.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use employees_management::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct RenameRequest {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn rename(ValidatedJson(payload): ValidatedJson<RenameRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        let value: T = match serde_json::from_value(raw.clone()) {
            Ok(value) => value,
            Err(e) => {
                return Err(AppError::InvalidInput {
                    message: format!("Invalid request body: {}", e),
                    input: echoable(raw),
                })
            }
        };

        if let Err(e) = value.validate() {
            return Err(AppError::InvalidInput {
                message: format_validation_errors(&e),
                input: echoable(raw),
            });
        }

        Ok(ValidatedJson(value))
    }
}

/// The submitted body without its secret fields
fn echoable(mut input: Value) -> Value {
    if let Value::Object(fields) = &mut input {
        fields.retain(|name, _| {
            let name = name.to_ascii_lowercase();
            !SECRET_FIELD_MARKERS.iter().any(|marker| name.contains(marker))
        });
    }
    input
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewDepartment;
    use serde_json::json;

    #[test]
    fn test_echo_leaves_out_secrets() {
        let echoed = echoable(json!({
            "username": "maria",
            "password": "hunter2",
            "newPassword": "hunter3",
            "jwt_secret": "x"
        }));
        assert_eq!(echoed, json!({ "username": "maria" }));
        assert_eq!(echoable(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_messages_come_from_field_rules() {
        let errors = NewDepartment {
            name: String::new(),
            location: String::new(),
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            format_validation_errors(&errors),
            "Location is required (at most 100 characters), Name is required (at most 100 characters)"
        );
    }
}
