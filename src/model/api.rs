use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error body returned for every non-validation failure.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// A single rejected request field.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Error body for requests rejected by field validation.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ValidationErrorDto {
    pub error: String,
    pub errors: Vec<FieldErrorDto>,
}
