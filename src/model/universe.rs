use serde::{Deserialize, Serialize};

/// A single option of a select2 autocomplete widget
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, utoipa::ToSchema)]
pub struct Select2ResultDto {
    pub id: i32,
    pub text: String,
}

/// Response body expected by select2 widgets
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, utoipa::ToSchema)]
pub struct Select2ResponseDto {
    pub results: Vec<Select2ResultDto>,
}
