use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const MAX_NAME_LEN: usize = 14;

#[derive(Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: String,
    pub avatar: Option<String>,
}

impl UpdateUserRequest {
    /// Names are 1 to 14 characters, counted as chars rather than bytes.
    pub fn is_valid_name(name: &str) -> bool {
        (1..=MAX_NAME_LEN).contains(&name.chars().count())
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CheckDuplicationParam {
    pub name: String,
}
