use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeletionRequestListQuery {
    /// Patient name substring, or an exact request or patient id
    pub search: Option<String>,
}
