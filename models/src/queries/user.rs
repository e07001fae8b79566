use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    pub name: Option<String>,
}
