//! DTO for the profile endpoint.

use serde::Serialize;

use crate::state::Profile;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub first_name: String,
    pub last_name: String,
}

impl From<&Profile> for MeResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
        }
    }
}
