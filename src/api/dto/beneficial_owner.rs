//! DTOs for the beneficial owner lookup endpoint.

use serde::Serialize;

use crate::domain::entities::BeneficialOwner;

/// One beneficial owner. Absent fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficialOwnerResponse {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub national_id: Option<String>,
}

impl From<BeneficialOwner> for BeneficialOwnerResponse {
    fn from(owner: BeneficialOwner) -> Self {
        Self {
            first_name: owner.first_name,
            last_name: owner.last_name,
            national_id: owner.national_id,
        }
    }
}
