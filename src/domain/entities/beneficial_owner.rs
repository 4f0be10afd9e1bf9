//! Beneficial owner entity extracted from a registry response.

/// A natural person declared as a beneficial owner of a company.
///
/// Every field is optional: the registry omits fields it has no data for,
/// and a partially filled record is still returned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BeneficialOwner {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// PESEL number.
    pub national_id: Option<String>,
}

impl BeneficialOwner {
    /// Creates a new BeneficialOwner instance.
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        national_id: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            national_id,
        }
    }

    /// Returns `"first last"` using whichever parts are present.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
