//! Lease Agreement

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::traits::{Template, Validator};
use super::{validate_fields, DocumentType};
use crate::validation::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseRequest {
    pub landlord: String,
    pub tenant: String,
    pub lease_start_date: String,
    pub lease_end_date: String,
    /// Monthly rent, digits only
    pub rent_amount: String,
}

impl LeaseRequest {
    fn value(&self, key: &str) -> &str {
        match key {
            "landlord" => &self.landlord,
            "tenant" => &self.tenant,
            "lease_start_date" => &self.lease_start_date,
            "lease_end_date" => &self.lease_end_date,
            "rent_amount" => &self.rent_amount,
            _ => "",
        }
    }
}

impl Validator for LeaseRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(DocumentType::Lease.fields(), |key| self.value(key))
    }
}

impl Template for LeaseRequest {
    fn document_type(&self) -> DocumentType {
        DocumentType::Lease
    }

    fn body(&self, made_on: NaiveDate) -> String {
        format!(
            "
LEASE AGREEMENT

This Lease Agreement is made on {made_on}.

BETWEEN

1. Landlord: {}
2. Tenant: {}

Lease Start Date: {}
Lease End Date: {}
Monthly Rent: {}
",
            self.landlord, self.tenant, self.lease_start_date, self.lease_end_date, self.rent_amount
        )
    }
}
