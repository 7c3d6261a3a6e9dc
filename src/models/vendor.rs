//! Vendor record. Wire format uses camelCase field names.

use serde::{Deserialize, Serialize};

use crate::store::Document;

use super::patch_field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Partial-update body for a vendor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Vendor {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Merge a patch into this record. Returns true when anything changed.
    /// Both fields are checked; a patch may change either or both.
    pub fn apply_patch(&mut self, patch: &VendorPatch) -> bool {
        let first = patch_field(&mut self.first_name, patch.first_name.as_deref());
        let last = patch_field(&mut self.last_name, patch.last_name.as_deref());
        first || last
    }
}

impl Document for Vendor {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
