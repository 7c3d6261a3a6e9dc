//! Category record.

use serde::{Deserialize, Serialize};

use crate::store::Document;

use super::patch_field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Assigned by the store on first save; absent on construction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Partial-update body for a category. Absent fields deserialize as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPatch {
    pub description: Option<String>,
}

impl Category {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
        }
    }

    /// Merge a patch into this record. Returns true when anything changed,
    /// i.e. when the caller must save.
    pub fn apply_patch(&mut self, patch: &CategoryPatch) -> bool {
        patch_field(&mut self.description, patch.description.as_deref())
    }
}

impl Document for Category {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
