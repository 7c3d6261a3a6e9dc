//! Domain records and their partial-update bodies.

mod category;
mod vendor;

pub use category::{Category, CategoryPatch};
pub use vendor::{Vendor, VendorPatch};

/// Apply one patch field to one stored field. Returns true when the stored
/// value was overwritten.
///
/// A field is applied only when it is supplied, non-empty, and different from
/// the stored value. An empty string is treated the same as an absent field
/// ("no change") — documented behavior, not an accident.
fn patch_field(stored: &mut String, supplied: Option<&str>) -> bool {
    match supplied {
        Some(value) if !value.is_empty() && value != stored => {
            *stored = value.to_string();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::patch_field;

    #[test]
    fn absent_field_is_no_change() {
        let mut stored = "Fruits".to_string();
        assert!(!patch_field(&mut stored, None));
        assert_eq!(stored, "Fruits");
    }

    #[test]
    fn empty_field_is_no_change() {
        let mut stored = "Fruits".to_string();
        assert!(!patch_field(&mut stored, Some("")));
        assert_eq!(stored, "Fruits");
    }

    #[test]
    fn equal_field_is_no_change() {
        let mut stored = "Fruits".to_string();
        assert!(!patch_field(&mut stored, Some("Fruits")));
    }

    #[test]
    fn differing_field_overwrites() {
        let mut stored = "Fruits".to_string();
        assert!(patch_field(&mut stored, Some("Nuts")));
        assert_eq!(stored, "Nuts");
    }
}
