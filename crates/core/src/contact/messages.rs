//! Human-readable messages returned by the mutation endpoints.

/// Message for a successful insert.
pub fn created_message() -> String {
    "Contact created successfully".to_string()
}

/// Message for an update, including the affected row count.
pub fn updated_message(rows_affected: u64) -> String {
    format!("Contact updated successfully. Total rows/record affected {rows_affected}")
}

/// Message for a delete, including the affected row count.
pub fn deleted_message(rows_affected: u64) -> String {
    format!("Contact deleted successfully. Total rows/record affected {rows_affected}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_message() {
        assert_eq!(created_message(), "Contact created successfully");
    }

    #[test]
    fn test_updated_message_ends_with_count() {
        assert!(updated_message(1).ends_with("affected 1"));
        assert!(updated_message(0).ends_with("affected 0"));
    }

    #[test]
    fn test_deleted_message_ends_with_count() {
        assert_eq!(
            deleted_message(1),
            "Contact deleted successfully. Total rows/record affected 1"
        );
    }
}
