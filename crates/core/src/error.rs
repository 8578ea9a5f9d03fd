use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] on the given entity kind.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        let err = CoreError::not_found("Product", 42);
        assert_eq!(err.to_string(), "Entity not found: Product with id 42");
    }

    #[test]
    fn test_validation_message() {
        let err = CoreError::Validation("name: too short".into());
        assert_eq!(err.to_string(), "Validation failed: name: too short");
    }
}
