/// Errors raised by the model layer.
///
/// Record operations can only fail on `DuplicateKey`; the other variants come
/// from strict enum parsing and from the shape catalog.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A mapping field already holds the key passed to `add_*_entry`.
    #[error("duplicate key '{key}' in {shape}.{field}")]
    DuplicateKey {
        shape: &'static str,
        field: &'static str,
        key: String,
    },

    #[error("'{value}' is not a known {kind} value")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("unknown shape '{0}'")]
    UnknownShape(String),

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_message_names_the_key() {
        let err = ModelError::DuplicateKey {
            shape: "TagResourceRequest",
            field: "Tags",
            key: "env".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate key 'env' in TagResourceRequest.Tags");
    }

    #[test]
    fn unknown_variant_message() {
        let err = ModelError::UnknownVariant { kind: "Channel", value: "FAX".into() };
        assert_eq!(err.to_string(), "'FAX' is not a known Channel value");
    }
}
