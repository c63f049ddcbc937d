use std::fmt;

use crate::error::ModelError;
use crate::value::FieldValue;

/// A request, response, or embedded sub-object of the service API.
///
/// Implemented by `#[derive(DataRecord)]`. All fields are optional and the
/// record only knows which of them are present; documented constraints
/// (lengths, ranges, patterns) are left to the service to enforce.
pub trait DataRecord: fmt::Display + Default + Clone + PartialEq {
    /// Service-model name of the shape, e.g. `CreateQueueRequest`.
    const SHAPE: &'static str;

    /// Wire names of all fields, in declaration order.
    fn field_names() -> &'static [&'static str];

    /// Wire names of the fields currently set, in declaration order.
    fn present_fields(&self) -> Vec<&'static str>;

    /// `h = 31*h + hash(field)` over all fields from `h = 1`, absent fields
    /// contributing 0. Equal records hash equally.
    fn hash_code(&self) -> i32;

    fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }
}

/// Renders a record as `{Name: value,Other: value}`, skipping absent fields.
///
/// Used by the generated `Display` impls, in the manner of
/// `std::fmt::DebugStruct`.
pub struct RecordFormatter<'a, 'b> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> RecordFormatter<'a, 'b> {
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        Self { fmt, result, has_fields: false }
    }

    pub fn field<T: FieldValue + ?Sized>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if let Some(value) = value {
            if self.result.is_ok() {
                self.result = self.write_field(name, value);
            }
            self.has_fields = true;
        }
        self
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.fmt.write_str("}")
    }

    fn write_field<T: FieldValue + ?Sized>(&mut self, name: &str, value: &T) -> fmt::Result {
        if self.has_fields {
            self.fmt.write_str(",")?;
        }
        self.fmt.write_str(name)?;
        self.fmt.write_str(": ")?;
        value.fmt_value(self.fmt)
    }
}

/// Accumulates field hashes for `DataRecord::hash_code`.
#[derive(Debug, Clone, Copy)]
pub struct RecordHasher {
    hash: i32,
}

impl RecordHasher {
    const PRIME: i32 = 31;

    pub fn new() -> Self {
        Self { hash: 1 }
    }

    pub fn field<T: FieldValue + ?Sized>(self, value: Option<&T>) -> Self {
        let field_hash = value.map_or(0, |v| v.value_hash());
        Self {
            hash: self.hash.wrapping_mul(Self::PRIME).wrapping_add(field_hash),
        }
    }

    pub fn finish(self) -> i32 {
        self.hash
    }
}

impl Default for RecordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Error for an `add_*_entry` call whose key is already present.
pub fn duplicate_key<K: fmt::Display + ?Sized>(
    shape: &'static str,
    field: &'static str,
    key: &K,
) -> ModelError {
    let key = key.to_string();
    tracing::debug!(shape, field, key = %key, "duplicate key rejected");
    ModelError::DuplicateKey { shape, field, key }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        name: Option<String>,
        description: Option<String>,
    }

    impl fmt::Display for Pair {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut record = RecordFormatter::new(f);
            record.field("Name", self.name.as_ref());
            record.field("Description", self.description.as_ref());
            record.finish()
        }
    }

    #[test]
    fn formatter_skips_absent_fields_without_trailing_comma() {
        let pair = Pair { name: Some("Sales".into()), description: None };
        assert_eq!(pair.to_string(), "{Name: Sales}");

        let pair = Pair { name: None, description: Some("Inbound".into()) };
        assert_eq!(pair.to_string(), "{Description: Inbound}");

        let pair = Pair { name: Some("Sales".into()), description: Some("Inbound".into()) };
        assert_eq!(pair.to_string(), "{Name: Sales,Description: Inbound}");

        let pair = Pair { name: None, description: None };
        assert_eq!(pair.to_string(), "{}");
    }

    #[test]
    fn hasher_uses_31_multiplier_from_one() {
        let none: Option<&String> = None;
        assert_eq!(RecordHasher::new().finish(), 1);
        assert_eq!(RecordHasher::new().field(none).finish(), 31);
        assert_eq!(RecordHasher::new().field(Some(&7i32)).field(none).finish(), (31 + 7) * 31);
    }

    #[test]
    fn duplicate_key_error_carries_location() {
        let err = duplicate_key("TagResourceRequest", "Tags", "env");
        assert!(matches!(
            err,
            ModelError::DuplicateKey { shape: "TagResourceRequest", field: "Tags", ref key } if key == "env"
        ));
    }
}
