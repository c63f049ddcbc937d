use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// A value that can sit in a record field.
///
/// Rendering and hashing follow the conventions of the service's other SDKs,
/// so a record renders and hashes the same way for the same values:
/// - String: verbatim; hash over UTF-16 code units, `h = 31*h + c`
/// - i32: verbatim; hash is the value
/// - i64: verbatim; hash folds the high word into the low word
/// - bool: `true`/`false`; hash 1231/1237
/// - f64: always with a fraction (`80.0`), scientific outside
///   `[1e-3, 1e7)` (`1.0E16`), `NaN`/`Infinity`; hash of the IEEE bits,
///   `-0.0` folded to `0.0` so equal values hash equally
/// - timestamp: RFC 3339 UTC; hash of epoch milliseconds as i64
/// - list: `[a, b]`; `h = 31*h + hash(e)` starting at 1
/// - map: `{k=v, k2=v2}` in key order; sum of `hash(k) ^ hash(v)`
pub trait FieldValue {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    fn value_hash(&self) -> i32;
}

/// Hash of a string over its UTF-16 code units.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

pub fn long_hash(v: i64) -> i32 {
    (v ^ ((v as u64) >> 32) as i64) as i32
}

pub fn double_hash(v: f64) -> i32 {
    let bits = if v.is_nan() {
        0x7ff8_0000_0000_0000_u64
    } else if v == 0.0 {
        0
    } else {
        v.to_bits()
    };
    (bits ^ (bits >> 32)) as i32
}

impl FieldValue for str {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn value_hash(&self) -> i32 {
        string_hash(self)
    }
}

impl FieldValue for String {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn value_hash(&self) -> i32 {
        string_hash(self)
    }
}

impl FieldValue for i32 {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }

    fn value_hash(&self) -> i32 {
        *self
    }
}

impl FieldValue for i64 {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }

    fn value_hash(&self) -> i32 {
        long_hash(*self)
    }
}

impl FieldValue for bool {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }

    fn value_hash(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }
}

impl FieldValue for f64 {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = *self;
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        let magnitude = v.abs();
        if v == 0.0 || (1e-3..1e7).contains(&magnitude) {
            // Debug keeps the fractional part of whole numbers.
            return write!(f, "{v:?}");
        }
        let scientific = format!("{v:e}");
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
        if mantissa.contains('.') {
            write!(f, "{mantissa}E{exponent}")
        } else {
            write!(f, "{mantissa}.0E{exponent}")
        }
    }

    fn value_hash(&self) -> i32 {
        double_hash(*self)
    }
}

impl FieldValue for DateTime<Utc> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    fn value_hash(&self) -> i32 {
        long_hash(self.timestamp_millis())
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_value(f)?;
        }
        f.write_str("]")
    }

    fn value_hash(&self) -> i32 {
        self.iter()
            .fold(1i32, |h, item| h.wrapping_mul(31).wrapping_add(item.value_hash()))
    }
}

impl<K: FieldValue, V: FieldValue> FieldValue for BTreeMap<K, V> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            key.fmt_value(f)?;
            f.write_str("=")?;
            value.fmt_value(f)?;
        }
        f.write_str("}")
    }

    fn value_hash(&self) -> i32 {
        self.iter().fold(0i32, |h, (key, value)| {
            h.wrapping_add(key.value_hash() ^ value.value_hash())
        })
    }
}

/// Drops sub-millisecond precision, which epoch seconds on the wire cannot
/// carry.
pub fn wire_timestamp(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(3)
}

/// Serde adapter for timestamps, which travel as (fractional) epoch seconds.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_f64(ts.timestamp_millis() as f64 / 1000.0),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(seconds) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let millis = (seconds * 1000.0).round() as i64;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {seconds}")))
    }
}
