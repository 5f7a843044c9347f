//! Field extraction with constraint checks over untyped input.

use serde_json::{Map, Value};

use crate::error::{Rule, ValidationError};

/// A closed set of string values accepted by a field.
pub trait Choice: Sized + Copy + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Wire names of every variant, matching `ALL`.
    const NAMES: &'static [&'static str];

    fn as_str(&self) -> &'static str;
}

/// Borrowed view over one input mapping, prefixing error paths with its location.
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    prefix: String,
}

impl<'a> Fields<'a> {
    /// Open `value` as a mapping located at `prefix` (empty for the root).
    pub fn open(value: &'a Value, prefix: &str) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self {
                map,
                prefix: prefix.to_string(),
            }),
            _ => Err(ValidationError::new(
                if prefix.is_empty() { "<root>" } else { prefix },
                Rule::Type { expected: "object" },
            )),
        }
    }

    /// Full path of `key` below this mapping.
    pub fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    /// Null counts as absent.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn err(&self, key: &str, rule: Rule) -> ValidationError {
        ValidationError::new(self.path(key), rule)
    }

    pub fn required_str(&self, key: &str, min: usize, max: usize) -> Result<String, ValidationError> {
        self.optional_str(key, min, max)?
            .ok_or_else(|| self.err(key, Rule::Required))
    }

    pub fn optional_str(
        &self,
        key: &str,
        min: usize,
        max: usize,
    ) -> Result<Option<String>, ValidationError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let s = value
            .as_str()
            .ok_or_else(|| self.err(key, Rule::Type { expected: "string" }))?;

        let len = s.chars().count();
        if len < min {
            return Err(self.err(key, Rule::MinLength { min, actual: len }));
        }
        if len > max {
            return Err(self.err(key, Rule::MaxLength { max, actual: len }));
        }
        Ok(Some(s.to_string()))
    }

    /// String field with no length constraint, falling back to `default`.
    pub fn str_or(&self, key: &str, default: &str) -> Result<String, ValidationError> {
        Ok(self
            .optional_str(key, 0, usize::MAX)?
            .unwrap_or_else(|| default.to_string()))
    }

    pub fn required_int(&self, key: &str, min: i64, max: i64) -> Result<i64, ValidationError> {
        self.optional_int(key, min, max)?
            .ok_or_else(|| self.err(key, Rule::Required))
    }

    /// Integer field; integral floats such as `2018.0` are accepted.
    pub fn optional_int(&self, key: &str, min: i64, max: i64) -> Result<Option<i64>, ValidationError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let n = as_integer(value).ok_or_else(|| self.err(key, Rule::Type { expected: "integer" }))?;

        if n < min || n > max {
            return Err(self.err(key, Rule::Range { min, max, actual: n }));
        }
        Ok(Some(n))
    }

    pub fn optional_number(&self, key: &str, min: f64) -> Result<Option<f64>, ValidationError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let n = value
            .as_f64()
            .ok_or_else(|| self.err(key, Rule::Type { expected: "number" }))?;

        if n < min {
            return Err(self.err(key, Rule::Minimum { min, actual: n }));
        }
        Ok(Some(n))
    }

    pub fn optional_choice<C: Choice>(&self, key: &str) -> Result<Option<C>, ValidationError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let s = value
            .as_str()
            .ok_or_else(|| self.err(key, Rule::Type { expected: "string" }))?;

        C::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .map(Some)
            .ok_or_else(|| {
                self.err(
                    key,
                    Rule::OneOf {
                        allowed: C::NAMES,
                        actual: s.to_string(),
                    },
                )
            })
    }

    pub fn required_choice<C: Choice>(&self, key: &str) -> Result<C, ValidationError> {
        self.optional_choice(key)?
            .ok_or_else(|| self.err(key, Rule::Required))
    }

    /// Sequence field; absent means empty.
    pub fn list(&self, key: &str) -> Result<&'a [Value], ValidationError> {
        match self.get(key) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(self.err(key, Rule::Type { expected: "array" })),
        }
    }

    /// Nested mapping field; absent means `None`.
    pub fn object(&self, key: &str) -> Result<Option<&'a Map<String, Value>>, ValidationError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(self.err(key, Rule::Type { expected: "object" })),
        }
    }

    /// Raw value, for nested records that open their own view.
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.get(key)
    }
}

/// Integer view of a JSON number, rejecting fractional values.
pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Path of the `index`-th item of the list at `key`.
pub(crate) fn item_path(list_path: &str, index: usize) -> String {
    format!("{}[{}]", list_path, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_absent() {
        let input = json!({"country": null});
        let fields = Fields::open(&input, "").unwrap();
        assert_eq!(fields.optional_str("country", 2, 56).unwrap(), None);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let input = json!({"name": "Zoë"});
        let fields = Fields::open(&input, "").unwrap();
        assert!(fields.required_str("name", 3, 3).is_ok());
    }

    #[test]
    fn test_integral_float_accepted() {
        let input = json!({"year": 2018.0, "bad": 2018.5});
        let fields = Fields::open(&input, "").unwrap();
        assert_eq!(fields.required_int("year", 2005, 2030).unwrap(), 2018);

        let err = fields.required_int("bad", 2005, 2030).unwrap_err();
        assert_eq!(err.rule, Rule::Type { expected: "integer" });
    }

    #[test]
    fn test_prefixed_paths() {
        let input = json!({"year": "soon"});
        let fields = Fields::open(&input, "challenges[3]").unwrap();
        let err = fields.required_int("year", 2005, 2030).unwrap_err();
        assert_eq!(err.field, "challenges[3].year");
    }

    #[test]
    fn test_non_object_root() {
        let input = json!([1, 2]);
        let err = Fields::open(&input, "").err().unwrap();
        assert_eq!(err.field, "<root>");
        assert_eq!(err.rule, Rule::Type { expected: "object" });
    }

    #[test]
    fn test_list_absent_is_empty() {
        let input = json!({});
        let fields = Fields::open(&input, "").unwrap();
        assert!(fields.list("values").unwrap().is_empty());
    }
}
