use std::collections::HashMap;

/// Fields the form must supply, checked in this order at normalization time.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "age",
    "job",
    "marital",
    "education",
    "housing",
    "loan",
    "duration",
    "campaign",
];

/// Required fields parsed as non-negative integers.
pub const NUMERIC_FIELDS: [&str; 3] = ["age", "duration", "campaign"];

/// Required fields copied verbatim into the payload.
pub const STRING_FIELDS: [&str; 5] = ["job", "marital", "education", "housing", "loan"];

/// Account balance assumed when the field is absent or unparsable.
pub const DEFAULT_BALANCE: i64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Numeric,
}

/// Field type as the interactive validator sees it.
pub fn field_type_of(name: &str) -> FieldType {
    if NUMERIC_FIELDS.contains(&name) || name == "balance" {
        FieldType::Numeric
    } else {
        FieldType::Text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    pub valid: bool,
    pub message: Option<String>,
}

impl FieldValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Raw, untyped form state: every value is the string exactly as entered.
/// A fresh normalization pass turns this into a typed payload on each submit.
#[derive(Debug, Clone, Default)]
pub struct RawForm {
    fields: HashMap<String, String>,
}

impl RawForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Clears every field back to the initial empty state.
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
