use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable element identifier of a form field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(CompactString);

impl FieldId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenField {
    pub id: FieldId,
    pub name: CompactString,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingField(FieldId),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(id) => write!(f, "form has no field with id `{id}`"),
        }
    }
}

impl std::error::Error for FormError {}

/// The form enclosing the picker. Fields keep their declaration order, which
/// is also the submission order.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<HiddenField>,
    by_id: FxHashMap<FieldId, usize>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a hidden field with an empty value. Redeclaring an id renames
    /// the existing field and keeps its value.
    pub fn with_hidden_field(mut self, id: impl Into<FieldId>, name: impl Into<CompactString>) -> Self {
        let id = id.into();
        let name = name.into();
        match self.by_id.get(&id) {
            Some(&idx) => self.fields[idx].name = name,
            None => {
                self.by_id.insert(id.clone(), self.fields.len());
                self.fields.push(HiddenField {
                    id,
                    name,
                    value: String::new(),
                });
            }
        }
        self
    }

    pub fn fields(&self) -> &[HiddenField] {
        &self.fields
    }

    pub fn field(&self, id: &FieldId) -> Option<&HiddenField> {
        self.by_id.get(id).map(|&idx| &self.fields[idx])
    }

    pub fn value(&self, id: &FieldId) -> Option<&str> {
        self.field(id).map(|f| f.value.as_str())
    }

    /// Overwrites the field's value. `Ok(true)` when the value changed.
    pub fn set_value(&mut self, id: &FieldId, value: &str) -> Result<bool, FormError> {
        let idx = *self
            .by_id
            .get(id)
            .ok_or_else(|| FormError::MissingField(id.clone()))?;
        let field = &mut self.fields[idx];
        if field.value == value {
            return Ok(false);
        }
        field.value.clear();
        field.value.push_str(value);
        Ok(true)
    }

    pub fn submit(&self) -> FormSubmission {
        FormSubmission {
            fields: self
                .fields
                .iter()
                .map(|f| (f.name.to_string(), f.value.clone()))
                .collect(),
        }
    }
}

/// Snapshot of a form's `name → value` pairs at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), serde_json::Value::String(value.clone())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/picker/form.rs"]
mod tests;
