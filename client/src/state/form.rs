//! Declarative form rows and the owner-held values they edit.
//!
//! DESIGN
//! ======
//! A `Form` component renders `FieldDescriptor` rows and reports every edit
//! as a `FieldChange`. It keeps no state of its own: the owning page holds a
//! `FormValues` signal and applies each change.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

/// HTML control used for a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Url,
    Tel,
    Date,
    TextArea,
    Select,
}

impl InputType {
    /// Value for the `type` attribute of an `<input>`.
    pub fn as_html(self) -> &'static str {
        match self {
            Self::Text | Self::TextArea | Self::Select => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Date => "date",
        }
    }
}

/// One input in a form row. Also the render key: a control is rebuilt only
/// when its descriptor changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    pub label: String,
    pub name: String,
    pub input_type: InputType,
    /// Choices for `InputType::Select`; ignored otherwise.
    pub options: Vec<String>,
}

impl FieldDescriptor {
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self { label: label.into(), name: name.into(), input_type: InputType::Text, options: Vec::new() }
    }

    #[must_use]
    pub fn with_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.input_type = InputType::Select;
        self.options = options;
        self
    }
}

/// Rows of fields; fields in the same row render side by side.
pub type FormRows = Vec<Vec<FieldDescriptor>>;

/// A single edit reported by a form control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldChange {
    pub name: String,
    pub value: String,
}

/// Current values keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    /// Raw value for `name`, or `""` when unset.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map_or("", String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn apply(&mut self, change: FieldChange) {
        self.0.insert(change.name, change.value);
    }

    /// Trimmed value for `name`, `None` when blank.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        let value = self.get(name).trim();
        if value.is_empty() { None } else { Some(value.to_owned()) }
    }

    /// Whether `option` is the current choice for select `name`.
    pub fn is_selected(&self, name: &str, option: &str) -> bool {
        self.get(name) == option
    }

    /// Set `name` to `value` when it is present.
    pub fn set_opt(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }
}
