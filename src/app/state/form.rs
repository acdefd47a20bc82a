use super::input::AppTextArea;
use crate::domain::models::{FieldKind, FieldSpec};
use crossterm::event::KeyEvent;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub key: &'static str,
    pub kind: FieldKind,
    pub text_area: AppTextArea<'static>,
}

/// Edit-mode form prefilled from an entity. Field order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl EditForm {
    #[must_use]
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let fields = specs
            .into_iter()
            .map(|spec| FormField {
                label: spec.label,
                key: spec.key,
                kind: spec.kind,
                text_area: AppTextArea::with_text(&spec.value),
            })
            .collect();
        Self { fields, focus: 0 }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn input(&mut self, key: KeyEvent) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.text_area.input(key);
        }
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.text_area.text())
    }

    /// The JSON body for the update request.
    #[must_use]
    pub fn payload(&self) -> Value {
        let mut body = Map::new();
        for field in &self.fields {
            let text = field.text_area.text();
            let value = match field.kind {
                FieldKind::Text => Value::String(text),
                FieldKind::List => Value::Array(
                    text.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(|s| Value::String(s.to_string()))
                        .collect(),
                ),
            };
            body.insert(field.key.to_string(), value);
        }
        Value::Object(body)
    }
}
