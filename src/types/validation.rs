use std::borrow::Cow;
use validator::ValidationErrors;

/// Failed fields in declaration order, each with its messages.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        match self.0.iter_mut().find(|(f, _)| f == field) {
            Some((_, messages)) => messages.push(message.into()),
            None => self.0.push((field.to_string(), vec![message.into()])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(f, _)| f.as_str())
    }

    /// Merges `validator` output for `fields` (`(rust_name, wire_name)` pairs)
    /// in the given order. Fields that already carry an error are skipped.
    pub fn absorb(&mut self, errors: &ValidationErrors, fields: &[(&str, &str)]) {
        let by_field = errors.field_errors();
        for (rust_name, wire_name) in fields {
            if self.0.iter().any(|(f, _)| f == wire_name) {
                continue;
            }
            let Some(list) = by_field.get(*rust_name).or_else(|| by_field.get(*wire_name)) else {
                continue;
            };
            for err in list.iter() {
                let message = err
                    .message
                    .clone()
                    .unwrap_or_else(|| Cow::Owned(err.code.to_string()));
                self.push(wire_name, message.into_owned());
            }
        }
        self.0.sort_by_key(|(f, _)| {
            fields
                .iter()
                .position(|(_, wire)| wire == f)
                .unwrap_or(usize::MAX)
        });
    }

    /// The pair reported to clients: the first message of the *last* failed
    /// field. Earlier fields are overwritten as iteration proceeds.
    pub fn reported(&self) -> Option<(String, String)> {
        let mut reported = None;
        for (field, messages) in &self.0 {
            let message = messages
                .first()
                .cloned()
                .unwrap_or_else(|| "Validation error".to_string());
            reported = Some((field.clone(), message));
        }
        reported
    }
}
