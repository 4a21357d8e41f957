//! Path-addressed validation reports.
//!
//! Validation is always a pure projection of `data`, never of UI state.
//! Errors form a tree mirroring the data tree: `field` holds one path
//! segment (a record field name, or a list index rendered as a decimal
//! string) and nested reports hang off `detail`. The full path to a
//! failing leaf is reconstructed by walking from the root, which is the
//! same vocabulary action dispatch uses.

use serde::{Deserialize, Serialize};

use crate::cache::RecordCache;
use crate::widget::Widget;

/// One node in the validation tree.
///
/// `empty` and `invalid` are independent: a field can be unfilled,
/// malformed, or both, and callers check exactly the flag their screen
/// cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Path segment this error is addressed to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub empty: bool,
    pub invalid: bool,
    /// Nested reports from the child subtree.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detail: Vec<ValidationError>,
}

impl ValidationError {
    /// An unaddressed "this value is unfilled" report.
    #[must_use]
    pub fn missing() -> Self {
        Self {
            field: None,
            empty: true,
            invalid: false,
            detail: Vec::new(),
        }
    }

    /// An unaddressed "this value is malformed" report.
    #[must_use]
    pub fn malformed() -> Self {
        Self {
            field: None,
            empty: false,
            invalid: true,
            detail: Vec::new(),
        }
    }

    /// Address this report to a path segment.
    #[must_use]
    pub fn at(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Run a child widget's `validate` and, when it reports anything, append
/// one aggregated error under `key` carrying the child reports in
/// `detail`. Clean children contribute nothing.
pub fn sub_validate<W: Widget>(
    widget: &W,
    data: &W::Data,
    cache: &dyn RecordCache,
    key: &str,
    errors: &mut Vec<ValidationError>,
) {
    let inner = widget.validate(data, cache);
    if !inner.is_empty() {
        errors.push(ValidationError {
            field: Some(key.to_string()),
            empty: inner.iter().any(|e| e.empty),
            invalid: inner.iter().any(|e| e.invalid),
            detail: inner,
        });
    }
}

/// A leaf of the validation tree with its full dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatError {
    pub path: String,
    pub empty: bool,
    pub invalid: bool,
}

/// Flatten a validation tree into dotted leaf paths, for logs and
/// save-button diagnostics.
#[must_use]
pub fn flatten(errors: &[ValidationError]) -> Vec<FlatError> {
    let mut out = Vec::new();
    for error in errors {
        flatten_into(error, String::new(), &mut out);
    }
    out
}

fn flatten_into(error: &ValidationError, prefix: String, out: &mut Vec<FlatError>) {
    let path = match &error.field {
        Some(field) if prefix.is_empty() => field.clone(),
        Some(field) => format!("{prefix}.{field}"),
        None => prefix,
    };
    if error.detail.is_empty() {
        out.push(FlatError {
            path,
            empty: error.empty,
            invalid: error.invalid,
        });
    } else {
        for inner in &error.detail {
            flatten_into(inner, path.clone(), out);
        }
    }
}
