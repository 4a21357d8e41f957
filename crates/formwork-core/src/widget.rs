//! The widget contract shared by every leaf and combinator.

use crate::cache::RecordCache;
use crate::context::FormContext;
use crate::id::FormData;
use crate::node::Node;
use crate::validation::ValidationError;

/// Outcome of `initialize` or `reduce`: the new UI state and the new
/// data value, returned together in one value so the two can never
/// drift apart mid-transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetResult<S, D> {
    pub state: S,
    pub data: D,
}

/// What a parent tells a child at render time: whether the subtree is
/// editable, and the slice of the validation tree addressed to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetStatus {
    pub mutable: bool,
    pub validation: Vec<ValidationError>,
}

impl WidgetStatus {
    /// An editable status with a clean validation slice.
    #[must_use]
    pub fn editable() -> Self {
        Self {
            mutable: true,
            validation: Vec::new(),
        }
    }

    /// A read-only status with a clean validation slice.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            mutable: false,
            validation: Vec::new(),
        }
    }
}

/// Project a child's status out of a parent's: filter the validation
/// slice down to errors addressed to `key` (splicing in their `detail`),
/// and optionally drop mutability for read-only placements.
#[must_use]
pub fn sub_status(status: &WidgetStatus, key: &str, read_only: bool) -> WidgetStatus {
    let mut validation = Vec::new();
    for error in &status.validation {
        if error.field.as_deref() == Some(key) {
            if error.detail.is_empty() {
                validation.push(ValidationError {
                    field: None,
                    empty: error.empty,
                    invalid: error.invalid,
                    detail: Vec::new(),
                });
            } else {
                validation.extend(error.detail.iter().cloned());
            }
        }
    }
    WidgetStatus {
        mutable: status.mutable && !read_only,
        validation,
    }
}

/// Borrowed inputs to [`Widget::component`].
#[derive(Debug)]
pub struct WidgetProps<'a, S, D> {
    pub state: &'a S,
    pub data: &'a D,
    pub status: &'a WidgetStatus,
    /// Display label assigned by the parent, if any.
    pub label: Option<&'a str>,
}

/// A self-contained capability bundle over a state/data/action triple.
///
/// `State` is transient UI-only detail (an in-progress edit, a selected
/// tab); `Data` is the persisted-shape value. Both are advanced together
/// through [`WidgetResult`] so no action can desynchronize them.
/// `reduce` must be pure and total over the action type; `validate` is a
/// pure function of data only, with the cache available for read-only
/// cross-record checks.
pub trait Widget {
    /// Transient UI-only state.
    type State: Clone;
    /// Persisted-shape value this widget edits.
    type Data: FormData;
    /// Closed union of transitions this widget accepts.
    type Action: 'static;

    /// Build initial UI state from a data value. `params` carries
    /// deep-link path segments addressed to this widget; empty when the
    /// screen was opened without one.
    fn initialize(
        &self,
        data: Self::Data,
        ctx: &FormContext,
        params: &[String],
    ) -> WidgetResult<Self::State, Self::Data>;

    /// Advance state and data in response to one action.
    fn reduce(
        &self,
        state: Self::State,
        data: Self::Data,
        action: Self::Action,
        ctx: &FormContext,
    ) -> WidgetResult<Self::State, Self::Data>;

    /// Report validation problems for `data`, addressed by path segment.
    fn validate(&self, data: &Self::Data, cache: &dyn RecordCache) -> Vec<ValidationError>;

    /// Describe this widget to the rendering boundary. Interactions on
    /// the returned tree produce actions from this widget's union.
    fn component(&self, props: WidgetProps<'_, Self::State, Self::Data>) -> Node<Self::Action>;

    /// A fresh data value for newly created items. Every widget exposes
    /// this so the list combinators can append without outside help.
    fn empty(&self) -> Self::Data;

    /// Navigation-relevant state as deep-link path segments; the inverse
    /// of the `params` argument to [`Widget::initialize`]. Widgets with
    /// no navigation state return nothing.
    fn encode_state(&self, _state: &Self::State) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_with(errors: Vec<ValidationError>) -> WidgetStatus {
        WidgetStatus {
            mutable: true,
            validation: errors,
        }
    }

    #[test]
    fn sub_status_selects_by_key() {
        let status = status_with(vec![
            ValidationError::missing().at("client"),
            ValidationError::malformed().at("quantity"),
        ]);
        let child = sub_status(&status, "client", false);
        assert!(child.mutable);
        assert_eq!(child.validation.len(), 1);
        assert!(child.validation[0].empty);
        assert_eq!(child.validation[0].field, None);
    }

    #[test]
    fn sub_status_splices_detail() {
        let status = status_with(vec![ValidationError {
            field: Some("lines".into()),
            empty: true,
            invalid: false,
            detail: vec![ValidationError::missing().at("0")],
        }]);
        let child = sub_status(&status, "lines", false);
        assert_eq!(child.validation.len(), 1);
        assert_eq!(child.validation[0].field.as_deref(), Some("0"));
    }

    #[test]
    fn sub_status_read_only_wins() {
        let child = sub_status(&status_with(Vec::new()), "client", true);
        assert!(!child.mutable);
    }

    #[test]
    fn sub_status_preserves_parent_immutability() {
        let mut status = status_with(Vec::new());
        status.mutable = false;
        assert!(!sub_status(&status, "client", false).mutable);
    }
}
