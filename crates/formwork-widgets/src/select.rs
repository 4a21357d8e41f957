//! Select widget over a `String` drawn from a fixed option list.

use formwork_core::{
    FormContext, Node, RecordCache, SelectOption, ValidationError, Widget, WidgetProps,
    WidgetResult, field_state,
};

/// Actions accepted by [`SelectWidget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction {
    Select(String),
}

/// Widget over a string value constrained to a fixed set of options.
/// An empty value reports `empty`; a non-member value reports `invalid`
/// (stale data from a renamed option, for example).
#[derive(Debug, Clone, Default)]
pub struct SelectWidget {
    options: Vec<SelectOption>,
    optional: bool,
}

impl SelectWidget {
    #[must_use]
    pub fn new<V, L>(options: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self {
            options: options
                .into_iter()
                .map(|(value, label)| SelectOption::new(value, label))
                .collect(),
            optional: false,
        }
    }

    /// Accept no selection.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }
}

impl Widget for SelectWidget {
    type State = ();
    type Data = String;
    type Action = SelectAction;

    fn initialize(
        &self,
        data: String,
        _ctx: &FormContext,
        _params: &[String],
    ) -> WidgetResult<(), String> {
        WidgetResult { state: (), data }
    }

    fn reduce(
        &self,
        _state: (),
        _data: String,
        action: SelectAction,
        _ctx: &FormContext,
    ) -> WidgetResult<(), String> {
        let SelectAction::Select(value) = action;
        WidgetResult {
            state: (),
            data: value,
        }
    }

    fn validate(&self, data: &String, _cache: &dyn RecordCache) -> Vec<ValidationError> {
        if data.is_empty() {
            if self.optional {
                Vec::new()
            } else {
                vec![ValidationError::missing()]
            }
        } else if self.options.iter().any(|option| option.value == *data) {
            Vec::new()
        } else {
            vec![ValidationError::malformed()]
        }
    }

    fn component(&self, props: WidgetProps<'_, (), String>) -> Node<SelectAction> {
        Node::Select {
            value: props.data.clone(),
            options: self.options.clone(),
            state: field_state(&props.status.validation, props.data.is_empty()),
            mutable: props.status.mutable,
            on_select: Box::new(SelectAction::Select),
        }
    }

    fn empty(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_core::MemoryCache;

    fn widget() -> SelectWidget {
        SelectWidget::new([("interior", "Interior"), ("exterior", "Exterior")])
    }

    #[test]
    fn empty_selection_reports_empty() {
        let cache = MemoryCache::new();
        assert_eq!(
            widget().validate(&String::new(), &cache),
            vec![ValidationError::missing()]
        );
        assert!(widget().optional().validate(&String::new(), &cache).is_empty());
    }

    #[test]
    fn non_member_reports_invalid() {
        let cache = MemoryCache::new();
        assert_eq!(
            widget().validate(&"underwater".to_string(), &cache),
            vec![ValidationError::malformed()]
        );
        assert!(widget().validate(&"interior".to_string(), &cache).is_empty());
    }

    #[test]
    fn select_replaces_the_value() {
        let result = widget().reduce(
            (),
            String::new(),
            SelectAction::Select("exterior".into()),
            &FormContext::new(),
        );
        assert_eq!(result.data, "exterior");
    }
}
