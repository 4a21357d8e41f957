//! Checkbox widget over a `bool`. Stateless and never invalid.

use formwork_core::{
    FormContext, Node, RecordCache, ValidationError, Widget, WidgetProps, WidgetResult,
};

/// Actions accepted by [`CheckboxWidget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxAction {
    Set(bool),
}

#[derive(Debug, Clone, Default)]
pub struct CheckboxWidget;

impl CheckboxWidget {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Widget for CheckboxWidget {
    type State = ();
    type Data = bool;
    type Action = CheckboxAction;

    fn initialize(
        &self,
        data: bool,
        _ctx: &FormContext,
        _params: &[String],
    ) -> WidgetResult<(), bool> {
        WidgetResult { state: (), data }
    }

    fn reduce(
        &self,
        _state: (),
        _data: bool,
        action: CheckboxAction,
        _ctx: &FormContext,
    ) -> WidgetResult<(), bool> {
        let CheckboxAction::Set(value) = action;
        WidgetResult {
            state: (),
            data: value,
        }
    }

    fn validate(&self, _data: &bool, _cache: &dyn RecordCache) -> Vec<ValidationError> {
        Vec::new()
    }

    fn component(&self, props: WidgetProps<'_, (), bool>) -> Node<CheckboxAction> {
        Node::Checkbox {
            checked: *props.data,
            mutable: props.status.mutable,
            on_toggle: Box::new(CheckboxAction::Set),
        }
    }

    fn empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_the_value() {
        let widget = CheckboxWidget::new();
        let result = widget.reduce((), false, CheckboxAction::Set(true), &FormContext::new());
        assert!(result.data);
    }
}
