//! Date widget over `Option<NaiveDate>`.

use chrono::NaiveDate;
use formwork_core::{
    FormContext, Node, RecordCache, ValidationError, Widget, WidgetProps, WidgetResult,
    field_state,
};

/// Actions accepted by [`DateWidget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateAction {
    Set(Option<NaiveDate>),
}

/// Widget over an optional date. Required by default; `optional()`
/// accepts `None` without reporting it.
#[derive(Debug, Clone, Default)]
pub struct DateWidget {
    optional: bool,
}

impl DateWidget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a missing date.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl Widget for DateWidget {
    type State = ();
    type Data = Option<NaiveDate>;
    type Action = DateAction;

    fn initialize(
        &self,
        data: Option<NaiveDate>,
        _ctx: &FormContext,
        _params: &[String],
    ) -> WidgetResult<(), Option<NaiveDate>> {
        WidgetResult { state: (), data }
    }

    fn reduce(
        &self,
        _state: (),
        _data: Option<NaiveDate>,
        action: DateAction,
        _ctx: &FormContext,
    ) -> WidgetResult<(), Option<NaiveDate>> {
        let DateAction::Set(value) = action;
        WidgetResult {
            state: (),
            data: value,
        }
    }

    fn validate(
        &self,
        data: &Option<NaiveDate>,
        _cache: &dyn RecordCache,
    ) -> Vec<ValidationError> {
        if !self.optional && data.is_none() {
            vec![ValidationError::missing()]
        } else {
            Vec::new()
        }
    }

    fn component(&self, props: WidgetProps<'_, (), Option<NaiveDate>>) -> Node<DateAction> {
        Node::DateInput {
            value: *props.data,
            state: field_state(&props.status.validation, props.data.is_none()),
            mutable: props.status.mutable,
            on_change: Box::new(DateAction::Set),
        }
    }

    fn empty(&self) -> Option<NaiveDate> {
        None
    }
}
