//! Numeric widget.
//!
//! The raw keyboard input lives in `state`; `data` only ever holds the
//! last successfully parsed number. An unparseable keystroke therefore
//! never corrupts the persisted value, and `validate` stays a pure
//! function of data.

use formwork_core::{
    FormContext, Node, RecordCache, ValidationError, Widget, WidgetProps, WidgetResult,
    field_state,
};

/// Actions accepted by [`NumberWidget`].
#[derive(Debug, Clone, PartialEq)]
pub enum NumberAction {
    /// Replace the raw input; data updates only when it parses.
    Set(String),
    /// Focus left the field; the raw input resyncs to the data value.
    Blur,
}

/// Pending keyboard input that has not been committed to data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberState {
    pub text: Option<String>,
}

/// Widget over an `f64`.
#[derive(Debug, Clone, Default)]
pub struct NumberWidget {
    non_zero: bool,
}

impl NumberWidget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat zero as an unfilled value.
    #[must_use]
    pub fn non_zero(mut self) -> Self {
        self.non_zero = true;
        self
    }
}

impl Widget for NumberWidget {
    type State = NumberState;
    type Data = f64;
    type Action = NumberAction;

    fn initialize(
        &self,
        data: f64,
        _ctx: &FormContext,
        _params: &[String],
    ) -> WidgetResult<NumberState, f64> {
        WidgetResult {
            state: NumberState::default(),
            data,
        }
    }

    fn reduce(
        &self,
        _state: NumberState,
        data: f64,
        action: NumberAction,
        _ctx: &FormContext,
    ) -> WidgetResult<NumberState, f64> {
        match action {
            NumberAction::Set(text) => {
                let data = text.trim().parse::<f64>().unwrap_or(data);
                WidgetResult {
                    state: NumberState { text: Some(text) },
                    data,
                }
            }
            NumberAction::Blur => WidgetResult {
                state: NumberState { text: None },
                data,
            },
        }
    }

    fn validate(&self, data: &f64, _cache: &dyn RecordCache) -> Vec<ValidationError> {
        if self.non_zero && *data == 0.0 {
            vec![ValidationError::missing()]
        } else {
            Vec::new()
        }
    }

    fn component(&self, props: WidgetProps<'_, NumberState, f64>) -> Node<NumberAction> {
        let value = props
            .state
            .text
            .clone()
            .unwrap_or_else(|| props.data.to_string());
        Node::TextInput {
            value,
            placeholder: None,
            state: field_state(&props.status.validation, *props.data == 0.0),
            mutable: props.status.mutable,
            on_change: Box::new(NumberAction::Set),
            on_blur: Some(Box::new(|()| NumberAction::Blur)),
        }
    }

    fn empty(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_core::MemoryCache;

    fn ctx() -> FormContext {
        FormContext::new()
    }

    #[test]
    fn parseable_input_updates_data() {
        let widget = NumberWidget::new();
        let result = widget.reduce(
            NumberState::default(),
            0.0,
            NumberAction::Set("12.5".into()),
            &ctx(),
        );
        assert_eq!(result.data, 12.5);
        assert_eq!(result.state.text.as_deref(), Some("12.5"));
    }

    #[test]
    fn bad_input_stays_in_state_only() {
        let widget = NumberWidget::new();
        let result = widget.reduce(
            NumberState::default(),
            7.0,
            NumberAction::Set("7.".into()),
            &ctx(),
        );
        // "7." parses as 7.0; a truly bad token leaves data alone.
        assert_eq!(result.data, 7.0);
        let result = widget.reduce(result.state, result.data, NumberAction::Set("x".into()), &ctx());
        assert_eq!(result.data, 7.0);
        assert_eq!(result.state.text.as_deref(), Some("x"));
    }

    #[test]
    fn blur_resyncs_the_edit_text() {
        let widget = NumberWidget::new();
        let result = widget.reduce(
            NumberState {
                text: Some("x".into()),
            },
            7.0,
            NumberAction::Blur,
            &ctx(),
        );
        assert_eq!(result.state.text, None);
        assert_eq!(result.data, 7.0);
    }

    #[test]
    fn non_zero_reports_zero_as_empty() {
        let cache = MemoryCache::new();
        assert!(NumberWidget::new().validate(&0.0, &cache).is_empty());
        assert_eq!(
            NumberWidget::new().non_zero().validate(&0.0, &cache),
            vec![ValidationError::missing()]
        );
        assert!(NumberWidget::new().non_zero().validate(&3.0, &cache).is_empty());
    }
}
