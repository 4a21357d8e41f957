//! Single-line text widget.

use formwork_core::{
    FormContext, Node, RecordCache, ValidationError, Widget, WidgetProps, WidgetResult,
    field_state,
};

/// Actions accepted by [`TextWidget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextAction {
    /// Replace the value with what the user typed.
    Set(String),
    /// Focus left the field; surrounding whitespace is trimmed.
    Blur,
}

/// UI state: whether the value has changed since the field gained focus,
/// so the rendering boundary knows a blur will still normalize it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextState {
    pub dirty: bool,
}

/// Widget over a `String`. Required by default; `optional()` accepts an
/// empty value without reporting it.
#[derive(Debug, Clone, Default)]
pub struct TextWidget {
    optional: bool,
    placeholder: Option<String>,
}

impl TextWidget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an empty value.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for TextWidget {
    type State = TextState;
    type Data = String;
    type Action = TextAction;

    fn initialize(
        &self,
        data: String,
        _ctx: &FormContext,
        _params: &[String],
    ) -> WidgetResult<TextState, String> {
        WidgetResult {
            state: TextState::default(),
            data,
        }
    }

    fn reduce(
        &self,
        _state: TextState,
        data: String,
        action: TextAction,
        _ctx: &FormContext,
    ) -> WidgetResult<TextState, String> {
        match action {
            TextAction::Set(value) => WidgetResult {
                state: TextState { dirty: true },
                data: value,
            },
            TextAction::Blur => WidgetResult {
                state: TextState { dirty: false },
                data: data.trim().to_string(),
            },
        }
    }

    fn validate(&self, data: &String, _cache: &dyn RecordCache) -> Vec<ValidationError> {
        if !self.optional && data.trim().is_empty() {
            vec![ValidationError::missing()]
        } else {
            Vec::new()
        }
    }

    fn component(&self, props: WidgetProps<'_, TextState, String>) -> Node<TextAction> {
        Node::TextInput {
            value: props.data.clone(),
            placeholder: self.placeholder.clone(),
            state: field_state(&props.status.validation, props.data.is_empty()),
            mutable: props.status.mutable,
            on_change: Box::new(TextAction::Set),
            on_blur: Some(Box::new(|()| TextAction::Blur)),
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

    fn ctx() -> FormContext {
        FormContext::new()
    }

    #[test]
    fn set_marks_dirty_and_replaces_data() {
        let widget = TextWidget::new();
        let init = widget.initialize(String::new(), &ctx(), &[]);
        let result = widget.reduce(
            init.state,
            init.data,
            TextAction::Set("  two coats ".into()),
            &ctx(),
        );
        assert!(result.state.dirty);
        assert_eq!(result.data, "  two coats ");
    }

    #[test]
    fn blur_trims_whitespace() {
        let widget = TextWidget::new();
        let result = widget.reduce(
            TextState { dirty: true },
            "  two coats ".into(),
            TextAction::Blur,
            &ctx(),
        );
        assert!(!result.state.dirty);
        assert_eq!(result.data, "two coats");
    }

    #[test]
    fn required_text_reports_empty() {
        let widget = TextWidget::new();
        let cache = MemoryCache::new();
        let errors = widget.validate(&"   ".to_string(), &cache);
        assert_eq!(errors, vec![ValidationError::missing()]);
        assert!(widget.validate(&"primer".to_string(), &cache).is_empty());
    }

    #[test]
    fn optional_text_accepts_empty() {
        let widget = TextWidget::new().optional();
        let cache = MemoryCache::new();
        assert!(widget.validate(&String::new(), &cache).is_empty());
    }
}
