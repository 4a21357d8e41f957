//! The form host: one screen's `(state, data)` pair and its dispatch
//! loop.
//!
//! Actions are processed strictly in dispatch order, one at a time, each
//! producing a new snapshot. The host never mutates a snapshot in place:
//! `reduce` runs on clones and the results replace the old pair, so a
//! rendering boundary holding the previous snapshot never observes a
//! half-applied action.

use formwork_core::{
    FormContext, Node, RecordCache, ValidationError, Widget, WidgetProps, WidgetResult,
    WidgetStatus,
};

/// Owns a top-level widget and its current `(state, data)` snapshot.
pub struct FormHost<W: Widget> {
    widget: W,
    context: FormContext,
    state: W::State,
    data: W::Data,
}

impl<W: Widget> FormHost<W> {
    /// Initialize a screen over `data` with no deep link.
    pub fn new(widget: W, data: W::Data, context: FormContext) -> Self {
        Self::with_params(widget, data, context, &[])
    }

    /// Initialize from a deep link: `params` selects the active path
    /// (which tab, which nested view), as produced by
    /// [`FormHost::encode_path`] in an earlier session.
    pub fn with_params(widget: W, data: W::Data, context: FormContext, params: &[String]) -> Self {
        let WidgetResult { state, data } = widget.initialize(data, &context, params);
        Self {
            widget,
            context,
            state,
            data,
        }
    }

    /// Apply one action, replacing the snapshot.
    pub fn dispatch(&mut self, action: W::Action) {
        let WidgetResult { state, data } =
            self.widget
                .reduce(self.state.clone(), self.data.clone(), action, &self.context);
        self.state = state;
        self.data = data;
        tracing::trace!("form action applied");
    }

    #[must_use]
    pub fn state(&self) -> &W::State {
        &self.state
    }

    #[must_use]
    pub fn data(&self) -> &W::Data {
        &self.data
    }

    #[must_use]
    pub fn context(&self) -> &FormContext {
        &self.context
    }

    #[must_use]
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Validate the current data. A pure projection: calling this twice
    /// against the same cache state returns the same tree.
    pub fn validate(&self, cache: &dyn RecordCache) -> Vec<ValidationError> {
        self.widget.validate(&self.data, cache)
    }

    /// Save gating: a screen may persist only when the validation tree
    /// is clean at the root.
    pub fn can_save(&self, cache: &dyn RecordCache) -> bool {
        self.validate(cache).is_empty()
    }

    /// Build the status handed to the widget tree at render time.
    pub fn status(&self, mutable: bool, cache: &dyn RecordCache) -> WidgetStatus {
        WidgetStatus {
            mutable,
            validation: self.validate(cache),
        }
    }

    /// Render the whole screen.
    pub fn component(&self, mutable: bool, cache: &dyn RecordCache) -> Node<W::Action> {
        let status = self.status(mutable, cache);
        self.widget.component(WidgetProps {
            state: &self.state,
            data: &self.data,
            status: &status,
            label: None,
        })
    }

    /// Deep-link segments describing the active path through this
    /// screen. Feeding them back through [`FormHost::with_params`]
    /// reconstructs the current view without replaying actions.
    #[must_use]
    pub fn encode_path(&self) -> Vec<String> {
        self.widget.encode_state(&self.state)
    }
}
