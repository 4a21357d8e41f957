//! Tabs combinator: a list that additionally tracks a selected tab.
//!
//! Shares the [`ListAction`] vocabulary; `Select` becomes meaningful and
//! the selected index participates in deep links via `encode_state`.
//!
//! Removal keeps the selection on the same logical neighbor: removing a
//! tab before the selected one shifts the index down by one, and
//! removing the selected tab itself keeps the index on the same slot,
//! clamped into range so the selection is never dangling (0 when the
//! last tab goes away).

use formwork_core::{
    FormContext, FormData, Node, RecordCache, ValidationError, Widget, WidgetProps, WidgetResult,
    sub_status,
};

use crate::list::{
    AdaptNew, ListAction, adapted_new, duplicate_index, move_index, remove_index, validate_items,
};

/// UI state of a [`TabsWidget`]: the selected tab plus one inner state
/// per tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabsState<S> {
    pub current_index: usize,
    pub items: Vec<S>,
}

/// Widget over `Vec<W::Data>` presenting one item at a time.
pub struct TabsWidget<W: Widget> {
    inner: W,
    empty_ok: bool,
    add_label: Option<String>,
    title: Option<Box<dyn Fn(&W::Data) -> String>>,
    adapt_new: Option<AdaptNew<W::Data>>,
}

impl<W: Widget> TabsWidget<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            empty_ok: false,
            add_label: None,
            title: None,
            adapt_new: None,
        }
    }

    /// Accept an empty tab set.
    #[must_use]
    pub fn empty_ok(mut self) -> Self {
        self.empty_ok = true;
        self
    }

    /// Render an add button with this label when the tabs are mutable.
    #[must_use]
    pub fn add_label(mut self, label: impl Into<String>) -> Self {
        self.add_label = Some(label.into());
        self
    }

    /// Derive each tab's title from its data. Defaults to "Tab N".
    #[must_use]
    pub fn title(mut self, title: impl Fn(&W::Data) -> String + 'static) -> Self {
        self.title = Some(Box::new(title));
        self
    }

    /// Install a `New` post-processing hook (may veto, see
    /// [`crate::list::AdaptNew`]).
    #[must_use]
    pub fn adapt_new(
        mut self,
        hook: impl Fn(W::Data, &[W::Data], Option<&str>, &FormContext) -> Option<W::Data> + 'static,
    ) -> Self {
        self.adapt_new = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn inner(&self) -> &W {
        &self.inner
    }

    fn title_for(&self, data: &W::Data, index: usize) -> String {
        match &self.title {
            Some(title) => title(data),
            None => format!("Tab {}", index + 1),
        }
    }
}

impl<W: Widget> Widget for TabsWidget<W> {
    type State = TabsState<W::State>;
    type Data = Vec<W::Data>;
    type Action = ListAction<W::Action>;

    fn initialize(
        &self,
        data: Vec<W::Data>,
        ctx: &FormContext,
        params: &[String],
    ) -> WidgetResult<Self::State, Self::Data> {
        let requested = params
            .first()
            .and_then(|segment| segment.parse::<usize>().ok())
            .unwrap_or(0);
        let current_index = if data.is_empty() {
            0
        } else {
            requested.min(data.len() - 1)
        };
        let rest = params.get(1..).unwrap_or(&[]);

        let mut items = Vec::with_capacity(data.len());
        let mut out = Vec::with_capacity(data.len());
        for (index, value) in data.into_iter().enumerate() {
            // Deep links describe only the active path; sibling tabs
            // initialize without parameters.
            let item_params = if index == current_index { rest } else { &[] };
            let inner = self.inner.initialize(value, ctx, item_params);
            items.push(inner.state);
            out.push(inner.data);
        }
        WidgetResult {
            state: TabsState {
                current_index,
                items,
            },
            data: out,
        }
    }

    fn reduce(
        &self,
        state: Self::State,
        data: Self::Data,
        action: Self::Action,
        ctx: &FormContext,
    ) -> WidgetResult<Self::State, Self::Data> {
        let TabsState {
            mut current_index,
            mut items,
        } = state;
        let mut data = data;
        match action {
            ListAction::Item { index, action } => {
                let inner = self
                    .inner
                    .reduce(items[index].clone(), data[index].clone(), action, ctx);
                items[index] = inner.state;
                data[index] = inner.data;
            }
            ListAction::Remove { index } => {
                items = remove_index(&items, index);
                data = remove_index(&data, index);
                if index < current_index {
                    current_index -= 1;
                } else if index == current_index {
                    current_index = current_index.min(items.len().saturating_sub(1));
                }
            }
            ListAction::New { name } => {
                if let Some(value) =
                    adapted_new(&self.inner, self.adapt_new.as_ref(), &data, name.as_deref(), ctx)
                {
                    let inner = self.inner.initialize(value, ctx, &[]);
                    items.push(inner.state);
                    data.push(inner.data);
                    // The created tab becomes the selected one.
                    current_index = items.len() - 1;
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("tab creation vetoed by adapter");
                }
            }
            ListAction::Move { from, to } => {
                items = move_index(&items, from, to);
                data = move_index(&data, from, to);
            }
            ListAction::Select { index } => {
                assert!(index < items.len(), "selected tab {index} out of range");
                current_index = index;
            }
            ListAction::Duplicate { index, action } => {
                items = duplicate_index(&items, index);
                data = duplicate_index(&data, index);
                data[index + 1].reassign_id();
                if let Some(action) = action {
                    let inner = self.inner.reduce(
                        items[index + 1].clone(),
                        data[index + 1].clone(),
                        action,
                        ctx,
                    );
                    items[index + 1] = inner.state;
                    data[index + 1] = inner.data;
                }
            }
        }
        debug_assert_eq!(items.len(), data.len());
        WidgetResult {
            state: TabsState {
                current_index,
                items,
            },
            data,
        }
    }

    fn validate(&self, data: &Self::Data, cache: &dyn RecordCache) -> Vec<ValidationError> {
        validate_items(&self.inner, data, cache, self.empty_ok)
    }

    fn component(&self, props: WidgetProps<'_, Self::State, Self::Data>) -> Node<Self::Action> {
        let current = props.state.current_index;
        let titles = props
            .data
            .iter()
            .enumerate()
            .map(|(index, data)| self.title_for(data, index))
            .collect();
        let body = match (props.state.items.get(current), props.data.get(current)) {
            (Some(item_state), Some(item_data)) => {
                let status = sub_status(props.status, &current.to_string(), false);
                let child = self.inner.component(WidgetProps {
                    state: item_state,
                    data: item_data,
                    status: &status,
                    label: None,
                });
                Box::new(child.map(move |action| ListAction::Item {
                    index: current,
                    action,
                }))
            }
            _ => Box::new(Node::Empty),
        };
        let bar = Node::TabBar {
            titles,
            active: current,
            on_select: Box::new(|index| ListAction::Select { index }),
            body,
        };
        if let Some(label) = &self.add_label
            && props.status.mutable
        {
            Node::Column(vec![
                bar,
                Node::Button {
                    label: label.clone(),
                    enabled: true,
                    on_press: Box::new(|()| ListAction::New { name: None }),
                },
            ])
        } else {
            bar
        }
    }

    fn empty(&self) -> Vec<W::Data> {
        Vec::new()
    }

    fn encode_state(&self, state: &Self::State) -> Vec<String> {
        let mut segments = vec![state.current_index.to_string()];
        if let Some(inner_state) = state.items.get(state.current_index) {
            segments.extend(self.inner.encode_state(inner_state));
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{TextAction, TextState, TextWidget};
    use formwork_core::MemoryCache;

    fn ctx() -> FormContext {
        FormContext::new()
    }

    fn widget() -> TabsWidget<TextWidget> {
        TabsWidget::new(TextWidget::new())
    }

    fn initialized(
        w: &TabsWidget<TextWidget>,
        values: &[&str],
    ) -> WidgetResult<TabsState<TextState>, Vec<String>> {
        w.initialize(values.iter().map(|s| s.to_string()).collect(), &ctx(), &[])
    }

    #[test]
    fn new_selects_the_created_tab() {
        let w = widget();
        let init = initialized(&w, &["a", "b"]);
        let result = w.reduce(init.state, init.data, ListAction::New { name: None }, &ctx());
        assert_eq!(result.state.current_index, 2);
        assert_eq!(result.data.len(), 3);
    }

    #[test]
    fn remove_before_selection_shifts_down() {
        let w = widget();
        let mut init = initialized(&w, &["a", "b", "c"]);
        init.state.current_index = 2;
        let result = w.reduce(init.state, init.data, ListAction::Remove { index: 1 }, &ctx());
        assert_eq!(result.state.current_index, 1);
        assert_eq!(result.data, vec!["a", "c"]);
    }

    #[test]
    fn remove_after_selection_keeps_index() {
        let w = widget();
        let mut init = initialized(&w, &["a", "b", "c"]);
        init.state.current_index = 0;
        let result = w.reduce(init.state, init.data, ListAction::Remove { index: 2 }, &ctx());
        assert_eq!(result.state.current_index, 0);
    }

    #[test]
    fn remove_selected_last_tab_clamps() {
        let w = widget();
        let mut init = initialized(&w, &["a", "b"]);
        init.state.current_index = 1;
        let result = w.reduce(init.state, init.data, ListAction::Remove { index: 1 }, &ctx());
        assert_eq!(result.state.current_index, 0);

        let result = w.reduce(result.state, result.data, ListAction::Remove { index: 0 }, &ctx());
        assert_eq!(result.state.current_index, 0);
        assert!(result.data.is_empty());
    }

    #[test]
    fn adapter_seeds_and_vetoes_tabs_like_lists() {
        let w = widget().adapt_new(|mut value, existing, name, _ctx| {
            if existing.len() >= 2 {
                return None;
            }
            if let Some(name) = name {
                value = name.to_string();
            }
            Some(value)
        });

        let init = initialized(&w, &["a"]);
        let seeded = w.reduce(
            init.state,
            init.data,
            ListAction::New {
                name: Some("parlor".into()),
            },
            &ctx(),
        );
        assert_eq!(seeded.data, vec!["a", "parlor"]);
        assert_eq!(seeded.state.current_index, 1);

        // A veto is a full no-op: no new tab, selection untouched.
        let vetoed = w.reduce(
            seeded.state.clone(),
            seeded.data.clone(),
            ListAction::New { name: None },
            &ctx(),
        );
        assert_eq!(vetoed.data, seeded.data);
        assert_eq!(vetoed.state, seeded.state);
    }

    #[test]
    fn select_moves_the_selection() {
        let w = widget();
        let init = initialized(&w, &["a", "b"]);
        let result = w.reduce(init.state, init.data, ListAction::Select { index: 1 }, &ctx());
        assert_eq!(result.state.current_index, 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn select_out_of_range_panics() {
        let w = widget();
        let init = initialized(&w, &["a"]);
        let _ = w.reduce(init.state, init.data, ListAction::Select { index: 5 }, &ctx());
    }

    #[test]
    fn encode_state_emits_active_path() {
        let w = widget();
        let mut init = initialized(&w, &["a", "b"]);
        init.state.current_index = 1;
        assert_eq!(w.encode_state(&init.state), vec!["1".to_string()]);
    }

    #[test]
    fn initialize_routes_params_to_selected_tab() {
        let w = TabsWidget::new(TabsWidget::new(TextWidget::new()));
        let data = vec![
            vec!["a".to_string()],
            vec!["b".to_string(), "c".to_string()],
        ];
        let result = w.initialize(data, &ctx(), &["1".to_string(), "1".to_string()]);
        assert_eq!(result.state.current_index, 1);
        assert_eq!(result.state.items[1].current_index, 1);
        // The unselected sibling fell back to its default selection.
        assert_eq!(result.state.items[0].current_index, 0);
    }

    #[test]
    fn initialize_clamps_unparseable_and_oversized_params() {
        let w = widget();
        let result = w.initialize(
            vec!["a".to_string(), "b".to_string()],
            &ctx(),
            &["nope".to_string()],
        );
        assert_eq!(result.state.current_index, 0);

        let result = w.initialize(
            vec!["a".to_string(), "b".to_string()],
            &ctx(),
            &["9".to_string()],
        );
        assert_eq!(result.state.current_index, 1);
    }

    #[test]
    fn scenario_move_then_remove_tracks_selection() {
        let w = widget();
        let mut init = initialized(&w, &["x", "y", "z"]);
        init.state.current_index = 2;
        let moved = w.reduce(init.state, init.data, ListAction::Move { from: 0, to: 2 }, &ctx());
        assert_eq!(moved.data, vec!["y", "z", "x"]);
        let removed = w.reduce(moved.state, moved.data, ListAction::Remove { index: 1 }, &ctx());
        assert_eq!(removed.data, vec!["y", "x"]);
        assert_eq!(removed.state.current_index, 1);
    }

    #[test]
    fn empty_tabs_validate_like_a_list() {
        let cache = MemoryCache::new();
        let errors = widget().validate(&Vec::new(), &cache);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field.as_deref(), Some("0"));
        assert!(errors[0].empty);
        assert!(!errors[0].invalid);
    }

    #[test]
    fn item_edit_keeps_selection_and_shape() {
        let w = widget();
        let init = initialized(&w, &["a", "b"]);
        let result = w.reduce(
            init.state,
            init.data,
            ListAction::Item {
                index: 0,
                action: TextAction::Set("painted".into()),
            },
            &ctx(),
        );
        assert_eq!(result.data, vec!["painted", "b"]);
        assert_eq!(result.state.items.len(), result.data.len());
        assert_eq!(result.state.current_index, 0);
    }
}
