//! List combinator: lifts a widget over `T` to a widget over `Vec<T>`.
//!
//! State and data are parallel vectors and every transition updates both
//! in one step, so `items.len() == data.len()` holds after any action.
//! Index arguments are bounds-checked by the vector accesses themselves:
//! an out-of-range index is a programming error and panics rather than
//! being clamped.

use formwork_core::{
    FormContext, FormData, Node, RecordCache, ValidationError, Widget, WidgetProps, WidgetResult,
    sub_status, sub_validate,
};

/// Remove the element at `index`, returning a new vector.
#[must_use]
pub fn remove_index<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    let mut out = items.to_vec();
    out.remove(index);
    out
}

/// Insert `value` at `index`, returning a new vector.
#[must_use]
pub fn insert_index<T: Clone>(items: &[T], index: usize, value: T) -> Vec<T> {
    let mut out = items.to_vec();
    out.insert(index, value);
    out
}

/// Move the element at `from` so it lands at `to`, returning a new
/// vector. `to` addresses a position in the vector after removal, so
/// `from == to` is a no-op.
#[must_use]
pub fn move_index<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let item = items[from].clone();
    insert_index(&remove_index(items, from), to, item)
}

/// Clone the element at `index` into the following slot, returning a
/// new vector.
#[must_use]
pub fn duplicate_index<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    insert_index(items, index + 1, items[index].clone())
}

/// Action vocabulary shared by the list and tabs combinators.
///
/// `Item`, `Remove`, `Select`, and `Duplicate` indices must be in
/// `[0, len)`; `Move` must name two in-range positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction<A> {
    /// Route an action to the item at `index`.
    Item { index: usize, action: A },
    /// Delete the item at `index` from state and data together.
    Remove { index: usize },
    /// Append a fresh item built from the inner widget's `empty`.
    New { name: Option<String> },
    /// Reorder: remove at `from`, reinsert at `to`.
    Move { from: usize, to: usize },
    /// Change the selected tab. Tabs only; a plain list has no
    /// selection and treats it as a no-op.
    Select { index: usize },
    /// Clone the item at `index` in place with a fresh identity,
    /// optionally applying one follow-up action to the copy.
    Duplicate { index: usize, action: Option<A> },
}

/// UI state of a [`ListWidget`]: one inner state per item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState<S> {
    pub items: Vec<S>,
}

/// Post-processing hook for `New`: receives the fresh value, the
/// existing items, and the requested name; may adjust the value or veto
/// the insertion entirely by returning `None`. A veto makes the action
/// a silent no-op, so any user-facing feedback must happen before
/// dispatch.
pub type AdaptNew<D> = Box<dyn Fn(D, &[D], Option<&str>, &FormContext) -> Option<D>>;

/// Widget over `Vec<W::Data>` built from a widget over `W::Data`.
pub struct ListWidget<W: Widget> {
    inner: W,
    empty_ok: bool,
    add_label: Option<String>,
    adapt_new: Option<AdaptNew<W::Data>>,
}

impl<W: Widget> ListWidget<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            empty_ok: false,
            add_label: None,
            adapt_new: None,
        }
    }

    /// Accept an empty list. Without this, validation synthesizes one
    /// `{field: "0", empty}` error for the whole list.
    #[must_use]
    pub fn empty_ok(mut self) -> Self {
        self.empty_ok = true;
        self
    }

    /// Render an add button with this label when the list is mutable.
    #[must_use]
    pub fn add_label(mut self, label: impl Into<String>) -> Self {
        self.add_label = Some(label.into());
        self
    }

    /// Install a `New` post-processing hook.
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
}

/// Build the data value for a `New` action: the inner widget's `empty`,
/// run through the adapter hook. `None` means vetoed. Shared by the
/// list and tabs combinators so the veto semantics cannot drift.
pub(crate) fn adapted_new<W: Widget>(
    inner: &W,
    adapt: Option<&AdaptNew<W::Data>>,
    existing: &[W::Data],
    name: Option<&str>,
    ctx: &FormContext,
) -> Option<W::Data> {
    let fresh = inner.empty();
    match adapt {
        Some(hook) => hook(fresh, existing, name, ctx),
        None => Some(fresh),
    }
}

/// Per-index validation shared by the list and tabs combinators:
/// delegate to the inner widget under the decimal-string index, then
/// synthesize the whole-list empty error if configured.
pub(crate) fn validate_items<W: Widget>(
    inner: &W,
    data: &[W::Data],
    cache: &dyn RecordCache,
    empty_ok: bool,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (index, item) in data.iter().enumerate() {
        sub_validate(inner, item, cache, &index.to_string(), &mut errors);
    }
    if data.is_empty() && !empty_ok {
        errors.push(ValidationError::missing().at("0"));
    }
    errors
}

impl<W: Widget> Widget for ListWidget<W> {
    type State = ListState<W::State>;
    type Data = Vec<W::Data>;
    type Action = ListAction<W::Action>;

    fn initialize(
        &self,
        data: Vec<W::Data>,
        ctx: &FormContext,
        _params: &[String],
    ) -> WidgetResult<Self::State, Self::Data> {
        let mut items = Vec::with_capacity(data.len());
        let mut out = Vec::with_capacity(data.len());
        for value in data {
            let inner = self.inner.initialize(value, ctx, &[]);
            items.push(inner.state);
            out.push(inner.data);
        }
        WidgetResult {
            state: ListState { items },
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
        let ListState { mut items } = state;
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
            }
            ListAction::New { name } => {
                if let Some(value) =
                    adapted_new(&self.inner, self.adapt_new.as_ref(), &data, name.as_deref(), ctx)
                {
                    let inner = self.inner.initialize(value, ctx, &[]);
                    items.push(inner.state);
                    data.push(inner.data);
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("list item creation vetoed by adapter");
                }
            }
            ListAction::Move { from, to } => {
                items = move_index(&items, from, to);
                data = move_index(&data, from, to);
            }
            // A plain list carries no selection.
            ListAction::Select { .. } => {}
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
            state: ListState { items },
            data,
        }
    }

    fn validate(&self, data: &Self::Data, cache: &dyn RecordCache) -> Vec<ValidationError> {
        validate_items(&self.inner, data, cache, self.empty_ok)
    }

    fn component(&self, props: WidgetProps<'_, Self::State, Self::Data>) -> Node<Self::Action> {
        let mut children = Vec::with_capacity(props.data.len() + 1);
        for (index, (item_state, item_data)) in
            props.state.items.iter().zip(props.data).enumerate()
        {
            let status = sub_status(props.status, &index.to_string(), false);
            let child = self.inner.component(WidgetProps {
                state: item_state,
                data: item_data,
                status: &status,
                label: None,
            });
            children.push(child.map(move |action| ListAction::Item { index, action }));
        }
        if let Some(label) = &self.add_label
            && props.status.mutable
        {
            children.push(Node::Button {
                label: label.clone(),
                enabled: true,
                on_press: Box::new(|()| ListAction::New { name: None }),
            });
        }
        Node::Column(children)
    }

    fn empty(&self) -> Vec<W::Data> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{TextAction, TextWidget};
    use formwork_core::MemoryCache;

    fn ctx() -> FormContext {
        FormContext::new()
    }

    fn widget() -> ListWidget<TextWidget> {
        ListWidget::new(TextWidget::new())
    }

    fn initialized(
        w: &ListWidget<TextWidget>,
        values: &[&str],
    ) -> WidgetResult<ListState<crate::text::TextState>, Vec<String>> {
        w.initialize(values.iter().map(|s| s.to_string()).collect(), &ctx(), &[])
    }

    #[test]
    fn item_routes_to_one_index() {
        let w = widget();
        let init = initialized(&w, &["x", "y"]);
        let result = w.reduce(
            init.state,
            init.data,
            ListAction::Item {
                index: 1,
                action: TextAction::Set("z".into()),
            },
            &ctx(),
        );
        assert_eq!(result.data, vec!["x", "z"]);
        assert_eq!(result.state.items.len(), 2);
    }

    #[test]
    fn remove_splices_both_vectors() {
        let w = widget();
        let init = initialized(&w, &["x", "y", "z"]);
        let result = w.reduce(init.state, init.data, ListAction::Remove { index: 1 }, &ctx());
        assert_eq!(result.data, vec!["x", "z"]);
        assert_eq!(result.state.items.len(), 2);
    }

    #[test]
    fn new_appends_empty_value() {
        let w = widget();
        let init = initialized(&w, &[]);
        let result = w.reduce(init.state, init.data, ListAction::New { name: None }, &ctx());
        assert_eq!(result.data, vec![String::new()]);
        assert_eq!(result.state.items.len(), 1);
    }

    #[test]
    fn adapter_can_seed_or_veto() {
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
        let result = w.reduce(
            init.state,
            init.data,
            ListAction::New {
                name: Some("seeded".into()),
            },
            &ctx(),
        );
        assert_eq!(result.data, vec!["a", "seeded"]);

        let vetoed = w.reduce(
            result.state.clone(),
            result.data.clone(),
            ListAction::New { name: None },
            &ctx(),
        );
        assert_eq!(vetoed.data, result.data);
        assert_eq!(vetoed.state, result.state);
    }

    #[test]
    fn select_is_a_noop_for_plain_lists() {
        let w = widget();
        let init = initialized(&w, &["x"]);
        let result = w.reduce(
            init.state.clone(),
            init.data.clone(),
            ListAction::Select { index: 0 },
            &ctx(),
        );
        assert_eq!(result.state, init.state);
        assert_eq!(result.data, init.data);
    }

    #[test]
    fn empty_list_synthesizes_error() {
        let cache = MemoryCache::new();
        let errors = widget().validate(&Vec::new(), &cache);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field.as_deref(), Some("0"));
        assert!(errors[0].empty);
        assert!(!errors[0].invalid);

        assert!(widget().empty_ok().validate(&Vec::new(), &cache).is_empty());
    }

    #[test]
    fn validation_is_addressed_by_index() {
        let cache = MemoryCache::new();
        let errors = widget().validate(&vec!["ok".into(), String::new()], &cache);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field.as_deref(), Some("1"));
    }

    #[test]
    fn move_index_matches_splice_semantics() {
        assert_eq!(move_index(&["x", "y", "z"], 0, 2), vec!["y", "z", "x"]);
        assert_eq!(move_index(&["x", "y", "z"], 2, 0), vec!["z", "x", "y"]);
        assert_eq!(move_index(&["x", "y", "z"], 1, 1), vec!["x", "y", "z"]);
    }

    #[test]
    fn reduce_splices_match_the_index_helpers() {
        let w = widget();
        let init = initialized(&w, &["x", "y", "z"]);

        let removed = w.reduce(
            init.state.clone(),
            init.data.clone(),
            ListAction::Remove { index: 1 },
            &ctx(),
        );
        assert_eq!(removed.data, remove_index(&init.data, 1));

        let moved = w.reduce(
            init.state.clone(),
            init.data.clone(),
            ListAction::Move { from: 0, to: 2 },
            &ctx(),
        );
        assert_eq!(moved.data, move_index(&init.data, 0, 2));

        let duplicated = w.reduce(
            init.state,
            init.data.clone(),
            ListAction::Duplicate {
                index: 2,
                action: None,
            },
            &ctx(),
        );
        assert_eq!(duplicated.data, duplicate_index(&init.data, 2));
    }

    #[test]
    fn insert_and_remove_compose() {
        let spliced = insert_index(&remove_index(&["x", "y", "z"], 0), 1, "x");
        assert_eq!(spliced, vec!["y", "x", "z"]);
        assert_eq!(duplicate_index(&["x", "y"], 0), vec!["x", "x", "y"]);
    }
}
