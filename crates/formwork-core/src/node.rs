//! The renderable tree a widget's `component` produces.
//!
//! `Node<A>` is typed by the action its interactions produce. Leaf
//! controls carry boxed callbacks mapping a UI input (typed text, a
//! picked option, a toggled checkbox) to one action from the owning
//! widget's union; [`Node::map`] re-targets the whole subtree so a
//! combinator can lift child nodes into its own action type. The actual
//! rendering library behind this tree is a boundary concern and not part
//! of this crate.

use chrono::NaiveDate;

use crate::validation::ValidationError;

/// Boxed interaction callback: maps a UI input value to an action.
pub type Callback<I, A> = Box<dyn Fn(I) -> A>;

/// Presentation state of a field, derived from its validation slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Valid,
    Empty,
    Invalid,
}

/// Derive the presentation state for a field: any addressed error wins,
/// otherwise an unfilled field shows as empty.
#[must_use]
pub fn field_state(validation: &[ValidationError], unfilled: bool) -> FieldState {
    if !validation.is_empty() {
        FieldState::Invalid
    } else if unfilled {
        FieldState::Empty
    } else {
        FieldState::Valid
    }
}

/// One entry in a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Renderable description of a widget subtree.
pub enum Node<A> {
    Empty,
    Column(Vec<Node<A>>),
    Row(Vec<Node<A>>),
    Label(String),
    /// A labelled form field wrapping a control.
    Field {
        label: String,
        state: FieldState,
        body: Box<Node<A>>,
    },
    TextInput {
        value: String,
        placeholder: Option<String>,
        state: FieldState,
        mutable: bool,
        on_change: Callback<String, A>,
        on_blur: Option<Callback<(), A>>,
    },
    Checkbox {
        checked: bool,
        mutable: bool,
        on_toggle: Callback<bool, A>,
    },
    Select {
        value: String,
        options: Vec<SelectOption>,
        state: FieldState,
        mutable: bool,
        on_select: Callback<String, A>,
    },
    DateInput {
        value: Option<NaiveDate>,
        state: FieldState,
        mutable: bool,
        on_change: Callback<Option<NaiveDate>, A>,
    },
    Button {
        label: String,
        enabled: bool,
        on_press: Callback<(), A>,
    },
    /// A tab strip plus the body of the selected tab.
    TabBar {
        titles: Vec<String>,
        active: usize,
        on_select: Callback<usize, A>,
        body: Box<Node<A>>,
    },
}

impl<A: 'static> Node<A> {
    /// Convenience constructor for a vertical group.
    #[must_use]
    pub fn column(children: Vec<Node<A>>) -> Self {
        Node::Column(children)
    }

    /// Convenience constructor for a static label.
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Node::Label(text.into())
    }

    /// Re-target the action type, lifting this subtree into a parent
    /// widget's action union.
    #[must_use]
    pub fn map<B: 'static>(self, f: impl Fn(A) -> B + Clone + 'static) -> Node<B> {
        match self {
            Node::Empty => Node::Empty,
            Node::Column(children) => {
                Node::Column(children.into_iter().map(|c| c.map(f.clone())).collect())
            }
            Node::Row(children) => {
                Node::Row(children.into_iter().map(|c| c.map(f.clone())).collect())
            }
            Node::Label(text) => Node::Label(text),
            Node::Field { label, state, body } => Node::Field {
                label,
                state,
                body: Box::new(body.map(f)),
            },
            Node::TextInput {
                value,
                placeholder,
                state,
                mutable,
                on_change,
                on_blur,
            } => Node::TextInput {
                value,
                placeholder,
                state,
                mutable,
                on_change: {
                    let f = f.clone();
                    Box::new(move |v| f(on_change(v)))
                },
                on_blur: on_blur.map(|cb| -> Callback<(), B> { Box::new(move |()| f(cb(()))) }),
            },
            Node::Checkbox {
                checked,
                mutable,
                on_toggle,
            } => Node::Checkbox {
                checked,
                mutable,
                on_toggle: Box::new(move |v| f(on_toggle(v))),
            },
            Node::Select {
                value,
                options,
                state,
                mutable,
                on_select,
            } => Node::Select {
                value,
                options,
                state,
                mutable,
                on_select: Box::new(move |v| f(on_select(v))),
            },
            Node::DateInput {
                value,
                state,
                mutable,
                on_change,
            } => Node::DateInput {
                value,
                state,
                mutable,
                on_change: Box::new(move |v| f(on_change(v))),
            },
            Node::Button {
                label,
                enabled,
                on_press,
            } => Node::Button {
                label,
                enabled,
                on_press: Box::new(move |()| f(on_press(()))),
            },
            Node::TabBar {
                titles,
                active,
                on_select,
                body,
            } => Node::TabBar {
                titles,
                active,
                on_select: {
                    let f = f.clone();
                    Box::new(move |i| f(on_select(i)))
                },
                body: Box::new(body.map(f)),
            },
        }
    }
}

impl<A> std::fmt::Debug for Node<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Empty => f.write_str("Empty"),
            Node::Column(children) => f.debug_tuple("Column").field(children).finish(),
            Node::Row(children) => f.debug_tuple("Row").field(children).finish(),
            Node::Label(text) => f.debug_tuple("Label").field(text).finish(),
            Node::Field { label, state, body } => f
                .debug_struct("Field")
                .field("label", label)
                .field("state", state)
                .field("body", body)
                .finish(),
            Node::TextInput {
                value,
                placeholder,
                state,
                mutable,
                ..
            } => f
                .debug_struct("TextInput")
                .field("value", value)
                .field("placeholder", placeholder)
                .field("state", state)
                .field("mutable", mutable)
                .finish_non_exhaustive(),
            Node::Checkbox {
                checked, mutable, ..
            } => f
                .debug_struct("Checkbox")
                .field("checked", checked)
                .field("mutable", mutable)
                .finish_non_exhaustive(),
            Node::Select {
                value,
                options,
                state,
                mutable,
                ..
            } => f
                .debug_struct("Select")
                .field("value", value)
                .field("options", options)
                .field("state", state)
                .field("mutable", mutable)
                .finish_non_exhaustive(),
            Node::DateInput {
                value,
                state,
                mutable,
                ..
            } => f
                .debug_struct("DateInput")
                .field("value", value)
                .field("state", state)
                .field("mutable", mutable)
                .finish_non_exhaustive(),
            Node::Button { label, enabled, .. } => f
                .debug_struct("Button")
                .field("label", label)
                .field("enabled", enabled)
                .finish_non_exhaustive(),
            Node::TabBar {
                titles,
                active,
                body,
                ..
            } => f
                .debug_struct("TabBar")
                .field("titles", titles)
                .field("active", active)
                .field("body", body)
                .finish_non_exhaustive(),
        }
    }
}
