//! Record combinator: a widget over a struct from a fixed field map.
//!
//! Where the list combinators are ordinary generic types, a record's
//! field map is heterogeneous, so each record shape gets its own state
//! struct, its own closed action enum, and its own exhaustive `Widget`
//! impl. [`record_widget!`] generates all three; the action enum has one
//! variant per field, so an unroutable action is a compile error, not a
//! runtime fallback.
//!
//! ```
//! use formwork_core::{EntityId, FormData};
//! use formwork_widgets::{CheckboxWidget, TextWidget, record_widget};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! pub struct Client {
//!     id: EntityId,
//!     name: String,
//!     active: bool,
//! }
//!
//! impl FormData for Client {
//!     fn reassign_id(&mut self) {
//!         self.id = EntityId::fresh();
//!     }
//! }
//!
//! record_widget! {
//!     /// Editor for a [`Client`].
//!     pub struct ClientWidget for Client {
//!         state: ClientState,
//!         action: ClientAction,
//!         fields: {
//!             name / Name: TextWidget = TextWidget::new(),
//!             active / Active: CheckboxWidget = CheckboxWidget::new(),
//!         }
//!     }
//! }
//! ```
//!
//! The data type must have one same-named field per entry plus
//! `Default` (for `empty`, which also refreshes the record's identity
//! through [`formwork_core::FormData::reassign_id`]). Fields not listed
//! in the map (ids, bookkeeping) pass through reduce untouched.

/// Generate a record widget: the widget struct, its state struct, its
/// action enum, and the `Widget` implementation.
///
/// Grammar: `field_name / VariantName : WidgetType = widget_expr`.
/// The field name doubles as the validation path segment and the
/// deep-link segment; the variant name is the action constructor.
#[macro_export]
macro_rules! record_widget {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $data:ty {
            state: $state_name:ident,
            action: $action_name:ident,
            fields: {
                $( $field:ident / $variant:ident : $fty:ty = $fexpr:expr ),+ $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $field: $fty, )+
        }

        impl $name {
            #[must_use]
            $vis fn new() -> Self {
                Self {
                    $( $field: $fexpr, )+
                }
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        #[doc = ::core::concat!("UI state for [`", ::core::stringify!($name), "`].")]
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $state_name {
            $( pub $field: <$fty as $crate::__core::Widget>::State, )+
        }

        #[doc = ::core::concat!("Closed action union for [`", ::core::stringify!($name), "`].")]
        #[derive(Debug, Clone)]
        $vis enum $action_name {
            $( $variant(<$fty as $crate::__core::Widget>::Action), )+
        }

        impl $crate::__core::Widget for $name {
            type State = $state_name;
            type Data = $data;
            type Action = $action_name;

            fn initialize(
                &self,
                data: Self::Data,
                ctx: &$crate::__core::FormContext,
                params: &[::std::string::String],
            ) -> $crate::__core::WidgetResult<Self::State, Self::Data> {
                let mut data = data;
                let target = params.first().map(::std::string::String::as_str);
                let rest: &[::std::string::String] = params.get(1..).unwrap_or(&[]);
                $(
                    let $field = {
                        let field_params: &[::std::string::String] =
                            if target == ::core::option::Option::Some(::core::stringify!($field)) {
                                rest
                            } else {
                                &[]
                            };
                        let inner = $crate::__core::Widget::initialize(
                            &self.$field,
                            data.$field,
                            ctx,
                            field_params,
                        );
                        data.$field = inner.data;
                        inner.state
                    };
                )+
                $crate::__core::WidgetResult {
                    state: $state_name { $( $field, )+ },
                    data,
                }
            }

            fn reduce(
                &self,
                state: Self::State,
                data: Self::Data,
                action: Self::Action,
                ctx: &$crate::__core::FormContext,
            ) -> $crate::__core::WidgetResult<Self::State, Self::Data> {
                let mut state = state;
                let mut data = data;
                match action {
                    $(
                        $action_name::$variant(action) => {
                            let inner = $crate::__core::Widget::reduce(
                                &self.$field,
                                state.$field,
                                data.$field,
                                action,
                                ctx,
                            );
                            state.$field = inner.state;
                            data.$field = inner.data;
                        }
                    )+
                }
                $crate::__core::WidgetResult { state, data }
            }

            fn validate(
                &self,
                data: &Self::Data,
                cache: &dyn $crate::__core::RecordCache,
            ) -> ::std::vec::Vec<$crate::__core::ValidationError> {
                let mut errors = ::std::vec::Vec::new();
                $(
                    $crate::__core::sub_validate(
                        &self.$field,
                        &data.$field,
                        cache,
                        ::core::stringify!($field),
                        &mut errors,
                    );
                )+
                errors
            }

            fn component(
                &self,
                props: $crate::__core::WidgetProps<'_, Self::State, Self::Data>,
            ) -> $crate::__core::Node<Self::Action> {
                let mut children = ::std::vec::Vec::new();
                $(
                    {
                        let status =
                            $crate::__core::sub_status(props.status, ::core::stringify!($field), false);
                        let child = $crate::__core::Widget::component(
                            &self.$field,
                            $crate::__core::WidgetProps {
                                state: &props.state.$field,
                                data: &props.data.$field,
                                status: &status,
                                label: ::core::option::Option::Some(::core::stringify!($field)),
                            },
                        );
                        children.push($crate::__core::Node::Field {
                            label: ::core::stringify!($field).to_string(),
                            state: $crate::__core::field_state(&status.validation, false),
                            body: ::std::boxed::Box::new(child.map($action_name::$variant)),
                        });
                    }
                )+
                $crate::__core::Node::Column(children)
            }

            fn empty(&self) -> Self::Data {
                let mut data = <$data as ::core::default::Default>::default();
                $crate::__core::FormData::reassign_id(&mut data);
                data
            }

            fn encode_state(&self, state: &Self::State) -> ::std::vec::Vec<::std::string::String> {
                $(
                    {
                        let inner = $crate::__core::Widget::encode_state(&self.$field, &state.$field);
                        if !inner.is_empty() {
                            let mut segments =
                                ::std::vec::Vec::with_capacity(inner.len() + 1);
                            segments.push(::core::stringify!($field).to_string());
                            segments.extend(inner);
                            return segments;
                        }
                    }
                )+
                ::std::vec::Vec::new()
            }
        }
    };
}
