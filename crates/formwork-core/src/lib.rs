#![forbid(unsafe_code)]

//! Core contract for the formwork widget runtime.
//!
//! A form screen is a tree of widgets. Each widget is a capability bundle
//! over a state/data/action triple: it knows how to build initial UI state
//! from a data value, how to advance both in response to an action, how to
//! report validation problems addressed by field path, and how to describe
//! itself to the rendering boundary. Combinators (list, tabs, record) build
//! bigger widgets out of smaller ones; this crate defines the contract they
//! all share.

pub mod cache;
pub mod context;
pub mod id;
pub mod node;
pub mod validation;
pub mod widget;

pub use cache::{CacheQuery, MemoryCache, RecordCache};
pub use context::FormContext;
pub use id::{EntityId, FormData};
pub use node::{FieldState, Node, SelectOption, field_state};
pub use validation::{FlatError, ValidationError, flatten, sub_validate};
pub use widget::{Widget, WidgetProps, WidgetResult, WidgetStatus, sub_status};
