#![forbid(unsafe_code)]

//! Value widgets and combinators for formwork.
//!
//! The leaves (text, number, checkbox, date, select) edit one scalar
//! each. The combinators build widgets over collections and records:
//! [`ListWidget`] lifts a widget over `T` to a widget over `Vec<T>`,
//! [`TabsWidget`] does the same while tracking a selected tab with
//! deep-link support, and [`record_widget!`] generates a widget over a
//! struct from a fixed field map.

pub mod checkbox;
pub mod date;
pub mod link;
pub mod list;
pub mod number;
pub mod record;
pub mod select;
pub mod tabs;
pub mod text;

pub use checkbox::{CheckboxAction, CheckboxWidget};
pub use date::{DateAction, DateWidget};
pub use link::{LinkAction, LinkWidget};
pub use list::{
    ListAction, ListState, ListWidget, duplicate_index, insert_index, move_index, remove_index,
};
pub use number::{NumberAction, NumberState, NumberWidget};
pub use select::{SelectAction, SelectWidget};
pub use tabs::{TabsState, TabsWidget};
pub use text::{TextAction, TextState, TextWidget};

// Re-exported for the `record_widget!` macro expansion. Not public API.
#[doc(hidden)]
pub use formwork_core as __core;
