//! Explicitly threaded form context.
//!
//! Every `initialize` and `reduce` call receives the context as a plain
//! parameter. There is no ambient or global lookup: a reducer's inputs
//! are exactly its arguments.

use chrono::NaiveDate;

use crate::id::EntityId;

/// Cross-cutting inputs available to every widget transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormContext {
    /// The acting user, when known.
    pub user: Option<EntityId>,
    /// Today's date, for widgets that stamp or default dates.
    pub today: Option<NaiveDate>,
}

impl FormContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_user(mut self, user: EntityId) -> Self {
        self.user = Some(user);
        self
    }

    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}
