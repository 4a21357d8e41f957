//! Link widget: a reference to a separately-persisted record.
//!
//! The one leaf whose validation consults the record cache: a dangling
//! reference (an id no longer present for its kind) reports `invalid`,
//! a missing one reports `empty`. The cache is read-only and the check
//! is an existence probe, nothing more.

use formwork_core::{
    CacheQuery, EntityId, FormContext, Node, RecordCache, ValidationError, Widget, WidgetProps,
    WidgetResult, field_state,
};

/// Actions accepted by [`LinkWidget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    Set(Option<EntityId>),
}

/// Widget over an optional record reference of a fixed kind.
#[derive(Debug, Clone)]
pub struct LinkWidget {
    kind: String,
    optional: bool,
    backing: Option<(String, String)>,
}

impl LinkWidget {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            optional: false,
            backing: None,
        }
    }

    /// Accept a missing reference.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Also require at least one cached `kind` record whose `field`
    /// equals the referenced id (a project that must have a detail
    /// sheet, say). Checked with an existence probe, never a fetch.
    #[must_use]
    pub fn backed_by(mut self, kind: impl Into<String>, field: impl Into<String>) -> Self {
        self.backing = Some((kind.into(), field.into()));
        self
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl Widget for LinkWidget {
    type State = ();
    type Data = Option<EntityId>;
    type Action = LinkAction;

    fn initialize(
        &self,
        data: Option<EntityId>,
        _ctx: &FormContext,
        _params: &[String],
    ) -> WidgetResult<(), Option<EntityId>> {
        WidgetResult { state: (), data }
    }

    fn reduce(
        &self,
        _state: (),
        _data: Option<EntityId>,
        action: LinkAction,
        _ctx: &FormContext,
    ) -> WidgetResult<(), Option<EntityId>> {
        let LinkAction::Set(value) = action;
        WidgetResult {
            state: (),
            data: value,
        }
    }

    fn validate(
        &self,
        data: &Option<EntityId>,
        cache: &dyn RecordCache,
    ) -> Vec<ValidationError> {
        match data {
            None if self.optional => Vec::new(),
            None => vec![ValidationError::missing()],
            Some(id) => {
                if cache.get(&self.kind, *id).is_none() {
                    return vec![ValidationError::malformed()];
                }
                if let Some((kind, field)) = &self.backing
                    && !cache.exists(kind, &CacheQuery::new(field.as_str(), id.to_string()))
                {
                    return vec![ValidationError::malformed()];
                }
                Vec::new()
            }
        }
    }

    fn component(&self, props: WidgetProps<'_, (), Option<EntityId>>) -> Node<LinkAction> {
        let value = props.data.map(|id| id.to_string()).unwrap_or_default();
        Node::Select {
            value,
            options: Vec::new(),
            state: field_state(&props.status.validation, props.data.is_none()),
            mutable: props.status.mutable,
            on_select: Box::new(|raw| LinkAction::Set(raw.parse().ok())),
        }
    }

    fn empty(&self) -> Option<EntityId> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_core::MemoryCache;
    use serde_json::json;

    #[test]
    fn missing_reference_reports_empty() {
        let cache = MemoryCache::new();
        assert_eq!(
            LinkWidget::new("client").validate(&None, &cache),
            vec![ValidationError::missing()]
        );
        assert!(
            LinkWidget::new("client")
                .optional()
                .validate(&None, &cache)
                .is_empty()
        );
    }

    #[test]
    fn dangling_reference_reports_invalid() {
        let mut cache = MemoryCache::new();
        let known = EntityId::fresh();
        cache.insert("client", known, json!({"name": "Atelier"}));

        let widget = LinkWidget::new("client");
        assert!(widget.validate(&Some(known), &cache).is_empty());
        assert_eq!(
            widget.validate(&Some(EntityId::fresh()), &cache),
            vec![ValidationError::malformed()]
        );
        // Same id under a different kind does not count.
        assert_eq!(
            LinkWidget::new("project").validate(&Some(known), &cache),
            vec![ValidationError::malformed()]
        );
    }

    #[test]
    fn backing_requirement_uses_an_existence_probe() {
        let mut cache = MemoryCache::new();
        let project = EntityId::fresh();
        cache.insert("project", project, json!({"name": "Mercer St walk-up"}));

        let widget = LinkWidget::new("project").backed_by("detail-sheet", "project");

        // The project exists but nothing references it yet.
        assert_eq!(
            widget.validate(&Some(project), &cache),
            vec![ValidationError::malformed()]
        );

        cache.insert(
            "detail-sheet",
            EntityId::fresh(),
            json!({"project": project.to_string(), "kind": "interior"}),
        );
        assert!(widget.validate(&Some(project), &cache).is_empty());

        // A sheet referencing some other project does not satisfy it.
        cache.insert(
            "detail-sheet",
            EntityId::fresh(),
            json!({"project": EntityId::fresh().to_string()}),
        );
        let other = EntityId::fresh();
        cache.insert("project", other, json!({"name": "Bleecker St loft"}));
        assert_eq!(
            widget.validate(&Some(other), &cache),
            vec![ValidationError::malformed()]
        );
    }
}
