//! Embedded-record state machine.
//!
//! A screen can drill into a related, separately-persisted record (open
//! a quotation from a project, say) without leaving the parent form.
//! This machine manages that editor's lifecycle: `Closed` until opened,
//! `Open` over either a fresh unsaved record (`is_new`) or a fetched
//! one, and back to `Closed` on reset. At most one embedded record of a
//! given kind is open per parent; opening another discards the current
//! one without persistence, so callers must have saved or confirmed the
//! discard first.
//!
//! Persistence itself belongs to the host. [`EmbeddedRecordState::commit`]
//! only prepares it: validate, run the host-supplied pre-save hook,
//! collect the document-generation jobs, and hand everything back. The
//! host persists the data, enqueues the jobs, and dispatches `Reset`.

use formwork_core::{FormContext, RecordCache, ValidationError, Widget, WidgetResult};
use thiserror::Error;

/// Lifecycle of an optional, lazily instantiated nested record editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddedRecordState<S, D> {
    /// No embedded editor open.
    Closed,
    /// Editor open over `data`; `is_new` marks a record that has never
    /// been persisted.
    Open { state: S, data: D, is_new: bool },
}

// Hand-written so `Closed` is the default even when the inner state and
// data types have no defaults of their own.
impl<S, D> Default for EmbeddedRecordState<S, D> {
    fn default() -> Self {
        Self::Closed
    }
}

/// Actions on the embedded-record machine.
#[derive(Debug, Clone)]
pub enum EmbeddedRecordAction<D, A> {
    /// Open a fresh, unsaved record seeded with the given value.
    OpenNew(D),
    /// Open an already-persisted record, discarding whatever was open.
    OpenExisting(D),
    /// Forward an action to the wrapped widget.
    Item(A),
    /// Close the editor, discarding unsaved edits.
    Reset,
}

/// Document-generation job parameterized by a saved record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Template name understood by the document service.
    pub template: String,
    pub parameters: Vec<String>,
}

impl GenerateRequest {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn parameter(mut self, value: impl Into<String>) -> Self {
        self.parameters.push(value.into());
        self
    }
}

type PreSave<D> = Box<dyn Fn(&mut D, &FormContext)>;
type GenerateRequests<D> = Box<dyn Fn(&D, &dyn RecordCache) -> Vec<GenerateRequest>>;

/// Host-supplied collaborators for the save path.
#[derive(Default)]
pub struct EmbeddedRecordOptions<D> {
    pre_save: Option<PreSave<D>>,
    generate_requests: Option<GenerateRequests<D>>,
}

impl<D> EmbeddedRecordOptions<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pre_save: None,
            generate_requests: None,
        }
    }

    /// Run immediately before the record is handed back for
    /// persistence, e.g. to stamp a computed date.
    #[must_use]
    pub fn pre_save(mut self, hook: impl Fn(&mut D, &FormContext) + 'static) -> Self {
        self.pre_save = Some(Box::new(hook));
        self
    }

    /// Produce the document-generation jobs for the saved record.
    #[must_use]
    pub fn generate_requests(
        mut self,
        hook: impl Fn(&D, &dyn RecordCache) -> Vec<GenerateRequest> + 'static,
    ) -> Self {
        self.generate_requests = Some(Box::new(hook));
        self
    }
}

/// Why a commit was refused. Unlike index violations, both cases are
/// reachable through ordinary UI races, so they are data rather than
/// panics.
#[derive(Debug, Error)]
pub enum CommitError {
    /// `commit` was called with no editor open.
    #[error("no embedded record is open")]
    Closed,
    /// The record still has validation errors.
    #[error("embedded record has {} validation error(s)", .0.len())]
    Invalid(Vec<ValidationError>),
}

/// What the host must do after a successful commit: persist `data` and
/// enqueue `requests`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitOutcome<D> {
    pub data: D,
    pub requests: Vec<GenerateRequest>,
    /// Whether the record had never been persisted before.
    pub was_new: bool,
}

impl<S, D> EmbeddedRecordState<S, D> {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The open record's data, if any.
    #[must_use]
    pub fn data(&self) -> Option<&D> {
        match self {
            Self::Open { data, .. } => Some(data),
            Self::Closed => None,
        }
    }

    /// Whether the open record has never been persisted. `false` when
    /// closed.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        matches!(self, Self::Open { is_new: true, .. })
    }

    /// Advance the machine. Pure; the wrapped widget supplies the inner
    /// transitions.
    #[must_use]
    pub fn reduce<W>(
        self,
        widget: &W,
        action: EmbeddedRecordAction<D, W::Action>,
        ctx: &FormContext,
    ) -> Self
    where
        W: Widget<State = S, Data = D>,
    {
        match action {
            EmbeddedRecordAction::OpenNew(seed) => {
                let WidgetResult { state, data } = widget.initialize(seed, ctx, &[]);
                Self::Open {
                    state,
                    data,
                    is_new: true,
                }
            }
            EmbeddedRecordAction::OpenExisting(record) => {
                let WidgetResult { state, data } = widget.initialize(record, ctx, &[]);
                Self::Open {
                    state,
                    data,
                    is_new: false,
                }
            }
            EmbeddedRecordAction::Item(action) => match self {
                Self::Open {
                    state,
                    data,
                    is_new,
                } => {
                    let WidgetResult { state, data } = widget.reduce(state, data, action, ctx);
                    Self::Open {
                        state,
                        data,
                        is_new,
                    }
                }
                Self::Closed => {
                    tracing::warn!("embedded record action dropped: editor is closed");
                    Self::Closed
                }
            },
            EmbeddedRecordAction::Reset => Self::Closed,
        }
    }

    /// Prepare the open record for persistence: validate, apply the
    /// pre-save hook, and collect the generation jobs. The machine is
    /// not transitioned; the host dispatches
    /// [`EmbeddedRecordAction::Reset`] once persistence succeeds.
    pub fn commit<W>(
        &self,
        widget: &W,
        options: &EmbeddedRecordOptions<D>,
        ctx: &FormContext,
        cache: &dyn RecordCache,
    ) -> Result<CommitOutcome<D>, CommitError>
    where
        W: Widget<State = S, Data = D>,
        D: Clone,
    {
        let Self::Open { data, is_new, .. } = self else {
            return Err(CommitError::Closed);
        };
        let errors = widget.validate(data, cache);
        if !errors.is_empty() {
            return Err(CommitError::Invalid(errors));
        }
        let mut data = data.clone();
        if let Some(hook) = &options.pre_save {
            hook(&mut data, ctx);
        }
        let requests = match &options.generate_requests {
            Some(hook) => hook(&data, cache),
            None => Vec::new(),
        };
        tracing::debug!(
            was_new = *is_new,
            requests = requests.len(),
            "embedded record ready to persist"
        );
        Ok(CommitOutcome {
            data,
            requests,
            was_new: *is_new,
        })
    }
}
