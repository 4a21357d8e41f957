#![forbid(unsafe_code)]

//! Runtime pieces that sit above the widget tree: the [`FormHost`] that
//! owns a screen's `(state, data)` snapshot and processes actions one at
//! a time, the embedded-record state machine for drilling into related
//! records, and deep-link path encoding.

pub mod deeplink;
pub mod embedded;
pub mod host;

pub use deeplink::{DeepLinkError, decode_path, encode_path};
pub use embedded::{
    CommitError, CommitOutcome, EmbeddedRecordAction, EmbeddedRecordOptions, EmbeddedRecordState,
    GenerateRequest,
};
pub use host::FormHost;
