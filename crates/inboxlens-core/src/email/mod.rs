//! Email records and the ordered collection filters run against.
//!
//! Records are seeded once per session from an [`EmailSource`] and never
//! mutated afterwards. The display timestamp is kept apart from the
//! filterable arrival time.

mod collection;
mod model;
mod source;

pub use collection::EmailCollection;
pub use model::{EmailRecord, KNOWN_CATEGORIES, Sentiment, Urgency};
pub use source::{EmailSource, JsonFileSource, SampleMailbox};
