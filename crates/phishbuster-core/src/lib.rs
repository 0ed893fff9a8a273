//! phishbuster-core: sample store, quiz session, and scoring.
//!
//! This crate defines the data model, CSV loading, and the per-user quiz
//! state machine that every phishbuster front end builds on.

pub mod error;
pub mod model;
pub mod session;
pub mod statistics;
pub mod store;
pub mod tips;

pub use error::LoadError;
pub use model::{Label, Sample};
pub use session::{AnswerOutcome, QuizSession, SessionSnapshot};
pub use statistics::{accuracy, SessionStats};
pub use store::{validate_sample_set, SampleSet, SampleStore, ValidationWarning};
