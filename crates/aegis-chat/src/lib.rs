//! Conversational interface for Aegis.
//!
//! Classifies each user utterance into an intent (escalation, claim lookup,
//! policy lookup, or FAQ fallback), resolves it against the data store
//! gateway, and formats the reply. Conversations and escalations are
//! persisted as a side effect of processing.

pub mod error;
pub mod faq;
pub mod parser;
pub mod processor;
pub mod response;

pub use error::ChatError;
pub use faq::RELEVANCE_THRESHOLD;
pub use parser::{Intent, ESCALATION_TRIGGERS};
pub use processor::{QueryProcessor, ESCALATION_REASON};
