//! Index structures. The keyword index is built incrementally, one document
//! merge at a time, and is read-only while queries run.

pub mod keyword_index;

pub use keyword_index::KeywordIndex;
