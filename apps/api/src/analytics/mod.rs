// Pure analytics over in-memory job records: chronological sort, status
// frequency, duplicate detection. No I/O, no logging, no mutation of input;
// persistence and fallbacks belong to the handlers that call in.

pub mod dedup;
pub mod frequency;
pub mod handlers;
pub mod models;
pub mod sample;
pub mod sorting;
