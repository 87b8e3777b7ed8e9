// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod extract;
pub mod fallback;
pub mod matcher;
pub mod record;
pub mod taxonomy;

// ---- Re-exports for stable public API ----
pub use crate::api::create_router;
pub use crate::extract::Extractor;
pub use crate::fallback::{FallbackRule, FallbackTable};
pub use crate::matcher::CategoryMatcher;
pub use crate::record::{ExtractionOutcome, ExtractionRecord};
pub use crate::taxonomy::Taxonomy;
