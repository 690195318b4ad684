//! Marquee Search - Query-time catalog filtering
//!
//! Provides the title filter over the immutable catalog used by the
//! search view. Matching is a normalized substring scan; the matcher
//! seam allows a precomputed index to replace the scan at larger
//! catalog scale without changing the observable semantics.

pub mod filter;
pub mod service;

// Re-export main types
pub use filter::{SubstringFilter, TitleFilter, normalize};
pub use service::CatalogSearch;
