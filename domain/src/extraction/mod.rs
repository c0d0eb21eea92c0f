//! Query extraction pipeline.
//!
//! Turns free-form model output into exactly one terminated statement:
//!
//! ```text
//! raw text ─► ResponseCleaner ─► (fenced block | line scanner | fallback)
//!                               ─► normalize ─► validate
//! ```
//!
//! Every function here is pure and synchronous over `&str`, so the whole
//! pipeline can be called from any thread without coordination.

pub mod cleaner;
pub mod fenced;
pub mod normalize;
pub mod query;
pub mod scanner;
pub mod validator;

pub use cleaner::{ExtractionPath, FallbackPolicy, ResponseCleaner, clean};
pub use fenced::{extract_fenced, fenced_block};
pub use normalize::{normalize, normalize_for, normalize_with};
pub use query::ExtractedQuery;
pub use scanner::{LineClass, LineScanner, scan};
pub use validator::{precheck_raw, validate, validate_for};
