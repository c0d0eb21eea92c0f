//! Prompt domain
//!
//! System prompts sent with every query-generation request.

mod template;

pub use template::{PromptStyle, QueryPromptTemplate};
