//! Keyword-based security relevance flag and the join stage that attaches
//! it to classified pull requests.

mod classify;
mod join;

pub use classify::{classify, SECURITY_KEYWORDS};
pub use join::{run_security, OUTPUT_HEADERS, STAGE_LABEL};
