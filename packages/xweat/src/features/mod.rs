//! Feature modules
//!
//! Data flows strictly downward:
//!
//! ```text
//! word lists → vocab (index + embedding matrix)
//!            → similarity (N × N matrix, computed once)
//!            → association (per-word / differential / effect size)
//!            → permutation (p-value)
//! ```

pub mod association;
pub mod permutation;
pub mod similarity;
pub mod vocab;
