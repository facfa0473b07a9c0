//! Candidate-to-role matching for sift.
//!
//! The matching core turns resumes and a role profile into an ordered list of
//! [`MatchResult`]s:
//!
//! 1. [`normalize`] cleans resume text
//! 2. [`LexicalIndex`] fits TF-IDF vectors over the candidate corpus and scores the role
//!    query against every resume by cosine similarity
//! 3. [`explain_fit`] lists required skills found and missing, plus other alignments
//! 4. [`RankingPipeline`] ties these together and decides the next step per candidate
//!
//! Everything here is pure and synchronous. A fresh index is built for every ranking call.

#![warn(missing_docs)]

mod error;
mod explain;
mod index;
mod rank;
mod text;

pub use error::MatchError;
pub use explain::{Explanation, explain_fit};
pub use index::{IndexOptions, LexicalIndex};
pub use rank::{INVITE_TO_INTERVIEW, MatchResult, NEEDS_FOLLOW_UP, RankingPipeline, decide_next_steps};
pub use text::{analyze, normalize};
