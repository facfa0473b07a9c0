//! sift: academic candidate screening
//!
//! sift ranks a folder of resumes against an academic role profile. Resumes and the role's
//! skill, research and teaching terms are compared with TF-IDF cosine similarity, and every
//! match carries keyword-based strengths, risks and a suggested next step. Results are written
//! to a `report.json` alongside a development plan for each candidate.

#![warn(missing_docs)]

pub mod cli;
