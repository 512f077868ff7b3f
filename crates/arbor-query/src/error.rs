use thiserror::Error as ThisError;

/// Errors surfaced by the regex-based matchers.
///
/// Match absence is never an error; every matcher reports "no hit" as
/// `None`. The only failure mode is the regex collaborator rejecting a
/// pattern (at compilation) or aborting a match (backtrack limit), and both
/// are propagated to the caller unchanged.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("regex error: {0}")]
    Regex(#[from] fancy_regex::Error),
}
