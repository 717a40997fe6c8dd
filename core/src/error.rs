use thiserror::Error;

/// Errors from the loader collaborators (pool file, demand config).
///
/// The selection pass itself never fails: data scarcity degrades with a
/// warning, and a structurally valid pool is a hard precondition enforced
/// here, at load time, before selection runs.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type QuizResult<T> = Result<T, QuizError>;
