use thiserror::Error;

use crate::model::StatKey;

/// Errors raised while fetching, scraping and summarising box scores.
#[derive(Error, Debug)]
pub enum ScoresError {
    #[error("request to {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("malformed page: {0}")]
    Parse(String),

    #[error("incomplete game at {url}: expected 2 team box scores, found {found}")]
    IncompleteGame { url: String, found: usize },

    #[error("missing stat '{0}'")]
    MissingStat(StatKey),

    #[error("{0}")]
    Usage(String),
}

impl ScoresError {
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        ScoresError::Parse(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ScoresError>;
