use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElevationError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("expected {expected} elevations, got {actual}")]
    MalformedResponse { expected: usize, actual: usize },

    #[error("lookup superseded by a newer request")]
    Superseded,
}
