use thiserror::Error;

#[derive(Error, Debug)]
pub enum FresnelError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("invalid link frequency: {0} GHz")]
    InvalidFrequency(f64),

    #[error("degenerate path between coincident endpoints")]
    InvalidPath,

    #[error("projection undefined near the poles (center latitude {0}°)")]
    ProjectionSingularity(f64),
}
