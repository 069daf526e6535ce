use thiserror::Error;

#[derive(Error, Debug)]
pub enum DpiError {
    #[error("dpi must be strictly positive, got {0}")]
    NotStrictlyPositive(f64),
}
