use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("could not read hpgl file")]
    Io(#[from] std::io::Error),
    #[error("hpgl file {0:?} has no line to read")]
    EmptyFile(PathBuf),
    #[error("malformed pen-down payload {payload:?}: invalid integer token {token:?}")]
    MalformedPayload { payload: String, token: String },
}
