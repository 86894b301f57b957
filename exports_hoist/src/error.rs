use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HoistError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error(
        "the base entrypoint {entrypoint} is already hoisted; remove it from the base entrypoints in favor of the autogenerated '{entrypoint}'"
    )]
    StaleBaseEntry { entrypoint: String },
}
