#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot unavailable: {0}")]
    SnapshotUnavailable(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    #[allow(dead_code)]
    pub(crate) fn snapshot_unavailable<S: Into<String>>(msg: S) -> Self {
        Error::SnapshotUnavailable(msg.into())
    }

    #[allow(dead_code)]
    pub(crate) fn invalid_data<S: Into<String>>(msg: S) -> Self {
        Error::InvalidData(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
