use swconfig::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyledError {
    #[error("unknown element: {0}")]
    UnknownElement(String),

    #[error("invalid element name: {0:?}")]
    InvalidElementName(String),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("logger already initialized")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, StyledError>;
