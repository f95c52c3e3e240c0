use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("Invalid pet name: {0:?}")]
    InvalidName(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No pet has been adopted yet")]
    NotAdopted,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PetError>;
