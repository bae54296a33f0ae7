use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Arguments {first} and {second} cannot be used together")]
    ConflictingArguments { first: String, second: String },

    #[error(transparent)]
    Staging(#[from] nftprep::Error),
}
