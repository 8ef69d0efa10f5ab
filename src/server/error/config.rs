use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set or is empty.
    ///
    /// `DATABASE_URL` and `DISCORD_PUBLIC_KEY` must be defined, either in the process
    /// environment or in a `.env` file next to the binary.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
