use ando_core::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
