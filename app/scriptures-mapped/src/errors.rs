use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScripError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("url parse error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("metadata error: {0}")]
    Library(#[from] library::LibraryError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("file system error: {0}")]
    Fs(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("html rewrite error: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),
    #[error("config dir not found")]
    ConfigDir,
    #[error("log file not found")]
    LogFileNotFound,
}

pub(crate) type ScripResult<T> = Result<T, ScripError>;
