use crate::catalog::ViewId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown {view} component: {id}")]
    UnknownComponent { view: ViewId, id: String },

    #[error("Unknown view: {name}")]
    UnknownView { name: String },

    #[error("Unknown theme mode: {name}")]
    UnknownThemeMode { name: String },

    #[error("Invalid viewer config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("Invalid viewer config YAML: {message}")]
    ConfigYaml { message: String },
}
