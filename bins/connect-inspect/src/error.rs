#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error("read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("{0}")]
    Model(#[from] connect_model::ModelError),

    #[error("render: {0}")]
    Render(#[from] serde_json::Error),
}
