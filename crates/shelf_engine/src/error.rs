use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanogramError>;

#[derive(Debug, Error)]
pub enum PlanogramError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Product {product_id} has no {dimension} in its details")]
    MissingDimension {
        product_id: String,
        dimension: &'static str,
    },

    #[error("Invalid footprint: width={width}, height={height}")]
    InvalidFootprint { width: f64, height: f64 },

    #[error("Failed to read file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for PlanogramError {
    fn from(err: toml::de::Error) -> Self {
        PlanogramError::Config(format!("TOML parse error: {}", err))
    }
}
