#[allow(clippy::single_component_path_imports)]
use serde_yaml;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("report is missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("failed to read file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write report file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
    #[error("failed to deserialize JSON: {0}")]
    JsonDeserialization(serde_json::Error),
    #[error("failed to serialize report: {0}")]
    Serialization(serde_json::Error),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;
