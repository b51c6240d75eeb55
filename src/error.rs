use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Could not read workbook: {0}")]
    WorkbookRead(String),

    #[error("Invalid solutions workbook: {0}")]
    InvalidWorkbook(String),

    #[error("Excel generation error: {0}")]
    ExcelGeneration(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraderError>;
