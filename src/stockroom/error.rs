use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    #[error("Duplicate product id: {0}")]
    DuplicateId(u32),

    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("No product ids left")]
    IdsExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl StockError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StockError::ProductNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
