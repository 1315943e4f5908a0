use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("Invalid page size: {0} (must be positive)")]
    InvalidPageSize(u32),
    #[error("Invalid item {id}: {width}x{height} (dimensions must be positive)")]
    InvalidItem { id: u64, width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, PackError>;
