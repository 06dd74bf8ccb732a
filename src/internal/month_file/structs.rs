pub mod download_config;
pub mod month_bound;

// 重导出公共类型
pub use download_config::{DownloadConfig, FILE_EXTENSION};
pub use month_bound::last_month;
