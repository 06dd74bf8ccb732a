pub mod download_error;
pub mod monthly_downloader;

// 重导出公共类型
pub use download_error::{DownloadError, FetchError};
pub use monthly_downloader::MonthlyDownloader;
