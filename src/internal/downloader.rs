//! 下载器领域模块：按月拉取远程文件并保存到本地目录，已存在的文件直接跳过。
//!
//! 使用方式：`MonthlyDownloader::new(config)?.download_all_available().await`
//! 对外导出以 [`crate::downloader`] 为准，此处仅做模块划分，不重复 pub use。

pub mod impl_traits;
pub mod structs;
pub mod traits;
