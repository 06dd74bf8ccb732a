//! 月度文件下载器
//!
//! 按月从远程目录拉取 `{prefix}_{year}-{MM}.parquet`，保存到本地目录。
//!
//! ## 功能特性
//!
//! - **幂等**：本地已存在的文件直接返回路径，不发请求，重复执行整批下载是安全的
//! - **月份上界**：往年下载 1..=12 月；当年只下载到当前月
//! - **失败隔离**：单月网络失败只记录日志并跳过，不影响其他月份
//! - **流式写盘**：响应体边收边写，不整体读入内存
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use tripdata_dl::downloader::MonthlyDownloader;
//! # use tripdata_dl::month_file::DownloadConfig;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DownloadConfig::new(
//!     "https://d37ci6vzurychx.cloudfront.net/trip-data",
//!     2024,
//!     "./data/raw",
//!     "yellow_tripdata",
//! );
//!
//! // 构造时即创建本地目录
//! let downloader = MonthlyDownloader::new(config)?;
//!
//! // 单月
//! let march = downloader.download_month(3).await?;
//!
//! // 全年可用月份，返回成功（含已存在）的路径，按月份升序
//! let files = downloader.download_all_available().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## 错误处理
//!
//! - 网络失败（连接、超时、非 2xx、读流中断）：当月返回 `Ok(None)`，整批继续
//! - 文件系统失败（建目录、建文件、写入、刷新）：返回 `Err(DownloadError)`，整批中止
//!
//! 中途被打断的下载会在本地留下不完整的文件，下次运行会被当作「已存在」跳过，不做校验。

mod constants;
mod single_download;

use std::path::PathBuf;

use tracing::{error, info};

use crate::internal::clock::{Clock, SystemClock};
use crate::internal::downloader::impl_traits::impl_fetch_client::ReqwestFetchClient;
use crate::internal::downloader::traits::fetch_client::FetchClient;
use crate::internal::month_file::structs::{last_month, DownloadConfig};

use super::download_error::DownloadError;
use single_download::{save_stream, WriteOutcome};

/// 月度文件下载器
///
/// 独占一份 [`DownloadConfig`]；HTTP 实现与日期来源可通过 `with_client` / `with_clock` 替换。
pub struct MonthlyDownloader {
    pub(crate) config: DownloadConfig,
    pub(crate) client: Box<dyn FetchClient>,
    pub(crate) clock: Box<dyn Clock>,
}

impl MonthlyDownloader {
    /// 使用默认 reqwest 客户端与系统日期创建下载器，并创建本地目录（含父目录）。
    pub fn new(config: DownloadConfig) -> Result<Self, DownloadError> {
        let client = ReqwestFetchClient::new().map_err(DownloadError::BuildClient)?;
        Self::with_parts(config, client, SystemClock)
    }

    /// 指定拉流实现与日期来源创建下载器；同样会先创建本地目录。
    pub fn with_parts(
        config: DownloadConfig,
        client: impl FetchClient + 'static,
        clock: impl Clock + 'static,
    ) -> Result<Self, DownloadError> {
        std::fs::create_dir_all(&config.data_dir).map_err(|source| {
            DownloadError::CreateDir {
                path: config.data_dir.clone(),
                source,
            }
        })?;

        Ok(Self {
            config,
            client: Box::new(client),
            clock: Box::new(clock),
        })
    }

    /// 替换拉流实现
    pub fn with_client(mut self, client: impl FetchClient + 'static) -> Self {
        self.client = Box::new(client);
        self
    }

    /// 替换日期来源
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &DownloadConfig {
        &self.config
    }

    pub fn file_name(&self, month: u32) -> String {
        self.config.file_name(month)
    }

    pub fn file_path(&self, month: u32) -> PathBuf {
        self.config.file_path(month)
    }

    /// 本地是否已有该月文件（只看是否存在，不看内容）
    pub fn file_exists(&self, month: u32) -> bool {
        self.file_path(month).exists()
    }

    /// 下载单月文件。
    ///
    /// - `Ok(Some(path))`：已存在或刚下载完成
    /// - `Ok(None)`：网络失败，已记录错误日志
    /// - `Err(_)`：本地写盘失败
    pub async fn download_month(&self, month: u32) -> Result<Option<PathBuf>, DownloadError> {
        let file_path = self.file_path(month);

        if self.file_exists(month) {
            info!("文件 {} 已存在，跳过下载", file_path.display());
            return Ok(Some(file_path));
        }

        let file_url = self.config.file_url(month);
        info!("开始下载 {}", file_url);

        let stream = match self.client.get_stream(&file_url).await {
            Ok(stream) => stream,
            Err(err) => {
                error!("下载 {} 失败: {}", file_url, err);
                return Ok(None);
            }
        };

        match save_stream(stream, &file_path).await? {
            WriteOutcome::Completed(bytes) => {
                info!("文件已下载: {} ({} 字节)", file_path.display(), bytes);
                Ok(Some(file_path))
            }
            WriteOutcome::Interrupted(err) => {
                error!("下载 {} 失败: {}", file_url, err);
                Ok(None)
            }
        }
    }

    /// 下载配置年份中所有可用月份，返回成功（含已存在）的路径，按月份升序。
    ///
    /// 失败的月份不重试，也不出现在结果中；调用方可对比结果长度判断是否有遗漏。
    pub async fn download_all_available(&self) -> Result<Vec<PathBuf>, DownloadError> {
        let last = last_month(self.config.year, self.clock.today());
        let mut files_downloaded = Vec::new();

        for month in 1..=last {
            if let Some(path) = self.download_month(month).await? {
                files_downloaded.push(path);
            }
        }

        info!("{} 个文件已下载或已存在", files_downloaded.len());

        Ok(files_downloaded)
    }
}
