use std::path::PathBuf;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use url::Url;

use crate::internal::clock::{Clock, SystemClock};
use crate::internal::downloader::structs::MonthlyDownloader;
use crate::internal::month_file::structs::DownloadConfig;

use super::logging::LogFormat;

pub const DEFAULT_BASE_URL: &str = "https://d37ci6vzurychx.cloudfront.net/trip-data";
pub const DEFAULT_DATA_DIR: &str = "./data/raw";
pub const DEFAULT_FILE_PREFIX: &str = "yellow_tripdata";

/// 按月下载 parquet 数据文件到本地目录，已存在的文件会跳过
#[derive(Debug, Clone, Parser)]
#[command(name = "tripdata_dl", version)]
pub struct Cli {
    /// 远程目录地址
    #[arg(long, default_value = DEFAULT_BASE_URL, value_parser = parse_base_url)]
    pub base_url: Url,

    /// 下载年份，默认当前年份
    #[arg(long)]
    pub year: Option<i32>,

    /// 本地保存目录，不存在时自动创建
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// 文件名前缀
    #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
    pub prefix: String,

    /// 只下载指定月份（1-12），默认下载全年可用月份
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// 日志级别，EnvFilter 语法，如 `info`、`tripdata_dl=debug`
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

fn parse_base_url(s: &str) -> Result<Url, String> {
    let url = Url::parse(s).map_err(|e| e.to_string())?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("不支持的协议: {}", other)),
    }
}

impl Cli {
    /// 由命令行参数构造下载配置；未指定年份时取 `clock` 的当前年份。
    pub fn build_config(&self, clock: &dyn Clock) -> DownloadConfig {
        let year = self.year.unwrap_or_else(|| clock.today().year());

        DownloadConfig::new(
            self.base_url.as_str(),
            year,
            self.data_dir.clone(),
            self.prefix.clone(),
        )
    }

    /// 用给定下载器执行：指定了 `--month` 时只下载该月，否则下载全年可用月份。
    pub async fn execute(&self, downloader: &MonthlyDownloader) -> anyhow::Result<Vec<PathBuf>> {
        let files: Vec<PathBuf> = match self.month {
            Some(month) => downloader
                .download_month(month)
                .await
                .with_context(|| format!("下载 {} 月失败", month))?
                .into_iter()
                .collect(),
            None => downloader
                .download_all_available()
                .await
                .context("批量下载中止")?,
        };

        Ok(files)
    }

    /// 二进制入口：默认 HTTP 客户端与系统日期。
    pub async fn run(&self) -> anyhow::Result<Vec<PathBuf>> {
        let config = self.build_config(&SystemClock);
        let data_dir = config.data_dir.clone();

        let downloader = MonthlyDownloader::new(config)
            .with_context(|| format!("无法初始化下载目录 {}", data_dir.display()))?;

        self.execute(&downloader).await
    }
}
