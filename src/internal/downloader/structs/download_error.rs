//! 下载相关错误类型。
//!
//! 两类错误分开处理：
//! - [`FetchError`]：网络层失败（连接、超时、非 2xx、读流中断），只影响当月，记录后跳过；
//! - [`DownloadError`]：本地文件系统失败，向上传播并中止整批下载。

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器返回状态码 {0}")]
    Status(StatusCode),

    /// 非 reqwest 实现（如测试替身）报告的读流错误。
    #[error("读取响应流失败: {0}")]
    Stream(String),
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("初始化 HTTP 客户端失败: {0}")]
    BuildClient(#[source] reqwest::Error),

    #[error("创建目录 {} 失败: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("创建文件 {} 失败: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("写入文件失败: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("刷新文件失败: {0}")]
    FlushFile(#[source] std::io::Error),
}
