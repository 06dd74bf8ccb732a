//! 拉流接口：下载器只依赖本 trait 发起 GET，便于替换 HTTP 实现或在测试中计数、注入失败。

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;

use crate::internal::downloader::structs::download_error::FetchError;

/// 响应体字节流，块边界由实现决定。
pub type ByteStream = BoxStream<'static, Result<Bytes, FetchError>>;

#[async_trait]
pub trait FetchClient: Send + Sync {
    /// 对 `url` 发起 GET。非 2xx 状态必须返回 `Err(FetchError::Status)`，不能把错误页当作文件内容。
    async fn get_stream(&self, url: &str) -> Result<ByteStream, FetchError>;
}
