use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;

use crate::internal::downloader::structs::download_error::FetchError;
use crate::internal::downloader::traits::fetch_client::{ByteStream, FetchClient};

/// 默认超时（30 秒）：约束建连与两次读之间的停顿，不限制整个传输的总时长。
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// 基于 reqwest 的默认拉流实现。
#[derive(Debug, Clone)]
pub struct ReqwestFetchClient {
    client: Client, // 内部是Arc，clone 很便宜
}

impl ReqwestFetchClient {
    /// 使用默认 30 秒超时创建客户端
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// 复用外部已配置好的 Client（代理、证书等由调用方负责）
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FetchClient for ReqwestFetchClient {
    async fn get_stream(&self, url: &str) -> Result<ByteStream, FetchError> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let stream = resp
            .bytes_stream()
            .map(|chunk| chunk.map_err(FetchError::from))
            .boxed();

        Ok(stream)
    }
}
