//! 单文件流式下载：把响应流写入目标文件。

use std::path::Path;

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::internal::downloader::structs::download_error::{DownloadError, FetchError};
use crate::internal::downloader::traits::fetch_client::ByteStream;

use super::constants::WRITE_BUFFER_SIZE;

/// 一次写盘的结果；文件系统错误不在此列，直接以 `Err` 返回。
#[derive(Debug)]
pub(super) enum WriteOutcome {
    /// 响应流已完整写入，值为总字节数
    Completed(u64),
    /// 读流中途失败；已收到的部分留在磁盘上，不做清理
    Interrupted(FetchError),
}

/// 以覆盖方式创建 `path` 并写入整个响应流。
pub(super) async fn save_stream(
    mut stream: ByteStream,
    path: &Path,
) -> Result<WriteOutcome, DownloadError> {
    let file = File::create(path)
        .await
        .map_err(|source| DownloadError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);
    let mut bytes_done: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = match chunk_result {
            Ok(chunk) => chunk,
            Err(err) => {
                writer.flush().await.map_err(DownloadError::FlushFile)?;
                return Ok(WriteOutcome::Interrupted(err));
            }
        };

        writer
            .write_all(&chunk)
            .await
            .map_err(DownloadError::WriteFile)?;
        bytes_done += chunk.len() as u64;
    }

    writer.flush().await.map_err(DownloadError::FlushFile)?;

    Ok(WriteOutcome::Completed(bytes_done))
}
