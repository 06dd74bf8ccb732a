//! 写盘常量。

/// 写入本地文件时的缓冲大小（8KB），响应流按此粒度落盘，与网络块边界无关。
pub(super) const WRITE_BUFFER_SIZE: usize = 8192;
