use std::path::PathBuf;

/// 本地与远程文件统一使用的扩展名。
pub const FILE_EXTENSION: &str = "parquet";

/// 一次批量下载的配置，构造后不再修改。
///
/// 文件名格式固定为 `{base_file_name}_{year}-{MM}.parquet`，下游按此格式读取，不可随意改动。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    /// 远程目录地址，如 `https://host/trip-data`
    pub base_url: String,
    pub year: i32,
    /// 本地保存目录
    pub data_dir: PathBuf,
    /// 文件名前缀，如 `yellow_tripdata`
    pub base_file_name: String,
}

impl DownloadConfig {
    pub fn new(
        base_url: impl Into<String>,
        year: i32,
        data_dir: impl Into<PathBuf>,
        base_file_name: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            year,
            data_dir: data_dir.into(),
            base_file_name: base_file_name.into(),
        }
    }

    /// 某月的文件名。不校验月份范围，调用方应传入 1..=12。
    pub fn file_name(&self, month: u32) -> String {
        format!(
            "{}_{}-{:02}.{}",
            self.base_file_name, self.year, month, FILE_EXTENSION
        )
    }

    /// 某月的本地路径：`data_dir / file_name(month)`
    pub fn file_path(&self, month: u32) -> PathBuf {
        self.data_dir.join(self.file_name(month))
    }

    /// 某月的远程地址：`{base_url}/{file_name(month)}`，base_url 末尾的 `/` 不会重复。
    pub fn file_url(&self, month: u32) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.file_name(month)
        )
    }
}
