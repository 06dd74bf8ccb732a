//! 月度数据文件下载器。
//!
//! 下载指定年份（默认今年）所有可用月份的 parquet 文件到本地目录。

use clap::Parser;
use tripdata_dl::entrance::{init_tracing, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_format);

    cli.run().await?;

    Ok(())
}
