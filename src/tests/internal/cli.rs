//! 命令行参数解析与执行。

use std::path::PathBuf;

use clap::Parser;

use crate::entrance::{Cli, LogFormat, DEFAULT_BASE_URL};
use crate::tests::{fixed_clock, mock_downloader, month_url, MockFetchClient};

#[test]
fn defaults_match_original_entry_point() {
    let cli = Cli::try_parse_from(["tripdata_dl"]).unwrap();

    assert_eq!(cli.base_url.as_str(), DEFAULT_BASE_URL);
    assert_eq!(cli.year, None);
    assert_eq!(cli.data_dir, PathBuf::from("./data/raw"));
    assert_eq!(cli.prefix, "yellow_tripdata");
    assert_eq!(cli.month, None);
    assert_eq!(cli.log_format, LogFormat::Text);

    // 未指定年份时取当前年份
    let config = cli.build_config(&fixed_clock(2025, 7, 4));
    assert_eq!(config.year, 2025);
    assert_eq!(
        config.file_url(1),
        "https://d37ci6vzurychx.cloudfront.net/trip-data/yellow_tripdata_2025-01.parquet"
    );
}

#[test]
fn explicit_arguments_override_defaults() {
    let cli = Cli::try_parse_from([
        "tripdata_dl",
        "--base-url",
        "http://localhost:8080/files/",
        "--year",
        "2021",
        "--data-dir",
        "/tmp/green",
        "--prefix",
        "green_tripdata",
        "--month",
        "12",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert_eq!(cli.month, Some(12));
    assert_eq!(cli.log_format, LogFormat::Json);

    let config = cli.build_config(&fixed_clock(2025, 7, 4));
    assert_eq!(config.year, 2021);
    assert_eq!(config.data_dir, PathBuf::from("/tmp/green"));
    assert_eq!(
        config.file_url(12),
        "http://localhost:8080/files/green_tripdata_2021-12.parquet"
    );
}

#[test]
fn invalid_arguments_are_rejected() {
    assert!(Cli::try_parse_from(["tripdata_dl", "--month", "13"]).is_err());
    assert!(Cli::try_parse_from(["tripdata_dl", "--month", "0"]).is_err());
    assert!(Cli::try_parse_from(["tripdata_dl", "--base-url", "ftp://host/data"]).is_err());
    assert!(Cli::try_parse_from(["tripdata_dl", "--base-url", "not a url"]).is_err());
}

#[tokio::test]
async fn execute_single_month_only_requests_that_month() {
    let dir = tempfile::tempdir().unwrap();
    let client = MockFetchClient::new();
    client.serve(month_url(2024, 2), b"feb");

    let cli = Cli::try_parse_from(["tripdata_dl", "--month", "2"]).unwrap();
    let downloader = mock_downloader(dir.path(), 2024, &client, fixed_clock(2024, 12, 1));

    let files = cli.execute(&downloader).await.unwrap();

    assert_eq!(files, vec![downloader.file_path(2)]);
    assert_eq!(client.requests(), vec![month_url(2024, 2)]);
}

#[tokio::test]
async fn execute_single_month_failure_yields_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let client = MockFetchClient::new();

    let cli = Cli::try_parse_from(["tripdata_dl", "--month", "5"]).unwrap();
    let downloader = mock_downloader(dir.path(), 2024, &client, fixed_clock(2024, 12, 1));

    assert!(cli.execute(&downloader).await.unwrap().is_empty());
}

#[tokio::test]
async fn execute_without_month_runs_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let client = MockFetchClient::new();
    client.serve(month_url(2024, 1), b"jan");
    client.serve(month_url(2024, 2), b"feb");

    let cli = Cli::try_parse_from(["tripdata_dl"]).unwrap();
    let downloader = mock_downloader(dir.path(), 2024, &client, fixed_clock(2024, 2, 29));

    let files = cli.execute(&downloader).await.unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(client.request_count(), 2);
}
