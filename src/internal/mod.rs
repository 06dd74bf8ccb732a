pub mod clock;
pub mod downloader;
pub mod entrance;
pub mod month_file;
