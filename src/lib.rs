/// 内部实现模块
mod internal;


/// 月度文件命名与月份上界
pub mod month_file {
    use crate::internal;
    pub use internal::month_file::structs::*;
}

/// 当前日期来源，测试中可替换为固定日期
pub mod clock {
    use crate::internal;
    pub use internal::clock::*;
}

pub mod downloader {
    use crate::internal;
    // 下载器与错误类型
    pub use internal::downloader::structs::*;
    // HTTP 拉流接口及其默认实现
    pub use internal::downloader::impl_traits::*;
    pub use internal::downloader::traits::*;
}

/// 命令行入口，供 `main.rs` 使用
pub mod entrance {
    use crate::internal;
    pub use internal::entrance::cli::*;
    pub use internal::entrance::logging::*;
}
