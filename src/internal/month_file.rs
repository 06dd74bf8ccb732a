//! 月度文件领域模块：由配置推导每个月的文件名、本地路径与远程地址。
//!
//! 对外导出以 [`crate::month_file`] 为准，此处仅做模块划分。

pub mod structs;
