//! 入口模块：命令行参数与日志初始化，仅供二进制使用。

pub mod cli;
pub mod logging;
