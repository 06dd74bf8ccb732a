//! 日期来源。
//!
//! 下载器只在两处读取「今天」：命令行缺省年份、批量下载时的月份上界。
//! 统一经由 [`Clock`] 获取，测试用 [`FixedClock`] 固定日期。

use chrono::{Local, NaiveDate};

/// 返回当前日历日期。
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// 系统本地时区的当前日期。
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定日期
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
