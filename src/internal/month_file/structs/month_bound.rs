use chrono::{Datelike, NaiveDate};

/// 批量下载的最后一个月（含）。
///
/// 往年全部 12 个月；当年（以及未来年份）只到当前月，尚未开始的月份不请求。
pub fn last_month(year: i32, today: NaiveDate) -> u32 {
    if year < today.year() {
        12
    } else {
        today.month()
    }
}
