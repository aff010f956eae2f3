//! 时间工具函数
//!
//! 预订日期和时间都是餐厅本地时间，使用服务器本地时区。

use chrono::{Local, NaiveDate, NaiveDateTime};

/// 当前本地时间
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// 今天 (本地时区)
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
