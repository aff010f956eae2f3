use chrono::{NaiveTime, Weekday};

use super::error::{Result, ServerError};
use crate::booking::BookingPolicy;

/// 服务器配置 - 预订服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 5001 | HTTP 服务端口 |
/// | DATABASE_URL | sqlite:reservations.db | SQLite 数据库地址 |
/// | ENVIRONMENT | development | 运行环境 |
/// | MAX_CONNECTIONS | 256 | 最大并发请求数 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时时间(毫秒) |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志文件目录 (可选) |
/// | OPENING_TIME | 10:30 | 最早可预订时间 |
/// | LAST_SEATING_TIME | 21:30 | 最晚可预订时间 |
/// | CLOSED_WEEKDAY | tue | 休息日 (none 表示不休息) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=sqlite::memory: HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 连接 URL
    pub database_url: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 最大并发请求数
    pub max_connections: usize,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 预订时间规则
    pub booking: BookingPolicy,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 服务器参数未设置或无法解析时使用默认值；预订时间规则设置错误时返回
    /// [`ServerError::Config`]，不静默回退
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:reservations.db".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            max_connections: std::env::var("MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(256),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            booking: booking_policy(
                std::env::var("OPENING_TIME").ok().as_deref(),
                std::env::var("LAST_SEATING_TIME").ok().as_deref(),
                std::env::var("CLOSED_WEEKDAY").ok().as_deref(),
            )?,
        })
    }

    /// 测试用配置: 内存数据库, 随机端口
    pub fn for_tests() -> Self {
        Self {
            http_host: "127.0.0.1".into(),
            http_port: 0,
            database_url: "sqlite::memory:".into(),
            environment: "test".into(),
            max_connections: 64,
            shutdown_timeout_ms: 1000,
            log_level: "debug".into(),
            log_dir: None,
            booking: BookingPolicy::default(),
        }
    }

    /// 监听地址 (host:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// 预订时间规则: 未设置的项使用 [`BookingPolicy::default`]
fn booking_policy(
    opening: Option<&str>,
    last_seating: Option<&str>,
    closed: Option<&str>,
) -> Result<BookingPolicy> {
    let defaults = BookingPolicy::default();
    let policy = BookingPolicy {
        opening_time: match opening {
            Some(value) => parse_hhmm("OPENING_TIME", value)?,
            None => defaults.opening_time,
        },
        last_seating_time: match last_seating {
            Some(value) => parse_hhmm("LAST_SEATING_TIME", value)?,
            None => defaults.last_seating_time,
        },
        closed_weekday: match closed {
            Some(value) => parse_closed_weekday(value)?,
            None => defaults.closed_weekday,
        },
    };

    if policy.opening_time > policy.last_seating_time {
        return Err(ServerError::Config(format!(
            "OPENING_TIME ({}) is after LAST_SEATING_TIME ({})",
            policy.opening_time.format("%H:%M"),
            policy.last_seating_time.format("%H:%M")
        )));
    }
    Ok(policy)
}

fn parse_hhmm(name: &str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|e| ServerError::Config(format!("invalid {name} '{value}': {e}")))
}

/// `none` disables the closed day; anything else must name a weekday (`tue`, `Tuesday`).
fn parse_closed_weekday(value: &str) -> Result<Option<Weekday>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") || value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<Weekday>()
        .map(Some)
        .map_err(|_| ServerError::Config(format!("invalid CLOSED_WEEKDAY '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(
            parse_hhmm("OPENING_TIME", "09:15").unwrap(),
            NaiveTime::from_hms_opt(9, 15, 0).unwrap()
        );
        let err = parse_hhmm("OPENING_TIME", "late").unwrap_err();
        assert!(err.to_string().contains("invalid OPENING_TIME 'late'"));
    }

    #[test]
    fn test_parse_closed_weekday() {
        assert_eq!(parse_closed_weekday("none").unwrap(), None);
        assert_eq!(parse_closed_weekday("tue").unwrap(), Some(Weekday::Tue));
        assert_eq!(parse_closed_weekday("Monday").unwrap(), Some(Weekday::Mon));
        assert!(matches!(
            parse_closed_weekday("someday"),
            Err(ServerError::Config(_))
        ));
    }

    #[test]
    fn test_booking_policy_from_settings() {
        assert_eq!(booking_policy(None, None, None).unwrap(), BookingPolicy::default());

        let policy = booking_policy(Some("12:00"), Some("20:00"), Some("none")).unwrap();
        assert_eq!(policy.opening_time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(policy.closed_weekday, None);

        // 单点营业时间允许
        assert!(booking_policy(Some("18:00"), Some("18:00"), None).is_ok());

        let err = booking_policy(Some("22:00"), None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "配置错误: OPENING_TIME (22:00) is after LAST_SEATING_TIME (21:30)"
        );
        assert!(booking_policy(None, Some("9pm"), None).is_err());
        assert!(booking_policy(None, None, Some("someday")).is_err());
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::for_tests();
        assert_eq!(config.bind_addr(), "127.0.0.1:0");
        assert!(!config.is_production());
    }
}
