//! 日志基础设施

use std::io;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志系统
    ///
    /// 控制台始终输出；`file_output` 打开时另外写入按天滚动的文件。
    /// `RUST_LOG` 存在时覆盖配置中的级别。返回的 guard 需要在 main 中一直持有，
    /// 否则文件日志会在 guard 释放时停止刷新。
    pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

        let console = fmt::layer().with_writer(io::stdout).with_ansi(true);

        if !config.file_output {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .try_init()?;
            return Ok(None);
        }

        std::fs::create_dir_all(&config.log_dir)?;
        let file_appender = rolling::daily(&config.log_dir, &config.file_prefix);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(false),
            )
            .try_init()?;

        Ok(Some(guard))
    }
}
