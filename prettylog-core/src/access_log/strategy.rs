use super::event::LogEvent;
use super::pretty::PrettyLogger;
use super::structured::StructuredLogger;
use crate::config::LoggerConfig;
use crate::ctx::{RequestCtx, ResponseCtx};
use crate::handler::{Handler, HandlerError, Middleware};
use crate::logging::{LogMode, default_log_mode};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// The access logging strategy, fixed for the lifetime of a handler chain.
#[derive(Clone)]
pub enum RequestLogger {
    Pretty(PrettyLogger),
    Structured(StructuredLogger),
    Off,
}

impl RequestLogger {
    /// Builds the strategy named by `mode`, or by `cfg.mode`, falling back
    /// to [`default_log_mode`].
    pub fn from_config(cfg: &LoggerConfig, mode: Option<LogMode>) -> Self {
        let mode = mode.or(cfg.mode).unwrap_or_else(default_log_mode);
        debug!(?mode, sink = ?cfg.sink, "selected access log strategy");

        match mode {
            LogMode::Pretty => Self::Pretty(PrettyLogger::new(cfg.sink.build(cfg.level))),
            LogMode::Structured => Self::Structured(StructuredLogger::new(cfg.level)),
            LogMode::Off => Self::Off,
        }
    }

    pub fn mode(&self) -> LogMode {
        match self {
            Self::Pretty(_) => LogMode::Pretty,
            Self::Structured(_) => LogMode::Structured,
            Self::Off => LogMode::Off,
        }
    }

    fn now(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Pretty(l) => Some(l.now()),
            Self::Structured(l) => Some(l.now()),
            Self::Off => None,
        }
    }

    fn log(&self, event: &LogEvent) {
        match self {
            Self::Pretty(l) => l.log(event),
            Self::Structured(l) => l.log(event),
            Self::Off => {}
        }
    }
}

impl Middleware for RequestLogger {
    fn wrap(&self, next: Arc<dyn Handler>) -> Arc<dyn Handler> {
        if matches!(self, Self::Off) {
            return next;
        }

        Arc::new(AccessLogged {
            next,
            logger: self.clone(),
        })
    }
}

struct AccessLogged {
    next: Arc<dyn Handler>,
    logger: RequestLogger,
}

#[async_trait]
impl Handler for AccessLogged {
    async fn handle(&self, req: &RequestCtx, res: &mut ResponseCtx) -> Result<(), HandlerError> {
        let start = Instant::now();
        let result = self.next.handle(req, res).await;

        if let Err(err) = &result {
            err.write_to(res);
        }

        if let Some(timestamp) = self.logger.now() {
            let event = LogEvent::capture(timestamp, req, res, start.elapsed());
            self.logger.log(&event);
        }

        result
    }
}
