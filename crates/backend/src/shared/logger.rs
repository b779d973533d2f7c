//! Логирование сервиса: консоль плюс файл `backend.log`, журнал HTTP-запросов

use crate::shared::config::{self, Config};
use crate::shared::format::format_thousands;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Уровень по умолчанию, если RUST_LOG не задан
const DEFAULT_FILTER: &str = "info";

pub fn init(config: &Config) -> anyhow::Result<()> {
    let log_dir = config::log_dir(config);
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}

/// Строка журнала: `   12ms |      1.024 | 200    GET /api/advertisers`
pub fn access_line(elapsed_ms: u128, bytes: usize, status: u16, method: &Method, path: &str) -> String {
    format!(
        "{:>5}ms | {:>10} | {} {:>6} {}",
        elapsed_ms,
        format_thousands(bytes as u64, '.'),
        status,
        method.as_str(),
        path
    )
}

/// Middleware: время ответа и размер тела для каждого запроса.
/// Ответы 4xx/5xx пишутся с уровнем warn.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (parts, body) = next.run(req).await.into_parts();
    let status = parts.status.as_u16();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("{} {} -> {} | body read failed: {}", method, path, status, e);
            return Response::from_parts(parts, Body::default());
        }
    };

    let line = access_line(started.elapsed().as_millis(), bytes.len(), status, &method, &path);
    if status < 400 {
        tracing::info!("{}", line);
    } else {
        tracing::warn!("{}", line);
    }

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_line() {
        let line = access_line(12, 1024, 422, &Method::POST, "/api/campaigns");
        assert_eq!(line, "   12ms |      1.024 | 422   POST /api/campaigns");
    }
}
