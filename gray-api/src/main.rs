//! Gray Code Explorer REST API Server
//!
//! ## Environment Variables
//! - `GRAY_API_HOST`: Host to bind to (default: 127.0.0.1)
//! - `GRAY_API_PORT`: Port to listen on (default: 3000)
//! - `GRAY_API_MAX_BITS`: Largest bit width served (default: 12)
//! - `GRAY_API_KEYS`: Comma-separated list of valid API keys (empty = no auth)
//! - `GRAY_API_RATE_LIMIT`: Requests per second (default: 10)
//! - `GRAY_API_RATE_BURST`: Burst size (default: 20)
//! - `GRAY_API_NO_RATE_LIMIT`: Disable rate limiting (default: false)
//! - `GEMINI_API_KEY` / `API_KEY`: Assistant credential (empty = fallback answers)
//! - `GEMINI_MODEL`, `GEMINI_ENDPOINT`, `GEMINI_TIMEOUT_SECS`: Assistant tuning

use anyhow::Context;
use clap::Parser;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gray_api::middleware::{ApiKeyConfig, RateLimitConfig};
use gray_api::{AppState, DisplayLimits, build_app};
use gray_assistant::{AssistantClient, AssistantConfig};

#[derive(Parser)]
#[command(name = "gray-api")]
#[command(author = "SIL Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "REST API server for the Gray code explorer", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "GRAY_API_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000, env = "GRAY_API_PORT")]
    port: u16,

    /// Largest bit width served by table, sequence and disk endpoints
    #[arg(long, default_value_t = 12, env = "GRAY_API_MAX_BITS")]
    max_bits: u32,

    /// Table and sequence width used when a request doesn't name one
    #[arg(long, default_value_t = 4)]
    default_bits: u32,

    /// Disk width used when a request doesn't name one
    #[arg(long, default_value_t = 5)]
    default_disk_bits: u32,

    /// Comma-separated API keys; empty leaves the API open
    #[arg(long, default_value = "", env = "GRAY_API_KEYS", hide_env_values = true)]
    api_keys: String,

    /// Requests per second
    #[arg(long, default_value_t = 10, env = "GRAY_API_RATE_LIMIT")]
    rate_limit: u32,

    /// Burst size
    #[arg(long, default_value_t = 20, env = "GRAY_API_RATE_BURST")]
    rate_burst: u32,

    /// Enable CORS for all origins
    #[arg(long, default_value_t = false)]
    cors: bool,

    /// Disable rate limiting
    #[arg(long, default_value_t = false, env = "GRAY_API_NO_RATE_LIMIT")]
    no_rate_limit: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gray_api=info,gray_assistant=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let auth_config = Arc::new(ApiKeyConfig::from_keys(&args.api_keys));
    let rate_config = if args.no_rate_limit {
        RateLimitConfig::disabled()
    } else {
        RateLimitConfig::new(args.rate_limit, args.rate_burst)
    };

    let assistant = AssistantClient::new(AssistantConfig::from_env())
        .context("failed to build assistant client")?;
    let limits = DisplayLimits::new(args.max_bits, args.default_bits, args.default_disk_bits);
    let assistant_enabled = assistant.is_configured();
    let state = AppState::new(assistant, limits);

    let app = build_app(state, auth_config.clone(), rate_config, args.cors);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid address {}:{}", args.host, args.port))?;

    tracing::info!("Gray code API server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/docs", addr);
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  POST /api/convert    - Convert decimal / binary / Gray");
    tracing::info!("  GET  /api/table      - N-bit Gray code table");
    tracing::info!("  GET  /api/sequence   - N-bit Gray code sequence");
    tracing::info!("  GET  /api/diff       - Bit difference of two values");
    tracing::info!("  GET  /api/disk       - Rotary encoder disk (JSON)");
    tracing::info!("  GET  /api/disk.svg   - Rotary encoder disk (SVG)");
    tracing::info!("  POST /api/assistant  - Ask the Gray code assistant");
    tracing::info!("  GET  /api/info       - Tool information");
    tracing::info!("  GET  /health         - Health check");
    tracing::info!("  GET  /docs           - Swagger UI");
    tracing::info!("");
    tracing::info!("Configuration:");
    tracing::info!(
        "  Bit widths: 1..={} (default {}, disk {})",
        limits.max_bits,
        limits.default_bits,
        limits.default_disk_bits
    );
    tracing::info!(
        "  Assistant: {}",
        if assistant_enabled { "enabled" } else { "disabled (no API key)" }
    );
    tracing::info!(
        "  Authentication: {}",
        if auth_config.enabled() {
            format!("{} API keys configured", auth_config.key_count())
        } else {
            "disabled".to_string()
        }
    );
    tracing::info!(
        "  Rate limiting: {}",
        if rate_config.enabled {
            format!(
                "{} req/s (burst: {})",
                rate_config.requests_per_second, rate_config.burst_size
            )
        } else {
            "disabled".to_string()
        }
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
