use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use axum::Router;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use bistro_site::config::{self, Settings};
use bistro_site::frontend::{self, templates, AppState};
use bistro_site::metrics::{self, Metrics};
use bistro_site::{build_page, ContentLoader, ContentSource, PageOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the rendered site over HTTP (default)
    Serve,
    /// Render the page once and write the HTML
    Render {
        /// Content document: URL or file path. Defaults to the configured site content.
        #[arg(long)]
        content: Option<String>,
        /// HTML template. Defaults to the configured template or the built-in one.
        #[arg(long)]
        template: Option<PathBuf>,
        /// Output file. Writes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Render with the navigation menu expanded
        #[arg(long)]
        nav_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::new().context("Failed to load configuration")?;
    config::validate_site_settings(&settings)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(settings).await,
        Command::Render {
            content,
            template,
            output,
            nav_open,
        } => render_once(settings, content, template, output, nav_open).await,
    }
}

async fn serve(settings: Settings) -> Result<()> {
    let prometheus_handle = metrics::setup_metrics_recorder()?;
    let metrics = Metrics::new(prometheus_handle);

    info!("Prometheus metrics initialized");

    let base = Url::parse(&settings.site.base_url)?;
    let source = ContentSource::parse(&settings.site.content_url, Some(&base))?;
    info!("Page content source: {}", source);

    let template = templates::load_template(settings.site.template_path.as_deref().map(Path::new))
        .context("Failed to load page template")?;

    let state = AppState {
        template,
        loader: ContentLoader::new(source),
        content_file: PathBuf::from(&settings.site.content_file),
    };

    let cors = CorsLayer::new()
        .allow_origin(
            settings
                .application
                .cors_allow_origin
                .parse::<HeaderValue>()
                .unwrap_or_else(|_| HeaderValue::from_static("*")),
        )
        .allow_methods([Method::GET]);

    let app = Router::new()
        .merge(frontend::create_frontend_router(state))
        .route(
            "/metrics",
            axum::routing::get(move || async move {
                (
                    [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4")],
                    metrics.render(),
                )
            }),
        )
        .layer(cors);

    let host = settings
        .application
        .host
        .parse::<std::net::IpAddr>()
        .with_context(|| format!("Invalid application.host {}", settings.application.host))?;
    let addr = SocketAddr::from((host, settings.application.port));

    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn render_once(
    settings: Settings,
    content: Option<String>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    nav_open: bool,
) -> Result<()> {
    // An explicit --content is resolved on its own; the configured source is
    // only reachable through the base URL when the server is running, so the
    // content file is read directly instead.
    let source = match content {
        Some(spec) => ContentSource::parse(&spec, None)?,
        None => ContentSource::Local(PathBuf::from(&settings.site.content_file)),
    };

    let template_path = template.or_else(|| settings.site.template_path.map(PathBuf::from));
    let template = templates::load_template(template_path.as_deref())
        .context("Failed to load page template")?;

    let loader = ContentLoader::new(source);
    let built = build_page(&loader, &template, PageOptions { nav_open }).await;

    built.warn_if_fallback();

    match output {
        Some(path) => {
            tokio::fs::write(&path, built.html.as_bytes())
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", built.html),
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
