//! Neural Commerce - Terminal storefront.
//!
//! This binary runs one storefront session against the seed catalog. The
//! view is rendered as text to stdout and commands are read from stdin, one
//! per line (`category`, `search`, `add`, `help`, `quit`). With
//! `NC_HEADLESS=true` renders are logged instead of drawn.
//!
//! # Architecture
//!
//! - Immutable catalog and store state, updated only through the reducer
//! - Recommendations published by a cancellable background task
//! - Askama template for the text rendering
//! - Logs go to stderr so they never interleave with the rendered view

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::ops::ControlFlow;
use std::process::ExitCode;
use std::sync::Arc;

use neural_commerce_storefront::StorefrontConfig;
use neural_commerce_storefront::input::{HELP, InputCommand, parse_command};
use neural_commerce_storefront::render::{RenderSurface, TextSurface, TracingSurface};
use neural_commerce_storefront::session::Storefront;
use neural_commerce_storefront::state::AppState;
use secrecy::ExposeSecret;
use sentry::integrations::tracing as sentry_tracing;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.expose_secret(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from environment (needed for Sentry init)
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = writeln!(std::io::stderr(), "Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "neural_commerce_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let app = match AppState::seeded(config) {
        Ok(app) => app,
        Err(e) => {
            e.report();
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(products = app.catalog().len(), "Catalog loaded");

    let surface: Arc<dyn RenderSurface> = if app.config().headless {
        tracing::info!("Headless mode, renders are logged at debug level");
        Arc::new(TracingSurface)
    } else {
        Arc::new(TextSurface::new(std::io::stdout()))
    };
    let storefront = Storefront::new(app, surface);
    storefront.mount();
    say(HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            () = &mut shutdown => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if handle_line(&storefront, &line).is_break() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read input");
                    break;
                }
            },
        }
    }

    storefront.unmount();
    ExitCode::SUCCESS
}

/// Handle one line of user input.
fn handle_line(storefront: &Storefront, line: &str) -> ControlFlow<()> {
    match parse_command(line) {
        Ok(InputCommand::Event(event)) => {
            if let Err(e) = storefront.dispatch(event) {
                say(&e.user_message());
            }
        }
        Ok(InputCommand::Help) => say(HELP),
        Ok(InputCommand::Quit) => return ControlFlow::Break(()),
        Err(e) => {
            say(&e.to_string());
            say(HELP);
        }
    }
    ControlFlow::Continue(())
}

/// Write a message line to the terminal.
fn say(message: &str) {
    let _ = writeln!(std::io::stdout().lock(), "{message}");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, closing storefront");
}
