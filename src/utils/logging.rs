//! Logging setup.
//!
//! The crate logs through `tracing`: debug for safety verdicts and fee
//! reconciliation, warn when the legacy bridge has to fail closed. Error
//! constructors log through `log`, which the subscriber also picks up.
//!
//! Embedding applications usually install their own subscriber. These helpers
//! exist for tools and tests that want the default one: an `EnvFilter` read
//! from `RUST_LOG` (falling back to `info`) and a compact fmt layer.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "info";

type SetupError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the default subscriber, writing to stdout.
pub fn setup_logging() -> Result<(), SetupError> {
	setup_logging_with_writer(std::io::stdout)
}

/// Installs the default subscriber with a custom writer.
///
/// Fails if a global subscriber is already installed.
pub fn setup_logging_with_writer<W>(writer: W) -> Result<(), SetupError>
where
	W: for<'writer> fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	subscriber_with_writer(env_filter(), writer).try_init()?;
	Ok(())
}

fn subscriber_with_writer<W>(
	filter: EnvFilter,
	writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
	W: for<'writer> fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry().with(filter).with(
		fmt::layer().with_writer(writer).event_format(
			fmt::format()
				.with_level(true)
				.with_target(true)
				.with_thread_ids(false)
				.with_ansi(false)
				.compact(),
		),
	)
}
