//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Behavior:
//! - `EXAM_PROMPT_LOG` controls the filter (e.g. "debug" or
//!   "warn,exam_prompt::controller=debug"). Defaults to "warn" so normal
//!   runs only print the prompt.
//! - `EXAM_PROMPT_LOG_FORMAT` selects "pretty" (default) or "json".
//!
//! Logs always go to stderr; stdout is reserved for prompt output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "EXAM_PROMPT_LOG";

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV_VAR: &str = "EXAM_PROMPT_LOG_FORMAT";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    // Choose JSON vs pretty; the builders have different types.
    // try_init: a second call (tests) must not panic.
    match std::env::var(LOG_FORMAT_ENV_VAR).as_deref() {
        Ok("json") => {
            let _ = builder.json().try_init();
        }
        _ => {
            let _ = builder.try_init();
        }
    }
}
