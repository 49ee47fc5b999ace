//! Logging abstraction layer for living-backup-pages
//!
//! The same macros log to the browser console on WASM and emit `tracing`
//! events on native targets, so the loader and table code never branch on
//! the platform to report a failure.
//!
//! ## Macro Overview
//!
//! | Macro | Enabled when | WASM | Non-WASM |
//! |-------|--------------|------|----------|
//! | `debug_log!` | `debug_assertions` + `debug-hooks` | `console.debug` | `tracing::debug!` |
//! | `info_log!` | always | `console.info` | `tracing::info!` |
//! | `warn_log!` | always | `console.warn` | `tracing::warn!` |
//! | `error_log!` | always | `console.error` | `tracing::error!` |
//!
//! Fetch failures are the only error this crate reports, and they must reach
//! the console in release builds too, so only `debug_log!` is compiled out.

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

#[cfg(all(debug_assertions, feature = "debug-hooks", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		tracing::debug!("{}", format!($($arg)*));
	}};
}

#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		let _ = || format!($($arg)*);
	}};
}

/// Logs an info message
#[cfg(target_arch = "wasm32")]
macro_rules! info_log {
	($($arg:tt)*) => {{
		web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		tracing::info!("{}", format!($($arg)*));
	}};
}

/// Logs a warning message
#[cfg(target_arch = "wasm32")]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		tracing::warn!("{}", format!($($arg)*));
	}};
}

/// Logs an error message
#[cfg(target_arch = "wasm32")]
macro_rules! error_log {
	($($arg:tt)*) => {{
		web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		tracing::error!("{}", format!($($arg)*));
	}};
}

pub(crate) use {debug_log, error_log, info_log, warn_log};

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_logging_macros_compile() {
		debug_log!("Sorted column {}", 2);
		info_log!("Loaded {}", "entities.html");
		warn_log!("Missing elements: {:?}", vec!["searchBox"]);
		error_log!("Error loading YAML file: {}", "404");
	}

	#[rstest]
	fn test_logging_macros_no_args() {
		debug_log!("Simple debug");
		info_log!("Simple info");
		warn_log!("Simple warning");
		error_log!("Simple error");
	}
}
