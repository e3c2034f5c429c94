//! CLI-specific error formatting for user-facing messages.

use crate::config::TOKEN_ENV;
use crate::error::ClawsinoError;

/// Map a [`ClawsinoError`] to a user-facing message with actionable guidance.
pub fn format_error_help(err: &ClawsinoError) -> String {
    match err {
        ClawsinoError::MissingToken { operation } => format!(
            "A session token is required for {operation}. Pass --token or set {TOKEN_ENV}; \
             run `clawsino device-start` to obtain one"
        ),
        ClawsinoError::Authentication { status, message } => format!(
            "HTTP {status}: {message}\nSession rejected. Run `clawsino device-start` and \
             `clawsino device-poll` to obtain a new token"
        ),
        ClawsinoError::Validation { status, message }
        | ClawsinoError::Server { status, message }
        | ClawsinoError::UnexpectedStatus { status, message } => {
            format!("HTTP {status}: {message}")
        }
        other => format!("{other}"),
    }
}
