//! Result envelope rendering.
//!
//! Standard output carries exactly one JSON line per run. Everything else,
//! progress notes and diagnostics included, goes to stderr.

use std::fmt::Display;
use std::io::Write;
use std::process::ExitCode;

use monagotchi_types::{Envelope, Failure};
use serde::Serialize;
use tracing::error;

use crate::error::TraderError;

/// A rendered envelope and whether it reports success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The JSON line, without a trailing newline.
    pub line: String,
    /// `false` for failure envelopes.
    pub success: bool,
}

impl Rendered {
    /// Process exit status matching the envelope.
    pub const fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Render an operation result as a single JSON line.
pub fn render<T: Serialize>(result: Result<T, TraderError>) -> Rendered {
    match result {
        Ok(body) => match serde_json::to_string(&Envelope::ok(body)) {
            Ok(line) => Rendered {
                line,
                success: true,
            },
            Err(e) => failure(&e),
        },
        Err(e) => failure(&e),
    }
}

/// Render and print the envelope, returning the exit status.
pub fn emit<T: Serialize>(result: Result<T, TraderError>) -> ExitCode {
    let rendered = render(result);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", rendered.line).and_then(|()| stdout.flush()) {
        error!(error = %e, "failed to write result envelope");
        return ExitCode::FAILURE;
    }

    rendered.exit_code()
}

fn failure(error: &dyn Display) -> Rendered {
    let line = serde_json::to_string(&Failure::new(error))
        .unwrap_or_else(|_| r#"{"success":false,"error":"unrenderable error"}"#.to_owned());
    Rendered {
        line,
        success: false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use monagotchi_types::Action;

    use super::*;

    #[test]
    fn success_renders_envelope() {
        let rendered = render::<Payload>(Ok(Payload { answer: 42 }));
        assert!(rendered.success);
        assert_eq!(rendered.line, r#"{"success":true,"answer":42}"#);
    }

    #[test]
    fn insufficient_balance_message() {
        let rendered = render::<Payload>(Err(TraderError::InsufficientBalance {
            need: Action::Feed.cost(),
            have: "500".to_owned(),
        }));
        assert!(!rendered.success);
        assert_eq!(
            rendered.line,
            r#"{"success":false,"error":"Insufficient $MONA. Need 1000, have 500"}"#
        );
    }

    #[test]
    fn usage_error_renders_text_verbatim() {
        let rendered =
            render::<Payload>(Err(TraderError::Usage(crate::cli::USAGE.to_owned())));
        let value: serde_json::Value = serde_json::from_str(&rendered.line).unwrap();
        assert_eq!(value["success"], serde_json::Value::Bool(false));
        assert_eq!(value["error"], "Usage: monagotchi-trader <balance|burn|info>");
        assert!(!rendered.line.contains('\n'));
    }

    #[derive(Serialize)]
    struct Payload {
        answer: u32,
    }
}
