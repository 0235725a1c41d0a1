use atty::Stream;
use color_eyre::Result;
use serde_json::Value;
use shotline_core::{self as shotline, CommandInfo, CommandStatus, ExecutionOutcome};

use crate::style::Style;

#[derive(Clone, Copy, Debug)]
pub struct OutputOptions {
    pub quiet: bool,
    pub json: bool,
    pub no_color: bool,
}

/// Renders `outcome` and returns the process exit code.
pub fn emit_output(opts: &OutputOptions, info: CommandInfo, outcome: &ExecutionOutcome) -> Result<i32> {
    let code = outcome.status.exit_code();

    if opts.json {
        let payload = shotline::to_json_response(info, outcome);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(code);
    }

    match outcome.status {
        CommandStatus::Ok => {
            if opts.quiet {
                return Ok(code);
            }
            let style = Style::new(opts.no_color, atty::is(Stream::Stdout));
            if is_passthrough(&outcome.details) {
                println!("{}", outcome.message);
            } else {
                let message = shotline::format_status_message(info, &outcome.message);
                println!("{}", style.status(outcome.status, &message));
                if let Some(hint) = hint_from_details(&outcome.details) {
                    println!("{}", style.info(&format!("Tip: {hint}")));
                }
            }
        }
        CommandStatus::UserError | CommandStatus::Failure => {
            let style = Style::new(opts.no_color, atty::is(Stream::Stderr));
            let message = shotline::format_status_message(info, &outcome.message);
            eprintln!("{}", style.status(outcome.status, &message));
            let why = why_bullets(&outcome.details);
            if !why.is_empty() {
                eprintln!();
                eprintln!("Why:");
                for reason in why {
                    eprintln!("  • {reason}");
                }
            }
            if let Some(hint) = hint_from_details(&outcome.details) {
                eprintln!();
                eprintln!("Fix:");
                eprintln!("{}", style.fix_bullet(&format!("  • {hint}")));
            }
        }
    }

    Ok(code)
}

fn hint_from_details(details: &Value) -> Option<&str> {
    details.get("hint").and_then(Value::as_str)
}

fn is_passthrough(details: &Value) -> bool {
    details
        .get("passthrough")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn why_bullets(details: &Value) -> Vec<String> {
    let mut bullets = Vec::new();
    if let Some(candidates) = details.get("candidates").and_then(Value::as_array) {
        for candidate in candidates.iter().filter_map(Value::as_str) {
            bullets.push(format!("live publish: {candidate}"));
        }
    }
    if let Some(error) = details.get("error").and_then(Value::as_str) {
        bullets.push(error.to_string());
    }
    bullets
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn why_lists_conflicting_publishes() {
        let details = json!({
            "reason": "ambiguous_publish",
            "candidates": ["hero_P.ma", "hero_old_P.ma"],
        });
        assert_eq!(
            why_bullets(&details),
            ["live publish: hero_P.ma", "live publish: hero_old_P.ma"]
        );
        assert!(!is_passthrough(&details));
        assert!(hint_from_details(&details).is_none());
    }
}
