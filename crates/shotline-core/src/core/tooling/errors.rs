use serde_json::{json, Map, Value};

use crate::core::config::context::CommandInfo;
use crate::core::config::registry::RegistryError;
use crate::core::scene::StoreError;
use crate::core::tooling::outcome::{CommandStatus, ExecutionOutcome};

const REGISTRY_HINT: &str = "Run `shotline project set <PATH>` or pass --project <PATH>.";

/// Maps a store failure onto an outcome; only `Io` counts as an internal failure.
#[must_use]
pub fn store_error_outcome(err: &StoreError) -> ExecutionOutcome {
    let mut details = Map::new();
    details.insert("reason".into(), json!(err.kind().as_str()));
    if let Some(path) = err.path() {
        details.insert("path".into(), json!(path.display().to_string()));
    }
    if let StoreError::AmbiguousPublish { candidates, .. } = err {
        details.insert("candidates".into(), json!(candidates));
    }
    if let Some(hint) = err.hint() {
        details.insert("hint".into(), json!(hint));
    }
    match err {
        StoreError::Io(source) => {
            details.insert("error".into(), json!(format!("{source:#}")));
            ExecutionOutcome::failure("filesystem operation failed", Value::Object(details))
        }
        _ => ExecutionOutcome::user_error(err.to_string(), Value::Object(details)),
    }
}

#[must_use]
pub fn registry_error_outcome(err: &RegistryError) -> ExecutionOutcome {
    match err {
        RegistryError::Io(source) => ExecutionOutcome::failure(
            "unable to read the project registration",
            json!({ "reason": err.reason(), "error": format!("{source:#}") }),
        ),
        _ => ExecutionOutcome::user_error(
            err.to_string(),
            json!({ "reason": err.reason(), "hint": REGISTRY_HINT }),
        ),
    }
}

#[must_use]
pub fn to_json_response(info: CommandInfo, outcome: &ExecutionOutcome) -> Value {
    let status = match outcome.status {
        CommandStatus::Ok => "ok",
        CommandStatus::UserError => "user-error",
        CommandStatus::Failure => "error",
    };
    let details = match &outcome.details {
        Value::Object(_) => outcome.details.clone(),
        Value::Null => json!({}),
        other => json!({ "value": other }),
    };
    json!({
        "status": status,
        "message": format_status_message(info, &outcome.message),
        "details": details,
    })
}

#[must_use]
pub fn format_status_message(info: CommandInfo, message: &str) -> String {
    let group_name = info.group.to_string();
    let prefix = if group_name == info.name {
        format!("shotline {}", info.name)
    } else {
        format!("shotline {} {}", group_name, info.name)
    };
    if message.is_empty() {
        prefix
    } else if message.starts_with(&prefix) {
        message.to_string()
    } else {
        format!("{prefix}: {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::context::CommandGroup;
    use std::path::PathBuf;

    #[test]
    fn ambiguous_publish_lists_candidates() {
        let err = StoreError::AmbiguousPublish {
            dir: PathBuf::from("/show/publish"),
            candidates: vec!["hero_P.ma".into(), "old_P.ma".into()],
        };
        let outcome = store_error_outcome(&err);
        assert_eq!(outcome.status, CommandStatus::UserError);
        assert_eq!(outcome.reason(), Some("ambiguous_publish"));
        assert_eq!(outcome.details["candidates"][1], "old_P.ma");
        assert!(outcome.details["hint"].is_string());
    }

    #[test]
    fn io_errors_are_failures() {
        let err = StoreError::Io(anyhow::anyhow!("disk on fire"));
        let outcome = store_error_outcome(&err);
        assert_eq!(outcome.status, CommandStatus::Failure);
        assert_eq!(outcome.status.exit_code(), 2);
        assert_eq!(outcome.reason(), Some("io"));
    }

    #[test]
    fn status_message_is_prefixed_once() {
        let info = CommandInfo::new(CommandGroup::Save, "save");
        assert_eq!(format_status_message(info, "saved"), "shotline save: saved");
        let info = CommandInfo::new(CommandGroup::Asset, "create");
        assert_eq!(
            format_status_message(info, "shotline asset create: done"),
            "shotline asset create: done"
        );
        let response = to_json_response(info, &ExecutionOutcome::success("", Value::Null));
        assert_eq!(response["status"], "ok");
        assert_eq!(response["message"], "shotline asset create");
        assert!(response["details"].as_object().unwrap().is_empty());
    }
}
