//! Notifier that shells out to the platform notification helper.
//!
//! On macOS this runs `osascript` with a `display notification` line;
//! elsewhere it runs `notify-send`. The helper program can be replaced
//! through configuration, which also gives tests a harmless stand-in.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::error::NotifyError;
use super::notifier::{Notification, Notifier};
use crate::core::access::AccessStatus;

/// Notifier backed by an external helper process.
pub struct CommandNotifier {
    command: Option<String>,
}

impl CommandNotifier {
    /// Use the platform default helper.
    pub fn new() -> Self {
        Self { command: None }
    }

    /// Use an explicit helper program instead of the platform default.
    ///
    /// The helper receives the title, body, and (when present) subtitle
    /// as plain arguments.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
        }
    }

    fn build_command(&self, notification: &Notification) -> (String, Vec<String>) {
        if let Some(command) = &self.command {
            let mut args = vec![notification.title.clone(), notification.body.clone()];
            if let Some(subtitle) = &notification.subtitle {
                args.push(subtitle.clone());
            }
            return (command.clone(), args);
        }
        platform_command(notification)
    }
}

impl Default for CommandNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for CommandNotifier {
    async fn request_access(&self) -> AccessStatus {
        // Whether the helper works is only knowable by running it.
        AccessStatus::Deferred
    }

    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        let (program, args) = self.build_command(notification);
        debug!("running {} for notification '{}'", program, notification.title);

        let output = Command::new(&program)
            .args(&args)
            .output()
            .await
            .map_err(|e| NotifyError::spawn(&program, e))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(NotifyError::command_failed(&program, stderr))
        }
    }
}

fn platform_command(notification: &Notification) -> (String, Vec<String>) {
    if cfg!(target_os = "macos") {
        (
            "osascript".to_string(),
            vec!["-e".to_string(), osascript_line(notification)],
        )
    } else {
        let body = match &notification.subtitle {
            Some(subtitle) => format!("{}\n{}", subtitle, notification.body),
            None => notification.body.clone(),
        };
        (
            "notify-send".to_string(),
            vec![notification.title.clone(), body],
        )
    }
}

/// Build the AppleScript `display notification` line.
fn osascript_line(notification: &Notification) -> String {
    let mut script = format!(
        "display notification \"{}\" with title \"{}\"",
        escape_osascript(&notification.body),
        escape_osascript(&notification.title)
    );
    if let Some(subtitle) = &notification.subtitle {
        script.push_str(" subtitle \"");
        script.push_str(&escape_osascript(subtitle));
        script.push('"');
    }
    script
}

/// Escape a string for a double-quoted AppleScript literal.
///
/// Backslashes must be doubled before quotes are escaped.
fn escape_osascript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(subtitle: Option<&str>) -> Notification {
        Notification {
            title: "Build done".to_string(),
            body: "All targets passed".to_string(),
            subtitle: subtitle.map(str::to_string),
        }
    }

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(escape_osascript(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_osascript(r"a\b"), r"a\\b");
        // A pre-escaped quote gets its backslash doubled, then the quote escaped.
        assert_eq!(escape_osascript(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn test_osascript_line_order() {
        let line = osascript_line(&notification(Some("nightly")));
        assert_eq!(
            line,
            "display notification \"All targets passed\" with title \"Build done\" subtitle \"nightly\""
        );
    }

    #[test]
    fn test_osascript_line_without_subtitle() {
        let line = osascript_line(&notification(None));
        assert!(!line.contains("subtitle"));
    }

    #[test]
    fn test_override_command_receives_fields_as_args() {
        let notifier = CommandNotifier::with_command("my-notify");
        let (program, args) = notifier.build_command(&notification(Some("nightly")));
        assert_eq!(program, "my-notify");
        assert_eq!(args, vec!["Build done", "All targets passed", "nightly"]);
    }

    #[tokio::test]
    async fn test_send_succeeds_with_true() {
        let notifier = CommandNotifier::with_command("true");
        assert!(notifier.send(&notification(None)).await.is_ok());
    }

    #[tokio::test]
    async fn test_send_reports_nonzero_exit() {
        let notifier = CommandNotifier::with_command("false");
        let err = notifier.send(&notification(None)).await.unwrap_err();
        assert!(matches!(err, NotifyError::CommandFailed { .. }));
    }

    #[tokio::test]
    async fn test_send_reports_spawn_failure() {
        let notifier = CommandNotifier::with_command("/nonexistent/helper-84213");
        let err = notifier.send(&notification(None)).await.unwrap_err();
        assert!(matches!(err, NotifyError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_request_access_is_deferred() {
        let notifier = CommandNotifier::new();
        assert_eq!(notifier.request_access().await, AccessStatus::Deferred);
    }
}
