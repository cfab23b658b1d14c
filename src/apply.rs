//! Applying a cursor theme: saving it, and pushing it to running
//! applications when the platform allows it.

use std::path::Path;

use crate::config::{ConfigStore, CURSOR_THEME};
use crate::cursor_names;
use crate::env_vars::Environment;
use crate::error::{Error, Result};
use crate::resolver::{ThemeDirectory, ThemeFs, ThemeResolver};

/// Environment variable telling newly started applications which theme to use.
pub const XCURSOR_THEME: &str = "XCURSOR_THEME";

/// Shown to the user when the theme can't be changed live.
pub const RESTART_REQUIRED_MESSAGE: &str =
    "You have to restart your session for cursor changes to take effect.";

/// Backend that swaps the cursors of running applications.
///
/// This is typically backed by the X server's cursor extension. Not every
/// session supports it, which [`is_available`](Self::is_available) reports.
pub trait CursorNotifier {
    fn is_available(&self) -> bool;

    /// Sets an environment variable for applications launched from now on.
    fn set_launch_env(&mut self, key: &str, value: &str) -> Result<()>;

    /// Refreshes the server side resources naming the cursor theme.
    fn update_resources(&mut self, theme: &ThemeDirectory) -> Result<()>;

    /// Tells running applications that the cursor theme changed.
    fn emit_cursor_changed(&mut self) -> Result<()>;

    /// Replaces the cursor called `name` with the one loaded from `file`.
    fn change_cursor(&mut self, name: &str, file: &Path) -> Result<()>;
}

/// A notifier for sessions with no way of changing cursors live.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNotifier;

impl CursorNotifier for NoNotifier {
    fn is_available(&self) -> bool {
        false
    }

    fn set_launch_env(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Notifier(String::from("no cursor notifier")))
    }

    fn update_resources(&mut self, _theme: &ThemeDirectory) -> Result<()> {
        Err(Error::Notifier(String::from("no cursor notifier")))
    }

    fn emit_cursor_changed(&mut self) -> Result<()> {
        Err(Error::Notifier(String::from("no cursor notifier")))
    }

    fn change_cursor(&mut self, _name: &str, _file: &Path) -> Result<()> {
        Err(Error::Notifier(String::from("no cursor notifier")))
    }
}

/// What [`apply_cursor_theme`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// No theme name was given; nothing was written.
    Skipped,

    /// The name was saved, but no such theme could be resolved.
    NotFound,

    /// The name was saved, but running applications can't be updated.
    RestartRequired,

    /// The theme was saved and pushed to running applications.
    Applied {
        directory: ThemeDirectory,
        cursors_changed: usize,
    },
}

impl ApplyOutcome {
    /// The message to show the user, if any.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            ApplyOutcome::RestartRequired => Some(RESTART_REQUIRED_MESSAGE),
            _ => None,
        }
    }
}

/// Saves `name` as the cursor theme and applies it to the running session.
///
/// Writing the setting and every notification step are best-effort:
/// failures are logged and the remaining steps still run.
pub fn apply_cursor_theme<E, F, S, N>(
    name: &str,
    resolver: &ThemeResolver<E, F>,
    store: &mut S,
    notifier: &mut N,
) -> ApplyOutcome
where
    E: Environment,
    F: ThemeFs,
    S: ConfigStore + ?Sized,
    N: CursorNotifier + ?Sized,
{
    if name.is_empty() {
        return ApplyOutcome::Skipped;
    }

    let saved = store
        .write_setting(&CURSOR_THEME, name)
        .and_then(|_| store.sync(CURSOR_THEME.file));
    if let Err(e) = saved {
        tracing::warn!(target: "cursor_theme::apply", "could not save cursor theme: {}", e);
    }

    let directory = match resolver.resolve(name) {
        Some(directory) => directory,
        None => {
            tracing::debug!(target: "cursor_theme::apply", theme = name, "theme not found");
            return ApplyOutcome::NotFound;
        }
    };

    if !notifier.is_available() {
        return ApplyOutcome::RestartRequired;
    }

    log_failure("set launch environment", notifier.set_launch_env(XCURSOR_THEME, name));
    log_failure("update cursor resources", notifier.update_resources(&directory));
    log_failure("notify applications", notifier.emit_cursor_changed());

    let cursors_dir = directory.cursors_dir();
    let mut cursors_changed = 0;

    for cursor in cursor_names::all() {
        let file = cursors_dir.join(cursor);
        if !resolver.fs().exists(&file) {
            tracing::trace!(target: "cursor_theme::apply", cursor, "theme has no such cursor");
            continue;
        }

        match notifier.change_cursor(cursor, &file) {
            Ok(()) => cursors_changed += 1,
            Err(e) => log_failure("change cursor", Err(e)),
        }
    }

    tracing::info!(
        target: "cursor_theme::apply",
        theme = name,
        source = ?directory.source(),
        cursors_changed,
        "applied cursor theme"
    );

    ApplyOutcome::Applied {
        directory,
        cursors_changed,
    }
}

fn log_failure(step: &str, result: Result<()>) {
    if let Err(e) = result {
        tracing::warn!(target: "cursor_theme::apply", "failed to {}: {}", step, e);
    }
}
