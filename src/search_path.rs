use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::env_vars::{home_dir, substitute_variables, Environment, ProcessEnvironment};

/// Environment variable overriding the cursor theme search path.
pub const XCURSOR_PATH: &str = "XCURSOR_PATH";

/// The search path used when `XCURSOR_PATH` isn't set: the user's icon
/// directories, the system icon directory, pixmaps, and the legacy X11 one.
pub const DEFAULT_XCURSOR_PATH: &str =
    "~/.local/share/icons:~/.icons:/usr/share/icons:/usr/share/pixmaps:/usr/X11R6/lib/X11/icons";

/// This function returns the list of paths where cursor themes have to
/// be searched, computed from the environment of the current process.
///
/// Unlike [`SearchPathProvider::paths`], nothing is cached.
pub fn theme_search_paths() -> Vec<PathBuf> {
    compute_search_paths(&ProcessEnvironment)
}

/// Computes the search path from `env`.
///
/// `XCURSOR_PATH` is used if set, otherwise [`DEFAULT_XCURSOR_PATH`].
/// The list is split on `:`, variables inside entries are substituted,
/// `~` is expanded to the home directory, and duplicates are removed
/// keeping the first occurrence.
pub fn compute_search_paths(env: &impl Environment) -> Vec<PathBuf> {
    let raw = env
        .var(XCURSOR_PATH)
        .unwrap_or_else(|| String::from(DEFAULT_XCURSOR_PATH));
    let home = home_dir(env).map(|home| home.to_string_lossy().into_owned());

    let segments: Vec<&str> = raw.split(':').filter(|s| !s.is_empty()).collect();
    let expanded = substitute_variables(env, &segments)
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(|s| String::from(shellexpand::tilde_with_context(&s, || home.clone())));

    let paths = dedup_paths(expanded);
    tracing::debug!(target: "cursor_theme::search_path", ?paths, "computed cursor search path");
    paths
}

/// Removes later duplicates of an entry, keeping the first one in place.
/// Trailing slashes don't make two entries different.
fn dedup_paths(entries: impl IntoIterator<Item = String>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut res = Vec::new();

    for entry in entries {
        let normalized = match entry.trim_end_matches('/') {
            "" => String::from("/"),
            trimmed => String::from(trimmed),
        };

        if seen.insert(normalized.clone()) {
            res.push(PathBuf::from(normalized));
        }
    }

    res
}

/// Computes the cursor search path once and hands out the cached result.
///
/// The environment isn't watched: once computed, the search path stays the
/// same until [`reset`](Self::reset) is called.
#[derive(Debug)]
pub struct SearchPathProvider<E = ProcessEnvironment> {
    env: E,
    cache: OnceLock<Vec<PathBuf>>,
}

impl SearchPathProvider<ProcessEnvironment> {
    /// A provider reading the environment of the current process.
    pub fn new() -> Self {
        Self::with_environment(ProcessEnvironment)
    }

    /// A provider whose search path is already known.
    ///
    /// After a [`reset`](Self::reset), the search path is recomputed from
    /// the process environment.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let cache = OnceLock::new();
        let _ = cache.set(paths.into_iter().map(Into::into).collect());

        SearchPathProvider {
            env: ProcessEnvironment,
            cache,
        }
    }
}

impl Default for SearchPathProvider<ProcessEnvironment> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> SearchPathProvider<E> {
    /// A provider reading variables from `env`.
    pub fn with_environment(env: E) -> Self {
        SearchPathProvider {
            env,
            cache: OnceLock::new(),
        }
    }

    /// The ordered, deduplicated search path, computed on first use.
    pub fn paths(&self) -> &[PathBuf] {
        self.cache.get_or_init(|| compute_search_paths(&self.env))
    }

    /// Forgets the cached search path, so that the next call to
    /// [`paths`](Self::paths) reads the environment again.
    pub fn reset(&mut self) {
        self.cache.take();
    }

    pub fn environment(&self) -> &E {
        &self.env
    }
}
