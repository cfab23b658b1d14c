//! Finding the directory that supplies a cursor theme.
//!
//! A theme directory either holds a `cursors` subdirectory itself, or
//! names parent themes in the `Inherits` key of its `index.theme`. The
//! resolver walks the search path and follows those parents, giving up
//! after [`MAX_INHERITANCE_DEPTH`] themes in a single chain.

use std::io;
use std::path::{Path, PathBuf};

use crate::env_vars::{Environment, ProcessEnvironment};
use crate::ini::IniFile;
use crate::search_path::SearchPathProvider;
use crate::theme_name::ThemeName;

/// How many themes a single inheritance chain may contain, the
/// requested theme included. This also stops inheritance cycles.
pub const MAX_INHERITANCE_DEPTH: usize = 10;

/// The subdirectory holding a theme's cursor files.
pub const CURSORS_DIR: &str = "cursors";

/// The theme descriptor file.
pub const INDEX_THEME: &str = "index.theme";

const ICON_THEME_GROUP: &str = "Icon Theme";
const INHERITS_KEY: &str = "Inherits";

/// The filesystem operations the resolver needs.
pub trait ThemeFs {
    fn is_dir(&self, path: &Path) -> bool;

    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl ThemeFs for StdFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// A successfully resolved cursor theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDirectory {
    name: ThemeName,
    path: PathBuf,
    source: PathBuf,
}

impl ThemeDirectory {
    /// The name the theme was resolved under.
    pub fn name(&self) -> &ThemeName {
        &self.name
    }

    /// The directory of the requested theme itself.
    ///
    /// When the theme only inherits its cursors this directory has no
    /// `cursors` subdirectory; see [`source`](Self::source).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory that actually holds the cursors: the theme's own
    /// directory for a direct match, otherwise the ancestor that
    /// ended the inheritance chain.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Whether the theme ships its own cursors.
    pub fn is_direct(&self) -> bool {
        self.path == self.source
    }

    /// The `cursors` directory the theme's cursors are loaded from.
    pub fn cursors_dir(&self) -> PathBuf {
        self.source.join(CURSORS_DIR)
    }
}

/// Resolves cursor theme names to theme directories.
#[derive(Debug)]
pub struct ThemeResolver<E = ProcessEnvironment, F = StdFs> {
    search_paths: SearchPathProvider<E>,
    fs: F,
}

impl ThemeResolver {
    /// A resolver using the process environment and the real filesystem.
    pub fn new() -> Self {
        ThemeResolver::with_search_paths(SearchPathProvider::new())
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> ThemeResolver<E, StdFs> {
    pub fn with_search_paths(search_paths: SearchPathProvider<E>) -> Self {
        ThemeResolver::with_fs(search_paths, StdFs)
    }
}

impl<E: Environment, F: ThemeFs> ThemeResolver<E, F> {
    pub fn with_fs(search_paths: SearchPathProvider<E>, fs: F) -> Self {
        ThemeResolver { search_paths, fs }
    }

    pub fn search_paths(&self) -> &SearchPathProvider<E> {
        &self.search_paths
    }

    /// Mutable access to the search path, e.g. to [reset](SearchPathProvider::reset) it.
    pub fn search_paths_mut(&mut self) -> &mut SearchPathProvider<E> {
        &mut self.search_paths
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Finds the directory of the theme called `name`.
    ///
    /// The search path is scanned in order, and the first directory
    /// that either holds cursors or inherits from a theme that can be
    /// resolved wins. Returns `None` if the name isn't a valid theme
    /// name, or if no such directory exists.
    pub fn resolve(&self, name: &str) -> Option<ThemeDirectory> {
        match ThemeName::new(name) {
            Ok(name) => self.resolve_at(&name, 0),
            Err(e) => {
                tracing::debug!(target: "cursor_theme::resolver", "not resolving: {}", e);
                None
            }
        }
    }

    /// Whether the theme called `name` can be used as a cursor theme.
    pub fn is_resolvable(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Returns the path of the cursor file `cursor` in the theme `theme`,
    /// if the theme resolves and that file exists.
    pub fn find_cursor(&self, theme: &str, cursor: &str) -> Option<PathBuf> {
        if cursor.is_empty() || cursor.contains('/') || cursor == "." || cursor == ".." {
            return None;
        }

        let path = self.resolve(theme)?.cursors_dir().join(cursor);
        if self.fs.exists(&path) {
            Some(path)
        } else {
            None
        }
    }

    fn resolve_at(&self, theme: &ThemeName, depth: usize) -> Option<ThemeDirectory> {
        if depth >= MAX_INHERITANCE_DEPTH {
            tracing::debug!(
                target: "cursor_theme::resolver",
                theme = theme.as_str(),
                "inheritance depth exhausted"
            );
            return None;
        }

        for base in self.search_paths.paths() {
            let dir = base.join(theme.as_str());
            if !self.fs.is_dir(&dir) {
                continue;
            }

            // A cursors subdirectory makes this a cursor theme on its own.
            if self.fs.exists(&dir.join(CURSORS_DIR)) {
                tracing::trace!(target: "cursor_theme::resolver", ?dir, depth, "direct match");
                return Some(ThemeDirectory {
                    name: theme.clone(),
                    source: dir.clone(),
                    path: dir,
                });
            }

            let index = dir.join(INDEX_THEME);
            if !self.fs.exists(&index) {
                continue;
            }

            for parent in self.inherits(&index) {
                if parent == *theme {
                    continue;
                }

                if let Some(found) = self.resolve_at(&parent, depth + 1) {
                    tracing::trace!(
                        target: "cursor_theme::resolver",
                        ?dir,
                        parent = parent.as_str(),
                        depth,
                        "resolved through inheritance"
                    );
                    return Some(ThemeDirectory {
                        name: theme.clone(),
                        path: dir,
                        source: found.source,
                    });
                }
            }
        }

        None
    }

    /// Reads the parent themes declared in `index`. An unreadable or
    /// unusable file declares no parents.
    fn inherits(&self, index: &Path) -> Vec<ThemeName> {
        let content = match self.fs.read_to_string(index) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(target: "cursor_theme::resolver", ?index, "unreadable: {}", e);
                return Vec::new();
            }
        };

        let doc = match IniFile::parse(&content) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::debug!(target: "cursor_theme::resolver", ?index, "malformed: {}", e);
                return Vec::new();
            }
        };

        doc.read_list(&[ICON_THEME_GROUP], INHERITS_KEY)
            .into_iter()
            .filter_map(|parent| match ThemeName::new(parent) {
                Ok(parent) => Some(parent),
                Err(e) => {
                    tracing::debug!(target: "cursor_theme::resolver", ?index, "skipping parent: {}", e);
                    None
                }
            })
            .collect()
    }
}
