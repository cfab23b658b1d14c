//! A crate to find XCursor themes on disk, following the themes they inherit from.
//!
//! Cursor themes live in directories named after them, below the directories
//! of the cursor search path (`XCURSOR_PATH`, or a default list of icon
//! directories). A theme either has a `cursors` subdirectory, or borrows
//! the cursors of the themes listed in the `Inherits` key of its
//! `index.theme` file.
//!
//! ```no_run
//! use cursor_theme::ThemeResolver;
//!
//! let resolver = ThemeResolver::new();
//! if let Some(theme) = resolver.resolve("breeze_cursors") {
//!     println!("cursors are loaded from {}", theme.cursors_dir().display());
//! }
//! ```
//!
//! Applying a theme to a running session goes through [`apply::apply_cursor_theme`],
//! which saves it with a [`config::ConfigStore`] and pushes it through a
//! [`apply::CursorNotifier`].

pub mod apply;
pub mod config;
pub mod cursor_names;
pub mod env_vars;
mod error;
pub mod ini;
pub mod look_and_feel;
mod resolver;
mod search_path;
mod theme_name;

pub use error::{Error, Result};
pub use resolver::{
    StdFs, ThemeDirectory, ThemeFs, ThemeResolver, CURSORS_DIR, INDEX_THEME, MAX_INHERITANCE_DEPTH,
};
pub use search_path::{
    compute_search_paths, theme_search_paths, SearchPathProvider, DEFAULT_XCURSOR_PATH,
    XCURSOR_PATH,
};
pub use theme_name::ThemeName;
