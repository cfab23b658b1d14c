//! Look-and-feel packages: bundles of default appearance settings,
//! cursor theme included.
//!
//! A package is a directory whose `contents/defaults` file names the color
//! scheme, widget style, icon theme, desktop theme and cursor theme to use:
//!
//! ```text
//! [kdeglobals][KDE]
//! ColorScheme=Breeze
//! widgetStyle=Breeze
//!
//! [kdeglobals][Icons]
//! Theme=breeze
//!
//! [plasmarc][Theme]
//! name=default
//!
//! [kcminputrc][Mouse]
//! cursorTheme=breeze_cursors
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::apply::{apply_cursor_theme, ApplyOutcome, CursorNotifier};
use crate::config::{
    ConfigStore, Setting, COLOR_SCHEME, CURSOR_THEME, ICON_THEME, KDEGLOBALS, LOOK_AND_FEEL_PACKAGE,
    PLASMA_THEME, WIDGET_STYLE,
};
use crate::env_vars::{xdg_data_dirs, Environment};
use crate::error::{Error, Result};
use crate::ini::IniFile;
use crate::resolver::{ThemeFs, ThemeResolver};

/// Where packages live below each XDG data directory.
pub const PACKAGE_SUBDIR: &str = "plasma/look-and-feel";

const METADATA_FILE: &str = "metadata.desktop";
const DESKTOP_ENTRY_GROUP: &str = "Desktop Entry";

const SPLASH_SCRIPT: &str = "contents/splash/Splash.qml";
const LOCK_SCREEN_SCRIPT: &str = "contents/lockscreen/LockScreen.qml";
const RUN_COMMAND_SCRIPT: &str = "contents/runcommand/RunCommand.qml";
const LOGOUT_SCRIPT: &str = "contents/logout/Logout.qml";

/// A look-and-feel package on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookAndFeelPackage {
    root: PathBuf,
}

impl LookAndFeelPackage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LookAndFeelPackage { root: root.into() }
    }

    /// Finds the package called `name` in the first of `data_dirs` that has it.
    pub fn find(name: &str, data_dirs: &[PathBuf]) -> Option<Self> {
        if name.is_empty() || name.contains('/') || name == "." || name == ".." {
            return None;
        }

        data_dirs
            .iter()
            .map(|dir| LookAndFeelPackage::new(dir.join(PACKAGE_SUBDIR).join(name)))
            .find(LookAndFeelPackage::is_valid)
    }

    /// All packages found in `data_dirs`, sorted by name. A package
    /// installed in several directories is listed once, from the first.
    pub fn list(data_dirs: &[PathBuf]) -> Vec<Self> {
        let mut res: Vec<LookAndFeelPackage> = Vec::new();

        for dir in data_dirs {
            let entries = match fs::read_dir(dir.join(PACKAGE_SUBDIR)) {
                Ok(entries) => entries,
                Err(_) => continue,
            };

            for entry in entries.flatten() {
                let package = LookAndFeelPackage::new(entry.path());
                if package.is_valid() && !res.iter().any(|p| p.name() == package.name()) {
                    res.push(package);
                }
            }
        }

        res.sort_by(|a, b| a.name().cmp(&b.name()));
        res
    }

    /// All packages installed in the XDG data directories of `env`.
    pub fn installed(env: &impl Environment) -> Vec<Self> {
        LookAndFeelPackage::list(&xdg_data_dirs(env))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The package's plugin name, i.e. its directory name.
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The human readable name from the package's `metadata.desktop`,
    /// or the plugin name if it has none.
    pub fn display_name(&self) -> String {
        let path = self.root.join(METADATA_FILE);
        if !path.is_file() {
            return self.name();
        }

        match IniFile::load(&path) {
            Ok(metadata) => metadata
                .read_entry(&[DESKTOP_ENTRY_GROUP], "Name")
                .filter(|name| !name.is_empty())
                .map(String::from)
                .unwrap_or_else(|| self.name()),
            Err(e) => {
                tracing::debug!(target: "cursor_theme::look_and_feel", ?path, "unusable metadata: {}", e);
                self.name()
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.root.join("contents").is_dir()
    }

    pub fn defaults_path(&self) -> PathBuf {
        self.root.join("contents/defaults")
    }

    /// The color scheme file shipped by the package, if any.
    pub fn colors_path(&self) -> Option<PathBuf> {
        let path = self.root.join("contents/colors");
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }

    pub fn preview_path(&self) -> PathBuf {
        self.root.join("contents/previews/preview.png")
    }

    /// Reads the package's defaults. A package without a defaults file
    /// has none.
    pub fn defaults(&self) -> Result<Option<LookAndFeelDefaults>> {
        let path = self.defaults_path();
        if !path.exists() {
            return Ok(None);
        }

        IniFile::load(&path).map(|doc| Some(LookAndFeelDefaults::from_ini(&doc)))
    }

    /// What applying this package would change.
    pub fn capabilities(&self) -> Result<Capabilities> {
        let defaults = self.defaults()?.unwrap_or_default();

        Ok(Capabilities {
            colors: defaults.color_scheme.is_some() || self.colors_path().is_some(),
            widget_style: defaults.widget_style.is_some(),
            icons: defaults.icon_theme.is_some(),
            plasma_theme: defaults.plasma_theme.is_some(),
            cursors: defaults.cursor_theme.is_some(),
            splash: self.ships(SPLASH_SCRIPT),
            lock_screen: self.ships(LOCK_SCREEN_SCRIPT),
            run_command: self.ships(RUN_COMMAND_SCRIPT),
            logout: self.ships(LOGOUT_SCRIPT),
        })
    }

    fn ships(&self, file: &str) -> bool {
        self.root.join(file).is_file()
    }
}

/// The settings a package's defaults file provides. Empty values are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookAndFeelDefaults {
    pub color_scheme: Option<String>,
    pub widget_style: Option<String>,
    pub icon_theme: Option<String>,
    pub plasma_theme: Option<String>,
    pub cursor_theme: Option<String>,
}

impl LookAndFeelDefaults {
    pub fn from_ini(doc: &IniFile) -> Self {
        let read = |setting: &Setting| {
            doc.read_entry(&setting.bundled_group(), setting.key)
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        LookAndFeelDefaults {
            color_scheme: read(&COLOR_SCHEME),
            widget_style: read(&WIDGET_STYLE),
            icon_theme: read(&ICON_THEME),
            plasma_theme: read(&PLASMA_THEME),
            cursor_theme: read(&CURSOR_THEME),
        }
    }
}

/// Which kinds of settings a package provides, and which session
/// screens it ships its own scripts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub colors: bool,
    pub widget_style: bool,
    pub icons: bool,
    pub plasma_theme: bool,
    pub cursors: bool,
    pub splash: bool,
    pub lock_screen: bool,
    pub run_command: bool,
    pub logout: bool,
}

/// Which kinds of settings to take from a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyFlags {
    pub colors: bool,
    pub widget_style: bool,
    pub icons: bool,
    pub plasma_theme: bool,
    pub cursors: bool,
}

impl Default for ApplyFlags {
    fn default() -> Self {
        ApplyFlags {
            colors: true,
            widget_style: true,
            icons: true,
            plasma_theme: true,
            cursors: true,
        }
    }
}

/// What [`apply_look_and_feel`] wrote.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookAndFeelReport {
    /// The settings that were written, by name.
    pub written: Vec<&'static str>,

    /// The outcome of applying the cursor theme, if it was applied.
    pub cursor: Option<ApplyOutcome>,
}

/// Makes the color scheme name `scheme` into the name of its `.colors`
/// file: apostrophes are dropped, every run of other non-word characters
/// is removed and the character after it upper-cased, and the first
/// character is upper-cased ("oxygen-cold" becomes "OxygenCold").
pub fn color_scheme_file_name(scheme: &str) -> String {
    let mut res = String::with_capacity(scheme.len());
    let mut upper_next = true;

    for ch in scheme.chars().filter(|&ch| ch != '\'') {
        if ch.is_alphanumeric() || ch == '_' {
            if upper_next {
                res.extend(ch.to_uppercase());
            } else {
                res.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }

    res
}

/// Finds the installed `.colors` file for `scheme` in `data_dirs`.
fn locate_color_scheme(scheme: &str, data_dirs: &[PathBuf]) -> Option<PathBuf> {
    let file = format!("color-schemes/{}.colors", color_scheme_file_name(scheme));
    data_dirs
        .iter()
        .map(|dir| dir.join(&file))
        .find(|path| path.is_file())
}

/// Applies the settings of `package` enabled in `flags`.
///
/// The package name is recorded first. Then each setting the package
/// provides is written on its own, a failing write being logged and
/// skipped. The cursor theme goes through [`apply_cursor_theme`].
///
/// Fails only if `package` isn't a valid package, or if its defaults
/// file can't be read.
pub fn apply_look_and_feel<E, F, S, N>(
    package: &LookAndFeelPackage,
    flags: ApplyFlags,
    data_dirs: &[PathBuf],
    resolver: &ThemeResolver<E, F>,
    store: &mut S,
    notifier: &mut N,
) -> Result<LookAndFeelReport>
where
    E: Environment,
    F: ThemeFs,
    S: ConfigStore + ?Sized,
    N: CursorNotifier + ?Sized,
{
    if !package.is_valid() {
        return Err(Error::InvalidPackage(package.root().to_path_buf()));
    }

    let defaults = package.defaults()?;
    let mut report = LookAndFeelReport::default();

    write_setting(store, &mut report, &LOOK_AND_FEEL_PACKAGE, &package.name());

    let defaults = match defaults {
        Some(defaults) => defaults,
        None => {
            sync(store, KDEGLOBALS);
            return Ok(report);
        }
    };

    if flags.widget_style {
        if let Some(style) = &defaults.widget_style {
            write_setting(store, &mut report, &WIDGET_STYLE, style);
        }
    }

    if flags.colors {
        apply_colors(package, &defaults, data_dirs, store, &mut report);
    }

    if flags.icons {
        if let Some(theme) = &defaults.icon_theme {
            write_setting(store, &mut report, &ICON_THEME, theme);
        }
    }

    if flags.plasma_theme {
        if let Some(theme) = &defaults.plasma_theme {
            write_setting(store, &mut report, &PLASMA_THEME, theme);
            sync(store, PLASMA_THEME.file);
        }
    }

    if flags.cursors {
        if let Some(theme) = &defaults.cursor_theme {
            report.cursor = Some(apply_cursor_theme(theme, resolver, store, notifier));
        }
    }

    sync(store, KDEGLOBALS);
    tracing::info!(target: "cursor_theme::look_and_feel", package = %package.name(), written = ?report.written, "applied look-and-feel package");

    Ok(report)
}

/// Writes the color scheme name, and copies the scheme's groups into
/// `kdeglobals`. The scheme comes from the package's own colors file if
/// it has one, otherwise from the installed scheme the defaults name.
/// A colors file without a scheme name is named after the package.
fn apply_colors<S: ConfigStore + ?Sized>(
    package: &LookAndFeelPackage,
    defaults: &LookAndFeelDefaults,
    data_dirs: &[PathBuf],
    store: &mut S,
    report: &mut LookAndFeelReport,
) {
    let (scheme, file) = match (package.colors_path(), &defaults.color_scheme) {
        (Some(file), Some(scheme)) => (scheme.clone(), file),
        (Some(file), None) => (package.display_name(), file),
        (None, Some(scheme)) => {
            let name = color_scheme_file_name(scheme);
            match locate_color_scheme(scheme, data_dirs) {
                Some(file) => (name, file),
                None => {
                    tracing::warn!(target: "cursor_theme::look_and_feel", scheme = %scheme, "color scheme is not installed");
                    return;
                }
            }
        }
        (None, None) => return,
    };

    let colors = match IniFile::load(&file) {
        Ok(colors) => colors,
        Err(e) => {
            tracing::warn!(target: "cursor_theme::look_and_feel", "skipping color scheme: {}", e);
            return;
        }
    };

    write_setting(store, report, &COLOR_SCHEME, &scheme);

    for group in colors.groups() {
        for (key, value) in colors.entries(&group) {
            if let Err(e) = store.write_entry(KDEGLOBALS, &group, key, value) {
                tracing::warn!(target: "cursor_theme::look_and_feel", "failed to copy color entry {}: {}", key, e);
            }
        }
    }
}

fn write_setting<S: ConfigStore + ?Sized>(
    store: &mut S,
    report: &mut LookAndFeelReport,
    setting: &Setting,
    value: &str,
) {
    match store.write_setting(setting, value) {
        Ok(()) => report.written.push(setting.name),
        Err(e) => {
            tracing::warn!(target: "cursor_theme::look_and_feel", "failed to write {}: {}", setting.name, e)
        }
    }
}

fn sync<S: ConfigStore + ?Sized>(store: &mut S, file: &str) {
    if let Err(e) = store.sync(file) {
        tracing::warn!(target: "cursor_theme::look_and_feel", "failed to save {}: {}", file, e);
    }
}

#[cfg(test)]
mod tests {
    use super::{
        apply_look_and_feel, color_scheme_file_name, ApplyFlags, Capabilities, LookAndFeelPackage,
    };
    use crate::apply::{ApplyOutcome, NoNotifier};
    use crate::config::{ConfigStore, MemoryConfigStore, KCMINPUTRC, KDEGLOBALS, PLASMARC};
    use crate::resolver::ThemeResolver;
    use crate::search_path::SearchPathProvider;
    use std::collections::HashMap;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const DEFAULTS: &str = "\
[kdeglobals][KDE]
ColorScheme=Breeze Dark
widgetStyle=Breeze

[kdeglobals][Icons]
Theme=breeze-dark

[plasmarc][Theme]
name=breeze-dark

[kcminputrc][Mouse]
cursorTheme=breeze_cursors
";

    fn package(data_dir: &Path, name: &str, defaults: Option<&str>) -> LookAndFeelPackage {
        let root = data_dir.join("plasma/look-and-feel").join(name);
        fs::create_dir_all(root.join("contents")).unwrap();
        if let Some(defaults) = defaults {
            fs::write(root.join("contents/defaults"), defaults).unwrap();
        }
        LookAndFeelPackage::new(root)
    }

    fn read(store: &MemoryConfigStore, file: &str, group: &[&str], key: &str) -> Option<String> {
        store.read_entry(file, group, key).unwrap()
    }

    #[test]
    fn test_color_scheme_file_name() {
        assert_eq!(color_scheme_file_name("Breeze Dark"), "BreezeDark");
        assert_eq!(color_scheme_file_name("oxygen-cold"), "OxygenCold");
        assert_eq!(color_scheme_file_name("Foo's scheme"), "FoosScheme");
        assert_eq!(color_scheme_file_name("a.b,c"), "ABC");
    }

    #[test]
    fn test_defaults_and_capabilities() {
        let tmp = TempDir::new().unwrap();
        let pkg = package(tmp.path(), "org.kde.breezedark.desktop", Some(DEFAULTS));

        let defaults = pkg.defaults().unwrap().unwrap();
        assert_eq!(defaults.cursor_theme.as_deref(), Some("breeze_cursors"));
        assert_eq!(defaults.plasma_theme.as_deref(), Some("breeze-dark"));
        assert_eq!(
            pkg.capabilities().unwrap(),
            Capabilities {
                colors: true,
                widget_style: true,
                icons: true,
                plasma_theme: true,
                cursors: true,
                ..Capabilities::default()
            }
        );
    }

    #[test]
    fn test_session_screen_capabilities() {
        let tmp = TempDir::new().unwrap();
        let pkg = package(tmp.path(), "p", None);
        for script in &["splash/Splash.qml", "lockscreen/LockScreen.qml"] {
            let path = pkg.root().join("contents").join(script);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "import QtQuick 2.5\n").unwrap();
        }
        fs::create_dir_all(pkg.root().join("contents/logout")).unwrap();

        let capabilities = pkg.capabilities().unwrap();
        assert!(capabilities.splash);
        assert!(capabilities.lock_screen);
        assert!(!capabilities.run_command);
        assert!(!capabilities.logout);
        assert!(!capabilities.cursors);
    }

    #[test]
    fn test_display_name() {
        let tmp = TempDir::new().unwrap();
        let pkg = package(tmp.path(), "org.kde.foo.desktop", None);
        assert_eq!(pkg.display_name(), "org.kde.foo.desktop");

        fs::write(
            pkg.root().join("metadata.desktop"),
            "[Desktop Entry]\nName=Foo Dark\nName[de]=Foo Dunkel\nX-KDE-PluginInfo-Name=org.kde.foo.desktop\n",
        )
        .unwrap();
        assert_eq!(pkg.display_name(), "Foo Dark");
        assert_eq!(pkg.name(), "org.kde.foo.desktop");
    }

    #[test]
    fn test_package_colors_take_display_name() {
        let data = TempDir::new().unwrap();
        let pkg = package(
            data.path(),
            "org.kde.foo.desktop",
            Some("[kdeglobals][KDE]\nwidgetStyle=Breeze\n"),
        );
        fs::write(pkg.root().join("metadata.desktop"), "[Desktop Entry]\nName=Foo Dark\n").unwrap();
        fs::write(
            pkg.root().join("contents/colors"),
            "[Colors:View]\nBackgroundNormal=20,20,20\n",
        )
        .unwrap();
        let resolver = ThemeResolver::with_search_paths(SearchPathProvider::from_paths(Vec::<PathBuf>::new()));
        let mut store = MemoryConfigStore::new();

        let report = apply_look_and_feel(
            &pkg,
            ApplyFlags::default(),
            &[],
            &resolver,
            &mut store,
            &mut NoNotifier,
        )
        .unwrap();

        assert!(report.written.contains(&"ColorScheme"));
        assert_eq!(read(&store, KDEGLOBALS, &["KDE"], "ColorScheme").as_deref(), Some("Foo Dark"));
        assert_eq!(
            read(&store, KDEGLOBALS, &["Colors:View"], "BackgroundNormal").as_deref(),
            Some("20,20,20")
        );
        assert!(pkg.capabilities().unwrap().colors);
    }

    #[test]
    fn test_installed_uses_xdg_data_dirs() {
        let home = TempDir::new().unwrap();
        let system = TempDir::new().unwrap();
        package(home.path(), "user.desktop", None);
        package(system.path(), "system.desktop", None);

        let env: HashMap<String, String> = vec![
            ("XDG_DATA_HOME".to_string(), home.path().display().to_string()),
            ("XDG_DATA_DIRS".to_string(), system.path().display().to_string()),
        ]
        .into_iter()
        .collect();

        let names: Vec<String> = LookAndFeelPackage::installed(&env).iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["system.desktop", "user.desktop"]);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let tmp = TempDir::new().unwrap();
        let pkg = package(tmp.path(), "p", Some("[kcminputrc][Mouse]\ncursorTheme=\n"));

        assert_eq!(pkg.defaults().unwrap().unwrap().cursor_theme, None);
        assert_eq!(pkg.capabilities().unwrap(), Capabilities::default());
    }

    #[test]
    fn test_find_and_list() {
        let user = TempDir::new().unwrap();
        let system = TempDir::new().unwrap();
        package(user.path(), "b.desktop", None);
        package(system.path(), "a.desktop", None);
        package(system.path(), "b.desktop", None);
        fs::create_dir_all(system.path().join("plasma/look-and-feel/not-a-package")).unwrap();

        let dirs = vec![user.path().to_path_buf(), system.path().to_path_buf()];

        let found = LookAndFeelPackage::find("b.desktop", &dirs).unwrap();
        assert!(found.root().starts_with(user.path()));
        assert!(LookAndFeelPackage::find("not-a-package", &dirs).is_none());
        assert!(LookAndFeelPackage::find("../b.desktop", &dirs).is_none());

        let names: Vec<String> = LookAndFeelPackage::list(&dirs).iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["a.desktop", "b.desktop"]);
    }

    #[test]
    fn test_apply_look_and_feel() {
        let data = TempDir::new().unwrap();
        let icons = TempDir::new().unwrap();
        fs::create_dir_all(icons.path().join("breeze_cursors/cursors")).unwrap();
        fs::create_dir_all(data.path().join("color-schemes")).unwrap();
        fs::write(
            data.path().join("color-schemes/BreezeDark.colors"),
            "[Colors:Window]\nBackgroundNormal=32,35,38\n",
        )
        .unwrap();

        let pkg = package(data.path(), "org.kde.breezedark.desktop", Some(DEFAULTS));
        let resolver =
            ThemeResolver::with_search_paths(SearchPathProvider::from_paths(vec![icons.path()]));
        let mut store = MemoryConfigStore::new();
        let data_dirs: Vec<PathBuf> = vec![data.path().to_path_buf()];

        let report = apply_look_and_feel(
            &pkg,
            ApplyFlags::default(),
            &data_dirs,
            &resolver,
            &mut store,
            &mut NoNotifier,
        )
        .unwrap();

        assert_eq!(
            report.written,
            vec!["LookAndFeelPackage", "WidgetStyle", "ColorScheme", "IconTheme", "PlasmaTheme"]
        );
        assert_eq!(report.cursor, Some(ApplyOutcome::RestartRequired));

        assert_eq!(
            read(&store, KDEGLOBALS, &["KDE"], "LookAndFeelPackage").as_deref(),
            Some("org.kde.breezedark.desktop")
        );
        assert_eq!(read(&store, KDEGLOBALS, &["KDE"], "ColorScheme").as_deref(), Some("BreezeDark"));
        assert_eq!(
            read(&store, KDEGLOBALS, &["Colors:Window"], "BackgroundNormal").as_deref(),
            Some("32,35,38")
        );
        assert_eq!(read(&store, KDEGLOBALS, &["Icons"], "Theme").as_deref(), Some("breeze-dark"));
        assert_eq!(read(&store, PLASMARC, &["Theme"], "name").as_deref(), Some("breeze-dark"));
        assert_eq!(
            read(&store, KCMINPUTRC, &["Mouse"], "cursorTheme").as_deref(),
            Some("breeze_cursors")
        );
    }

    #[test]
    fn test_apply_respects_flags() {
        let data = TempDir::new().unwrap();
        let pkg = package(data.path(), "p", Some(DEFAULTS));
        let resolver = ThemeResolver::with_search_paths(SearchPathProvider::from_paths(Vec::<PathBuf>::new()));
        let mut store = MemoryConfigStore::new();

        let flags = ApplyFlags {
            colors: false,
            icons: false,
            cursors: false,
            ..ApplyFlags::default()
        };
        let report =
            apply_look_and_feel(&pkg, flags, &[], &resolver, &mut store, &mut NoNotifier).unwrap();

        assert_eq!(report.written, vec!["LookAndFeelPackage", "WidgetStyle", "PlasmaTheme"]);
        assert_eq!(report.cursor, None);
        assert_eq!(read(&store, KDEGLOBALS, &["Icons"], "Theme"), None);
        assert_eq!(read(&store, KCMINPUTRC, &["Mouse"], "cursorTheme"), None);
    }

    #[test]
    fn test_missing_color_scheme_is_skipped() {
        let data = TempDir::new().unwrap();
        let pkg = package(data.path(), "p", Some("[kdeglobals][KDE]\nColorScheme=Nowhere\n"));
        let resolver = ThemeResolver::with_search_paths(SearchPathProvider::from_paths(Vec::<PathBuf>::new()));
        let mut store = MemoryConfigStore::new();

        let report = apply_look_and_feel(
            &pkg,
            ApplyFlags::default(),
            &[data.path().to_path_buf()],
            &resolver,
            &mut store,
            &mut NoNotifier,
        )
        .unwrap();

        assert_eq!(report.written, vec!["LookAndFeelPackage"]);
        assert_eq!(read(&store, KDEGLOBALS, &["KDE"], "ColorScheme"), None);
    }

    #[test]
    fn test_invalid_package() {
        let tmp = TempDir::new().unwrap();
        let resolver = ThemeResolver::with_search_paths(SearchPathProvider::from_paths(Vec::<PathBuf>::new()));
        let mut store = MemoryConfigStore::new();

        let result = apply_look_and_feel(
            &LookAndFeelPackage::new(tmp.path().join("missing")),
            ApplyFlags::default(),
            &[],
            &resolver,
            &mut store,
            &mut NoNotifier,
        );
        assert!(matches!(result, Err(crate::Error::InvalidPackage(_))));
        assert!(store.file(KDEGLOBALS).is_none());
    }
}
