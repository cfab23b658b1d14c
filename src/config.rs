//! Persistent settings, stored as KConfig style INI files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ini::IniFile;

/// Settings file holding input device settings, including the cursor theme.
pub const KCMINPUTRC: &str = "kcminputrc";
/// Settings file holding global appearance settings.
pub const KDEGLOBALS: &str = "kdeglobals";
/// Settings file holding the desktop theme.
pub const PLASMARC: &str = "plasmarc";

/// A setting, addressed by the file, group and key it is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    /// A short name for reports and logs.
    pub name: &'static str,
    pub file: &'static str,
    pub group: &'static [&'static str],
    pub key: &'static str,
}

impl Setting {
    /// The group of this setting inside a file that bundles several
    /// settings files, like a look-and-feel `defaults` file:
    /// `[kcminputrc][Mouse]` instead of `[Mouse]`.
    pub fn bundled_group(&self) -> Vec<&'static str> {
        let mut group = Vec::with_capacity(self.group.len() + 1);
        group.push(self.file);
        group.extend_from_slice(self.group);
        group
    }
}

pub const CURSOR_THEME: Setting = Setting {
    name: "CursorTheme",
    file: KCMINPUTRC,
    group: &["Mouse"],
    key: "cursorTheme",
};

pub const LOOK_AND_FEEL_PACKAGE: Setting = Setting {
    name: "LookAndFeelPackage",
    file: KDEGLOBALS,
    group: &["KDE"],
    key: "LookAndFeelPackage",
};

pub const WIDGET_STYLE: Setting = Setting {
    name: "WidgetStyle",
    file: KDEGLOBALS,
    group: &["KDE"],
    key: "widgetStyle",
};

pub const COLOR_SCHEME: Setting = Setting {
    name: "ColorScheme",
    file: KDEGLOBALS,
    group: &["KDE"],
    key: "ColorScheme",
};

pub const ICON_THEME: Setting = Setting {
    name: "IconTheme",
    file: KDEGLOBALS,
    group: &["Icons"],
    key: "Theme",
};

pub const PLASMA_THEME: Setting = Setting {
    name: "PlasmaTheme",
    file: PLASMARC,
    group: &["Theme"],
    key: "name",
};

/// A key/value settings store, organised in files and groups.
///
/// Writes may be buffered until [`sync`](Self::sync) is called for the file.
pub trait ConfigStore {
    fn read_entry(&self, file: &str, group: &[&str], key: &str) -> Result<Option<String>>;

    fn write_entry(&mut self, file: &str, group: &[&str], key: &str, value: &str) -> Result<()>;

    fn sync(&mut self, file: &str) -> Result<()>;

    fn read_setting(&self, setting: &Setting) -> Result<Option<String>> {
        self.read_entry(setting.file, setting.group, setting.key)
    }

    fn write_setting(&mut self, setting: &Setting, value: &str) -> Result<()> {
        self.write_entry(setting.file, setting.group, setting.key, value)
    }
}

/// Settings kept in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    files: HashMap<String, IniFile>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The contents of `file`, if anything was written to it.
    pub fn file(&self, file: &str) -> Option<&IniFile> {
        self.files.get(file)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn read_entry(&self, file: &str, group: &[&str], key: &str) -> Result<Option<String>> {
        Ok(self
            .files
            .get(file)
            .and_then(|doc| doc.read_entry(group, key))
            .map(String::from))
    }

    fn write_entry(&mut self, file: &str, group: &[&str], key: &str, value: &str) -> Result<()> {
        self.files
            .entry(file.to_string())
            .or_default()
            .set_entry(group, key, value);
        Ok(())
    }

    fn sync(&mut self, _file: &str) -> Result<()> {
        Ok(())
    }
}

/// Settings stored as files in a directory, `~/.config` by default.
///
/// A file is read on first access and written back on `sync`.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    root: PathBuf,
    open: HashMap<String, IniFile>,
}

impl FileConfigStore {
    /// A store in the user's configuration directory, if there is one.
    pub fn user() -> Option<Self> {
        dirs::config_dir().map(FileConfigStore::at)
    }

    /// A store in `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        FileConfigStore {
            root: root.into(),
            open: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    fn load(&self, file: &str) -> Result<IniFile> {
        let path = self.path(file);
        if path.exists() {
            IniFile::load(&path)
        } else {
            Ok(IniFile::new())
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn read_entry(&self, file: &str, group: &[&str], key: &str) -> Result<Option<String>> {
        if let Some(doc) = self.open.get(file) {
            return Ok(doc.read_entry(group, key).map(String::from));
        }

        Ok(self.load(file)?.read_entry(group, key).map(String::from))
    }

    fn write_entry(&mut self, file: &str, group: &[&str], key: &str, value: &str) -> Result<()> {
        if !self.open.contains_key(file) {
            let doc = self.load(file)?;
            self.open.insert(file.to_string(), doc);
        }

        if let Some(doc) = self.open.get_mut(file) {
            doc.set_entry(group, key, value);
        }
        Ok(())
    }

    fn sync(&mut self, file: &str) -> Result<()> {
        match self.open.get(file) {
            Some(doc) => {
                let path = self.path(file);
                tracing::trace!(target: "cursor_theme::config", ?path, "writing settings");
                doc.save(path)
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigStore, FileConfigStore, MemoryConfigStore, CURSOR_THEME, KCMINPUTRC};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryConfigStore::new();
        assert_eq!(store.read_entry(KCMINPUTRC, &["Mouse"], "cursorTheme").unwrap(), None);

        store.write_setting(&CURSOR_THEME, "breeze_cursors").unwrap();
        assert_eq!(
            store.read_entry(KCMINPUTRC, &["Mouse"], "cursorTheme").unwrap(),
            Some(String::from("breeze_cursors"))
        );
        assert_eq!(
            store.read_setting(&CURSOR_THEME).unwrap(),
            Some(String::from("breeze_cursors"))
        );
    }

    #[test]
    fn test_bundled_group() {
        assert_eq!(CURSOR_THEME.bundled_group(), vec!["kcminputrc", "Mouse"]);
    }

    #[test]
    fn test_file_store_keeps_other_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(KCMINPUTRC),
            "[Mouse]\ncursorSize=24\ncursorTheme=old\n\n[Keyboard]\nRepeatRate=25\n",
        )
        .unwrap();

        let mut store = FileConfigStore::at(tmp.path());
        store
            .write_entry(KCMINPUTRC, &["Mouse"], "cursorTheme", "breeze_cursors")
            .unwrap();

        // Nothing is written before syncing.
        let on_disk = fs::read_to_string(tmp.path().join(KCMINPUTRC)).unwrap();
        assert!(on_disk.contains("cursorTheme=old"));

        store.sync(KCMINPUTRC).unwrap();
        let on_disk = fs::read_to_string(tmp.path().join(KCMINPUTRC)).unwrap();
        assert_eq!(
            on_disk,
            "[Mouse]\ncursorSize=24\ncursorTheme=breeze_cursors\n\n[Keyboard]\nRepeatRate=25\n"
        );
    }

    #[test]
    fn test_file_store_creates_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("config");

        let mut store = FileConfigStore::at(&root);
        store.write_entry("plasmarc", &["Theme"], "name", "breeze-dark").unwrap();
        store.sync("plasmarc").unwrap();

        let reopened = FileConfigStore::at(&root);
        assert_eq!(
            reopened.read_entry("plasmarc", &["Theme"], "name").unwrap(),
            Some(String::from("breeze-dark"))
        );
    }

    #[test]
    fn test_file_store_reports_unusable_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(KCMINPUTRC), "not an ini file\n").unwrap();

        let mut store = FileConfigStore::at(tmp.path());
        assert!(store.write_entry(KCMINPUTRC, &["Mouse"], "cursorTheme", "x").is_err());
    }

    #[test]
    fn test_file_store_writes_past_stray_lines() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(KCMINPUTRC), "[Mouse]\ncursorTheme=old\nstray\n").unwrap();

        let mut store = FileConfigStore::at(tmp.path());
        store.write_setting(&CURSOR_THEME, "breeze_cursors").unwrap();
        store.sync(KCMINPUTRC).unwrap();

        let reopened = FileConfigStore::at(tmp.path());
        assert_eq!(
            reopened.read_setting(&CURSOR_THEME).unwrap(),
            Some(String::from("breeze_cursors"))
        );
    }
}
