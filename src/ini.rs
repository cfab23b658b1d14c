//! A small reader and writer for the INI dialect shared by `index.theme`
//! files, look-and-feel `defaults` files and KConfig style settings files.
//!
//! Groups can be nested by chaining bracketed names in a header:
//! `[kcminputrc][Mouse]` opens the group `kcminputrc/Mouse`.

use std::fmt;
use std::fs;
use std::path::Path;

use nom::{
    branch::alt,
    bytes::complete::is_not,
    character::complete::char,
    combinator::{all_consuming, map, rest},
    multi::many1,
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    Group(Vec<&'a str>),
    Entry(&'a str, &'a str),
}

fn group_header(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(many1(delimited(char('['), is_not("]"), char(']'))))(input)
}

fn entry(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(is_not("="), char('='), rest)(input)
}

fn line(input: &str) -> IResult<&str, Line<'_>> {
    alt((
        map(group_header, Line::Group),
        map(entry, |(key, value)| Line::Entry(key.trim(), value.trim())),
    ))(input)
}

/// A group of entries, addressed by its (possibly nested) path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Group {
    path: Vec<String>,
    entries: Vec<(String, String)>,
}

impl Group {
    fn is(&self, path: &[&str]) -> bool {
        self.path.len() == path.len() && self.path.iter().zip(path).all(|(a, b)| a == b)
    }
}

/// A parsed INI document.
///
/// Group and entry order is preserved, so that writing a document
/// back changes only what was explicitly set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IniFile {
    groups: Vec<Group>,
}

impl IniFile {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document.
    ///
    /// Blank lines and lines starting with `#` or `;` are ignored. Entries that
    /// appear before the first header belong to the root group (`&[]`).
    /// A header repeated later in the file continues the earlier group.
    ///
    /// Lines that are neither a header nor an entry are skipped. Only a
    /// document made of nothing but such lines is an error.
    pub fn parse(content: &str) -> Result<Self> {
        let mut doc = IniFile::new();
        let mut current: Vec<String> = Vec::new();
        let mut recognised = 0;
        let mut first_invalid = None;

        for (idx, raw) in content.lines().enumerate() {
            let text = raw.trim_start_matches('\u{feff}').trim();

            if text.is_empty() || text.starts_with('#') || text.starts_with(';') {
                continue;
            }

            match line(text) {
                Ok((_, Line::Group(path))) => {
                    current = path.iter().map(|s| s.trim().to_string()).collect();
                    let borrowed: Vec<&str> = current.iter().map(String::as_str).collect();
                    doc.group_mut(&borrowed);
                    recognised += 1;
                }
                Ok((_, Line::Entry(key, value))) if !key.is_empty() => {
                    let borrowed: Vec<&str> = current.iter().map(String::as_str).collect();
                    doc.set_entry(&borrowed, key, value);
                    recognised += 1;
                }
                _ => {
                    tracing::debug!(
                        target: "cursor_theme::ini",
                        line = idx + 1,
                        "skipping invalid line '{}'",
                        text
                    );
                    first_invalid.get_or_insert((idx + 1, text));
                }
            }
        }

        match first_invalid {
            Some((line, text)) if recognised == 0 => Err(Error::parse(
                line,
                format!("expected a group header or key=value, found '{}'", text),
            )),
            _ => Ok(doc),
        }
    }

    /// Reads and parses the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        IniFile::parse(&content)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(path, self.to_string()).map_err(|e| Error::io(path, e))
    }

    /// Returns the value of `key` in `group`, if present.
    pub fn read_entry(&self, group: &[&str], key: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|g| g.is(group))?
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value of `key` in `group` as a list.
    ///
    /// Items are separated by `,` or `;`; surrounding whitespace and empty
    /// items are dropped. A missing key is an empty list.
    pub fn read_list(&self, group: &[&str], key: &str) -> Vec<String> {
        self.read_entry(group, key)
            .map(|value| {
                value
                    .split(|c: char| c == ',' || c == ';')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sets `key` in `group` to `value`, creating the group if needed.
    /// An existing entry keeps its position.
    pub fn set_entry(&mut self, group: &[&str], key: &str, value: &str) {
        let group = self.group_mut(group);

        match group.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => group.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Returns the entries of `group`, in document order.
    pub fn entries(&self, group: &[&str]) -> impl Iterator<Item = (&str, &str)> {
        self.groups
            .iter()
            .find(|g| g.is(group))
            .into_iter()
            .flat_map(|g| g.entries.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the paths of all groups, in document order.
    pub fn groups(&self) -> impl Iterator<Item = Vec<&str>> {
        self.groups
            .iter()
            .map(|g| g.path.iter().map(String::as_str).collect())
    }

    fn group_mut(&mut self, path: &[&str]) -> &mut Group {
        let idx = match self.groups.iter().position(|g| g.is(path)) {
            Some(idx) => idx,
            None => {
                self.groups.push(Group {
                    path: path.iter().map(|s| s.to_string()).collect(),
                    entries: Vec::new(),
                });
                self.groups.len() - 1
            }
        };

        &mut self.groups[idx]
    }
}

impl fmt::Display for IniFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        // The root group has no header, so it has to come first.
        let root = self.groups.iter().filter(|g| g.path.is_empty());
        let named = self.groups.iter().filter(|g| !g.path.is_empty());

        for group in root.chain(named) {
            if !first {
                writeln!(f)?;
            }
            first = false;

            if !group.path.is_empty() {
                for name in &group.path {
                    write!(f, "[{}]", name)?;
                }
                writeln!(f)?;
            }

            for (key, value) in &group.entries {
                writeln!(f, "{}={}", key, value)?;
            }
        }

        Ok(())
    }
}
