//! Recursive directory listing rendered with box-drawing branches.
//!
//! Directories are listed before files at every level and each group is
//! sorted by name, so the output is stable across platforms.

use crate::error::DataError;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One printed line below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Indentation inherited from the ancestors.
    pub prefix: String,
    /// Whether this is the last child of its parent.
    pub is_last: bool,
    pub kind: EntryKind,
    pub name: String,
}

impl TreeEntry {
    fn line(&self) -> String {
        let connector = if self.is_last { LAST_BRANCH } else { BRANCH };
        let icon = match self.kind {
            EntryKind::Dir => "📂",
            EntryKind::File => "📜",
        };
        format!("{}{}{} {}", self.prefix, connector, icon, self.name)
    }
}

/// Walk `root` recursively.
pub fn walk(root: &Path) -> Result<Vec<TreeEntry>, DataError> {
    let meta = fs::metadata(root).map_err(|e| DataError::from_io(root, e))?;
    if !meta.is_dir() {
        return Err(DataError::NotADirectory(root.to_path_buf()));
    }
    let mut out = Vec::new();
    walk_into(root, "", &mut out)?;
    Ok(out)
}

fn walk_into(dir: &Path, prefix: &str, out: &mut Vec<TreeEntry>) -> Result<(), DataError> {
    let mut dirs: Vec<(String, PathBuf)> = Vec::new();
    let mut files: Vec<String> = Vec::new();

    let entries = fs::read_dir(dir).map_err(|e| DataError::from_io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| DataError::from_io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        // Symlinks are leaves, even when they point at a directory.
        let file_type = entry.file_type().map_err(|e| DataError::from_io(entry.path(), e))?;
        if file_type.is_dir() {
            dirs.push((name, entry.path()));
        } else {
            files.push(name);
        }
    }
    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    files.sort();

    let total = dirs.len() + files.len();
    for (i, (name, path)) in dirs.into_iter().enumerate() {
        let is_last = i + 1 == total;
        out.push(TreeEntry {
            prefix: prefix.to_string(),
            is_last,
            kind: EntryKind::Dir,
            name,
        });
        let child_prefix = format!("{prefix}{}", if is_last { SPACE } else { PIPE });
        walk_into(&path, &child_prefix, out)?;
    }

    let offset = total - files.len();
    for (i, name) in files.into_iter().enumerate() {
        out.push(TreeEntry {
            prefix: prefix.to_string(),
            is_last: offset + i + 1 == total,
            kind: EntryKind::File,
            name,
        });
    }
    Ok(())
}

/// Display name of the root line: the last path component, or the path as
/// given when it has none (`.`, `/`).
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// Render the tree, one entry per line, with a trailing newline.
///
/// With `colorize`, the root and directories are blue and files green.
pub fn render(root_name: &str, entries: &[TreeEntry], colorize: bool) -> String {
    let mut s = String::new();
    let head = format!("📦 {root_name}");
    if colorize {
        s.push_str(&head.blue().to_string());
    } else {
        s.push_str(&head);
    }
    s.push('\n');

    for entry in entries {
        let line = entry.line();
        if colorize {
            let painted = match entry.kind {
                EntryKind::Dir => line.blue(),
                EntryKind::File => line.green(),
            };
            s.push_str(&painted.to_string());
        } else {
            s.push_str(&line);
        }
        s.push('\n');
    }
    s
}
