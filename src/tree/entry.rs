//! Entry records produced by the traversal

use std::ffi::OsStr;
use std::fs::FileType;
use std::path::PathBuf;

/// What kind of filesystem object an entry is. Symlinks are never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Other,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Dir)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Dir => "dir",
            EntryKind::Symlink => "symlink",
            EntryKind::Other => "other",
        }
    }
}

impl From<FileType> for EntryKind {
    fn from(ft: FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// One retained directory entry, in depth-first pre-order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// 0 for the root's direct children
    pub depth: usize,
    /// Raw metadata length, only collected when sizes are requested.
    /// For directories this is the inode size, not the size of the contents.
    pub size: Option<u64>,
    /// Last among its siblings after filtering
    pub is_last: bool,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

/// Display name for a raw file name.
///
/// Valid UTF-8 is kept verbatim. Otherwise the name is escaped so distinct raw
/// names stay distinct: undecodable bytes become `\xNN` (UTF-16 surrogates on
/// Windows become `\u{NNNN}`) and literal backslashes are doubled.
pub(super) fn entry_name(raw: &OsStr) -> String {
    match raw.to_str() {
        Some(name) => name.to_owned(),
        None => escape_undecodable(raw),
    }
}

fn push_escaped_char(out: &mut String, c: char) {
    if c == '\\' {
        out.push_str("\\\\");
    } else {
        out.push(c);
    }
}

#[cfg(unix)]
fn escape_undecodable(raw: &OsStr) -> String {
    use std::os::unix::ffi::OsStrExt;

    let mut out = String::new();
    for chunk in raw.as_bytes().utf8_chunks() {
        chunk.valid().chars().for_each(|c| push_escaped_char(&mut out, c));
        for byte in chunk.invalid() {
            out.push_str(&format!("\\x{byte:02x}"));
        }
    }
    out
}

#[cfg(windows)]
fn escape_undecodable(raw: &OsStr) -> String {
    use std::os::windows::ffi::OsStrExt;

    let mut out = String::new();
    for unit in char::decode_utf16(raw.encode_wide()) {
        match unit {
            Ok(c) => push_escaped_char(&mut out, c),
            Err(e) => out.push_str(&format!("\\u{{{:04x}}}", e.unpaired_surrogate())),
        }
    }
    out
}

#[cfg(not(any(unix, windows)))]
fn escape_undecodable(raw: &OsStr) -> String {
    raw.to_string_lossy().chars().fold(String::new(), |mut out, c| {
        push_escaped_char(&mut out, c);
        out
    })
}
