//! Filesystem entry metadata types.

use serde::{Deserialize, Serialize};

/// Kind of a filesystem entry as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Regular file
    File,
    /// Directory
    Dir,
}

impl FileType {
    /// Create from the wire-level integer type value.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(FileType::File),
            2 => Some(FileType::Dir),
            _ => None,
        }
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        *self == FileType::File
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        *self == FileType::Dir
    }
}

/// Metadata snapshot for one entry on the host. Owned by the caller
/// once returned; never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInfo {
    /// Entry name (final path component)
    pub name: String,
    /// Absolute path on the host
    pub path: String,
    /// File or directory
    #[serde(rename = "type")]
    pub kind: FileType,
}

impl EntryInfo {
    /// Build an entry from its absolute path and kind, deriving the
    /// name from the final path component.
    pub fn new(path: impl Into<String>, kind: FileType) -> Self {
        let path = path.into();
        let name = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
            .to_string();
        Self { name, path, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_conversion() {
        assert_eq!(FileType::from_i32(1), Some(FileType::File));
        assert_eq!(FileType::from_i32(2), Some(FileType::Dir));
        assert_eq!(FileType::from_i32(0), None);
        assert_eq!(FileType::from_i32(99), None);
    }

    #[test]
    fn test_file_type_properties() {
        assert!(FileType::File.is_file());
        assert!(!FileType::File.is_dir());
        assert!(FileType::Dir.is_dir());
        assert!(!FileType::Dir.is_file());
    }

    #[test]
    fn test_entry_name_from_path() {
        let entry = EntryInfo::new("/home/user/report.txt", FileType::File);
        assert_eq!(entry.name, "report.txt");
        assert_eq!(entry.path, "/home/user/report.txt");

        let dir = EntryInfo::new("/var/log/", FileType::Dir);
        assert_eq!(dir.name, "log");
    }

    #[test]
    fn test_entry_wire_decoding() {
        let json = r#"{"name": "d", "path": "/tmp/d", "type": "dir"}"#;
        let entry: EntryInfo = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "d");
        assert_eq!(entry.path, "/tmp/d");
        assert!(entry.kind.is_dir());
    }
}
