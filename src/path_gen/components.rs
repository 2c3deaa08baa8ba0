//! File name decomposition
//!
//! This module splits a file name into its positional components and extension.

use crate::constants::EXTENSION_SEPARATOR;

/// A file name split into positional components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileComponents {
    /// Components in file name order, the extension removed from the last one
    pub components: Vec<String>,
    /// Text after the last `.`, if the name has one
    pub extension: Option<String>,
}

impl FileComponents {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns true if the file name has exactly `expected` components
    ///
    /// Names failing this check are left out of the target structure.
    pub fn has_component_count(&self, expected: usize) -> bool {
        self.components.len() == expected
    }
}

/// Splits a file name into components and extension
///
/// The whole name is split on `separator`. Independently, the extension is the
/// part after the last `.`; when there is one, `.` plus the extension is
/// removed from the end of the last component.
///
/// # Examples
/// ```
/// use copy_rename::path_gen::parse_components;
///
/// let parsed = parse_components("2024_report_final.pdf", "_");
/// assert_eq!(parsed.components, vec!["2024", "report", "final"]);
/// assert_eq!(parsed.extension.as_deref(), Some("pdf"));
/// ```
pub fn parse_components(file_name: &str, separator: &str) -> FileComponents {
    let mut components: Vec<String> = file_name.split(separator).map(str::to_string).collect();

    let extension = file_name
        .rsplit_once(EXTENSION_SEPARATOR)
        .map(|(_, extension)| extension.to_string());

    if let (Some(extension), Some(last)) = (&extension, components.last_mut()) {
        let suffix = format!("{EXTENSION_SEPARATOR}{extension}");
        if let Some(stem) = last.strip_suffix(suffix.as_str()) {
            *last = stem.to_string();
        }
    }

    FileComponents {
        components,
        extension,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_components_with_extension() {
        let parsed = parse_components("A_B.txt", "_");

        assert_eq!(parsed.components, vec!["A", "B"]);
        assert_eq!(parsed.extension.as_deref(), Some("txt"));
        assert!(parsed.has_component_count(2));
        assert!(!parsed.has_component_count(3));
    }

    #[test]
    fn test_no_extension() {
        let parsed = parse_components("A_B_C", "_");

        assert_eq!(parsed.components, vec!["A", "B", "C"]);
        assert_eq!(parsed.extension, None);
    }

    #[test]
    fn test_only_last_dot_is_the_extension() {
        let parsed = parse_components("v1.2_notes.tar.gz", "_");

        assert_eq!(parsed.components, vec!["v1.2", "notes.tar"]);
        assert_eq!(parsed.extension.as_deref(), Some("gz"));
    }

    #[test]
    fn test_multi_character_separator() {
        let parsed = parse_components("Artist - Album - 01.flac", " - ");

        assert_eq!(parsed.components, vec!["Artist", "Album", "01"]);
        assert_eq!(parsed.extension.as_deref(), Some("flac"));
    }

    #[test]
    fn test_separator_absent_gives_single_component() {
        let parsed = parse_components("readme.md", "_");

        assert_eq!(parsed.components, vec!["readme"]);
        assert_eq!(parsed.len(), 1);
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_dot_as_separator_keeps_last_component() {
        // The last component is the extension itself, so nothing is stripped
        let parsed = parse_components("a.b.txt", ".");

        assert_eq!(parsed.components, vec!["a", "b", "txt"]);
        assert_eq!(parsed.extension.as_deref(), Some("txt"));
    }
}
