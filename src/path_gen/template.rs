//! Path template substitution
//!
//! This module resolves a path template against the components of a file name.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::components::FileComponents;

/// Matches `$(compN)` and `$(ext)`; the closing parenthesis anchors the index
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\((?:comp(\d+)|ext)\)").expect("Failed to compile regex pattern for PLACEHOLDER")
});

/// Substitutes component and extension placeholders in a template
///
/// `$(compI)` becomes `components[I]` and `$(ext)` becomes `extension`. A
/// placeholder without a value (index out of range, no extension) is left as
/// written. The template is scanned once, so substituted text is never
/// interpreted as a placeholder.
///
/// # Examples
/// ```
/// use copy_rename::path_gen::substitute;
///
/// let components = vec!["A".to_string(), "B".to_string()];
/// let resolved = substitute(r"$(comp0)\$(comp1).$(ext)", &components, Some("txt"));
/// assert_eq!(resolved, r"A\B.txt");
/// ```
pub fn substitute(template: &str, components: &[String], extension: Option<&str>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let value = match caps.get(1) {
                Some(index) => index
                    .as_str()
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| components.get(index))
                    .map(String::as_str),
                None => extension,
            };
            value.unwrap_or(&caps[0]).to_string()
        })
        .into_owned()
}

/// A substituted template split into directory segments and a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// The substituted template before splitting
    pub raw: String,
    /// Directory segments below the target root, outermost first
    pub directories: Vec<String>,
    /// Name of the target file
    pub file_name: String,
}

impl ResolvedPath {
    /// Splits a substituted template on the directory separator
    pub fn split(raw: String, directory_separator: &str) -> Self {
        let mut segments: Vec<String> = raw.split(directory_separator).map(str::to_string).collect();
        let file_name = segments.pop().unwrap_or_default();

        ResolvedPath {
            raw,
            directories: segments,
            file_name,
        }
    }
}

/// A path template together with its directory separator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    syntax: String,
    directory_separator: String,
}

impl PathTemplate {
    pub fn new(syntax: &str, directory_separator: &str) -> Self {
        PathTemplate {
            syntax: syntax.to_string(),
            directory_separator: directory_separator.to_string(),
        }
    }

    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    /// Resolves the template for one parsed file name
    pub fn resolve(&self, parsed: &FileComponents) -> ResolvedPath {
        let raw = substitute(&self.syntax, &parsed.components, parsed.extension.as_deref());
        ResolvedPath::split(raw, &self.directory_separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_gen::parse_components;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_substitute_components_and_extension() {
        let resolved = substitute(r"$(comp0)\$(comp1).$(ext)", &strings(&["A", "B"]), Some("txt"));
        assert_eq!(resolved, r"A\B.txt");
    }

    #[test]
    fn test_repeated_placeholders() {
        let resolved = substitute("$(comp0)/$(comp0)-$(comp1)", &strings(&["x", "y"]), None);
        assert_eq!(resolved, "x/x-y");
    }

    #[test]
    fn test_index_is_anchored() {
        let components = strings(&["c0", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8", "c9", "c10"]);

        let resolved = substitute("$(comp1)|$(comp10)", &components, None);
        assert_eq!(resolved, "c1|c10");
    }

    #[test]
    fn test_missing_extension_is_left_unresolved() {
        let resolved = substitute("$(comp0).$(ext)", &strings(&["A"]), None);
        assert_eq!(resolved, "A.$(ext)");
    }

    #[test]
    fn test_out_of_range_index_is_left_unresolved() {
        let resolved = substitute("$(comp0)_$(comp3)", &strings(&["A", "B"]), None);
        assert_eq!(resolved, "A_$(comp3)");
    }

    #[test]
    fn test_substituted_text_is_not_rescanned() {
        let resolved = substitute("$(comp0)-$(comp1)", &strings(&["$(comp1)", "$5"]), None);
        assert_eq!(resolved, "$(comp1)-$5");
    }

    #[test]
    fn test_empty_components_leave_template_untouched() {
        let resolved = substitute("fixed/$(comp0)", &[], None);
        assert_eq!(resolved, "fixed/$(comp0)");
    }

    #[test]
    fn test_resolve_splits_directories() {
        let template = PathTemplate::new(r"$(comp0)\$(comp1)\$(comp2).$(ext)", "\\");
        let resolved = template.resolve(&parse_components("2024_05_scan.pdf", "_"));

        assert_eq!(resolved.raw, r"2024\05\scan.pdf");
        assert_eq!(resolved.directories, strings(&["2024", "05"]));
        assert_eq!(resolved.file_name, "scan.pdf");
    }

    #[test]
    fn test_resolve_without_directories() {
        let template = PathTemplate::new("$(comp1)-$(comp0).$(ext)", "\\");
        let resolved = template.resolve(&parse_components("A_B.txt", "_"));

        assert!(resolved.directories.is_empty());
        assert_eq!(resolved.file_name, "B-A.txt");
    }

    #[test]
    fn test_custom_directory_separator() {
        let resolved = ResolvedPath::split("a|b|c.txt".to_string(), "|");

        assert_eq!(resolved.directories, strings(&["a", "b"]));
        assert_eq!(resolved.file_name, "c.txt");
    }
}
