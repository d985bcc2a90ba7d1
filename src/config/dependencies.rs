//! Dependency manifest parsing
//!
//! Strata treats the dependency manifest as opaque input for the base's
//! installer and only hashes it for layer identity. This parser exists
//! for display: `strata show` lists the entries a layer was built from.
//! It understands the common line-oriented format (one requirement per
//! line, `#` comments, `name==version` pins).

use serde::Serialize;

/// A single entry parsed from a dependency manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEntry {
    /// Requirement name
    pub name: String,

    /// Version constraint, e.g. `==2.31.0`, if the line carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

/// Version specifier operators, longest first so `==` wins over `=`
const SPECIFIERS: &[&str] = &["==", ">=", "<=", "~=", "!=", ">", "<", "="];

/// Parse dependency manifest content into entries
///
/// Blank lines and `#` comments are skipped. Lines that carry no
/// recognized version specifier become entries without a constraint.
pub fn parse_manifest(content: &str) -> Vec<DependencyEntry> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<DependencyEntry> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    // Strip trailing comments
    let line = match line.split_once(" #") {
        Some((head, _)) => head.trim(),
        None => line,
    };

    let split = SPECIFIERS
        .iter()
        .filter_map(|spec| line.find(spec).map(|idx| (idx, *spec)))
        .min_by_key(|(idx, _)| *idx);

    match split {
        Some((idx, _)) => {
            let name = line[..idx].trim();
            let constraint = line[idx..].trim();
            if name.is_empty() {
                return None;
            }
            Some(DependencyEntry {
                name: name.to_string(),
                constraint: Some(constraint.to_string()),
            })
        }
        None => Some(DependencyEntry {
            name: line.to_string(),
            constraint: None,
        }),
    }
}
