//! Editor version metadata.
//!
//! Unity records the editor version a project was last opened with in
//! `ProjectSettings/ProjectVersion.txt`:
//!
//! ```text
//! m_EditorVersion: 2020.3.1f1
//! m_EditorVersionWithRevision: 2020.3.1f1 (77a89f25062f)
//! ```
//!
//! Only the plain `m_EditorVersion` value is of interest; it selects the
//! editor installation used for the build.

use std::path::Path;

use crate::project::ProjectError;

/// Version metadata file, relative to the project root.
pub const VERSION_FILE: &str = "ProjectSettings/ProjectVersion.txt";

/// Label preceding the version token.
const VERSION_LABEL: &str = "m_EditorVersion:";

/// Read the editor version from a project directory.
pub fn read_project_version(project_root: &Path) -> Result<String, ProjectError> {
    let path = project_root.join(VERSION_FILE);

    if !path.is_file() {
        return Err(ProjectError::NotFound { path });
    }

    let text = std::fs::read_to_string(&path).map_err(|source| ProjectError::Io {
        path: path.clone(),
        source,
    })?;

    parse_version(&text).ok_or_else(|| ProjectError::Parse {
        path,
        message: format!("no {VERSION_LABEL:?} entry"),
    })
}

/// Extract the version token following the label, up to the line break.
fn parse_version(text: &str) -> Option<String> {
    let rest = text
        .lines()
        .find_map(|line| line.strip_prefix(VERSION_LABEL))?;
    let version = rest.trim();
    if version.is_empty() {
        return None;
    }
    Some(version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_metadata_exactly() {
        assert_eq!(
            parse_version("m_EditorVersion: 2020.3.1f1\n").as_deref(),
            Some("2020.3.1f1")
        );
    }

    #[test]
    fn ignores_the_revision_line() {
        let text = "m_EditorVersion: 2021.2.7f1\n\
                    m_EditorVersionWithRevision: 2021.2.7f1 (6bd9e232123f)\n";
        assert_eq!(parse_version(text).as_deref(), Some("2021.2.7f1"));
    }

    #[test]
    fn rejects_metadata_without_the_label() {
        assert_eq!(parse_version("EditorOnly: nothing useful\n"), None);
        assert_eq!(parse_version("m_EditorVersion:\n"), None);
    }

    #[test]
    fn missing_file_is_a_not_found_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_project_version(dir.path()).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("ProjectSettings")).unwrap();
        std::fs::write(
            dir.path().join(VERSION_FILE),
            "this file has no version entry\n",
        )
        .unwrap();

        let err = read_project_version(dir.path()).unwrap_err();
        assert!(matches!(err, ProjectError::Parse { .. }));
    }
}
