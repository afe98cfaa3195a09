use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use taskmaster_project::find_project_root;

/// Environment override for the project root.
pub const PROJECT_ROOT_ENV: &str = "TASK_MASTER_PROJECT_ROOT";

/// Resolves the project root from `--project-root`, then
/// `TASK_MASTER_PROJECT_ROOT`, then the nearest marked ancestor of the
/// working directory.
pub fn resolve_project_root(flag: Option<&Path>) -> Option<PathBuf> {
    let cwd = env::current_dir().ok();
    resolve_from(flag, env::var_os(PROJECT_ROOT_ENV), cwd.as_deref())
}

fn resolve_from(
    flag: Option<&Path>,
    env_value: Option<OsString>,
    cwd: Option<&Path>,
) -> Option<PathBuf> {
    let explicit = flag
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from));

    match explicit {
        Some(path) if path.is_relative() => cwd.map(|dir| dir.join(path)),
        Some(path) => Some(path),
        None => cwd.and_then(find_project_root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn flag_wins_over_environment() {
        let resolved = resolve_from(
            Some(Path::new("/work/flag")),
            Some(OsString::from("/work/env")),
            Some(Path::new("/work")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/work/flag")));
    }

    #[test]
    fn environment_used_when_flag_missing() {
        let resolved = resolve_from(None, Some(OsString::from("/work/env")), None);
        assert_eq!(resolved, Some(PathBuf::from("/work/env")));
    }

    #[test]
    fn empty_values_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join(".taskmaster")).unwrap();

        let resolved = resolve_from(
            Some(Path::new("")),
            Some(OsString::new()),
            Some(tmp.path()),
        );
        assert_eq!(resolved.as_deref(), Some(tmp.path()));
    }

    #[test]
    fn relative_paths_are_joined_to_cwd() {
        let resolved = resolve_from(Some(Path::new("app")), None, Some(Path::new("/work")));
        assert_eq!(resolved, Some(PathBuf::from("/work/app")));
    }

    #[test]
    fn falls_back_to_marker_search() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(".taskmasterconfig"), "{}").unwrap();
        let nested = tmp.path().join("src");
        fs::create_dir(&nested).unwrap();

        let resolved = resolve_from(None, None, Some(&nested));
        assert_eq!(resolved.as_deref(), Some(tmp.path()));
    }
}
