mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{config_dir, config_file, cookie_dir, data_dir, resolve_data_dir};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn config_dir_ends_with_panegrid() {
        let path = config_dir().unwrap();
        assert!(
            path.ends_with("panegrid"),
            "config_dir should end with 'panegrid', got: {path:?}"
        );
    }

    #[test]
    fn data_dir_ends_with_panegrid() {
        let path = data_dir().unwrap();
        assert!(path.ends_with("panegrid"), "got: {path:?}");
    }

    #[test]
    fn config_file_has_correct_name() {
        let path = config_file().unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "config.toml");
        assert!(path.parent().unwrap().ends_with("panegrid"));
    }

    #[test]
    fn override_wins_over_platform_data_dir() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/pg-data"))).unwrap();
        assert_eq!(dir, Path::new("/tmp/pg-data"));
        assert!(resolve_data_dir(None).unwrap().ends_with("panegrid"));
    }

    #[test]
    fn cookie_dir_is_inside_data_root() {
        let root = Path::new("/srv/panegrid");
        assert_eq!(cookie_dir(root), Path::new("/srv/panegrid/cookies"));
    }

    #[test]
    fn ensure_dirs_creates_cookie_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("data");
        // config_dir may be unavailable in sandboxed CI
        if ensure_dirs(&root).is_ok() {
            assert!(cookie_dir(&root).is_dir());
        }
    }
}
