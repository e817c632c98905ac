#![allow(dead_code)]

pub mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Root configuration file name used by every fixture
    pub const ROOT: &str = "muxc.yaml";

    fn fixtures_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
    }

    fn copy_dir(from: &Path, to: &Path) {
        fs::create_dir_all(to).unwrap();
        for entry in fs::read_dir(from).unwrap() {
            let entry = entry.unwrap();
            let target = to.join(entry.file_name());
            if entry.file_type().unwrap().is_dir() {
                copy_dir(&entry.path(), &target);
            } else {
                fs::copy(entry.path(), &target).unwrap();
            }
        }
    }

    /// Copies `tests/fixtures/<name>` into a fresh scratch directory
    ///
    /// Generation writes next to the configuration, so tests never run against the
    /// checked-in tree directly.
    pub fn scratch_copy(name: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        copy_dir(&fixtures_dir().join(name), dir.path());
        dir
    }
}

pub mod temp_files {
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Writes `content` to `dir/name`, creating parent directories
    pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
