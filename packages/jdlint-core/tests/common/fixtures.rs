//! Temporary file trees

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A directory tree that is deleted when dropped.
pub struct TreeFixture {
    dir: TempDir,
}

impl TreeFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Create a directory and all its parents.
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.join(rel)).expect("create dir");
        self
    }

    /// Create an empty file, creating parents as needed.
    pub fn file(&self, rel: &str) -> &Self {
        self.write(rel, "")
    }

    pub fn write(&self, rel: &str, content: &str) -> &Self {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, content).expect("write file");
        self
    }
}

/// A small, fully valid primary tree.
pub fn clean_tree() -> TreeFixture {
    let tree = TreeFixture::new();
    tree.dir("10-19 Life Admin/11 Me/11.01 Inbox")
        .dir("10-19 Life Admin/11 Me/11.11 Passport")
        .dir("10-19 Life Admin/12 House/12.01 Inbox")
        .dir("20-29 Work/21 Projects/21.01 Inbox")
        .file("10-19 Life Admin/11 Me/11.11 Passport/scan.pdf");
    tree
}

/// Single-file JDex matching `clean_tree`.
pub const CLEAN_TREE_JDEX: &str = "\
# JDex

10-19 Life Admin
11 Me
11.01 Inbox
11.11 Passport   // renew 2030
12 House
12.01 Inbox

20-29 Work
21 Projects
21.01 Inbox
";

/// Strips every permission bit from a directory and restores it on drop.
#[cfg(unix)]
pub struct LockedDir {
    path: PathBuf,
}

#[cfg(unix)]
impl LockedDir {
    pub fn new(path: PathBuf) -> Self {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).expect("chmod 000");
        Self { path }
    }

    /// Privileged users can still list a locked directory.
    pub fn is_enforced(&self) -> bool {
        fs::read_dir(&self.path).is_err()
    }
}

#[cfg(unix)]
impl Drop for LockedDir {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o755));
    }
}
