use crate::api::StorefrontApi;
use crate::store::fs_backend::FsStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Held so the directory outlives the test
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn store(&self) -> FsStore {
        FsStore::new(self.root.clone())
    }

    /// Opens a fresh session over the same directory, like reloading the page.
    pub fn open(&self) -> StorefrontApi<FsStore> {
        StorefrontApi::open(self.store()).expect("failed to open storefront")
    }
}
