use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;

use wardrobe_domain::KeyValueStore;

/// One file per key under `dir`. The store layer is synchronous, so this
/// adapter uses blocking I/O.
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create {}", self.dir.display()))?;
        let path = self.path_for(key);
        // write-then-rename so a crash never leaves a half-written snapshot
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).with_context(|| format!("write {}", staging.display()))?;
        fs::rename(&staging, &path).with_context(|| format!("replace {}", path.display()))?;
        Ok(())
    }
}
