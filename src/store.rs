/// Store is the key-value port the session persists games through. Keys are already scoped to
/// a player identity by the caller; values are opaque bytes (JSON in practice).
use anyhow::Context;
use std::{collections::HashMap, future::Future, io::ErrorKind, path::PathBuf, sync::Arc};
use tokio::{
    fs::{self, File},
    io::{AsyncReadExt, AsyncWriteExt},
    sync::RwLock,
};

pub trait Store: Send + Sync + 'static {
    /// Returns the value saved under `key`, or None if nothing was saved.
    fn load(&self, key: &str) -> impl Future<Output = anyhow::Result<Option<Vec<u8>>>> + Send;

    fn save(&self, key: &str, data: Vec<u8>) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// FileStore keeps one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    save_dir: PathBuf,
}

impl FileStore {
    pub fn new(save_dir: impl Into<PathBuf>) -> FileStore {
        FileStore {
            save_dir: save_dir.into(),
        }
    }

    /// Maps a key to its file. ASCII letters, digits and `-` are kept as is, every other byte
    /// is written as `_XX`, so two keys never share a file.
    fn path(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len());
        for b in key.bytes() {
            if b.is_ascii_alphanumeric() || b == b'-' {
                name.push(b as char);
            } else {
                name.push_str(&format!("_{:02X}", b));
            }
        }
        self.save_dir.join(format!("{}.json", name))
    }
}

impl Store for FileStore {
    async fn load(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        let filename = self.path(key);

        let mut file = match File::open(&filename).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).context(format!("Error opening file {}", filename.display()))
            }
        };

        let mut contents = vec![];
        file.read_to_end(&mut contents)
            .await
            .context(format!("Error reading file {}", filename.display()))?;

        Ok(Some(contents))
    }

    async fn save(&self, key: &str, data: Vec<u8>) -> anyhow::Result<()> {
        fs::create_dir_all(&self.save_dir)
            .await
            .context(format!("Error creating directory {}", self.save_dir.display()))?;

        let filename = self.path(key);
        let mut file = File::create(&filename)
            .await
            .context(format!("Error creating file {}", filename.display()))?;

        file.write_all(&data)
            .await
            .context(format!("Error writing file {}", filename.display()))?;
        file.flush()
            .await
            .context(format!("Error flushing file {}", filename.display()))
    }
}

/// MemoryStore keeps values in process memory. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.entries.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Store for MemoryStore {
    async fn load(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, data: Vec<u8>) -> anyhow::Result<()> {
        self.entries.write().await.insert(key.to_string(), data);
        Ok(())
    }
}
