//! フラットJSONファイルの永続化層
//!
//! 各ストアはJSONファイル1つを専有する。読み込み・変更・書き込みは
//! ストア単位の排他ロックで直列化し、書き込みは一時ファイル経由の
//! renameでアトミックに行う（読み書き競合による更新消失の防止）。

pub mod credentials;
pub mod feedback;

pub use credentials::CredentialStore;
pub use feedback::{FeedbackLog, FeedbackRecord};

use crate::error::{FashionError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;

fn storage_err(context: &str, err: impl std::fmt::Display) -> FashionError {
    FashionError::Storage(format!("{}: {}", context, err))
}

/// 排他ロック付きのJSONファイルストア
///
/// ファイルが存在しない場合は `T::default()` として読み出す。
/// 破損したJSONは黙って初期化せず `Storage` エラーにする。
pub struct JsonFile<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned + Default> JsonFile<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// 現在の内容を読み出す
    pub fn load(&self) -> Result<T> {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.read_unlocked()
    }

    /// ロックを保持したまま読み込み→変更→アトミック書き込み
    ///
    /// `mutate` がエラーを返した場合はファイルを書き換えない。
    pub fn update<R>(&self, mutate: impl FnOnce(&mut T) -> Result<R>) -> Result<R> {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut value = self.read_unlocked()?;
        let out = mutate(&mut value)?;
        self.write_unlocked(&value)?;
        Ok(out)
    }

    fn read_unlocked(&self) -> Result<T> {
        if !self.path.exists() {
            return Ok(T::default());
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| storage_err("読み込み失敗", e))?;
        serde_json::from_str(&content).map_err(|e| storage_err("JSONが破損しています", e))
    }

    fn write_unlocked(&self, value: &T) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| storage_err("ディレクトリ作成失敗", e))?;

        let tmp = NamedTempFile::new_in(&dir).map_err(|e| storage_err("一時ファイル作成失敗", e))?;
        serde_json::to_writer_pretty(tmp.as_file(), value)
            .map_err(|e| storage_err("書き込み失敗", e))?;
        tmp.persist(&self.path)
            .map_err(|e| storage_err("書き込み失敗", e))?;
        Ok(())
    }
}
