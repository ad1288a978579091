use crate::error::{FashionError, Result};
use crate::pipeline;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ツール設定
///
/// 資格情報・フィードバックのフラットファイル置き場と、
/// 結果カードに付けるタグ一覧を保持する。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            tags: pipeline::default_tags(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FashionError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("fashion-vision").join("config.json"))
    }

    /// フラットファイルの置き場所（未設定ならユーザーデータディレクトリ）
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| FashionError::Config("データディレクトリが見つかりません".into()))?;
        Ok(base.join("fashion-vision"))
    }

    pub fn users_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("users.json"))
    }

    pub fn feedback_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("feedback.json"))
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.data_dir = Some(dir);
        self.save()
    }
}
