use crate::error::{GalleryError, Result};
use nature_gallery_common::config::normalize_api_key;
use nature_gallery_common::API_KEY_ENV;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み。ファイルが無ければデフォルト
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GalleryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("nature-gallery").join("config.json"))
    }

    /// APIキー（環境変数を優先）
    pub fn api_key(&self) -> Option<String> {
        Self::resolve_api_key(std::env::var(API_KEY_ENV).ok().as_deref(), self.api_key.as_deref())
    }

    fn resolve_api_key(from_env: Option<&str>, stored: Option<&str>) -> Option<String> {
        normalize_api_key(from_env).or_else(|| normalize_api_key(stored))
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = normalize_api_key(Some(&key));
        if self.api_key.is_none() {
            return Err(GalleryError::Config("APIキーが空です".into()));
        }
        self.save()
    }
}
