//! ギャラリーの固定設定

/// Pexels 検索エンドポイント
pub const PEXELS_SEARCH_URL: &str = "https://api.pexels.com/v1/search";

/// APIキーを読む環境変数名
pub const API_KEY_ENV: &str = "PEXELS_API_KEY";

/// 検索クエリ（固定）
pub const DEFAULT_QUERY: &str = "nature";

/// 1ページあたりの取得件数（固定）
pub const DEFAULT_PER_PAGE: u32 = 15;

/// 検索パラメータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub query: String,
    pub per_page: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// APIキーを正規化（空白のみは未設定扱い）
pub fn normalize_api_key(key: Option<&str>) -> Option<String> {
    key.map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GalleryConfig::default();
        assert_eq!(config.query, "nature");
        assert_eq!(config.per_page, 15);
    }

    #[test]
    fn test_normalize_api_key() {
        assert_eq!(normalize_api_key(None), None);
        assert_eq!(normalize_api_key(Some("   ")), None);
        assert_eq!(normalize_api_key(Some(" abc ")), Some("abc".to_string()));
    }
}
