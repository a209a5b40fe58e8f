//! Nature Gallery Common Library
//!
//! CLIとWeb(WASM)で共有される型・ページネーション・表示ロジック

pub mod types;
pub mod config;
pub mod error;
pub mod service;
pub mod pagination;
pub mod presenter;
pub mod lightbox;

pub use types::{PhotoSrc, SearchPage, SearchRequest, SearchResult};
pub use config::{GalleryConfig, API_KEY_ENV, PEXELS_SEARCH_URL};
pub use error::{Error, Result};
pub use service::{check_status, parse_search_page, SearchService};
pub use pagination::{FetchOutcome, PaginationController};
pub use presenter::{alt_text, load_more_label, srcset, GalleryView, SIZES};
pub use lightbox::{next_slide, prev_slide, LightboxSelection, ViewerRequest};
