use clap::Parser;
use nature_gallery::{browse, cli, client, config, error};
use nature_gallery_common::{GalleryConfig, LightboxSelection, PaginationController};
use cli::{Cli, Commands};
use client::PexelsClient;
use config::Config;
use error::Result;

/// stderr に tracing ログを出す（RUST_LOG があればそちらを優先）
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Browse { pages, output, open, no_progress } => {
            println!("🌿 nature-gallery - 写真一覧\n");

            let client = PexelsClient::new(config.api_key())?;
            if !client.has_api_key() {
                tracing::warn!(
                    "APIキーが未設定です。`nature-gallery config --set-api-key KEY` または PEXELS_API_KEY を設定してください"
                );
            }

            let mut controller = PaginationController::new(GalleryConfig::default());
            let outcomes =
                browse::collect_pages(&client, &mut controller, pages, !no_progress).await;

            for (index, photo) in controller.results().iter().enumerate() {
                println!("{}", browse::format_line(index, photo));
            }

            let failed = outcomes.iter().filter(|o| o.is_failed()).count();
            println!(
                "\n✔ {}枚の写真を取得（ページ {}まで）",
                controller.len(),
                controller.page()
            );
            if failed > 0 {
                println!("⚠ {}ページの取得に失敗しました（詳細はログを参照）", failed);
            }

            if let Some(index) = open {
                let mut selection = LightboxSelection::default();
                let (slide, source) = browse::open_slide(&controller, &mut selection, index)?;
                println!(
                    "\n🔍 スライド {} / {}: {}",
                    slide,
                    controller.sources().len(),
                    source
                );
            }

            if let Some(path) = output {
                browse::write_export(&path, &controller)?;
                println!("✔ 結果を保存: {}", path.display());
            }
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                let defaults = GalleryConfig::default();
                println!("設定:");
                println!("  クエリ: {}", defaults.query);
                println!("  ページサイズ: {}", defaults.per_page);
                println!("  APIキー: {}", if config.api_key().is_some() { "設定済み" } else { "未設定" });
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
