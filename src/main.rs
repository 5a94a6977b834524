#![allow(non_snake_case)]

mod app;
mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use folio_core::ContentRepository;
use tracing_subscriber::EnvFilter;

use crate::context::Startup;

/// Folio - personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - Personal portfolio with light and dark themes")]
struct Args {
    /// Directory where the theme choice is stored
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON file replacing the built-in portfolio content
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Keep the theme choice in memory only
    #[arg(long)]
    no_persist: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

/// Load and validate the portfolio content.
fn load_content(path: Option<&Path>) -> anyhow::Result<ContentRepository> {
    let content = match path {
        Some(path) => ContentRepository::from_json_file(path)
            .with_context(|| format!("Failed to load content from {}", path.display()))?,
        None => ContentRepository::builtin(),
    };
    content.validate().context("Invalid portfolio content")?;
    Ok(content)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let content = match load_content(args.content.as_deref()) {
        Ok(content) => Ok(Arc::new(content)),
        Err(e) => {
            tracing::error!("{:#}", e);
            Err(format!("{:#}", e))
        }
    };

    let title = match &content {
        Ok(content) => format!("{} - {}", content.personal.name, content.personal.title),
        Err(_) => "Portfolio".to_string(),
    };

    tracing::info!(
        "Starting '{}' with data dir: {:?} (persist: {})",
        title,
        data_dir,
        !args.no_persist
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(Startup {
            content,
            data_dir,
            persist: !args.no_persist,
        })
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_loads() {
        let content = load_content(None).unwrap();
        assert_eq!(content.personal.name, "Hamse Mo");
    }

    #[test]
    fn test_missing_content_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_content(Some(dir.path().join("missing.json").as_path())).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load content"));
    }

    #[test]
    fn test_invalid_content_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_content(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["folio-desktop", "--data-dir", "/tmp/folio", "--no-persist"]);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/folio")));
        assert!(args.no_persist);
        assert!(args.content.is_none());
    }
}
