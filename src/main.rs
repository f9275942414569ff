#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Address the share links and copy-link action point at, set from the
/// command line. The desktop app has no window.location, so this is the
/// page-location collaborator.
static PAGE_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_PAGE_URL: &str = "https://pokharalens.com/";

/// Get the page URL (set from command line or default).
pub fn get_page_url() -> String {
    PAGE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_PAGE_URL.to_string())
}

/// Photofolio - photography portfolio desktop app
#[derive(Parser, Debug)]
#[command(name = "photofolio-desktop")]
#[command(about = "Photofolio - a photography portfolio page as a desktop app")]
struct Args {
    /// Public address of the hosted portfolio, used by share links and
    /// the copy-link action
    #[arg(short, long)]
    page_url: Option<String>,

    /// Window title override
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(url) = args.page_url {
        let _ = PAGE_URL.set(url);
    }

    let title = args.title.unwrap_or_else(|| "Photofolio".to_string());

    tracing::info!("Starting '{}' sharing {}", title, get_page_url());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 850.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
