mod cli;
mod headless;

use clap::Parser;
use cli::{CliArgs, Command};
use color_eyre::Result;
use seafood_catalog::config::init_site_config;
use seafood_catalog::render::FaqItem;
use seafood_catalog::season::FixedMonth;
use seafood_catalog::store::load_files;
use seafood_catalog::App;
use std::path::Path;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = args.command else {
        print!("{}", CliArgs::help_text());
        return Ok(());
    };

    let (site, paths) = init_site_config();
    debug!(products = %paths.products.display(), fish = %paths.fish.display(), "loading catalog");

    // Both sources must load before anything renders
    let store = match load_files(&paths.products, &paths.fish).await {
        Ok(store) => store,
        Err(e) => {
            error!(source = e.source_name(), "catalog data failed to load: {e}");
            return Err(e.into());
        }
    };

    let mut app = App::new(store, site);
    if let Some(month) = args.month {
        app = app.with_clock(FixedMonth(month));
    }

    match command {
        Command::Render { category, out } => {
            let faq = load_faq(paths.faq.as_deref()).await?;
            headless::render_page(&mut app, &faq, category.as_deref(), out.as_deref()).await
        }
        Command::Categories => {
            headless::print_categories(&app);
            Ok(())
        }
        Command::Stats { json } => headless::print_stats(&app, json),
        Command::Detail { product_id } => {
            headless::print_detail(&mut app, &product_id);
            Ok(())
        }
        Command::Share { product_id, name } => {
            headless::run_share(&mut app, &product_id, name).await;
            Ok(())
        }
    }
}

async fn load_faq(path: Option<&Path>) -> Result<Vec<FaqItem>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let json = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}
