use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "seafood-catalog", version, about = "Seafood storefront catalog renderer")]
pub struct CliArgs {
    /// Override the products data file
    #[arg(long, value_name = "PATH", global = true)]
    pub products: Option<String>,

    /// Override the fish reference data file
    #[arg(long, value_name = "PATH", global = true)]
    pub fish: Option<String>,

    /// Question/answer pairs for the FAQ section (JSON list)
    #[arg(long, value_name = "PATH", global = true)]
    pub faq: Option<String>,

    /// Override the public site domain
    #[arg(long, value_name = "URL", global = true)]
    pub domain: Option<String>,

    /// Evaluate seasonality for this month instead of today's
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12), global = true)]
    pub month: Option<u32>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the full catalog page as static HTML
    Render {
        /// Only show products in this category
        #[arg(long)]
        category: Option<String>,

        /// Write the page here instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// List the filter categories
    Categories,
    /// Print catalog stats
    Stats {
        /// Print stats as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the detail view and link preview for a product
    Detail { product_id: String },
    /// Run the share flow for a product
    Share {
        product_id: String,

        /// Name shown in the share text
        #[arg(long)]
        name: Option<String>,
    },
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.products {
            std::env::set_var("CATALOG_PRODUCTS", path);
        }
        if let Some(path) = &self.fish {
            std::env::set_var("CATALOG_FISH", path);
        }
        if let Some(path) = &self.faq {
            std::env::set_var("CATALOG_FAQ", path);
        }
        if let Some(domain) = &self.domain {
            std::env::set_var("CATALOG_DOMAIN", domain);
        }
        if self.debug {
            std::env::set_var("RUST_LOG", "debug");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_with_global_flags() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "seafood-catalog",
            "render",
            "--category",
            "鮮魚",
            "--month",
            "12",
        ])?;

        assert_eq!(args.month, Some(12));
        assert!(matches!(
            args.command,
            Some(Command::Render { category: Some(ref c), out: None }) if c == "鮮魚"
        ));

        Ok(())
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        assert!(CliArgs::try_parse_from(["seafood-catalog", "--month", "13", "stats"]).is_err());
    }

    #[test]
    fn test_help_text_lists_subcommands() {
        let help = CliArgs::help_text();
        for name in ["render", "categories", "stats", "detail", "share"] {
            assert!(help.contains(name));
        }
    }
}
