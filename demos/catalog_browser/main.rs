//! Catalog browser demo
//!
//! Loads the sample catalog, walks through a typical browsing session and,
//! when `--serve <addr>` is given, exposes the catalog over HTTP.
//!
//! ```text
//! cargo run --example catalog_browser
//! cargo run --example catalog_browser -- --serve 127.0.0.1:3000
//! RUST_LOG=catalog=debug cargo run --example catalog_browser
//! ```

use anyhow::{Context, Result};
use catalog::prelude::*;
use tracing_subscriber::EnvFilter;

const ITEMS_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demos/catalog_browser/items.json"
);
const CONFIG_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demos/catalog_browser/engine.yaml"
);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EngineConfig::from_yaml_file(CONFIG_PATH).context("loading engine config")?;
    let catalog = InMemoryCatalog::from_json_file(ITEMS_PATH).context("loading catalog items")?;
    let engine = QueryEngine::new(config.clone());

    let mut params = QueryParams::new(&config);
    print_page("First page, name ascending", &catalog.query(&engine, &params)?);

    params.selected_category = "Books".to_string();
    params.min_price = Some(300.0);
    params.reset_page();
    print_page("Books from 300", &catalog.query(&engine, &params)?);

    params.toggle_sort(SortField::Price);
    params.toggle_sort(SortField::Price);
    print_page("Books from 300, most expensive first", &catalog.query(&engine, &params)?);

    params.clear_filters();
    params.show_in_stock_only = true;
    params.set_rows_per_page(5);
    params.page = 2;
    print_page("In stock, third page of five", &catalog.query(&engine, &params)?);

    let args: Vec<String> = std::env::args().collect();
    if let Some(addr) = args
        .iter()
        .position(|arg| arg == "--serve")
        .and_then(|i| args.get(i + 1))
    {
        ServerBuilder::new()
            .with_store(catalog)
            .with_config(config)
            .serve(addr)
            .await?;
    }

    Ok(())
}

fn print_page(title: &str, output: &QueryOutput) {
    let meta = &output.pagination;
    println!("\n== {} ({} active filters)", title, output.active_filters);
    println!(
        "   showing {}-{} of {} (page {} of {})",
        meta.from,
        meta.to,
        output.filtered_count,
        meta.page + 1,
        meta.total_pages
    );

    if output.items.is_empty() {
        println!("   no matching items");
    }
    for item in &output.items {
        println!(
            "   {:<12} {:<12} {:>8.2} {}",
            item.name,
            item.category,
            item.price,
            if item.in_stock { "in stock" } else { "sold out" }
        );
    }
}
