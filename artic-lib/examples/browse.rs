//! Browses the public artworks API and exercises cross-page selection.
//!
//! Run with: cargo run --example browse -- [N]
//!
//! Logs are written to `browse.log`.

use std::env;
use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use artic_lib::ArticClient;
use artic_lib::TableConfig;
use artic_lib::error::Error;
use artic_lib::model::display;
use artic_lib::table::TableView;
use simplelog::{Config, LevelFilter, WriteLogger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("browse.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).expect("Failed to initialize logger");

    let config = TableConfig::default();
    let n = match env::args().nth(1) {
        Some(arg) => Some(arg.parse::<i64>()?),
        None => Some(config.default_bulk_target),
    };

    run(config, n).await?;
    Ok(())
}

async fn run(config: TableConfig, n: Option<i64>) -> Result<(), Error> {
    let client = ArticClient::builder().timeout(Duration::from_secs(30)).build()?;
    let mut view = TableView::new(Arc::new(client), config);

    view.load().await;
    print_page(&view);

    println!("\nSelecting every artwork on this page...");
    view.on_select_all_on_page_toggled(true);
    println!("{}", view.status_line());

    println!("\nMoving to page 2 and back...");
    let page_size = view.window().page_size();
    view.on_page_navigated(page_size, page_size).await?;
    println!("{}", view.status_line());
    view.on_page_navigated(0, page_size).await?;
    println!("All on page selected: {}", view.all_on_page_selected());

    println!("\nSelecting the first {:?} artworks...", n);
    let outcome = view.request_bulk_select(n).await?;
    println!("{:?}: {} selected over {} pages", outcome.status, outcome.selected, outcome.pages_fetched);
    if let Some(error) = &outcome.error {
        println!("Stopped early: {}", error);
    }
    println!("{}", view.status_line());

    Ok(())
}

fn print_page(view: &TableView<ArticClient>) {
    if let Some((first, last)) = view.window().row_range(view.total_count()) {
        println!("Showing {} to {} of {} artworks\n", first, last, view.total_count());
    }

    let selected = view.projection().selected;
    for artwork in view.current_page_records() {
        let mark = if selected.iter().any(|s| s.id == artwork.id) { "[x]" } else { "[ ]" };
        println!(
            "{} {:>7}  {}  ({})  {} - {}",
            mark,
            artwork.id,
            display::truncate(artwork.title.as_deref(), 40),
            display::or_dash(artwork.place_of_origin.as_deref()),
            display::year(artwork.date_start),
            display::year(artwork.date_end),
        );
    }
}
