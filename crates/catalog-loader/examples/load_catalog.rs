use catalog_loader::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "netflix_titles.csv".to_string());

    println!("Loading catalog from {}...\n", path);

    let start = Instant::now();
    let catalog = Catalog::load_from_file(Path::new(&path)).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let (movies, tv_shows) = catalog.counts();
    let summary = catalog.summary();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Titles: {}", catalog.len());
    println!("Movies: {}", movies);
    println!("TV Shows: {}", tv_shows);
    println!("Duplicates dropped: {}", summary.duplicate_rows);
    println!("Unusable records: {}", summary.skipped_rows);
    println!("Unknown date_added: {}", summary.undated_rows);
    println!(
        "\nPerformance: {:.0} records/second",
        summary.records_read as f64 / elapsed.as_secs_f64()
    );
}
