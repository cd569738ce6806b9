//! Coloured text rendering of dashboard views.

use colored::Colorize;
use dashboard::{
    CountTable, DetailView, EmptyResultWarning, FilterOptions, GenresView, GeographyView,
    OverviewView, Summary, TrendsView, YearSeries,
};

const BAR_WIDTH: usize = 30;

/// Horizontal bar for `count`, scaled so `max` fills `width` cells
fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = (count * width).div_ceil(max);
    "█".repeat(cells.min(width))
}

fn print_header(title: &str) {
    println!("\n{}", title.bold().blue());
}

fn print_warning(warning: Option<EmptyResultWarning>) -> bool {
    match warning {
        Some(warning) => {
            println!("{} {}", "!".yellow(), warning.to_string().yellow());
            true
        }
        None => false,
    }
}

fn print_table(table: &CountTable) {
    print_header(&table.label);
    if table.is_empty() {
        println!("  {}", "(no data)".dimmed());
        return;
    }
    let max = table.rows.iter().map(|e| e.count).max().unwrap_or(0);
    let name_width = table.categories().map(|c| c.chars().count()).max().unwrap_or(0);
    for entry in &table.rows {
        println!(
            "  {:<width$}  {:>6}  {}",
            entry.category,
            entry.count,
            bar(entry.count, max, BAR_WIDTH).red(),
            width = name_width
        );
    }
}

fn print_series(series: &YearSeries, precision: usize) {
    print_header(&series.label);
    if series.is_empty() {
        println!("  {}", "(no data)".dimmed());
        return;
    }
    for point in &series.points {
        println!("  {}  {:>8.prec$}", point.year, point.value, prec = precision);
    }
}

pub fn print_summary(summary: &Summary) {
    print_warning(summary.warning());
    println!("{}", "Catalog Summary".bold().blue());
    println!("{}Total titles: {}", "• ".green(), summary.total);
    println!("{}Movies: {}", "• ".green(), summary.movies);
    println!("{}TV Shows: {}", "• ".green(), summary.tv_shows);
    println!(
        "{}Release years: {} - {}",
        "• ".green(),
        or_na(summary.earliest_release_year),
        or_na(summary.latest_release_year)
    );
    println!("{}Countries: {}", "• ".green(), summary.unique_countries);
    println!("{}Directors: {}", "• ".green(), summary.unique_directors);
    println!(
        "{}Most common rating: {}",
        "• ".green(),
        summary.most_common_rating.as_deref().unwrap_or("N/A")
    );
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn print_overview(view: &OverviewView) {
    if print_warning(view.warning()) {
        return;
    }
    print_table(&view.content_types);
    print_table(&view.ratings);
    print_table(&view.decades);

    print_header("Content Type by Decade");
    for cell in &view.decade_types {
        println!("  {}  {:<8}  {:>6}", cell.decade, cell.content_type, cell.count);
    }

    let durations = &view.movie_durations;
    print_header(&format!("Movie Duration ({} minute bins)", durations.bin_minutes));
    let max = durations.bins.iter().map(|b| b.count).max().unwrap_or(0);
    for bin in &durations.bins {
        println!(
            "  {:>3}-{:<3}  {:>6}  {}",
            bin.start,
            bin.end,
            bin.count,
            bar(bin.count, max, BAR_WIDTH).red()
        );
    }
    if let (Some(mean), Some(median)) = (durations.mean_minutes, durations.median_minutes) {
        println!("  mean {:.1} min, median {:.1} min", mean, median);
    }

    print_table(&view.seasons);
}

pub fn print_genres(view: &GenresView) {
    if print_warning(view.warning()) {
        return;
    }
    print_table(&view.genres);

    print_header("Genre Trends");
    for point in &view.genre_trends {
        println!("  {}  {:<32}  {:>5}", point.year, point.genre, point.count);
    }

    print_table(&view.directors);
    print_table(&view.cast);
}

pub fn print_geography(view: &GeographyView) {
    if print_warning(view.warning()) {
        return;
    }
    print_table(&view.countries);
    println!(
        "  {} distinct countries, {} titles without a country",
        view.distinct_countries, view.excluded_rows
    );

    print_header("Top Ratings by Country");
    for entry in &view.ratings_by_country {
        let ratings = entry
            .ratings
            .rows
            .iter()
            .map(|e| format!("{} ({})", e.category, e.count))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {}: {}", entry.country.bold(), ratings);
    }

    print_header("Movies vs TV Shows by Country");
    for entry in &view.types_by_country {
        println!(
            "  {:<24}  {:>5} movies  {:>5} TV shows",
            entry.country, entry.movies, entry.tv_shows
        );
    }
}

pub fn print_trends(view: &TrendsView) {
    if print_warning(view.warning()) {
        return;
    }
    print_series(&view.releases, 0);
    print_series(&view.additions, 0);
    if view.undated > 0 {
        println!("  {} titles with an unknown added date", view.undated);
    }

    print_header("Monthly Additions");
    for cell in &view.monthly_heatmap {
        println!("  {}-{:02}  {:>5}", cell.year, cell.month, cell.count);
    }

    print_table(&view.months);
    print_series(&view.movie_minutes_by_year, 1);
}

pub fn print_detail(view: &DetailView) {
    print_warning(view.warning());
    let stats = &view.stats;
    println!("{}", "Detailed Analysis".bold().blue());
    println!("{}Filtered results: {}", "• ".cyan(), stats.count);
    println!(
        "{}Average release year: {}",
        "• ".cyan(),
        stats
            .mean_release_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    );
    println!("{}Movies: {}", "• ".cyan(), stats.movies);
    println!("{}TV Shows: {}", "• ".cyan(), stats.tv_shows);
    println!("Displaying {} of {} titles", view.records.len(), stats.count);

    for record in &view.records {
        let year = record
            .release_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "????".to_string());
        println!(
            "\n{} ({}) - {}",
            record.title.bold(),
            year,
            record.content_type.green()
        );
        if let Some(duration) = &record.duration {
            println!("  Duration: {}", duration);
        }
        println!("  Rating: {}", record.rating);
        if let Some(added) = &record.date_added {
            println!("  Added on: {}", added);
        }
        if !record.countries.is_empty() {
            println!("  Country: {}", record.countries);
        }
        if !record.directors.is_empty() {
            println!("  Director: {}", record.directors);
        }
        if !record.cast.is_empty() {
            println!("  Cast: {}", record.cast);
        }
        println!("  Genre: {}", record.genres);
        if !record.description.is_empty() {
            println!("  {}", record.description.dimmed());
        }
    }
}

pub fn print_options(options: &FilterOptions) {
    let print_list = |title: &str, values: &[String]| {
        print_header(title);
        println!("  {}", values.join(", "));
    };
    print_list("Content Types", &options.content_types);
    print_list("Ratings", &options.ratings);
    print_list("Countries", &options.countries);
    print_list("Genres", &options.genres);

    print_header("Release Years");
    match options.release_years {
        Some((first, last)) => println!("  {} - {}", first, last),
        None => println!("  {}", "(no data)".dimmed()),
    }
}
