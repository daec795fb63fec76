//! Terminal rendering of listings and session state.

use colored::Colorize;
use data_loader::{Capacity, Listing};
use pipeline::FilterCriteria;
use session::FilterSessionState;

fn count(value: Option<u32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}

fn capacity_line(capacity: &Capacity) -> String {
    format!(
        "bedrooms {} · beds {} · bathrooms {}",
        count(capacity.bedrooms),
        count(capacity.beds),
        count(capacity.bathrooms)
    )
}

pub fn criteria_line(criteria: &FilterCriteria) -> String {
    format!(
        "type {} · bedrooms {} · beds {} · bathrooms {} · price {}",
        criteria.room_type,
        criteria.bedrooms.bedrooms,
        criteria.bedrooms.beds,
        criteria.bedrooms.bathrooms,
        criteria.price_range
    )
}

/// One line per listing, in the order given.
pub fn print_listings(listings: &[Listing]) {
    if listings.is_empty() {
        println!("{}", "No listings match these filters.".yellow());
        return;
    }
    for listing in listings {
        let name = if listing.name.is_empty() {
            "(untitled)"
        } else {
            listing.name.as_str()
        };
        println!(
            "{} {} [{}] ₩{}/night  {}",
            format!("#{}", listing.id).green(),
            name.bold(),
            listing.room_type,
            listing.price,
            capacity_line(&listing.capacity).dimmed()
        );
    }
}

pub fn print_state(state: &FilterSessionState) {
    if let Some(message) = state.status_message() {
        println!("{}", message.cyan());
    }
    println!("{}", criteria_line(state.criteria()).dimmed());
    println!(
        "{} of {} listings (revision {})",
        state.filtered_listings().len().to_string().bold(),
        state.listings().len(),
        state.revision()
    );
}

/// Detail page: title, facts, and the photo grid.
pub fn print_listing_detail(listing: &Listing) {
    println!("{}", listing.name.bold().blue());
    println!("{}Type: {}", "• ".green(), listing.room_type);
    println!("{}Price: ₩{} per night", "• ".green(), listing.price);
    println!("{}{}", "• ".green(), capacity_line(&listing.capacity));

    let gallery = listing.gallery();
    match gallery.hero {
        Some(hero) => {
            println!("Photos:");
            println!("  [hero 2x2] {}", hero.url);
            for tile in gallery.tiles {
                println!("  [tile 1x1] {}", tile.url);
            }
            if gallery.hidden_count() > 0 {
                println!("  (+{} more)", gallery.hidden_count());
            }
        }
        None => println!("{}", "No photos yet.".yellow()),
    }
}
