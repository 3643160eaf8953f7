use std::io::{self, BufRead, Write};
use std::path::Path;

use faction_item_seeder::balance::BalanceReport;
use faction_item_seeder::database::{ItemStore, StoreError};
use faction_item_seeder::items::ItemDefinition;
use faction_item_seeder::items_database;

/// The game keeps its content database at a fixed location relative to the
/// repository root; the seeder is always run from there.
const DB_PATH: &str = "./content/database.db";

fn main() {
    env_logger::init();

    println!("Sympathetic Resonance - Faction Items Database Population");
    println!("{}", "=".repeat(60));

    let catalog = items_database::get_faction_item_definitions();

    // Analysis first: read-only, lets the designer bail out before any
    // destructive write.
    let report = BalanceReport::analyze(&catalog);
    println!();
    print!("{report}");

    println!();
    println!("About to populate database: {DB_PATH}");
    println!(
        "This will replace any existing items with {} new faction-specific educational items.",
        catalog.len()
    );

    if !confirm("Proceed? (y/N): ") {
        println!("Operation cancelled.");
        return;
    }

    match populate(DB_PATH, &catalog) {
        Ok(inserted) => {
            println!(
                "Successfully populated database with {inserted} faction-specific educational items!"
            );
            println!();
            println!("Database population completed successfully!");
            println!("   Total items added: {inserted}");
            println!("   Database location: {}", absolute_path(DB_PATH));
            println!();
            println!("Next steps:");
            println!("   1. Run the game to test the new faction items");
            println!("   2. Check that item bonuses work correctly");
            println!("   3. Validate faction reputation requirements");
            println!("   4. Test item synergies and conflicts");
        }
        Err(e) => {
            log::error!("Database population failed: {e}");
            println!();
            println!("Database population failed: {e}");
            println!("No items were loaded. Please check the error message above.");
        }
    }
}

fn populate(path: &str, catalog: &[ItemDefinition]) -> Result<usize, StoreError> {
    let mut store = ItemStore::open(path)?;
    store.replace_items(catalog)
}

/// Prompt on stdout and accept only an explicit "y" (case-insensitive).
/// Anything else, including EOF or a read error, counts as a refusal.
fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => answer.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

fn absolute_path(path: &str) -> String {
    std::fs::canonicalize(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| Path::new(path).display().to_string())
}
