//! Directory walkthrough: seed, subscribe, add, search, remove

use chrono::NaiveDate;
use rollcall::{Directory, EmployeeDraft, ImageSource};

fn main() {
    println!("=== Directory Tour ===\n");

    let directory = Directory::with_sample_data();

    // A list screen would subscribe like this.
    directory
        .subscribe(|roster| {
            println!("Roster changed, now {} employees", roster.len());
        })
        .forget();

    println!("Seeded roster:");
    for employee in directory.all() {
        println!(
            "  [{}] {} ({} yrs, joined {})",
            employee.id, employee.name, employee.years_of_experience, employee.joining_date
        );
    }

    println!("\nAdding Alice Park...");
    let id = directory.add(EmployeeDraft {
        name: "Alice Park".to_string(),
        years_of_experience: 4,
        joining_date: NaiveDate::from_ymd_opt(2022, 6, 1).expect("valid date"),
        image: ImageSource::Placeholder,
        skills: vec!["Rust".to_string(), "Kotlin".to_string()],
    });

    println!("\nSearching for \"ali\":");
    for hit in directory.search("ali") {
        println!("  {} -> skills {:?}", hit.name, hit.skills);
    }

    println!("\nRemoving Alice...");
    directory.remove(&id);

    println!("\nFinal roster size: {}", directory.len());
}
