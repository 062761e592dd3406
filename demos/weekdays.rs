//! Minimal demo - run with: cargo run --example weekdays

fn main() {
    let days = vec![
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    match gridselect::show(days, "Which days are you available?") {
        Ok(picked) if picked.is_empty() => println!("No days picked"),
        Ok(picked) => println!("Available on: {}", picked.join(", ")),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
