// Minimal test harness for the slug deriver
// Run with: cargo run --bin slug_test
// src/bin/slug_test.rs
use hover_core::core::slug;

fn main() {
    let test_cases = [
        "/page#Foo Bar!",
        "#already-normalized",
        "/docs#API Reference",
        "/docs#C++ (language)",
        "#__dunder__",
        "#---",
        "/no-fragment",
        "/multi#a#b",
        "#  Spaced   Out  ",
    ];
    for href in test_cases.iter() {
        match slug::derive(href) {
            Some(slug) => println!("{} => {}", href, slug),
            None => println!("{} => (skipped)", href),
        }
    }
}
