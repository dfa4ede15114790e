use crossterm::style::Stylize;
use hover_core::core::tooltip::TooltipState;
use hover_core::core::types::{Anchor, Viewport};
use hover_core::HoverEngine;
use std::fs::File;
use std::io::{stdin, stdout, Write};
use std::path::{Path, PathBuf};

const GLOSSARY_FILE: &str = "assets/glossary.json";

/// A small fixture page: the anchors a real document would expose at
/// DOMContentLoaded, with their on-screen boxes.
const DEMO_PAGE: &str = r#"[
  {"href": "/concepts#Slug",                "rect": {"top": 120.0, "left": 40.0, "width": 36.0, "height": 18.0}},
  {"href": "/concepts#Fragment Identifier", "rect": {"top": 180.0, "left": 40.0, "width": 150.0, "height": 18.0}},
  {"href": "/concepts#Glossary Mapping",    "rect": {"top": 240.0, "left": 40.0, "width": 130.0, "height": 18.0}},
  {"href": "/concepts",                     "rect": {"top": 300.0, "left": 40.0, "width": 70.0, "height": 18.0}},
  {"href": "/concepts#Not In Glossary",     "rect": {"top": 360.0, "left": 40.0, "width": 120.0, "height": 18.0}}
]"#;

fn get_log_path() -> PathBuf {
    let mut path = PathBuf::from("target");
    path.push("hover_sim.log");
    path
}

fn log(message: &str) {
    if let Ok(mut file) = File::options().create(true).append(true).open(get_log_path()) {
        let _ = writeln!(file, "{}", message);
    }
}

fn main() {
    let _ = std::fs::remove_file(get_log_path());
    log("--- Glossary Hover Simulator Starting ---");

    let mut engine = HoverEngine::from_file_or_empty(Path::new(GLOSSARY_FILE));
    let anchors: Vec<Anchor> = serde_json::from_str(DEMO_PAGE).unwrap_or_default();
    let bound = engine.bind_anchors(&anchors);
    log(&format!("Bound {} of {} anchors", bound, anchors.len()));

    let mut viewport = Viewport::default();

    println!("{}", "Glossary Hover Simulator. Type 'exit' to quit.".bold());
    println!("---------------------------------------------------------------");

    loop {
        print_ui(&engine, viewport);

        let mut input = String::new();
        stdin().read_line(&mut input).unwrap();
        let cmd = input.trim();
        log(&format!("Command <- '{}'", cmd));

        match cmd {
            "exit" => break,
            "leave" | "" => engine.pointer_leave(),
            s if s.starts_with("scroll ") => {
                if let Ok(y) = s["scroll ".len()..].trim().parse::<f64>() {
                    viewport.scroll_y = y;
                }
            }
            s => {
                // A bare number hovers that bound anchor.
                if let Ok(n) = s.parse::<usize>() {
                    if n > 0 && n <= engine.bindings().len() {
                        engine.pointer_enter(n - 1, viewport);
                    }
                }
            }
        }
    }

    println!("\nBye.");
}

fn print_ui(engine: &HoverEngine, viewport: Viewport) {
    // Basic clear screen for simplicity
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", "Glossary Hover Simulator".bold().cyan());
    println!("---------------------------------------------------------------");
    println!("Hover a bound anchor with its number, 'leave' (or Enter) to");
    println!("unhover, 'scroll <y>' to scroll, 'exit' to quit.\n");
    println!("Scroll offset: y = {}", viewport.scroll_y);

    println!("\nBound anchors:");
    for (i, binding) in engine.bindings().iter().enumerate() {
        println!(
            "  {}: {} ({})",
            i + 1,
            binding.anchor.href.as_str().green(),
            binding.slug.as_str().dark_grey()
        );
    }
    if engine.bindings().is_empty() {
        println!("  {}", "(none — glossary missing or empty)".dark_grey());
    }

    match engine.tooltip().state() {
        TooltipState::Visible { content, position } => {
            println!(
                "\nTooltip at (top: {:.1}, left: {:.1}):",
                position.top, position.left
            );
            for line in content.lines() {
                println!("  {}", line.on_dark_grey().white());
            }
        }
        TooltipState::Hidden => println!("\nTooltip hidden."),
    }

    print!("\n> ");
    stdout().flush().unwrap();
}
