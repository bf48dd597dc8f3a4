/// Prompter — interactive fill-in shell for rendering stories.
///
/// Usage: prompter [--templates <path.ron>]
///
/// Commands:
///   list           — show available stories with difficulty
///   play <title>   — fill in a story's blanks and render it
///   fields <title> — show a story's required fields and hints
///   save <path>    — save the most recent rendering to a file
///   help           — list commands
///   quit           — exit

use madlibs::builtin::built_in_templates;
use madlibs::core::engine::MadLibEngine;
use madlibs::core::template::load_templates;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        println!("Usage: prompter [--templates <path.ron>]");
        return;
    }

    let mut templates = built_in_templates();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--templates" && i + 1 < args.len() {
            i += 1;
            match load_templates(Path::new(&args[i])) {
                Ok(loaded) => templates.extend(loaded),
                Err(e) => {
                    eprintln!("ERROR: failed to load '{}': {}", args[i], e);
                    std::process::exit(1);
                }
            }
        } else {
            eprintln!("Unknown argument: {}", args[i]);
            std::process::exit(1);
        }
        i += 1;
    }

    let engine = MadLibEngine::new(templates);
    println!("Loaded {} stories", engine.titles().len());
    println!("Type 'help' for commands.\n");

    let mut last_rendering: Option<String> = None;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("madlibs> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(' ') {
            Some((c, r)) => (c.to_lowercase(), r.trim()),
            None => (line.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" => print_help(),
            "list" => {
                for title in engine.titles() {
                    // Lookup cannot fail for a listed title.
                    if let Ok(t) = engine.get(&title) {
                        println!("  {}  [{}]", title, t.difficulty);
                    }
                }
            }
            "fields" => {
                if rest.is_empty() {
                    println!("Usage: fields <title>");
                    continue;
                }
                match engine.get(rest) {
                    Ok(t) => {
                        for field in t.fields() {
                            match t.hint(&field) {
                                Some(hint) => println!("  {}  ({})", field, hint),
                                None => println!("  {}", field),
                            }
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
            "play" => {
                if rest.is_empty() {
                    println!("Usage: play <title>");
                    continue;
                }
                match play(&engine, rest, &stdin) {
                    Ok(Some(text)) => {
                        println!("\n{}\n", text);
                        last_rendering = Some(text);
                    }
                    Ok(None) => {}
                    Err(e) => println!("{}", e),
                }
            }
            "save" => {
                if rest.is_empty() {
                    println!("Usage: save <path>");
                    continue;
                }
                match &last_rendering {
                    Some(text) => match std::fs::write(rest, text) {
                        Ok(()) => println!("Saved to {}", rest),
                        Err(e) => println!("Failed to save: {}", e),
                    },
                    None => println!("Nothing rendered yet — use 'play' first."),
                }
            }
            _ => println!("Unknown command '{}'. Type 'help'.", cmd),
        }
    }
}

/// Prompt for each required field and render. Returns `Ok(None)` if the
/// user abandons the story by hitting end-of-input.
fn play(
    engine: &MadLibEngine,
    title: &str,
    stdin: &io::Stdin,
) -> Result<Option<String>, madlibs::core::engine::RenderError> {
    let template = engine.get(title)?;
    let mut values: HashMap<String, String> = HashMap::new();
    let mut stdout = io::stdout();

    for field in template.fields() {
        loop {
            match template.hint(&field) {
                Some(hint) => print!("  {} ({}): ", field, hint),
                None => print!("  {}: ", field),
            }
            stdout.flush().ok();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
                return Ok(None);
            }
            let value = line.trim();
            if value.is_empty() {
                println!("  A value is required.");
                continue;
            }
            if value.contains(['{', '}']) {
                println!("  Braces are not allowed in values.");
                continue;
            }
            values.insert(field.clone(), value.to_string());
            break;
        }
    }

    engine.render(title, &values).map(Some)
}

fn print_help() {
    println!("Commands:");
    println!("  list           — show available stories with difficulty");
    println!("  play <title>   — fill in a story's blanks and render it");
    println!("  fields <title> — show a story's required fields and hints");
    println!("  save <path>    — save the most recent rendering to a file");
    println!("  quit           — exit");
}
