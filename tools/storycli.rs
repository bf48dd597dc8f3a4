/// Story CLI — list stories, inspect required fields, render with values.
///
/// Usage: storycli [--templates <path.ron>] <command>
///
/// Commands:
///   --list                        — print available story titles
///   --story <title>               — select a story to render
///   --show-fields                 — with --story: print required fields and hints
///   --set key=value               — provide a placeholder value (repeatable)
///   --save <path>                 — write the rendered story to a file
///   --json                        — print {"title": ..., "text": ...} for scripting

use madlibs::builtin::built_in_templates;
use madlibs::core::engine::MadLibEngine;
use madlibs::core::template::load_templates;
use std::collections::HashMap;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut list = false;
    let mut story: Option<String> = None;
    let mut show_fields = false;
    let mut sets: Vec<String> = Vec::new();
    let mut save: Option<String> = None;
    let mut json = false;
    let mut extra_templates: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" => list = true,
            "--show-fields" => show_fields = true,
            "--json" => json = true,
            "--story" if i + 1 < args.len() => {
                i += 1;
                story = Some(args[i].clone());
            }
            "--set" if i + 1 < args.len() => {
                i += 1;
                sets.push(args[i].clone());
            }
            "--save" if i + 1 < args.len() => {
                i += 1;
                save = Some(args[i].clone());
            }
            "--templates" if i + 1 < args.len() => {
                i += 1;
                extra_templates = Some(args[i].clone());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    // Built-ins first, then any loaded collection; the engine keeps the
    // last template for a repeated title.
    let mut templates = built_in_templates();
    if let Some(ref path) = extra_templates {
        match load_templates(Path::new(path)) {
            Ok(loaded) => templates.extend(loaded),
            Err(e) => {
                eprintln!("ERROR: failed to load templates from '{}': {}", path, e);
                process::exit(1);
            }
        }
    }
    let engine = MadLibEngine::new(templates);

    if list {
        for title in engine.titles() {
            println!("{}", title);
        }
        return;
    }

    let Some(title) = story else {
        eprintln!("Please provide --story <title> or use --list");
        process::exit(1);
    };

    let template = match engine.get(&title) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    if show_fields {
        println!("Required fields:");
        for field in template.fields() {
            match template.hint(&field) {
                Some(hint) => println!(" - {}  ({})", field, hint),
                None => println!(" - {}", field),
            }
        }
        return;
    }

    let values = match parse_kv(&sets) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("ERROR: {}", msg);
            process::exit(1);
        }
    };

    let text = match engine.render(&title, &values) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = save {
        if let Err(e) = std::fs::write(path, &text) {
            eprintln!("ERROR: failed to save to '{}': {}", path, e);
            process::exit(1);
        }
    }

    if json {
        let payload = serde_json::json!({ "title": title, "text": text });
        match serde_json::to_string_pretty(&payload) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("ERROR: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", text);
    }
}

/// Parse repeatable `key=value` arguments into a value map. Whitespace
/// around key and value is trimmed.
fn parse_kv(pairs: &[String]) -> Result<HashMap<String, String>, String> {
    let mut out = HashMap::new();
    for item in pairs {
        let Some((k, v)) = item.split_once('=') else {
            return Err(format!("Expected key=value, got '{}'", item));
        };
        out.insert(k.trim().to_string(), v.trim().to_string());
    }
    Ok(out)
}

fn print_usage() {
    println!("Usage: storycli [--templates <path.ron>] --list");
    println!("       storycli [--templates <path.ron>] --story <title> --show-fields");
    println!("       storycli [--templates <path.ron>] --story <title> --set key=value ... [--save <path>] [--json]");
}
