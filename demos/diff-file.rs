use std::{env, fs, process};

use htmldiff::diff;

/// Compares two versions of an HTML file and prints the newer one with the
/// removed text in `<del>` and the added text in `<ins>`.
///
/// Run it with:
/// `cargo run --example diff-file before.html after.html [output_file.html]`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: diff-file <before> <after> [output]");
        process::exit(1);
    }

    let before_file = &args[1];
    let after_file = &args[2];
    let output_file = args.get(3);

    let before_content = fs::read_to_string(before_file).unwrap_or_else(|e| {
        eprintln!("Error reading {before_file}: {e}");
        process::exit(1);
    });

    let after_content = fs::read_to_string(after_file).unwrap_or_else(|e| {
        eprintln!("Error reading {after_file}: {e}");
        process::exit(1);
    });

    let diffed_content = diff(&before_content, &after_content);

    if let Some(output_path) = output_file {
        if let Err(e) = fs::write(output_path, diffed_content) {
            eprintln!("Error writing to {output_path}: {e}");
            process::exit(1);
        }
    } else {
        print!("{diffed_content}");
    }
}
