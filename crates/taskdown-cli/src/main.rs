use anyhow::{Context, Result};
use std::{env, fs, io::Read, process};
use taskdown_engine::render;

/// Renders markdown-ish task text from a file (or stdin) to an HTML
/// fragment on stdout. All rendering lives in the engine; this binary is
/// just a call site.
fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let input = match args.as_slice() {
        [] => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
        [path] => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        _ => {
            eprintln!("Usage: taskdown-cli [FILE]");
            eprintln!("Renders markdown-ish text to an HTML fragment on stdout.");
            process::exit(2);
        }
    };

    println!("{}", render(&input));
    Ok(())
}
