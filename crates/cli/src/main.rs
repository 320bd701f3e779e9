/// minic CLI
/// Reads a source file, tokenizes it, parses the `if` statement and prints
/// the parse tree as JSON.

use bumpalo::Bump;
use clap::Parser as ClapParser;
use log::{debug, info};
use minic_language::lexer::Lexer;
use minic_language::parser::Parser;
use minic_language::tree::{to_generic_tree, to_json};
use std::fs;
use std::path::PathBuf;

const RULE: &str = "--------------------------------";

#[derive(ClapParser, Debug)]
#[command(name = "minic")]
#[command(version, about = "minic — parse an if statement into a JSON syntax tree")]
struct Cli {
    /// Source file to parse
    #[arg(default_value = "test_code.txt")]
    input: PathBuf,

    /// Also dump the token list as JSON
    #[arg(long)]
    tokens: bool,

    /// Print the tree on a single line
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Returns `Ok(false)` when the source has syntax errors.
fn run(cli: &Cli) -> Result<bool, String> {
    println!("Reading file...");
    let source = fs::read_to_string(&cli.input)
        .map_err(|e| format!("Error reading {}: {}", cli.input.display(), e))?;
    println!("file name {}", cli.input.display());
    println!("file size {} bytes", source.len());
    println!("{}", RULE);

    println!("Input Code:\n{}", source);
    println!("{}", RULE);

    // Lex
    let lexed = Lexer::new(&source).tokenize();
    for err in &lexed.errors {
        eprintln!("{}", err);
    }
    for tok in &lexed.tokens {
        println!("{}", tok);
    }
    info!("{} tokens, {} lexer errors", lexed.tokens.len(), lexed.errors.len());

    if cli.tokens {
        let dump = serde_json::to_string_pretty(&lexed.tokens).map_err(|e| e.to_string())?;
        println!("{}", dump);
    }
    println!("{}", RULE);

    // Parse
    let arena = Bump::new();
    let mut parser = Parser::new(lexed.tokens, &arena);
    let stmt = parser.parse_if_statement();

    // Never print a tree for a failed parse
    if !parser.errors().is_empty() {
        println!("\nPARSER ERRORS:");
        for err in parser.errors() {
            println!("  Error: {}", err);
        }
        return Ok(false);
    }
    let Some(stmt) = stmt else {
        return Err("parser returned no tree and no errors".into());
    };
    debug!("parsed {:?}", stmt);

    println!("\nParse Tree (Abstract Syntax Tree):");
    let json = to_json(&to_generic_tree(&stmt), !cli.compact).map_err(|e| e.to_string())?;
    println!("{}", json);

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arguments() {
        let cli = Cli::try_parse_from(["minic"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("test_code.txt"));
        assert!(!cli.tokens);
        assert!(!cli.compact);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["minic", "prog.txt", "--tokens", "--compact", "-vv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("prog.txt"));
        assert!(cli.tokens);
        assert!(cli.compact);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cli = Cli::try_parse_from(["minic", "/nonexistent/minic/input.txt"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.starts_with("Error reading"), "{}", err);
    }
}
