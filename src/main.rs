//! Letter Language CLI
//!
//! Command-line interface for the Letter expression language parser.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use letter_lang::{parse_source, Diagnostic, Lexer, VERSION};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 1 {
        // No arguments: start REPL
        println!("Letter v{} - Expression Parser", VERSION);
        println!("Type 'exit' to quit\n");
        repl();
        return;
    }

    // Check for flags
    let mut show_tokens = false;
    let mut show_help = false;
    let mut filename: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--tokens" | "-t" => show_tokens = true,
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    if let Some(file) = filename {
        let result = if show_tokens {
            show_file_tokens(file)
        } else {
            parse_file(file)
        };
        if let Err(e) = result {
            eprintln!("{}", e);
            process::exit(1);
        }
    } else {
        eprintln!("Error: No input file specified");
        print_usage();
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: letter [OPTIONS] [script]");
    eprintln!("       letter --help");
}

fn print_help() {
    println!("Letter v{} - A small expression language parser", VERSION);
    println!();
    println!("USAGE:");
    println!("    letter [OPTIONS] [script]");
    println!();
    println!("OPTIONS:");
    println!("    -t, --tokens    Show tokenization output (lexer only)");
    println!("    -h, --help      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    letter calc.lt           Parse a Letter script and print its AST");
    println!("    letter --tokens calc.lt  Show tokens from lexer");
    println!("    letter                   Start interactive REPL");
}

/// Parse a Letter script from a file and print the re-printed program
fn parse_file(filename: &str) -> Result<(), String> {
    let source = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?;

    match parse_source(&source, Some(filename)) {
        Ok(program) => {
            println!("{}", program);
            Ok(())
        }
        Err(e) => Err(Diagnostic::with_source(e, &source).format()),
    }
}

/// Show tokens from lexing a file
fn show_file_tokens(filename: &str) -> Result<(), String> {
    let source = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?;

    let mut lexer = Lexer::new(&source, Some(filename));
    let tokens = lexer
        .tokenize()
        .map_err(|e| Diagnostic::with_source(e, &source).format())?;

    println!("Tokens for '{}':", filename);
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        println!(
            "{:4}: {:12} | {:?} at {}",
            i,
            format!("{:?}", token.token_type),
            token.lexeme,
            token.location
        );
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());

    Ok(())
}

/// Start an interactive REPL (Read-Parse-Print Loop)
fn repl() {
    let mut line_number = 1;

    loop {
        print!("letter:{} > ", line_number);
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = input.trim();

                if input == "exit" || input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                // Parse the input and print the AST, or a diagnostic
                match parse_source(input, Some("<repl>")) {
                    Ok(program) => {
                        for stmt in &program.statements {
                            println!("{:#?}", stmt);
                        }
                    }
                    Err(e) => eprintln!("{}", Diagnostic::with_source(e, input).format()),
                }

                line_number += 1;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}
