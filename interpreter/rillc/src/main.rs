//! Rill interpreter CLI.

use rillc::{commands, repl};

fn main() {
    rillc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        repl::run();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: rill run <file.rl>");
                std::process::exit(1);
            }
            if !commands::run_file(&args[2]) {
                std::process::exit(1);
            }
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: rill lex <file.rl>");
                std::process::exit(1);
            }
            if !commands::lex_file(&args[2]) {
                std::process::exit(1);
            }
        }
        "repl" => {
            repl::run();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Rill {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a script path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("rl"))
            {
                if !commands::run_file(command) {
                    std::process::exit(1);
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Rill interpreter");
    println!();
    println!("Usage: rill [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)             Start the interactive REPL");
    println!("  repl               Start the interactive REPL");
    println!("  run <file.rl>      Execute a script file");
    println!("  lex <file.rl>      Tokenize a file and print the tokens");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    println!("Examples:");
    println!("  rill");
    println!("  rill run examples.rl");
    println!("  rill lex examples.rl");
}
