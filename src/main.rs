use std::{env, io, process};

use colored::Colorize;
use mfer::{init_tracing, print_tokens, run_file, run_prompt};

const LEX_COMMAND: &str = "lex";

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    match args.as_slice() {
        [_, command, file_path] => {
            if command != LEX_COMMAND {
                println!("USAGE: mfer lex <filepath>");
                return;
            }

            let (tokens, _) = match run_file(file_path) {
                Ok(scanned) => scanned,
                Err(err) => {
                    eprintln!("{} {}", "Error:".red().bold(), err);
                    process::exit(1);
                }
            };

            if let Err(err) = print_tokens(&tokens, io::stdout().lock()) {
                eprintln!("{} {}", "Error:".red().bold(), err);
                process::exit(1);
            }
        }
        [_, command] => {
            if command != LEX_COMMAND {
                println!("USAGE: mfer <option> where <option> can be lex");
                return;
            }

            if let Err(err) = run_prompt(io::stdin().lock(), io::stdout().lock()) {
                eprintln!("{} {}", "Error:".red().bold(), err);
                process::exit(1);
            }
        }
        _ => println!("USAGE: mfer <option>"),
    }
}
