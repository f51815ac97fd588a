use std::path::PathBuf;
use std::{env, fs, process};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use yokan::environment::Environment;
use yokan::error::print_parse_errors;

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        n if n > 2 => {
            eprintln!("Usage: yokan [script]");
            process::exit(64);
        }
        2 => run_file(&args[1]),
        _ => run_prompt(),
    }
}

fn run_file(path: &str) {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("could not read {path}: {err}");
        process::exit(66);
    });

    let env = Environment::new_root();
    let (_, errors) = yokan::run(&source, &env);

    if !errors.is_empty() {
        print_parse_errors(&errors, &mut std::io::stderr()).ok();
        process::exit(65);
    }
}

fn history_path() -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".yokan_history")
}

fn run_prompt() {
    let env = Environment::new_root();
    let history = history_path();

    let mut editor = DefaultEditor::new().expect("line editor to initialize");
    let _ = editor.load_history(&history);

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                editor.add_history_entry(line.as_str()).ok();

                let (value, errors) = yokan::run(&line, &env);
                if !errors.is_empty() {
                    print_parse_errors(&errors, &mut std::io::stderr()).ok();
                    continue;
                }
                if value.type_tag() != "SHOULD_NOT_VIEWABLE" {
                    println!("{value}");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("readline error: {err}");
                break;
            }
        }
    }

    let _ = editor.save_history(&history);
}
