use std::env;

mod cli;
mod pass;
mod shell;
mod terminal;

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        0 | 1 => shell::run(),
        _ => cli::run(&args),
    }
}
