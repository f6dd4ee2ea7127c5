use std::process;

fn main() {
    if let Err(err) = recomp::app::cli::run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
