use std::process::exit;

fn main() {
    match gitb::cli::run() {
        Ok(code) => exit(code),
        Err(err) => {
            eprintln!("error: {:#}", err);
            exit(1);
        }
    }
}
