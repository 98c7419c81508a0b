fn main() {
    if let Err(e) = sqldigest::cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
