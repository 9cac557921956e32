mod cli;

fn main() {
    if !cli::run() {
        std::process::exit(1);
    }
}
