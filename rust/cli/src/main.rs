use std::io;

fn main() {
    fleadevil_cli::init_logging();
    let code = fleadevil_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
