//! Version command

/// Run the version command.
pub fn run() {
    println!("cominty {}", env!("CARGO_PKG_VERSION"));
}
