//! Command: print version information.

/// `SCAFFOLD_VERSION` stamped by the build, else the crate version.
pub const VERSION: &str = match option_env!("SCAFFOLD_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Print the scaffold version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("yscaffold {VERSION}");
}
