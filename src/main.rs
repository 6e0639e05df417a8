//! cba_bundler - Composite Bundle Archive builder.
//!
//! This binary reads a build descriptor and writes `<final-name>.cba`
//! with proper error handling and exit codes.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match cba_bundler::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for hint in e.recovery_suggestions() {
                eprintln!("  hint: {}", hint);
            }
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
