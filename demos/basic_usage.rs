//! Basic logger usage example
//!
//! Demonstrates console logging, severity helpers, and the logging macros.
//!
//! Run with: cargo run --example basic_usage

use seglog::prelude::*;
use seglog::{error, info, warn};

fn main() -> Result<()> {
    println!("=== seglog - Basic Usage Example ===\n");

    // Create a logger; the default destination is the console
    let logger = Logger::new();

    // Log messages at different levels
    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Logging through the macros:");
    let user = "alice";
    info!(logger, "user {} signed in", user);
    warn!(logger, "quota at {}%", 92);
    error!(logger, "payment for {} declined", user);

    println!("\n3. Entries with missing pieces fall back to placeholders:");
    // No message renders as NONE, no severity renders as NULL
    logger.add(None, Some(LogLevel::Warn));
    logger.add(Some("recorded without a severity"), None);
    logger.add(None, None);

    println!("\n4. Multi-line messages are folded into a single line:");
    logger.error("request failed\ncaused by: timeout\ncaused by: connection reset");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
