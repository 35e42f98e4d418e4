//! File logging example
//!
//! Demonstrates segmented file storage, rotation, and querying stored logs.
//!
//! Run with: cargo run --example file_logging

use seglog::prelude::*;

fn main() -> Result<()> {
    println!("=== seglog - File Logging Example ===\n");

    // Create a logger that writes straight to segment files. The directory
    // choice is remembered in persistLogger.txt next to the executable, and
    // log files live under LoggerLogs/ as log1.txt, log2.txt, and so on.
    let logger = Logger::builder()
        .destination(Destination::File)
        .max_segment_size(16 * 1024)
        .build();

    println!("1. Logging to segment files:");

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.info("Connecting to database...");
    logger.info("Database connection established");
    logger.error("Failed to load optional plugin\ncaused by: missing library");
    logger.info("Application initialization complete");

    println!("\n2. Performing some operations:");

    // Simulate application work
    for i in 1..=25 {
        logger.info(format!("Processing item {}/25", i));
        if i == 13 {
            logger.warn("Item 13 took longer than expected");
        }
    }

    logger.info("All operations completed");

    if let Some(directory) = logger.directory() {
        println!(
            "   {} segment(s) under {}",
            logger.segment_count(),
            directory.display()
        );
    }

    println!("\n3. Querying the stored logs:");

    let processed = logger.logs_matching("Processing").count();
    println!("   {} entries mention \"Processing\"", processed);

    println!("   every WARN entry:");
    for line in logger.logs_with_level(Some(LogLevel::Warn)) {
        println!("   > {}", line);
    }

    println!("   multi-line entries come back with their line breaks restored:");
    for line in logger.logs_matching("optional plugin") {
        println!("   > {}", line.replace('\n', "\n   | "));
    }

    println!("\n=== Example completed successfully! ===");
    println!("Check 'LoggerLogs/log1.txt' for the stored log lines");

    Ok(())
}
