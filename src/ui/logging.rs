//! Logging utilities
//!
//! The TUI owns the terminal, so log output goes to a rotated file in
//! the platform cache directory instead of stderr.
use std::fs::{self, remove_file};
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use env_logger::{Builder, Target, fmt::TimestampPrecision};
use file_rotate::compression::Compression;
use file_rotate::suffix::AppendCount;
use file_rotate::{ContentLimit, FileRotate};
use log::LevelFilter;

/// Returns the path of the log file.
///
/// # Errors
///
/// Returns an error if the platform directories cannot be determined.
pub fn log_file_path() -> Result<PathBuf>
{
    let project_dirs = ProjectDirs::from("", "", "shoplist")
        .context("Failed to determine project directories")?;

    Ok(project_dirs.cache_dir().join("shoplist.log"))
}

/// Initializes the logging system for the application.
///
/// Sets up the log file path, log level, and log format. Everything
/// below info is filtered out for foreign crates; the level for this
/// crate is the caller's choice.
///
/// # Arguments
///
/// * `level` - Level filter for this crate's own messages
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init_logging(level: LevelFilter) -> Result<()>
{
    let log_path = log_file_path()?;

    if let Some(parent) = log_path.parent()
    {
        fs::create_dir_all(parent).context("Failed to create log directory")?;
    }

    let writer = FileRotate::new(
        &log_path,
        AppendCount::new(2),
        ContentLimit::Lines(10_000),
        Compression::None,
        #[cfg(unix)]
        None,
    );

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("shoplist", level)
        .format_timestamp(Some(TimestampPrecision::Millis))
        .target(Target::Pipe(Box::new(writer)))
        .init();

    Ok(())
}

/// Removes the log file.
///
/// Rotated older files keep their numbered suffixes and are removed as
/// well.
///
/// # Errors
///
/// Returns an error if a file removal fails.
pub fn clear_log_file() -> Result<()>
{
    let log_path = log_file_path()?;

    if log_path.exists()
    {
        remove_file(&log_path).context("Failed to remove log file")?;
    }

    // file-rotate keeps older logs next to the live one as
    // shoplist.log.0, shoplist.log.1, ...
    for suffix in 0..=9
    {
        let rotated = log_path.with_extension(format!("log.{suffix}"));

        if rotated.exists()
        {
            remove_file(&rotated)
                .context(format!("Failed to remove rotated log file {suffix}"))?;
        }
    }

    Ok(())
}
