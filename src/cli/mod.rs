//! CLI module for FrameLens
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// FrameLens frame-property inspector
///
/// A command-line tool for inspecting the per-frame metadata of video
/// files, raw or prettified into categorized display tables.
#[derive(Parser)]
#[command(name = "framelens")]
#[command(about = "FrameLens - inspect per-frame video metadata")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the properties of one frame of a video file
    Props(args::PropsArgs),
    /// List the built-in formatting rules and category tables
    Rules(args::RulesArgs),
    /// Show or persist session defaults
    Config(args::ConfigArgs),
}
