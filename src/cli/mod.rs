//! Command-line interface for the employee record store.
//!
//! This module provides the CLI structure for the `emprec` binary. The
//! handlers live in `main.rs`.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, AttendCommand, AttendanceCommand, ExportCommand, ListCommand, RaiseAllCommand,
    RaiseCommand, ShowCommand, StatsCommand, UpdateCommand, VacationCommand,
};

use crate::logging::Verbosity;

/// emprec - Employee records, attendance and payroll
///
/// Keeps employees in a single JSON file and answers payroll, vacation and
/// attendance questions about them.
#[derive(Debug, Parser)]
#[command(name = "emprec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Employee data file (overrides the configuration)
    #[arg(long, global = true, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List employees, optionally filtered
    List(ListCommand),

    /// Show one employee
    Show(ShowCommand),

    /// Print the next free employee id
    NextId,

    /// Add an employee
    Add(AddCommand),

    /// Update an employee
    Update(UpdateCommand),

    /// Delete an employee
    Delete {
        /// Employee id
        id: u32,
    },

    /// Raise (or cut) one employee's salary by a percentage
    Raise(RaiseCommand),

    /// Raise (or cut) every employee's salary by a percentage
    RaiseAll(RaiseAllCommand),

    /// Manage vacation balances
    #[command(subcommand)]
    Vacation(VacationCommand),

    /// Record attendance for a day
    Attend(AttendCommand),

    /// Show a month of attendance with its summary
    Attendance(AttendanceCommand),

    /// Show workforce statistics
    Stats(StatsCommand),

    /// Show payroll totals
    Payroll,

    /// Export employees to a CSV file
    Export(ExportCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}
