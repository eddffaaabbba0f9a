// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # ros-ign-convert CLI
//!
//! Convert single messages between ROS 2 and Ignition from the shell.
//!
//! ## Usage
//!
//! ```sh
//! # List supported message pairs
//! ros-ign-convert list
//!
//! # Convert a ROS 2 message read from stdin
//! echo '{"data": true}' | ros-ign-convert convert \
//!     --ros-type std_msgs/msg/Bool --ign-type ignition.msgs.Boolean \
//!     --direction ros-to-ign
//!
//! # Emit the Ignition message as hex-encoded protobuf
//! ros-ign-convert convert --ros-type geometry_msgs/msg/Pose \
//!     --ign-type ignition.msgs.Pose --direction ros-to-ign \
//!     --input pose.json --format protobuf-hex
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{ConvertCmd, DegradedError, ListCmd};
use common::Result;

/// ros-ign-convert - ROS 2 / Ignition message converter
///
/// Structural conversion of messages between the two schema families.
#[derive(Parser, Clone)]
#[command(name = "ros-ign-convert")]
#[command(about = "Convert messages between ROS 2 and Ignition", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// List supported message pairs
    List(ListCmd),

    /// Convert one message (JSON or protobuf-hex)
    Convert(ConvertCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    common::init_logging();

    match cli.command {
        Commands::List(cmd) => cmd.run(),
        Commands::Convert(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        let code = if e.downcast_ref::<DegradedError>().is_some() {
            2
        } else {
            1
        };
        process::exit(code);
    }
}
