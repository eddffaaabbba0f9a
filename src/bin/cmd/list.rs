// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! List command - show the registered message pairs.

use clap::Args;
use serde::Serialize;

use crate::common::{output_json_or, Result};
use ros_ign_convert::registry::global_registry;

/// List every ROS/Ignition pair the converter supports.
#[derive(Args, Clone, Debug)]
pub struct ListCmd {
    /// Only show pairs for this ROS 2 type
    #[arg(long, value_name = "TYPE")]
    ros_type: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,
}

#[derive(Serialize)]
struct PairItem {
    ros_type: String,
    ign_type: String,
}

impl ListCmd {
    pub fn run(self) -> Result<()> {
        let items: Vec<PairItem> = global_registry()
            .pairs()
            .into_iter()
            .filter(|(ros_type, _)| {
                self.ros_type
                    .as_deref()
                    .map_or(true, |t| t == ros_type.as_str())
            })
            .map(|(ros_type, ign_type)| PairItem { ros_type, ign_type })
            .collect();

        output_json_or(self.json, &items, || {
            let width = items.iter().map(|i| i.ros_type.len()).max().unwrap_or(0);
            for item in &items {
                println!("{:<width$}  <->  {}", item.ros_type, item.ign_type);
            }
            println!();
            println!("{} pair(s)", items.len());
            Ok(())
        })
    }
}
