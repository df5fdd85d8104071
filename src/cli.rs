/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-grade.
 *
 * gear-grade is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-grade is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-grade. If not, see <https://www.gnu.org/licenses/>.
 */

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gear-grade")]
#[command(about = "Gear ratio, speed and cross chaining table for a bicycle drivetrain", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Wheel diameter in inches [default: 27]
    #[arg(short, long = "wheel-inches")]
    pub wheel_inches: Option<f64>,

    /// Chainring tooth counts, comma separated (e.g. 50,39,30)
    #[arg(short, long)]
    pub crankset: String,

    /// Cog tooth counts, comma separated (e.g. 11,12,13,15,17,19,21,23)
    #[arg(short = 'o', long)]
    pub cogset: String,

    /// Pedalling cadence in crank revolutions per minute [default: 90]
    #[arg(short, long)]
    pub rpms: Option<u32>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
