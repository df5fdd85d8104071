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

//! Gear ratio tables for bicycle drivetrains.
//!
//! A [GearCombination] pairs every chainring of a crankset with every cog of a cogset,
//! groups the pairings that give near identical ratios and flags the ones that cross
//! chain. [GearCombination::output] renders the whole analysis as a text table.

pub mod combination;
pub mod combo;
pub mod error;
pub mod gear_set;
pub mod report;

pub use combination::{ComboRow, GearAnalysis, GearCombination, GearSummary, Usability};
pub use combo::{GearCombo, ToothPair};
pub use error::{GearingError, Result};
pub use gear_set::{GearOrder, GearSet, GearSetKind, GearStep};
