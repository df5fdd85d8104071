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

use std::fmt;
use std::fmt::{Display, Formatter, Write};
use crate::combination::{ComboRow, GearAnalysis, GearSummary};
use crate::gear_set::GearStep;

impl Display for ComboRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:05.2} {:05.2}mph {} {}",
               self.name, self.ratio, self.speed, self.usability.symbol(), self.related_names)
    }
}

impl Display for GearSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary")?;
        writeln!(f, "gear: {}", self.num_gears)?;
        writeln!(f, "unique gears: {}", self.unique_gears)?;
        writeln!(f, "usable gears: {}", self.usable_gears)?;
        writeln!(f, "unique usable gears: {}", self.unique_usable_gears)?;
        writeln!(f, "percent unique usable gears: {:05.2}%", self.gear_grade)?;
        writeln!(f, "max speed: {:05.2}", self.max_speed)?;
        write!(f, "min speed: {:05.2}", self.min_speed)
    }
}

impl Display for GearStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "cog {}: {:05.2}%", self.tooth, self.percent_change)
    }
}

/// Render the analysis as the plain text gear table.
///
/// Every line, including the blank separators either side of the summary,
/// is newline terminated.
pub fn render(analysis: &GearAnalysis) -> String {
    let mut out = String::new();
    // writing into a String can't fail
    let _ = write_report(&mut out, analysis);
    out
}

fn write_report(out: &mut impl Write, analysis: &GearAnalysis) -> fmt::Result {
    for row in &analysis.rows {
        writeln!(out, "{}", row)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", analysis.summary)?;
    writeln!(out)?;
    writeln!(out, "Cogs")?;
    for step in &analysis.cog_steps {
        writeln!(out, "{}", step)?;
    }
    Ok(())
}
