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
use std::fmt::{Display, Formatter};
use tracing::debug;
use utils::numeric::percent_change;
use crate::error::{GearingError, Result};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GearOrder {
    Ascending,
    Descending
}

/// Which end of the drivetrain a [GearSet] sits on.
///
/// The kind decides the canonical order of the stored teeth so that the first entry is
/// always the gear nearest the frame: the smallest chainring or the largest cog.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GearSetKind {
    Crankset,
    Cogset
}

impl GearSetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GearSetKind::Crankset => "crankset",
            GearSetKind::Cogset => "cogset"
        }
    }

    pub fn order(&self) -> GearOrder {
        match self {
            GearSetKind::Crankset => GearOrder::Ascending,
            GearSetKind::Cogset => GearOrder::Descending
        }
    }
}

impl Display for GearSetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GearStep {
    pub tooth: u32,
    pub percent_change: f64
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GearSet {
    kind: GearSetKind,
    teeth: Vec<u32>
}

impl GearSet {
    pub const LIST_SEPARATOR: char = ',';

    pub fn crankset<I, S>(values: I) -> Result<GearSet>
        where I: IntoIterator<Item = S>, S: AsRef<str>
    {
        GearSet::from_strs(GearSetKind::Crankset, values)
    }

    pub fn cogset<I, S>(values: I) -> Result<GearSet>
        where I: IntoIterator<Item = S>, S: AsRef<str>
    {
        GearSet::from_strs(GearSetKind::Cogset, values)
    }

    /// Parse a comma separated list of tooth counts, e.g. `"50,39,30"`
    pub fn parse(kind: GearSetKind, list: &str) -> Result<GearSet> {
        if list.trim().is_empty() {
            return Err(GearingError::EmptyGearSet(kind));
        }
        GearSet::from_strs(kind, list.split(GearSet::LIST_SEPARATOR))
    }

    pub fn from_strs<I, S>(kind: GearSetKind, values: I) -> Result<GearSet>
        where I: IntoIterator<Item = S>, S: AsRef<str>
    {
        let mut teeth: Vec<u32> = Vec::new();
        for value in values {
            let value = value.as_ref().trim();
            let tooth = value.parse::<u32>().map_err(|e| {
                GearingError::InvalidTooth(kind, value.to_string(), e.to_string())
            })?;
            teeth.push(tooth);
        }
        GearSet::from_teeth(kind, teeth)
    }

    pub fn from_teeth(kind: GearSetKind, mut teeth: Vec<u32>) -> Result<GearSet> {
        if teeth.is_empty() {
            return Err(GearingError::EmptyGearSet(kind));
        }
        if teeth.contains(&0) {
            return Err(GearingError::InvalidTooth(kind,
                                                  "0".to_string(),
                                                  "a gear needs at least one tooth".to_string()));
        }
        match kind.order() {
            GearOrder::Ascending => teeth.sort_unstable(),
            GearOrder::Descending => teeth.sort_unstable_by(|a, b| b.cmp(a))
        }
        debug!("Built {} from teeth {:?}", kind, teeth);
        Ok(GearSet { kind, teeth })
    }

    pub fn kind(&self) -> GearSetKind {
        self.kind
    }

    pub fn teeth(&self) -> &[u32] {
        &self.teeth
    }

    pub fn len(&self) -> usize {
        self.teeth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teeth.is_empty()
    }

    /// Is `tooth` the first gear in the stored order?
    ///
    /// For a crankset that is the smallest (innermost) chainring and for a cogset
    /// the largest (innermost) cog.
    pub fn inside(&self, tooth: u32) -> Result<bool> {
        self.position(tooth)?;
        Ok(self.teeth.first() == Some(&tooth))
    }

    /// Is `tooth` the last gear in the stored order?
    pub fn outside(&self, tooth: u32) -> Result<bool> {
        self.position(tooth)?;
        Ok(self.teeth.last() == Some(&tooth))
    }

    pub fn inside_quarter(&self, tooth: u32) -> Result<bool> {
        Ok(self.position(tooth)? <= self.quarter())
    }

    pub fn outside_quarter(&self, tooth: u32) -> Result<bool> {
        let threshold = (self.len() - self.quarter()).saturating_sub(1);
        Ok(self.position(tooth)? >= threshold)
    }

    /// Each gear in stored order alongside the percentage change in teeth from the
    /// gear before it. The first gear has no change.
    pub fn steps(&self) -> Vec<GearStep> {
        let mut previous: Option<u32> = None;
        self.teeth.iter().map(|tooth| {
            let step = GearStep { tooth: *tooth, percent_change: percent_change(previous, *tooth) };
            previous = Some(*tooth);
            step
        }).collect()
    }

    // Truncating division. Sets with fewer than 4 gears have a quarter of 0
    fn quarter(&self) -> usize {
        self.len() / 4
    }

    fn position(&self, tooth: u32) -> Result<usize> {
        self.teeth.iter().position(|t| *t == tooth).ok_or(GearingError::ToothNotFound(self.kind, tooth))
    }
}
