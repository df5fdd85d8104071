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

use itertools::Itertools;
use utils::units::{feet_per_minute_to_mph, inches_to_feet};

// Two digit pi, kept so speeds agree with traditional bicycle gear tables
pub const PI_APPROX: f64 = 3.14;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ToothPair {
    pub crankset_tooth: u32,
    pub cog_tooth: u32
}

impl ToothPair {
    pub fn name(&self) -> String {
        format!("{}x{}", self.crankset_tooth, self.cog_tooth)
    }
}

/// A single chainring and cog pairing.
///
/// Combos that share a [fingerprint](GearCombo::fingerprint) are recorded against each
/// other as related; they give near identical ratios through different tooth pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct GearCombo {
    teeth: ToothPair,
    related: Vec<ToothPair>
}

impl GearCombo {
    pub fn new(crankset_tooth: u32, cog_tooth: u32) -> GearCombo {
        GearCombo { teeth: ToothPair { crankset_tooth, cog_tooth }, related: Vec::new() }
    }

    pub fn crankset_tooth(&self) -> u32 {
        self.teeth.crankset_tooth
    }

    pub fn cog_tooth(&self) -> u32 {
        self.teeth.cog_tooth
    }

    pub fn teeth(&self) -> ToothPair {
        self.teeth
    }

    pub fn gear_ratio(&self) -> f64 {
        self.teeth.crankset_tooth as f64 / self.teeth.cog_tooth as f64
    }

    /// Distance travelled per crank revolution in inches
    pub fn development_inches(&self, wheel_inches: f64) -> f64 {
        self.gear_ratio() * wheel_inches * PI_APPROX
    }

    /// Road speed (MPH) when pedalling at `rpms` on a wheel `wheel_inches` in diameter
    pub fn speed(&self, wheel_inches: f64, rpms: u32) -> f64 {
        let development_feet = inches_to_feet(self.development_inches(wheel_inches));
        feet_per_minute_to_mph(development_feet * rpms as f64)
    }

    pub fn fingerprint(&self) -> u32 {
        (self.gear_ratio() * 10.0) as u32
    }

    pub fn add_related(&mut self, other: &GearCombo) {
        self.related.push(other.teeth)
    }

    pub fn related(&self) -> &[ToothPair] {
        &self.related
    }

    pub fn num_related(&self) -> usize {
        self.related.len()
    }

    pub fn is_unique_group(&self) -> bool {
        self.related.is_empty()
    }

    pub fn name(&self) -> String {
        self.teeth.name()
    }

    pub fn related_names(&self) -> String {
        self.related.iter().map(ToothPair::name).join(", ")
    }
}
