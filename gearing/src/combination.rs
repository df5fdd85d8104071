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

use std::collections::{BTreeMap, BTreeSet};
use itertools::Itertools;
use tracing::debug;
use crate::combo::GearCombo;
use crate::error::Result;
use crate::gear_set::{GearSet, GearStep};
use crate::report;

// Seed values for the running speed range
const MIN_SPEED_SEED: f64 = 1000.0;
const MAX_SPEED_SEED: f64 = 0.0;

/// Cross chaining is only modelled for triple (or larger) chainsets
const CROSS_CHAIN_MIN_CHAINRINGS: usize = 3;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Usability {
    /// Cross chained past the point of being selectable
    Blocked,
    /// Selectable but with a poor chain line
    Discouraged,
    Usable
}

impl Usability {
    pub fn symbol(&self) -> char {
        match self {
            Usability::Blocked => 'X',
            Usability::Discouraged => '-',
            Usability::Usable => ' '
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComboRow {
    pub name: String,
    pub ratio: f64,
    pub speed: f64,
    pub usability: Usability,
    pub related_names: String
}

#[derive(Clone, Debug, PartialEq)]
pub struct GearSummary {
    pub num_gears: usize,
    pub unique_gears: usize,
    pub usable_gears: usize,
    pub unique_usable_gears: usize,
    pub gear_grade: f64,
    pub max_speed: f64,
    pub min_speed: f64
}

#[derive(Clone, Debug, PartialEq)]
pub struct GearAnalysis {
    pub rows: Vec<ComboRow>,
    pub summary: GearSummary,
    pub cog_steps: Vec<GearStep>
}

/// Every chainring and cog pairing available from a crankset and cogset.
///
/// Combos are held crankset major, in the canonical order of each [GearSet], and are
/// linked to the other combos that share their fingerprint once at construction.
#[derive(Clone, Debug)]
pub struct GearCombination {
    crankset: GearSet,
    cogset: GearSet,
    combos: Vec<GearCombo>
}

impl GearCombination {
    pub fn new(crankset: GearSet, cogset: GearSet) -> GearCombination {
        let combos = crankset.teeth().iter()
            .cartesian_product(cogset.teeth().iter())
            .map(|(crankset_tooth, cog_tooth)| GearCombo::new(*crankset_tooth, *cog_tooth))
            .collect();
        let mut combination = GearCombination { crankset, cogset, combos };
        combination.calculate_relationships();
        combination
    }

    pub fn crankset(&self) -> &GearSet {
        &self.crankset
    }

    pub fn cogset(&self) -> &GearSet {
        &self.cogset
    }

    pub fn combos(&self) -> &[GearCombo] {
        &self.combos
    }

    fn calculate_relationships(&mut self) {
        let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (idx, combo) in self.combos.iter().enumerate() {
            groups.entry(combo.fingerprint()).or_default().push(idx);
        }
        debug!("{} combos fall into {} fingerprint groups", self.combos.len(), groups.len());

        let unrelated = self.combos.clone();
        for (idx, combo) in self.combos.iter_mut().enumerate() {
            let Some(group) = groups.get(&combo.fingerprint()) else {
                continue;
            };
            for other_idx in group.iter().filter(|other_idx| **other_idx != idx) {
                combo.add_related(&unrelated[*other_idx]);
            }
        }
    }

    pub fn is_related(&self, combo_a: &GearCombo, combo_b: &GearCombo) -> bool {
        combo_a.fingerprint() == combo_b.fingerprint()
    }

    /// Can the combo be selected at all?
    ///
    /// The innermost chainring can't reach the outermost cog and the outermost chainring
    /// can't reach the innermost cog.
    pub fn is_accessible(&self, combo: &GearCombo) -> Result<bool> {
        if self.crankset.len() < CROSS_CHAIN_MIN_CHAINRINGS {
            return Ok(true);
        }
        if self.crankset.inside(combo.crankset_tooth())? {
            return Ok(!self.cogset.outside(combo.cog_tooth())?);
        }
        if self.crankset.outside(combo.crankset_tooth())? {
            return Ok(!self.cogset.inside(combo.cog_tooth())?);
        }
        Ok(true)
    }

    /// As [GearCombination::is_accessible] but stays away from the whole outer quarter
    /// of the cogset rather than only its last cog
    pub fn is_easy(&self, combo: &GearCombo) -> Result<bool> {
        if self.crankset.len() < CROSS_CHAIN_MIN_CHAINRINGS {
            return Ok(true);
        }
        if self.crankset.inside(combo.crankset_tooth())? {
            return Ok(!self.cogset.outside_quarter(combo.cog_tooth())?);
        }
        if self.crankset.outside(combo.crankset_tooth())? {
            return Ok(!self.cogset.inside_quarter(combo.cog_tooth())?);
        }
        Ok(true)
    }

    pub fn usability(&self, combo: &GearCombo) -> Result<Usability> {
        if !self.is_accessible(combo)? {
            return Ok(Usability::Blocked);
        }
        if !self.is_easy(combo)? {
            return Ok(Usability::Discouraged);
        }
        Ok(Usability::Usable)
    }

    pub fn analyse(&self, wheel_inches: f64, rpms: u32) -> Result<GearAnalysis> {
        let mut unique: BTreeSet<u32> = BTreeSet::new();
        let mut unique_usable: BTreeSet<u32> = BTreeSet::new();
        let mut usable_gears = 0;
        let mut min_speed = MIN_SPEED_SEED;
        let mut max_speed = MAX_SPEED_SEED;
        let mut rows: Vec<ComboRow> = Vec::with_capacity(self.combos.len());

        for combo in &self.combos {
            let usability = self.usability(combo)?;
            if usability == Usability::Usable {
                unique_usable.insert(combo.fingerprint());
                usable_gears += 1;
            }
            let speed = combo.speed(wheel_inches, rpms);
            min_speed = min_speed.min(speed);
            max_speed = max_speed.max(speed);
            unique.insert(combo.fingerprint());

            rows.push(ComboRow {
                name: combo.name(),
                ratio: combo.gear_ratio(),
                speed,
                usability,
                related_names: combo.related_names()
            });
        }

        let gear_grade = unique_usable.len() as f64 / self.combos.len() as f64 * 100.0;
        debug!("{} of {} combos usable, grade {:.2}%", usable_gears, self.combos.len(), gear_grade);

        Ok(GearAnalysis {
            rows,
            summary: GearSummary {
                num_gears: self.combos.len(),
                unique_gears: unique.len(),
                usable_gears,
                unique_usable_gears: unique_usable.len(),
                gear_grade,
                max_speed,
                min_speed
            },
            cog_steps: self.cogset.steps()
        })
    }

    /// The full text report: one line per combo, the summary and then the cogset steps
    pub fn output(&self, wheel_inches: f64, rpms: u32) -> Result<String> {
        let analysis = self.analyse(wheel_inches, rpms)?;
        Ok(report::render(&analysis))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use utils::numeric::{is_valid_percentage, round_float_to};
    use crate::combo::GearCombo;
    use crate::combination::{GearCombination, Usability};
    use crate::error::GearingError;
    use crate::gear_set::{GearSet, GearSetKind};

    fn combination(crankset: &str, cogset: &str) -> GearCombination {
        GearCombination::new(GearSet::parse(GearSetKind::Crankset, crankset).unwrap(),
                             GearSet::parse(GearSetKind::Cogset, cogset).unwrap())
    }

    fn symbols(combination: &GearCombination) -> String {
        combination.combos().iter().map(|c| combination.usability(c).unwrap().symbol()).collect()
    }

    #[test]
    fn combos_are_crankset_major() {
        let combination = combination("50,34", "11,13,15");
        let names: Vec<String> = combination.combos().iter().map(GearCombo::name).collect();
        assert_eq!(names, vec!["34x15", "34x13", "34x11", "50x15", "50x13", "50x11"]);
    }

    #[test]
    fn equal_ratios_are_related() {
        let combination = combination("50,48", "25,24");
        let combos = combination.combos();
        let find = |name: &str| combos.iter().find(|c| c.name() == name).unwrap();
        assert!(combination.is_related(find("50x25"), find("48x24")));
        assert!(!combination.is_related(find("50x25"), find("48x25")));
        assert_eq!(find("50x25").related_names(), "48x24, 50x24");
        assert_eq!(find("48x24").related_names(), "50x25, 50x24");
        assert!(find("48x25").is_unique_group());
    }

    #[test]
    fn related_lists_exclude_self_and_follow_canonical_order() {
        let combination = combination("50,39,30", "11,12,13,14,15,17,19,21,24,28");
        for combo in combination.combos() {
            assert!(combo.related().iter().all(|r| *r != combo.teeth()));
        }
        let by_name = |name: &str| combination.combos().iter().find(|c| c.name() == name).unwrap();
        assert_eq!(by_name("30x15").related_names(), "39x19, 50x24");
        assert_eq!(by_name("50x24").related_names(), "30x15, 39x19");
        assert_eq!(by_name("30x11").related_names(), "39x14");
        assert!(by_name("39x13").is_unique_group());
    }

    #[test]
    fn duplicate_teeth_relate_to_each_other() {
        let combination = combination("40,40", "20");
        assert_eq!(combination.combos().len(), 2);
        for combo in combination.combos() {
            assert_eq!(combo.num_related(), 1);
            assert_eq!(combo.related_names(), "40x20");
        }
    }

    #[test]
    fn double_chainset_is_always_usable() {
        let combination = combination("50,34", "11,13,15,17,19,21,23,25");
        assert_eq!(combination.combos().len(), 16);
        assert_eq!(symbols(&combination), " ".repeat(16));

        let analysis = combination.analyse(27.0, 90).unwrap();
        let top = analysis.rows.iter().find(|r| r.name == "50x11").unwrap();
        assert_eq!(top.speed, (50.0 / 11.0) * 27.0 * 3.14 / 12.0 * 90.0 * 0.0114);
        assert_eq!(analysis.summary.max_speed, top.speed);
        assert_eq!(analysis.summary.usable_gears, 16);
    }

    #[test]
    fn triple_chainset_cross_chains() {
        let combination = combination("50,39,30", "11,12,13,14,15,17,19,21,24,28");
        let usability = |name: &str| {
            let combo = combination.combos().iter().find(|c| c.name() == name).unwrap();
            combination.usability(combo).unwrap()
        };
        assert_eq!(usability("30x11"), Usability::Blocked);
        assert_eq!(usability("50x28"), Usability::Blocked);
        assert_eq!(usability("30x12"), Usability::Discouraged);
        assert_eq!(usability("30x13"), Usability::Discouraged);
        assert_eq!(usability("30x14"), Usability::Usable);
        assert_eq!(usability("50x24"), Usability::Discouraged);
        assert_eq!(usability("50x21"), Usability::Discouraged);
        assert_eq!(usability("50x19"), Usability::Usable);
        assert_eq!(usability("39x11"), Usability::Usable);
        assert_eq!(usability("39x28"), Usability::Usable);
        assert_eq!(symbols(&combination).matches('X').count(), 2);
        assert_eq!(symbols(&combination).matches('-').count(), 4);
    }

    #[test]
    fn triple_chainset_summary() {
        let combination = combination("50,39,30", "11,12,13,14,15,17,19,21,24,28");
        let summary = combination.analyse(27.0, 90).unwrap().summary;
        assert_eq!(summary.num_gears, 30);
        assert_eq!(summary.unique_gears, 23);
        assert_eq!(summary.usable_gears, 24);
        assert_eq!(summary.unique_usable_gears, 21);
        assert_eq!(round_float_to(summary.gear_grade, 2), 70.0);
        assert_eq!(round_float_to(summary.max_speed, 2), 32.95);
        assert_eq!(round_float_to(summary.min_speed, 2), 7.77);
    }

    #[test]
    fn all_distinct_and_usable_grades_100() {
        let combination = combination("48", "12,24");
        let summary = combination.analyse(27.0, 90).unwrap().summary;
        assert_eq!(summary.gear_grade, 100.0);
    }

    #[test]
    fn foreign_combo_is_not_found() {
        let combination = combination("50,39,30", "11,28");
        let stray = GearCombo::new(42, 11);
        assert_eq!(combination.is_accessible(&stray),
                   Err(GearingError::ToothNotFound(GearSetKind::Crankset, 42)));
        let stray = GearCombo::new(30, 17);
        assert_eq!(combination.is_easy(&stray),
                   Err(GearingError::ToothNotFound(GearSetKind::Cogset, 17)));
        // the middle ring never looks at the cogset
        assert_eq!(combination.is_accessible(&GearCombo::new(39, 17)), Ok(true));
    }

    #[test]
    fn cogset_steps_are_included() {
        let analysis = combination("50,34", "11,13,15,17,19,21,23,25").analyse(27.0, 90).unwrap();
        let teeth: Vec<u32> = analysis.cog_steps.iter().map(|s| s.tooth).collect();
        assert_eq!(teeth, vec![25, 23, 21, 19, 17, 15, 13, 11]);
        assert_eq!(analysis.cog_steps[0].percent_change, 0.0);
    }

    proptest! {
        #[test]
        fn summary_bounds(crankset in prop::collection::vec(22u32..56, 1..4),
                          cogset in prop::collection::vec(10u32..42, 1..13),
                          wheel_inches in 12.0f64..30.0,
                          rpms in 1u32..150) {
            let combination = GearCombination::new(
                GearSet::from_teeth(GearSetKind::Crankset, crankset.clone()).unwrap(),
                GearSet::from_teeth(GearSetKind::Cogset, cogset.clone()).unwrap());
            let analysis = combination.analyse(wheel_inches, rpms).unwrap();
            let summary = analysis.summary;
            prop_assert_eq!(summary.num_gears, crankset.len() * cogset.len());
            prop_assert_eq!(analysis.rows.len(), summary.num_gears);
            prop_assert!(is_valid_percentage(summary.gear_grade));
            prop_assert!(summary.unique_gears >= summary.unique_usable_gears);
            prop_assert!(summary.usable_gears >= summary.unique_usable_gears);
            prop_assert!(summary.min_speed <= summary.max_speed);
        }

        #[test]
        fn relationships_are_symmetric(crankset in prop::collection::vec(22u32..56, 1..4),
                                       cogset in prop::collection::vec(10u32..42, 1..13)) {
            let combination = GearCombination::new(
                GearSet::from_teeth(GearSetKind::Crankset, crankset).unwrap(),
                GearSet::from_teeth(GearSetKind::Cogset, cogset).unwrap());
            let combos = combination.combos();
            for combo in combos {
                let same_fingerprint = combos.iter()
                    .filter(|other| combination.is_related(combo, other))
                    .count();
                prop_assert_eq!(combo.num_related(), same_fingerprint - 1);
                for related in combo.related() {
                    let other = combos.iter().find(|c| c.teeth() == *related).unwrap();
                    prop_assert!(other.related().contains(&combo.teeth()));
                }
            }
        }
    }
}
