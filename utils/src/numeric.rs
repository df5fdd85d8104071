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

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

/// Percentage change going from `previous` to `current`, expressed relative to `current`.
///
/// Moving to a smaller value reads negative and moving to a larger value reads positive.
/// A missing or zero `previous` value has no change.
pub fn percent_change(previous: Option<u32>, current: u32) -> f64 {
    match previous {
        Some(previous) if previous != 0 && current != 0 => {
            100.0 - ((previous as f64 / current as f64) * 100.0)
        }
        _ => 0.0
    }
}

pub fn is_valid_percentage(val: f64) -> bool {
    val >= 0.0 && val <= 100.0
}
