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

pub const INCHES_PER_FOOT: f64 = 12.0;
// 60 / 5280 rounded to four places
pub const FEET_PER_MINUTE_TO_MPH: f64 = 0.0114;

pub fn inches_to_feet(inches: f64) -> f64 {
    inches / INCHES_PER_FOOT
}

pub fn feet_per_minute_to_mph(feet_per_minute: f64) -> f64 {
    feet_per_minute * FEET_PER_MINUTE_TO_MPH
}
