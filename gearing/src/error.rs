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

use std::result;
use crate::gear_set::GearSetKind;

pub type Result<T> = result::Result<T, GearingError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GearingError {
    #[error("no {0} teeth given")]
    EmptyGearSet(GearSetKind),
    #[error("invalid {0} tooth count `{1}`. {2}")]
    InvalidTooth(GearSetKind, String, String),
    #[error("tooth count `{1}` not found in {0}")]
    ToothNotFound(GearSetKind, u32),
}

impl GearingError {
    pub fn is_usage_error(&self) -> bool {
        matches!(self, GearingError::EmptyGearSet(_))
    }
}
