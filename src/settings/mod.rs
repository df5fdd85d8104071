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

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// The scalar inputs that have defaults.
///
/// Defaults can be overridden from the environment, e.g. `GEAR_GRADE_WHEEL_INCHES=26`,
/// and command line flags override both.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Settings {
    pub wheel_inches: f64,
    pub rpms: u32,
}

impl Settings {
    const WHEEL_INCHES: &'static str = "wheel_inches";
    const RPMS: &'static str = "rpms";
    const ENV_PREFIX: &'static str = "GEAR_GRADE";

    pub const DEFAULT_WHEEL_INCHES: f64 = 27.0;
    pub const DEFAULT_RPMS: u32 = 90;

    pub fn default() -> Self {
        Settings {
            wheel_inches: Settings::DEFAULT_WHEEL_INCHES,
            rpms: Settings::DEFAULT_RPMS,
        }
    }

    pub fn load() -> Result<Self, ConfigError> {
        Settings::load_from(Environment::with_prefix(Settings::ENV_PREFIX))
    }

    fn load_from(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default(Settings::WHEEL_INCHES, Settings::DEFAULT_WHEEL_INCHES)?
            .set_default(Settings::RPMS, Settings::DEFAULT_RPMS as i64)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn with_overrides(self, wheel_inches: Option<f64>, rpms: Option<u32>) -> Self {
        Settings {
            wheel_inches: wheel_inches.unwrap_or(self.wheel_inches),
            rpms: rpms.unwrap_or(self.rpms),
        }
    }
}
