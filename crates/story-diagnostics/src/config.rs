// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Rendering configuration.
//!
//! Respects NO_COLOR and FORCE_COLOR environment variables.

use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Colour when the terminal supports it.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub color: ColorChoice,
    /// Paths under this directory are shown relative to it. Defaults to
    /// the process working directory.
    pub working_dir: Option<PathBuf>,
}

impl RenderConfig {
    /// Plain output, for logs and tests.
    pub fn plain() -> Self {
        Self {
            color: ColorChoice::Never,
            working_dir: None,
        }
    }

    /// Reads NO_COLOR and FORCE_COLOR. NO_COLOR wins when both are set.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var_os(name))
    }

    /// Same as [`RenderConfig::from_env`], reading variables through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<OsString>) -> Self {
        let color = if var("NO_COLOR").is_some() {
            ColorChoice::Never
        } else if var("FORCE_COLOR").is_some() {
            ColorChoice::Always
        } else {
            ColorChoice::Auto
        };
        Self {
            color,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Applies the colour choice to the process-wide `colored` switch.
    /// Call once at startup.
    pub fn init(&self) {
        match self.color {
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
            ColorChoice::Auto => colored::control::unset_override(),
        }
    }

    pub fn use_color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    pub(crate) fn working_dir(&self) -> Option<PathBuf> {
        self.working_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
