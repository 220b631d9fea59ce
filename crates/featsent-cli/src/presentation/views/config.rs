use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigShowViewModel, DisplayOptions};

pub struct ConfigShowView<'a> {
    data: &'a ConfigShowViewModel,
    options: &'a DisplayOptions,
}

impl<'a> ConfigShowView<'a> {
    pub fn new(data: &'a ConfigShowViewModel, options: &'a DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for ConfigShowView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = format!("# {}", self.data.path);
        if self.options.enable_color {
            writeln!(f, "{}", header.dimmed())?;
        } else {
            writeln!(f, "{}", header)?;
        }

        let body = self.data.config.to_toml().map_err(|_| fmt::Error)?;
        write!(f, "{}", body)
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.written {
            writeln!(f, "Edit {} to change the keyword buckets.", self.data.path)?;
        }
        Ok(())
    }
}
