use featsent_runtime::Config;
use serde::Serialize;

use super::{CreateView, DisplayOptions};
use crate::presentation::views::{ConfigInitView, ConfigShowView};

#[derive(Debug, Serialize)]
pub struct ConfigShowViewModel {
    pub path: String,
    /// False when defaults are shown because the file does not exist.
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub written: bool,
}

impl CreateView for ConfigShowViewModel {
    fn create_view<'a>(
        &'a self,
        options: &'a DisplayOptions,
    ) -> Box<dyn std::fmt::Display + 'a> {
        Box::new(ConfigShowView::new(self, options))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(
        &'a self,
        _options: &'a DisplayOptions,
    ) -> Box<dyn std::fmt::Display + 'a> {
        Box::new(ConfigInitView::new(self))
    }
}
