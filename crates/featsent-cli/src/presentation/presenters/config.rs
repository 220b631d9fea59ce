use featsent_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigShowViewModel, Guidance, StatusBadge,
};

pub fn present_config_show(
    path: &Path,
    exists: bool,
    config: Config,
) -> CommandResultViewModel<ConfigShowViewModel> {
    let content = ConfigShowViewModel {
        path: path.display().to_string(),
        exists,
        config,
    };

    let result = CommandResultViewModel::new(content);
    if exists {
        result
    } else {
        result
            .with_badge(StatusBadge::info("No config file found; showing defaults"))
            .with_suggestion(Guidance::new("Create one").with_command("featsent config init"))
    }
}

pub fn present_config_init(path: &Path, written: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.display().to_string(),
        written,
    };

    if written {
        CommandResultViewModel::new(content).with_badge(StatusBadge::success(format!(
            "Wrote default config to {}",
            path.display()
        )))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning(format!(
                "Config already exists at {}",
                path.display()
            )))
            .with_suggestion(
                Guidance::new("Overwrite it with defaults")
                    .with_command("featsent config init --force"),
            )
    }
}
