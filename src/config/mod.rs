mod core;
mod loader;

pub use self::core::{OutputConfig, StorageConfig, TbapConfig, TreeConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from_dir,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Commented starting point written by `tbap init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# tbap configuration

[scale]
# Response scale for every slider and question (1-99 or 1-100)
min = 1
max = 99

[tree]
# "axis_span": one facet at max against its opposite at min scores 100
# "adjacent_peak": two neighbouring facets at max score 100
strength_normalization = "axis_span"

[storage]
# dir = "/path/to/results"

[output]
default_format = "terminal"
"#;
