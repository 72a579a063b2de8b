//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# PaneGrid Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[pool]
# size = 16                       # 1-32 pooled panes
# default_columns = 2             # 1-3, used until the stored setting exists
# autosave_interval_secs = 60

[layout]
# single_column_width = 880
# multi_column_width = 500
# aspect_width = 5
# aspect_height = 3
# gap = 5
# margin = 5
# host_padding = 10

[pane]
# min_width = 300
# min_height = 200
# load_delay_ms = 500
# not_ready_retry_ms = 100
# autosave_interval_secs = 30
# cookie_save_delay_ms = 1000
# zoom_after_load_ms = 500
# zoom_after_mode_switch_ms = 200
# zoom_after_resize_ms = 100
# reference_width = 1920
# reference_height = 1080
# auto_resolution = true
# search_endpoint = "https://www.google.com/search?q="
# blank_destination = "about:blank"
# home_destination = "about:blank"

[controls]
# reveal_delay_ms = 100
# idle_hide_ms = 2000
# hot_zone_height = 50

[fullscreen]
# enter_settle_ms = 100
# exit_settle_ms = 50

[storage]
# data_dir = "/path/to/data"      # defaults to the platform data directory
# disabled = false

[logging]
level = "INFO"                    # TRACE, DEBUG, INFO, WARNING, ERROR

[window]
# title = "PaneGrid"
# height = 900
"##
    .to_string()
}
