//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# sash configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[splitter]
orientation = "horizontal"   # horizontal (stacked) or vertical (side by side)
# divider_size = 4.0         # 0-64 px
# panes = 3                  # 1-32
# min_sizes = [0, 0, 0]      # px per pane, by index
# initial_sizes = ["148px", "296px", "148px"]   # "N%" or "Npx", one per pane, scaled to fill

[container]
# width = 800
# height = 600

[explorer]
# folder = "/path/to/bot"    # scanned for a cards/ directory

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
