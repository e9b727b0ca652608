//! Default TOML config template with inline documentation comments.

/// The default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# themegen configuration
# Schema version 1
# Only override what you want to change -- missing fields use Bootstrap defaults.

[theme]
# Built-in preset name ("Fintech Trust", "neobank", ...), a user preset
# under presets/<name>.yaml, or a path to a preset YAML file.
# preset = "Fintech Trust"

[controls.colors]
# primary = "#0d6efd"
# secondary = "#6c757d"
# success = "#198754"
# danger = "#dc3545"
# warning = "#ffc107"
# info = "#0dcaf0"
# light = "#f8f9fa"
# dark = "#212529"

[controls.typography]
# font_family = "system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, 'Noto Sans', 'Liberation Sans', sans-serif"
# heading_font_family = "inherit"
# font_size = 16         # px, 8-32
# font_weight = 400      # 100-900
# heading_weight = 500   # 100-900
# line_height = 1.5      # 1.0-3.0
# letter_spacing = 0.0   # em, -0.1-0.5

[controls.spacing]
# spacing_base = "1rem"
# container_padding = "0.75rem"
# component_padding = "0.375rem 0.75rem"

[controls.borders]
# radius = 6             # px, 0-50
# radius_sm = 4          # px, 0-50
# radius_lg = 8          # px, 0-50
# width = 1              # px, 0-10
# style = "solid"

[controls.shadows]
# box_shadow = "0 0.125rem 0.25rem rgba(0, 0, 0, 0.075)"
# box_shadow_hover = "0 0.5rem 1rem rgba(0, 0, 0, 0.15)"
# text_shadow = "none"
# glow_effect = "none"

[controls.animation]
# transition_duration = "300ms"
# transition_timing = "ease"
# hover_scale = "1"
# animation_intensity = "normal"

[controls.links]
# color = "#0d6efd"
# hover_color = "#0a58ca"
# decoration = "underline"
# focus_ring_color = "#0d6efd"
# focus_ring_width = 3      # px, 0-10
# focus_ring_opacity = 0.25 # 0.0-1.0

[controls.forms]
# input_bg = "#ffffff"
# input_border_color = "#ced4da"
# input_focus_border_color = "#0d6efd"
# input_placeholder_color = "#6c757d"
# input_disabled_bg = "#e9ecef"
# input_padding_y = 6    # px, 0-40
# input_padding_x = 12   # px, 0-40
# label_font_size = 14   # px, 8-32

[controls.grid]
# columns = 12                 # 1-24
# gutter_width = 24            # px, 0-100
# container_max_width_sm = 540 # px, 300-2000
# container_max_width_md = 720
# container_max_width_lg = 960
# container_max_width_xl = 1140

[output]
# flavor = "bootstrap"   # "bootstrap" or "dynamic"
# directory = "."

[editor]
# strict = false             # warn about unknown --bs- names
# warning_display_secs = 5   # 1-60

[extractor]
# url = "https://cdn.dynamicframework.dev/assets/1.36.2/ui-react/css/dynamic-ui-root.css"
# prefix = "--bs-"
# timeout_secs = 15          # 1-120

[logging]
# filter = "themegen=info"
"##
    .to_string()
}
