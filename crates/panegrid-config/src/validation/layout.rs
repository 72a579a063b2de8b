//! Pool and grid geometry validation.

use crate::schema::PanegridConfig;

use super::helpers::check_range;

pub(crate) fn validate_pool(errors: &mut Vec<String>, config: &PanegridConfig) {
    check_range(errors, "pool.size", config.pool.size, 1..=32);
    check_range(errors, "pool.default_columns", config.pool.default_columns, 1..=3);
    check_range(errors, "pool.autosave_interval_secs", config.pool.autosave_interval_secs, 10..=3600);
}

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &PanegridConfig) {
    let layout = &config.layout;
    check_range(errors, "layout.single_column_width", layout.single_column_width, 300..=3840);
    check_range(errors, "layout.multi_column_width", layout.multi_column_width, 300..=3840);
    check_range(errors, "layout.aspect_width", layout.aspect_width, 1..=32);
    check_range(errors, "layout.aspect_height", layout.aspect_height, 1..=32);
    check_range(errors, "layout.gap", layout.gap, 0..=40);
    check_range(errors, "layout.margin", layout.margin, 0..=40);
    check_range(errors, "layout.host_padding", layout.host_padding, 0..=200);
}
