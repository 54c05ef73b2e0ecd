//! Model generation settings validation.

use crate::schema::MasakConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

pub(super) fn validate_model(errors: &mut Vec<String>, config: &MasakConfig) {
    let model = &config.model;

    validate_not_blank(errors, "model.name", &model.name);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "model.max_output_tokens",
        u64::from(model.max_output_tokens),
        1,
        8192,
    );
    validate_range(errors, "model.timeout_secs", model.timeout_secs, 1, 600);

    if !(model.api_base.starts_with("https://") || model.api_base.starts_with("http://")) {
        errors.push(format!(
            "model.api_base = {:?} must be an http(s) URL",
            model.api_base
        ));
    }
}
