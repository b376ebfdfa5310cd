use super::{types::Config, ConfigError};

/// Validate configuration.
/// Currently validates:
/// - base_url is non-empty
/// - family routes start with '/'
/// - weight-class boundary tables are strictly ascending
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.broadcast.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "broadcast.base_url cannot be empty".to_string(),
        ));
    }

    for (name, route) in [
        ("lift_attempt", &config.broadcast.lift_attempt.route),
        ("lift_result", &config.broadcast.lift_result.route),
    ] {
        if !route.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "broadcast.{}.route must start with '/': {}",
                name, route
            )));
        }
    }

    for (name, classes) in [
        ("weight_classes_kg_men", &config.meet.weight_classes_kg_men),
        (
            "weight_classes_kg_women",
            &config.meet.weight_classes_kg_women,
        ),
        ("weight_classes_kg_mx", &config.meet.weight_classes_kg_mx),
    ] {
        if !classes.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(ConfigError::ValidationError(format!(
                "meet.{} must be strictly ascending",
                name
            )));
        }
    }

    Ok(())
}
