use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bot::Bot;
use crate::bots::{HeuristicBot, RandomBot};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - random[:seed]
/// - heuristic
pub fn create_bot_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    let spec_lower = spec.to_ascii_lowercase();
    if spec_lower.starts_with("random") {
        let custom_seed = spec
            .split_once(':')
            .and_then(|(_, value)| value.parse::<u64>().ok())
            .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9));
        Ok(Box::new(RandomBot::new(StdRng::seed_from_u64(custom_seed))))
    } else if spec_lower.starts_with("heuristic") {
        Ok(Box::new(HeuristicBot::default()))
    } else {
        Err(format!("unrecognized bot spec: {spec}").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_strip_arguments() {
        assert_eq!(label_for_spec("Random:42"), "random");
        assert_eq!(label_for_spec("heuristic"), "heuristic");
    }

    #[test]
    fn unknown_specs_are_rejected() {
        assert!(create_bot_from_spec("random", 0, 1).is_ok());
        assert!(create_bot_from_spec("random:7", 1, 1).is_ok());
        assert!(create_bot_from_spec("heuristic", 2, 1).is_ok());
        assert!(create_bot_from_spec("alphago", 3, 1).is_err());
    }
}
