pub const SEED_DEMO_KEY: &str = "POLLS_SEED_DEMO";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub seed_demo: bool,
}

impl Settings {
    /// Reads settings through `lookup`, which in deployment is the secret store.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            seed_demo: lookup(SEED_DEMO_KEY).as_deref().map(parse_flag).unwrap_or(false),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(settings(&[]), Settings::default());
    }

    #[test]
    fn seed_flag_values() {
        for on in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(settings(&[(SEED_DEMO_KEY, on)]).seed_demo, "{on:?} should enable seeding");
        }
        for off in ["0", "false", "", "nope"] {
            assert!(!settings(&[(SEED_DEMO_KEY, off)]).seed_demo, "{off:?} should not enable seeding");
        }
    }
}
