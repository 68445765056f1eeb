use std::collections::HashMap;
use std::env;

/// The shell's own copy of the process environment.
///
/// Built-ins like `setenv`/`unsetenv` mutate this copy; the real process
/// environment is only consulted once at startup. Children receive the copy
/// wholesale when spawned.
#[derive(Clone, Debug)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|s| s.as_str())
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    /// Returns false when the name was not present.
    pub fn unset(&mut self, name: &str) -> bool {
        self.vars.remove(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_process_env() {
        env::set_var("CAVA_TEST_SEED", "yes");
        let environ = Environment::new();
        assert_eq!(environ.get("CAVA_TEST_SEED"), Some("yes"));
        env::remove_var("CAVA_TEST_SEED");
    }

    #[test]
    fn test_set_and_get() {
        let mut environ = Environment::new();
        environ.set("CAVA_TEST_VAR", "some value");
        assert_eq!(environ.get("CAVA_TEST_VAR"), Some("some value"));
    }

    #[test]
    fn test_set_does_not_touch_process_env() {
        let mut environ = Environment::new();
        environ.set("CAVA_COPY_ONLY", "1");
        assert!(env::var("CAVA_COPY_ONLY").is_err());
    }

    #[test]
    fn test_unset() {
        let mut environ = Environment::new();
        environ.set("CAVA_GONE", "1");
        assert!(environ.unset("CAVA_GONE"));
        assert_eq!(environ.get("CAVA_GONE"), None);
        assert!(!environ.unset("CAVA_GONE"));
    }
}
