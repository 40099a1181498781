use std::collections::{BTreeMap, HashMap};

/// Read-only access to environment variables.
///
/// The resolver takes this instead of reading `std::env` directly so tests
/// can supply a fixed map.
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;

    fn var_or(&self, name: &str, default: &str) -> String {
        self.var(name).unwrap_or_else(|| default.to_string())
    }
}

/// The real process environment. Values that are not valid UTF-8 are
/// converted lossily rather than dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_lookup() {
        let mut env = HashMap::new();
        env.insert("GITHUB_WORKSPACE".to_string(), "/work".to_string());

        assert_eq!(env.var("GITHUB_WORKSPACE").as_deref(), Some("/work"));
        assert_eq!(env.var("CI_PROJECT_DIR"), None);
    }

    #[test]
    fn test_var_or_default() {
        let env: BTreeMap<String, String> = BTreeMap::new();
        assert_eq!(env.var_or("CI_PROJECT_DIR", "/goat"), "/goat");
    }

    #[cfg(unix)]
    #[test]
    fn test_process_env_keeps_non_utf8_values() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = "SPELLCONF_TEST_NON_UTF8_WORKSPACE";
        std::env::set_var(name, OsStr::from_bytes(b"/work/\xff"));
        let value = ProcessEnv.var(name);
        std::env::remove_var(name);

        assert_eq!(value.as_deref(), Some("/work/\u{FFFD}"));
    }

    #[test]
    fn test_reference_forwarding() {
        let mut env = BTreeMap::new();
        env.insert("A".to_string(), "1".to_string());
        let by_ref = &env;
        assert_eq!(by_ref.var("A").as_deref(), Some("1"));
    }
}
