
use crate::{
    CONFIG_DIR_ENV, ENV_APPWRITE_API_KEY, ENV_APPWRITE_DATABASE_ID, ENV_APPWRITE_ENDPOINT,
    ENV_APPWRITE_PROJECT_ID,
};

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory exposed through CF_CONFIG_DIR, with the Appwrite
/// variables cleared so the host environment cannot leak into a test.
pub(crate) struct TestConfigDir {
    pub(crate) temp: TempDir,
    _guards: Vec<EnvGuard>,
}

impl TestConfigDir {
    pub(crate) fn path(&self) -> &std::path::Path {
        self.temp.path()
    }

    pub(crate) fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.temp.path().join(name), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> TestConfigDir {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set(CONFIG_DIR_ENV, temp.path().to_str().unwrap()),
        EnvGuard::remove(ENV_APPWRITE_ENDPOINT),
        EnvGuard::remove(ENV_APPWRITE_PROJECT_ID),
        EnvGuard::remove(ENV_APPWRITE_DATABASE_ID),
        EnvGuard::remove(ENV_APPWRITE_API_KEY),
        EnvGuard::remove("CF_SCHEMA_DELAY_MS"),
        EnvGuard::remove("CF_REQUEST_TIMEOUT_SECS"),
        EnvGuard::remove("CF_LOG_LEVEL"),
        EnvGuard::remove("CF_LOG_COLORED"),
        EnvGuard::remove("CF_LOG_FILE"),
    ];
    TestConfigDir {
        temp,
        _guards: guards,
    }
}
