use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_RENDER_FPS, DEFAULT_TICK_MS};

/// Runtime settings read from `PACMAN_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tick_ms: u64,
    pub render_fps: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            render_fps: DEFAULT_RENDER_FPS,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Missing, unparsable or zero values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let positive = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };
        Self {
            tick_ms: positive("PACMAN_TICK_MS", DEFAULT_TICK_MS),
            render_fps: positive("PACMAN_FPS", DEFAULT_RENDER_FPS),
            log_file: lookup("PACMAN_LOG_FILE").filter(|v| !v.is_empty()).map(PathBuf::from),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.render_fps.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Settings::from_lookup(lookup_in(&[])), Settings::default());
    }

    #[test]
    fn reads_overrides_and_ignores_garbage() {
        let settings = Settings::from_lookup(lookup_in(&[
            ("PACMAN_TICK_MS", "50"),
            ("PACMAN_FPS", "0"),
            ("PACMAN_LOG_FILE", "/tmp/pacman.log"),
        ]));
        assert_eq!(settings.tick(), Duration::from_millis(50));
        assert_eq!(settings.render_fps, DEFAULT_RENDER_FPS);
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/pacman.log")));

        let settings = Settings::from_lookup(lookup_in(&[("PACMAN_TICK_MS", "fast")]));
        assert_eq!(settings.tick_ms, DEFAULT_TICK_MS);
    }
}
