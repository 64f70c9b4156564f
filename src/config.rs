use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

/// Clock periods and delays, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub decay_ms: u64,
    pub anim_ms: u64,
    pub action_ms: u64,
    pub status_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            decay_ms: 5_000,
            anim_ms: 120,
            action_ms: 2_000,
            status_ms: 2_000,
        }
    }
}

impl Timings {
    pub const MIN_ANIM_MS: u64 = 16;
    pub const MIN_DECAY_MS: u64 = 100;

    pub fn decay(&self) -> Duration {
        Duration::from_millis(self.decay_ms.max(Self::MIN_DECAY_MS))
    }

    pub fn anim(&self) -> Duration {
        Duration::from_millis(self.anim_ms.max(Self::MIN_ANIM_MS))
    }

    pub fn action(&self) -> Duration {
        Duration::from_millis(self.action_ms)
    }

    pub fn status(&self) -> Duration {
        Duration::from_millis(self.status_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_theme: bool,
    pub timings: Timings,
    pub star_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_theme: false,
            timings: Timings::default(),
            star_count: crate::fx::DEFAULT_STARS,
        }
    }
}

pub struct Paths {
    pub save_path: PathBuf,
    pub settings_path: PathBuf,
    pub log_path: PathBuf,
}

pub fn project_paths() -> Result<Paths> {
    let proj = ProjectDirs::from("com", "bitbuddy", "BitBuddy")
        .context("could not resolve project directories")?;
    let dir = proj.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).ok();
    Ok(Paths {
        save_path: dir.join("bitbuddy.json"),
        settings_path: dir.join("settings.json"),
        log_path: dir.join("bitbuddy.log"),
    })
}

pub fn load_settings(path: &Path) -> Settings {
    if let Ok(s) = fs::read_to_string(path) {
        match serde_json::from_str::<Settings>(&s) {
            Ok(v) => return v,
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings"),
        }
    }
    Settings::default()
}

pub fn save_settings_atomic(path: &Path, s: &Settings) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let data = serde_json::to_vec_pretty(s)?;
    fs::write(&tmp, data).with_context(|| format!("writing {}", tmp.display()))?;
    atomic_rename(&tmp, path)?;
    Ok(())
}

/// Writes back the settings as loaded from disk with only the theme changed,
/// so one-off command-line overrides are not kept.
pub fn remember_theme(path: &Path, mut stored: Settings, dark: bool) -> Result<()> {
    stored.dark_theme = dark;
    save_settings_atomic(path, &stored)
}

pub fn atomic_rename(from: &Path, to: &Path) -> io::Result<()> {
    // rename-over-existing fails on Windows
    if cfg!(windows) && to.exists() {
        let _ = fs::remove_file(to);
    }
    fs::rename(from, to)
}
