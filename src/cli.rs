use crate::config::{Paths, Settings};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "bitbuddy")]
#[command(about = "A tiny virtual pet that lives in your terminal")]
pub struct Cli {
    /// Pet save file (defaults to the per-user data directory)
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Settings file (defaults to the per-user data directory)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Log file; set RUST_LOG to change verbosity
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Start with the dark theme
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Start with the light theme
    #[arg(long)]
    pub light: bool,

    /// Milliseconds between stat decay ticks
    #[arg(long, value_name = "MS")]
    pub decay_ms: Option<u64>,

    /// Milliseconds between animation frames
    #[arg(long, value_name = "MS")]
    pub anim_ms: Option<u64>,
}

impl Cli {
    /// Overrides the on-disk settings for this run.
    pub fn apply(&self, settings: &mut Settings) {
        if self.dark {
            settings.dark_theme = true;
        } else if self.light {
            settings.dark_theme = false;
        }
        if let Some(ms) = self.decay_ms {
            settings.timings.decay_ms = ms;
        }
        if let Some(ms) = self.anim_ms {
            settings.timings.anim_ms = ms;
        }
    }

    pub fn resolve_paths(&self, mut paths: Paths) -> Paths {
        if let Some(p) = &self.save {
            paths.save_path = p.clone();
        }
        if let Some(p) = &self.settings {
            paths.settings_path = p.clone();
        }
        if let Some(p) = &self.log {
            paths.log_path = p.clone();
        }
        paths
    }
}
