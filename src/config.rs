use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Public address used for share links unless `--base-url` says otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173/tools-unimark/";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub plain_headings: bool,
    pub indent_width: Option<usize>,
    pub base_url: Option<String>,
    pub state_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            plain_headings: self.plain_headings || other.plain_headings,
            indent_width: other.indent_width.or(self.indent_width),
            base_url: other.base_url.clone().or_else(|| self.base_url.clone()),
            state_file: other.state_file.clone().or_else(|| self.state_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("unimark").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("unimark")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("unimark").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("unimark").join("config");
        }
    }

    PathBuf::from(".unimarkrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".unimarkrc")
}

/// Default location of the saved editor text.
pub fn state_file_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(appdata).join("unimark").join("state.json");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("unimark")
                .join("state.json");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("unimark").join("state.json");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("unimark")
                .join("state.json");
        }
    }

    PathBuf::from(".unimark-state.json")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# unimark defaults (saved with --save)".to_string());
    if flags.plain_headings {
        lines.push("--plain-headings".to_string());
    }
    if let Some(width) = flags.indent_width {
        lines.push(format!("--indent-width {width}"));
    }
    if let Some(url) = &flags.base_url {
        lines.push(format!("--base-url {url}"));
    }
    if let Some(path) = &flags.state_file {
        lines.push(format!("--state-file {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--plain-headings" {
            flags.plain_headings = true;
        } else if token == "--indent-width" {
            if let Some(next) = tokens.get(i + 1) {
                flags.indent_width = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--indent-width=") {
            flags.indent_width = value.parse().ok();
        } else if token == "--base-url" {
            if let Some(next) = tokens.get(i + 1) {
                flags.base_url = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--base-url=") {
            flags.base_url = Some(value.to_string());
        } else if token == "--state-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.state_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--state-file=") {
            flags.state_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}
