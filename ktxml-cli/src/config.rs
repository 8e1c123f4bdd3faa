use ktxml::GeneratorConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "ktxml.toml";

/// Contents of `ktxml.toml`. Every key is optional so the CLI can fill gaps.
///
/// ```toml
/// project_name = "Example"
/// package_name = "com.org.example"
/// res_dir = "app/src/main/res/values"
/// output_dir = "app/build/generated/source/kapt/debug"
/// style_root = "TextAppearance"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub project_name: Option<String>,
    pub package_name: Option<String>,
    pub res_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub style_root: Option<String>,
}

impl FileConfig {
    /// Parse a config file
    pub fn read_from(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Invalid config {}: {}", path.display(), e))
    }
}

/// Values given on the command line; these win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub project_name: Option<String>,
    pub package_name: Option<String>,
    pub res_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub style_root: Option<String>,
}

/// Resolve the effective generator config.
///
/// An explicit `config_path` must exist. Without one, `ktxml.toml` in the working
/// directory is used if present.
pub fn resolve_config(
    config_path: Option<&str>,
    overrides: ConfigOverrides,
) -> Result<GeneratorConfig, String> {
    let file = match config_path {
        Some(path) => FileConfig::read_from(Path::new(path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            FileConfig::read_from(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => FileConfig::default(),
    };

    let project_name = overrides
        .project_name
        .or(file.project_name)
        .ok_or_else(|| "Missing project name: pass --project-name or set project_name".to_string())?;
    let package_name = overrides
        .package_name
        .or(file.package_name)
        .ok_or_else(|| "Missing package name: pass --package-name or set package_name".to_string())?;

    let mut config = GeneratorConfig::new(project_name, package_name)
        .with_style_root(overrides.style_root.or(file.style_root));
    if let Some(res_dir) = overrides.res_dir.or(file.res_dir) {
        config = config.with_res_dir(res_dir);
    }
    if let Some(output_dir) = overrides.output_dir.or(file.output_dir) {
        config = config.with_output_dir(output_dir);
    }
    Ok(config)
}
