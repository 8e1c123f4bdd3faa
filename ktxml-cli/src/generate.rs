use crate::config::{ConfigOverrides, resolve_config};
use ktxml::{GenerationReport, Generator, ResourceKind};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub config: Option<String>,
    pub overrides: ConfigOverrides,
    pub kinds: Vec<String>,
}

/// Parse `--kind` values; no values means every kind.
pub fn parse_kinds(kinds: &[String]) -> Result<Vec<ResourceKind>, String> {
    if kinds.is_empty() {
        return Ok(ResourceKind::ALL.to_vec());
    }
    kinds
        .iter()
        .flat_map(|k| k.split(','))
        .map(|k| {
            ResourceKind::from_str(k).map_err(|_| {
                format!(
                    "Unknown resource kind '{}'. Expected one of: dimens, colors, styles",
                    k.trim()
                )
            })
        })
        .collect()
}

/// Run generation and return the report, or a printable error message.
pub fn generate(options: GenerateOptions) -> Result<GenerationReport, String> {
    let kinds = parse_kinds(&options.kinds)?;
    let config = resolve_config(options.config.as_deref(), options.overrides)?;
    debug!(?config, ?kinds, "resolved generator config");
    let generator = Generator::new(config).map_err(|e| e.to_string())?;
    generator
        .generate_all(&kinds)
        .map_err(|e| format!("Generation failed: {}", e))
}

pub fn run_generate_command(options: GenerateOptions) {
    match generate(options) {
        Ok(report) => {
            for file in &report.generated {
                println!("✅ Generated {} → {}", file.kind, file.path.display());
            }
            for (kind, path) in &report.skipped {
                println!("⚠️ Skipped {}: {} does not exist", kind, path.display());
            }
            for diagnostic in report.diagnostics() {
                println!("⚠️ {}", diagnostic);
            }
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds_default_is_all() {
        assert_eq!(parse_kinds(&[]).unwrap(), ResourceKind::ALL.to_vec());
    }

    #[test]
    fn test_parse_kinds_comma_separated() {
        let kinds = parse_kinds(&["styles,colors".to_string()]).unwrap();
        assert_eq!(kinds, vec![ResourceKind::Styles, ResourceKind::Colors]);
    }

    #[test]
    fn test_parse_kinds_invalid() {
        let err = parse_kinds(&["strings".to_string()]).unwrap_err();
        assert!(err.contains("Unknown resource kind 'strings'"));
    }
}
