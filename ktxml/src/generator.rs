/// This module provides the `Generator` struct, which drives the pipeline for a
/// whole Android module: it locates `dimens.xml`, `colors.xml` and `styles.xml`
/// under the resource directory, parses and maps them, and writes one Kotlin
/// file per kind under a package-derived output directory.
///
/// A missing input file is not an error: that kind is skipped with a warning.
use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    emitter::{emit_colors, emit_dimens, emit_styles},
    error::Error,
    inherit::StyleFilter,
    mapper::{Diagnostic, Mapper},
    parser::{ParseOptions, ResourceDocument},
    traits::Parser,
    types::ResourceKind,
};

/// Resource directory used when none is configured, relative to the module root.
pub const DEFAULT_RES_DIR: &str = "src/main/res/values";
/// Generated source root used when none is configured, relative to the module root.
pub const DEFAULT_OUTPUT_DIR: &str = "build/generated/source/kapt/debug";

fn default_res_dir() -> PathBuf {
    PathBuf::from(DEFAULT_RES_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Settings for one generation run, typically loaded from `ktxml.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Prefix of the generated object names, e.g. `Example` → `ExampleColors`.
    pub project_name: String,
    /// Kotlin package of the generated files.
    pub package_name: String,
    #[serde(default = "default_res_dir")]
    pub res_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Root style family for inheritance filtering; filtering is off when absent.
    #[serde(default)]
    pub style_root: Option<String>,
}

impl GeneratorConfig {
    pub fn new(project_name: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            package_name: package_name.into(),
            res_dir: default_res_dir(),
            output_dir: default_output_dir(),
            style_root: None,
        }
    }

    pub fn with_res_dir<P: Into<PathBuf>>(mut self, res_dir: P) -> Self {
        self.res_dir = res_dir.into();
        self
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_style_root(mut self, style_root: Option<String>) -> Self {
        self.style_root = style_root;
        self
    }

    fn validate(&self) -> Result<(), Error> {
        if self.project_name.trim().is_empty() {
            return Err(Error::Config("project_name must not be blank".to_string()));
        }
        if self.package_name.trim().is_empty() {
            return Err(Error::Config("package_name must not be blank".to_string()));
        }
        Ok(())
    }
}

/// Generated source for one kind, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub kind: ResourceKind,
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// A Kotlin file written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: ResourceKind,
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

/// What happened to one kind during [`Generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(GeneratedFile),
    /// The input file did not exist.
    Skipped(PathBuf),
}

/// Summary of [`Generator::generate_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedFile>,
    pub skipped: Vec<(ResourceKind, PathBuf)>,
}

impl GenerationReport {
    /// All diagnostics of all generated files, in generation order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.generated.iter().flat_map(|file| file.diagnostics.iter())
    }
}

/// Drives parse → map → emit for the resource files of one Android module.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    mapper: Mapper,
    options: ParseOptions,
}

impl Generator {
    /// Creates a generator, rejecting blank project or package names.
    pub fn new(config: GeneratorConfig) -> Result<Self, Error> {
        config.validate()?;
        let options = ParseOptions::new()
            .with_style_filter(config.style_root.as_deref().map(StyleFilter::new));
        Ok(Self {
            mapper: Mapper::new(config.project_name.clone()),
            config,
            options,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Path of the XML input for `kind`.
    pub fn input_path(&self, kind: ResourceKind) -> PathBuf {
        self.config.res_dir.join(kind.file_name())
    }

    /// Directory the generated files are written to: the output root plus the package path.
    pub fn package_dir(&self) -> PathBuf {
        self.config
            .package_name
            .split('.')
            .fold(self.config.output_dir.clone(), |dir, segment| dir.join(segment))
    }

    /// Path of the generated Kotlin file for `kind`.
    pub fn output_path(&self, kind: ResourceKind) -> PathBuf {
        self.package_dir()
            .join(format!("{}.kt", kind.object_name(&self.config.project_name)))
    }

    /// Renders `kind` from an XML string. Elements of other kinds are ignored.
    pub fn render(&self, kind: ResourceKind, xml: &str) -> Result<Rendered, Error> {
        self.render_document(kind, ResourceDocument::from_str(xml)?)
    }

    /// Renders `kind` from an already parsed document.
    pub fn render_document(
        &self,
        kind: ResourceKind,
        document: ResourceDocument,
    ) -> Result<Rendered, Error> {
        let document = document.apply(&self.options);
        let package = self.config.package_name.as_str();
        let project = self.config.project_name.as_str();

        let (source, diagnostics) = match kind {
            ResourceKind::Dimens => {
                let dimens = self.mapper.map_dimens(&document.dimens);
                debug!("mapped {} dimens", dimens.len());
                (emit_dimens(package, project, &dimens), Vec::new())
            }
            ResourceKind::Colors => {
                let colors = self.mapper.map_colors(&document.colors)?;
                debug!("mapped {} colors", colors.len());
                (emit_colors(package, project, &colors), Vec::new())
            }
            ResourceKind::Styles => {
                let mapping = self.mapper.map_styles(&document.styles);
                debug!(
                    "mapped {} styles with {} skipped items",
                    mapping.styles.len(),
                    mapping.diagnostics.len()
                );
                (
                    emit_styles(package, project, &mapping.styles),
                    mapping.diagnostics,
                )
            }
        };

        Ok(Rendered {
            kind,
            source,
            diagnostics,
        })
    }

    /// Generates the Kotlin file for `kind`, skipping it if the input file is missing.
    pub fn generate(&self, kind: ResourceKind) -> Result<Outcome, Error> {
        let input = self.input_path(kind);
        if !input.is_file() {
            warn!("{} does not exist, skipping {}", input.display(), kind);
            return Ok(Outcome::Skipped(input));
        }

        let rendered = self.render_document(kind, ResourceDocument::read_from(&input)?)?;
        let output = self.output_path(kind);
        write_source(&output, &rendered.source)?;
        debug!("wrote {}", output.display());

        Ok(Outcome::Generated(GeneratedFile {
            kind,
            path: output,
            diagnostics: rendered.diagnostics,
        }))
    }

    /// Generates the requested kinds in the fixed order dimens, colors, styles.
    ///
    /// The first fatal error aborts the run; files already written are left in place.
    pub fn generate_all(&self, kinds: &[ResourceKind]) -> Result<GenerationReport, Error> {
        let mut report = GenerationReport::default();
        for kind in ResourceKind::ALL.into_iter().filter(|k| kinds.contains(k)) {
            match self.generate(kind)? {
                Outcome::Generated(file) => report.generated.push(file),
                Outcome::Skipped(path) => report.skipped.push((kind, path)),
            }
        }
        Ok(report)
    }
}

fn write_source(path: &Path, source: &str) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, source)?;
    Ok(())
}
