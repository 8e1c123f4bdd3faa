#![forbid(unsafe_code)]
//! Jetpack Compose code generation from Android XML resources.
//!
//! Converts `dimens.xml`, `colors.xml` and `styles.xml` into Kotlin objects exposing
//! typed constants (`16.dp`, `Color(0xFF3F51B5)`, `TextStyle(...)`), for use as a
//! build step.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ktxml::{Generator, GeneratorConfig, ResourceKind};
//!
//! // Generate all three files for an Android module
//! let config = GeneratorConfig::new("Example", "com.org.example")
//!     .with_res_dir("app/src/main/res/values")
//!     .with_output_dir("app/build/generated/source/kapt/debug");
//! let report = Generator::new(config)?.generate_all(&ResourceKind::ALL)?;
//!
//! // Or drive the pipeline yourself
//! let raws = ktxml::parse_str(r#"<resources><dimen name="gap">4dp</dimen></resources>"#)?;
//! let mapped = ktxml::Mapper::new("Example").map_all(raws)?;
//! let source = ktxml::emitter::emit_dimens("com.org.example", "Example", &mapped.dimens);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Pipeline
//!
//! - [`parser`]: XML → raw records ([`RawResource`])
//! - [`mapper`]: raw records → Kotlin records ([`TargetResource`]), resolving
//!   `@color/` and `@dimen/` references inside styles
//! - [`emitter`]: Kotlin records → source text
//! - [`generator`]: file discovery and output layout around the three stages above

pub mod emitter;
pub mod error;
pub mod generator;
pub mod inherit;
pub mod mapper;
pub mod naming;
pub mod parser;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    generator::{GenerationReport, Generator, GeneratorConfig, Outcome},
    inherit::{DEFAULT_STYLE_ROOT, StyleFilter},
    mapper::{Diagnostic, DiagnosticKind, MappedResources, Mapper, StyleMapping},
    naming::normalize,
    parser::{ParseOptions, ResourceDocument, parse_file, parse_str, parse_str_with_options},
    types::{RawResource, ResourceKind, TargetResource},
};
