use ktxml::{Mapper, ParseOptions, parse_file};
use std::fs::File;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct DebugOptions {
    pub input: String,
    pub output: Option<String>,
    /// Dump mapped Kotlin resources instead of raw XML records.
    pub mapped: bool,
    pub project_name: Option<String>,
    pub style_root: Option<String>,
}

/// Render the JSON dump for `options`.
pub fn debug_json(options: &DebugOptions) -> Result<String, String> {
    let parse_options = match &options.style_root {
        Some(root) => ParseOptions::new().with_style_root(root.clone()),
        None => ParseOptions::new(),
    };
    let raws = parse_file(&options.input, &parse_options)
        .map_err(|e| format!("Error reading {}: {}", options.input, e))?;

    let json = if options.mapped {
        let project_name = options
            .project_name
            .as_deref()
            .ok_or_else(|| "--mapped requires --project-name".to_string())?;
        let mapped = Mapper::new(project_name)
            .map_all(raws)
            .map_err(|e| format!("Error mapping {}: {}", options.input, e))?;
        serde_json::to_string_pretty(&mapped)
    } else {
        serde_json::to_string_pretty(&raws)
    };
    json.map_err(|e| format!("Error serializing to JSON: {}", e))
}

/// Run the debug command: read a resource file and output it as JSON.
pub fn run_debug_command(options: DebugOptions) {
    let json = match debug_json(&options) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    match options.output {
        Some(output_path) => {
            if let Err(e) =
                File::create(&output_path).and_then(|mut f| f.write_all(json.as_bytes()))
            {
                eprintln!("Error writing to {}: {}", output_path, e);
                std::process::exit(1);
            }
            println!("✅ Debug output written to: {}", output_path);
        }
        None => println!("{}", json),
    }
}
