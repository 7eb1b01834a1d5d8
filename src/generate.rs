use crate::config::GeneratorConfig;
use crate::entry::TemplateEntry;
use colored::Colorize;
use std::{
    fmt::Display,
    fs,
    io::{self, Write},
    path::PathBuf,
};

#[derive(Debug)]
pub enum GenerateError {
    MissingSourceDir(String),
    BadPattern(glob::PatternError),
    ScanError(glob::GlobError),
    BadSerialization(serde_json::Error),
    WriteError(io::Error, String),
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::MissingSourceDir(path) => write!(
                f,
                "The templates directory ('{}') does not exist!\n\
                Create it and place your .png template images inside.",
                path
            ),
            GenerateError::BadPattern(e) => {
                write!(f, "Could not build the template search pattern: '{}'", e)
            }
            GenerateError::ScanError(e) => {
                write!(f, "Could not read the templates directory: '{}'", e)
            }
            GenerateError::BadSerialization(e) => {
                write!(f, "Error serializing the template entries: '{}'", e)
            }
            GenerateError::WriteError(e, path) => write!(
                f,
                "Error writing the configuration file ('{}'): '{}'\n\
                The file may have been left truncated.",
                path, e
            ),
        }
    }
}

impl From<glob::PatternError> for GenerateError {
    fn from(err: glob::PatternError) -> Self {
        Self::BadPattern(err)
    }
}

impl From<glob::GlobError> for GenerateError {
    fn from(err: glob::GlobError) -> Self {
        Self::ScanError(err)
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        Self::BadSerialization(err)
    }
}

/// Lists the `.png` files in the configured templates directory.
///
/// `glob` yields paths in lexicographic order, so repeated runs over the
/// same directory produce identical output. Dot-prefixed files are not
/// templates and are skipped.
pub fn collect_inputs(config: &GeneratorConfig) -> Result<Vec<PathBuf>, GenerateError> {
    if !config.source_dir.is_dir() {
        return Err(GenerateError::MissingSourceDir(
            config.source_dir.to_string_lossy().to_string(),
        ));
    }
    let pattern = config.source_dir.join("*.png");
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };
    let mut inputs = Vec::new();
    for path in glob::glob_with(&pattern.to_string_lossy(), options)? {
        let path = path?;
        if path.is_file() {
            inputs.push(path);
        }
    }
    Ok(inputs)
}

/// Joins the entries into the output text: one compact JSON object literal
/// per line, with no wrapping array.
///
/// The result is deliberately not a valid JSON document. The device keeps a
/// single `templates.json` registry, and the operator pastes these blocks
/// into its `templates` array by hand.
pub fn serialize(entries: &[TemplateEntry]) -> Result<String, GenerateError> {
    let blocks = entries
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blocks.join("\n"))
}

/// Creates (or truncates) the configuration file and writes the serialized
/// text in one pass.
pub fn write_output(config: &GeneratorConfig, text: &str) -> Result<(), GenerateError> {
    let to_write_error =
        |e| GenerateError::WriteError(e, config.output_file.to_string_lossy().to_string());
    let mut file = fs::File::create(&config.output_file).map_err(to_write_error)?;
    file.write_all(text.as_bytes()).map_err(to_write_error)
}

/// Runs the whole pipeline: collect, derive, serialize, write, report.
/// Fail-fast; the first error aborts the run.
pub fn run(config: &GeneratorConfig) -> Result<(), GenerateError> {
    let inputs = collect_inputs(config)?;
    println!(
        "Building configuration for {} template images...\n",
        inputs.len()
    );

    let entries: Vec<TemplateEntry> = inputs
        .iter()
        .map(|path| TemplateEntry::from_path(path, config.icon_code))
        .collect();

    write_output(config, &serialize(&entries)?)?;

    println!(
        "{}\n",
        format!(
            "Success: Built new templates configuration file: {}",
            config.output_file.display()
        )
        .green()
    );
    print_install_instructions(config);
    Ok(())
}

fn print_install_instructions(config: &GeneratorConfig) {
    println!("To install, ssh into your Remarkable2");
    println!(
        "  - Copy the source files to {}",
        "/usr/share/remarkable/templates/".yellow()
    );
    println!(
        "  - Add the configuration data supplied in {} to the Remarkable2's templates.json file",
        config.output_file.display().to_string().yellow()
    );
    println!("  - You may need to restart the device\n");
    println!(
        "For more information, see {}",
        "https://remarkablewiki.com/tips/templates".yellow()
    );
}
