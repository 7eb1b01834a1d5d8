use std::path::PathBuf;

/// Directory scanned for template images, relative to the working directory.
pub const SOURCE_DIR: &str = "./template-templates";

/// Name of the generated configuration file.
pub const OUTPUT_FILE: &str = "template-config.json";

/// Private-use-area glyph rendered by the device's icon font for the
/// "Custom" category.
pub const ICON_CODE: &str = "\u{e9db}";

/// The fixed inputs of a generation run.
///
/// The defaults are the paths the device workflow expects; tests construct
/// their own `GeneratorConfig` pointing at a temporary directory instead.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub source_dir: PathBuf,
    pub output_file: PathBuf,
    pub icon_code: &'static str,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            source_dir: PathBuf::from(SOURCE_DIR),
            output_file: PathBuf::from(OUTPUT_FILE),
            icon_code: ICON_CODE,
        }
    }
}
