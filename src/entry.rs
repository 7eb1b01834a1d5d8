use std::path::Path;

/// One template record of the device's `templates.json` registry.
///
/// Field order matters: the device expects `name` first and `categories`
/// last, and the generated blocks are merged into the registry as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub name: String,
    pub filename: String,
    #[serde(rename = "iconCode")]
    pub icon_code: String,
    pub landscape: String,
    pub categories: Vec<String>,
}

impl TemplateEntry {
    /// Derives an entry from the path of one template image.
    ///
    /// The base name is truncated at the first `.`, so `a.b.png` yields the
    /// filename `a`. This matches what the device workflow has always been
    /// fed; do not extend it to keep inner dots.
    pub fn from_path(path: &Path, icon_code: &str) -> Self {
        let base_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let file_name = base_name.split('.').next().unwrap_or("").to_string();
        TemplateEntry {
            name: display_name(&file_name),
            filename: file_name,
            icon_code: icon_code.to_string(),
            landscape: "false".to_string(),
            categories: vec!["Custom".to_string()],
        }
    }
}

/// Turns a file stem into the picker's display name:
/// `my-cool-template` becomes `My Cool Template`.
///
/// Hyphens become spaces, and whitespace-splitting discards the empty
/// tokens left by consecutive hyphens.
fn display_name(file_name: &str) -> String {
    file_name
        .replace('-', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ICON_CODE;
    use std::path::PathBuf;

    #[test]
    fn derives_name_and_filename_from_hyphenated_stem() {
        let path = PathBuf::from("./template-templates/sample-template-one.png");
        let entry = TemplateEntry::from_path(&path, ICON_CODE);
        assert_eq!(entry.name, "Sample Template One");
        assert_eq!(entry.filename, "sample-template-one");
    }

    #[test]
    fn truncates_base_name_at_first_dot() {
        let path = PathBuf::from("a.b.png");
        let entry = TemplateEntry::from_path(&path, ICON_CODE);
        assert_eq!(entry.filename, "a");
        assert_eq!(entry.name, "A");
    }

    #[test]
    fn consecutive_hyphens_collapse() {
        assert_eq!(display_name("dotted--grid"), "Dotted Grid");
    }

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(display_name("myCOOL-template"), "Mycool Template");
    }

    #[test]
    fn fixed_fields_are_constant() {
        let entry = TemplateEntry::from_path(&PathBuf::from("grid.png"), ICON_CODE);
        assert_eq!(entry.icon_code, "\u{e9db}");
        assert_eq!(entry.landscape, "false");
        assert_eq!(entry.categories, vec!["Custom".to_string()]);
    }

    #[test]
    fn serializes_with_device_field_order() {
        let entry = TemplateEntry::from_path(&PathBuf::from("daily-planner.png"), ICON_CODE);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            "{\"name\":\"Daily Planner\",\"filename\":\"daily-planner\",\
             \"iconCode\":\"\u{e9db}\",\"landscape\":\"false\",\"categories\":[\"Custom\"]}"
        );
    }
}
