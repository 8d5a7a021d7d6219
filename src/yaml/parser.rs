//! YAML parsing with error handling

use serde::de::DeserializeOwned;

use crate::yaml::diagnostics::{YamlError, YamlSyntaxError};

/// Parse YAML content into a typed value with nice error messages
pub fn parse_yaml<T: DeserializeOwned>(content: &str, filename: &str) -> Result<T, YamlError> {
    serde_yml::from_str(content).map_err(|e| {
        YamlError::Syntax(YamlSyntaxError::from_serde_error(&e, content, filename))
    })
}

/// Parse YAML from a file path
pub fn parse_yaml_file<T: DeserializeOwned>(path: &std::path::Path) -> Result<T, YamlError> {
    let content = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();
    parse_yaml(&content, &filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct Skills {
        skills: Vec<String>,
        prefix: String,
    }

    #[test]
    fn test_parse_valid_yaml() {
        let yaml = "skills:\n  - Baking\n  - Cooking\nprefix: \"Grow \"";
        let result: Skills = parse_yaml(yaml, "rcat.yaml").unwrap();
        assert_eq!(result.skills, vec!["Baking", "Cooking"]);
        assert_eq!(result.prefix, "Grow ");
    }

    #[test]
    fn test_unknown_key_reports_filename() {
        let yaml = "skills: []\nprefix: x\nbogus: 1";
        let err = parse_yaml::<Skills>(yaml, "rcat.yaml").unwrap_err();
        match err {
            YamlError::Syntax(e) => {
                assert_eq!(e.filename, "rcat.yaml");
                assert!(e.message.contains("bogus"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result: Result<Skills, _> =
            parse_yaml_file(std::path::Path::new("/nonexistent/rcat.yaml"));
        assert!(matches!(result, Err(YamlError::Io(_))));
    }
}
