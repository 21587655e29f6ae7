//! Generator driver - read, extract, resolve, render, write

use crate::extract;
use crate::fs::FileSystem;
use crate::placeholder::{placeholder_for, TypePrecedence};
use crate::tfvars;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Input path is missing or not a regular file. Raised before any
    /// output write is attempted.
    #[error("Could not find {}", .0.display())]
    InputNotFound(PathBuf),

    /// Any other read/write failure, surfaced verbatim.
    #[error("{0}")]
    Failed(#[from] anyhow::Error),
}

/// Turns a variables.tf-style file into a tfvars assignment file.
pub struct TfvarsGenerator<F: FileSystem> {
    fs: F,
    precedence: TypePrecedence,
}

impl<F: FileSystem> TfvarsGenerator<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            precedence: TypePrecedence::default(),
        }
    }

    pub fn with_precedence(mut self, precedence: TypePrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Extract and resolve every variable declaration in `content`.
    ///
    /// A declared default is kept verbatim (trimmed); otherwise a
    /// placeholder is synthesized from the declared type. Duplicate names
    /// keep the map position of their first occurrence and the resolved
    /// value of their last.
    pub fn parse(&self, content: &str) -> IndexMap<String, String> {
        let mut variables = IndexMap::new();

        for block in extract::scan(content) {
            let fields = extract::extract_fields(&block.body);
            let value = fields.default.unwrap_or_else(|| {
                placeholder_for(fields.declared_type.as_deref(), self.precedence).to_string()
            });

            debug!(name = %block.name, value = %value, "resolved variable");
            variables.insert(block.name, value);
        }

        variables
    }

    /// Read `input`, resolve its declarations, and write the rendered
    /// tfvars text to `output`, replacing any existing content.
    pub fn generate(&self, input: &Path, output: &Path) -> Result<(), GenerateError> {
        if !self.fs.is_file(input) {
            return Err(GenerateError::InputNotFound(input.to_path_buf()));
        }

        let content = self.fs.read_to_string(input)?;
        let variables = self.parse(&content);
        debug!(count = variables.len(), "extracted variable declarations");

        self.fs.write_string(output, &tfvars::render(&variables))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    const VARIABLES_TF: &str = r#"
variable "region" {
  type    = string
  default = "us-east-1"
}

variable "instance_count" {
  type = number
}

variable "tags" {
  type = map(string)
}
"#;

    #[test]
    fn test_default_kept_verbatim() {
        let generator = TfvarsGenerator::new(MockFileSystem::new());
        let vars = generator.parse(VARIABLES_TF);

        assert_eq!(vars.get("region").map(String::as_str), Some("\"us-east-1\""));
    }

    #[test]
    fn test_placeholder_from_declared_type() {
        let generator = TfvarsGenerator::new(MockFileSystem::new());
        let vars = generator.parse(VARIABLES_TF);

        assert_eq!(vars.get("instance_count").map(String::as_str), Some("0"));
        // map(string) contains "string", which is checked first
        assert_eq!(vars.get("tags").map(String::as_str), Some("\"\""));
    }

    #[test]
    fn test_collections_precedence() {
        let generator = TfvarsGenerator::new(MockFileSystem::new())
            .with_precedence(TypePrecedence::Collections);
        let vars = generator.parse(VARIABLES_TF);

        assert_eq!(vars.get("tags").map(String::as_str), Some("{}"));
    }

    #[test]
    fn test_no_type_no_default() {
        let generator = TfvarsGenerator::new(MockFileSystem::new());
        let vars = generator.parse("variable \"anything\" {\n  description = \"untyped\"\n}");

        assert_eq!(vars.get("anything").map(String::as_str), Some("\"\""));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let generator = TfvarsGenerator::new(MockFileSystem::new());
        let vars = generator.parse(VARIABLES_TF);

        let names: Vec<&str> = vars.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["region", "instance_count", "tags"]);
    }

    #[test]
    fn test_duplicate_keeps_first_position_last_value() {
        let input = r#"
variable "a" {
  default = 1
}
variable "b" {
  default = 2
}
variable "a" {
  default = 3
}
"#;
        let generator = TfvarsGenerator::new(MockFileSystem::new());
        let vars = generator.parse(input);

        assert_eq!(vars.len(), 2);
        let entries: Vec<(&str, &str)> = vars
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_empty_input_parses_to_empty_map() {
        let generator = TfvarsGenerator::new(MockFileSystem::new());
        assert!(generator.parse("").is_empty());
    }

    #[test]
    fn test_generate_writes_rendered_output() {
        let fs = MockFileSystem::new();
        fs.add_file("variables.tf", VARIABLES_TF);

        let generator = TfvarsGenerator::new(fs.clone());
        generator
            .generate(Path::new("variables.tf"), Path::new("terraform.tfvars"))
            .unwrap();

        let written = fs.read_to_string(Path::new("terraform.tfvars")).unwrap();
        assert_eq!(
            written,
            "region = \"us-east-1\"\ninstance_count = 0\ntags = \"\""
        );
    }

    #[test]
    fn test_generate_empty_input_writes_empty_file() {
        let fs = MockFileSystem::new();
        fs.add_file("variables.tf", "");

        let generator = TfvarsGenerator::new(fs.clone());
        generator
            .generate(Path::new("variables.tf"), Path::new("terraform.tfvars"))
            .unwrap();

        assert_eq!(
            fs.read_to_string(Path::new("terraform.tfvars")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_generate_overwrites_existing_output() {
        let fs = MockFileSystem::new();
        fs.add_file("variables.tf", "variable \"a\" {\n  default = 1\n}");
        fs.add_file("terraform.tfvars", "stale = true");

        let generator = TfvarsGenerator::new(fs.clone());
        generator
            .generate(Path::new("variables.tf"), Path::new("terraform.tfvars"))
            .unwrap();

        assert_eq!(
            fs.read_to_string(Path::new("terraform.tfvars")).unwrap(),
            "a = 1"
        );
    }

    #[test]
    fn test_missing_input_is_distinct_error() {
        let fs = MockFileSystem::new();
        let generator = TfvarsGenerator::new(fs.clone());

        let err = generator
            .generate(Path::new("nope.tf"), Path::new("terraform.tfvars"))
            .unwrap_err();

        assert!(matches!(err, GenerateError::InputNotFound(_)));
        assert_eq!(err.to_string(), "Could not find nope.tf");
        // nothing was written
        assert!(!fs.is_file(Path::new("terraform.tfvars")));
    }
}
