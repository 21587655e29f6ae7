//! tfvars-gen - tfvars scaffolding from Terraform variable declarations
//!
//! This library scans a `variables.tf`-style file for `variable` blocks and
//! produces a flat `name = value` assignment file, using each declared
//! default where one exists and a type-appropriate placeholder otherwise.
//! Operators get a starting values-file generated from declarations instead
//! of writing one by hand.
//!
//! # Core Concepts
//!
//! - **Block discovery**: locating every `variable "<name>" { ... }` block
//!   in the input, in textual order
//! - **Field extraction**: pulling the first `default =` and `type =`
//!   assignment lines out of a block body
//! - **Placeholder synthesis**: choosing a literal (`""`, `0`, `false`,
//!   `[]`, `{}`) from the declared type when no default is present
//!
//! # Example Usage
//!
//! ```no_run
//! use tfvars_gen::{RealFileSystem, TfvarsGenerator};
//! use std::path::Path;
//!
//! fn generate() -> Result<(), tfvars_gen::GenerateError> {
//!     let generator = TfvarsGenerator::new(RealFileSystem::new());
//!     generator.generate(Path::new("variables.tf"), Path::new("terraform.tfvars"))
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`extract`]: block discovery and field extraction
//! - [`placeholder`]: placeholder synthesis from declared types
//! - [`tfvars`]: assignment-file rendering
//! - [`generator`]: the read/extract/render/write driver

// Public modules
pub mod cli;
pub mod extract;
pub mod fs;
pub mod generator;
pub mod placeholder;
pub mod tfvars;

// Re-export key types for convenient access
pub use extract::{extract_fields, scan, BlockFields, VariableBlock};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use generator::{GenerateError, TfvarsGenerator};
pub use placeholder::{placeholder_for, TypePrecedence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_tfvars_gen() {
        assert_eq!(NAME, "tfvars-gen");
    }
}
