// Pattern-based extraction over variable declaration blocks
//
// Discovery and field extraction are plain text scans, not an HCL parse.
// Nested expressions, interpolation, and cross-references are out of scope.

mod blocks;
mod fields;

pub use blocks::{scan, VariableBlock};
pub use fields::{extract_fields, BlockFields};
