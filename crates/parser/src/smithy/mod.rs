//! Smithy specification loader
//!
//! Loads AWS Smithy JSON AST documents into typed shapes.
//!
//! Smithy specs are available at: https://github.com/aws/api-models-aws
//!
//! ## Format
//! Smithy JSON AST contains:
//! - A `smithy` version string
//! - A `shapes` map from `namespace#Name` IDs to shape definitions
//! - Traits (metadata like documentation, required, error, enum)
//!
//! ## Usage
//! ```rust,ignore
//! use smithy_extract_parser::smithy::SmithyParser;
//!
//! let parser = SmithyParser::from_file("model/dynamo.json.bak")?;
//! let model = parser.model();
//! ```

mod parser;
mod types;

pub use parser::SmithyParser;
pub use types::*;
