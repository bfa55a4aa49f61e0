//! Template loading and management

use smithy_extract_common::{ExtractError, Result};
use tera::Tera;

pub const PREAMBLE: &str = "preamble.smithy";

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.add_raw_template(PREAMBLE, include_str!("../templates/preamble.smithy.tera"))
        .map_err(|e| ExtractError::Render(format!("Failed to load preamble template: {}", e)))?;

    Ok(tera)
}
