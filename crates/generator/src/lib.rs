//! Smithy IDL emission
//!
//! This crate renders a resolved set of shapes back into Smithy IDL text:
//! a templated preamble followed by one block per shape, sorted by shape ID.

mod templates;

use smithy_extract_common::{local_name, ExtractError, ExtractionConfig, Result};
use smithy_extract_parser::smithy::{Members, Shape, SmithyModel};
use std::collections::BTreeSet;
use tera::Tera;

const INDENT: &str = "    ";

/// Smithy IDL emitter
///
/// Turns a shape closure into lines of IDL:
/// - `$version`, `namespace`, and `use` statements from the config
/// - one block per shape, dispatched on the shape type
/// - a blank line after every block
pub struct IdlEmitter {
    config: ExtractionConfig,
    tera: Tera,
}

impl IdlEmitter {
    /// Create a new emitter for the given configuration
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { config, tera })
    }

    /// Render the preamble and every shape in `shape_ids` present in `model`
    ///
    /// IDs are visited in sorted order; IDs missing from the model and shapes
    /// of unsupported types produce no output.
    pub fn emit(&self, model: &SmithyModel, shape_ids: &BTreeSet<String>) -> Result<Vec<String>> {
        let mut lines = self.preamble()?;

        for shape_id in shape_ids {
            let Some(shape) = model.get_shape(shape_id) else {
                continue;
            };
            self.emit_shape(local_name(shape_id), shape, &mut lines);
        }

        Ok(lines)
    }

    /// Render to a single newline-joined string
    pub fn render(&self, model: &SmithyModel, shape_ids: &BTreeSet<String>) -> Result<String> {
        Ok(self.emit(model, shape_ids)?.join("\n"))
    }

    /// `$version`, `namespace`, and `use` lines followed by one blank line
    fn preamble(&self) -> Result<Vec<String>> {
        let context = tera::Context::from_serialize(&self.config)
            .map_err(|e| ExtractError::Render(format!("Template context error: {}", e)))?;
        let rendered = self
            .tera
            .render(templates::PREAMBLE, &context)
            .map_err(|e| ExtractError::Render(format!("Template error: {:?}", e)))?;

        let mut lines: Vec<String> = rendered.lines().map(str::to_string).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines.push(String::new());
        Ok(lines)
    }

    fn emit_shape(&self, name: &str, shape: &Shape, out: &mut Vec<String>) {
        if self.config.include_docs {
            push_docs(out, "", shape.documentation());
        }

        match shape {
            Shape::Service {
                version,
                operations,
                ..
            } => {
                let declared: Vec<&str> = operations.iter().map(|r| r.target.as_str()).collect();
                for op in &self.config.operations {
                    if !declared.contains(&op.as_str()) {
                        tracing::warn!(
                            service = name,
                            operation = %op,
                            "configured operation is not in the service's operation list"
                        );
                    }
                }

                out.push(format!("@{}", self.config.protocol));
                out.push(format!("@service(sdkId: {})", quoted(&self.config.sdk_id)));
                out.push(format!("service {} {{", name));
                if let Some(version) = version {
                    out.push(format!("{}version: {}", INDENT, quoted(version)));
                }
                out.push(format!("{}operations: [", INDENT));
                for op in &self.config.operations {
                    out.push(format!("{0}{0}{1}", INDENT, local_name(op)));
                }
                out.push(format!("{}]", INDENT));
                out.push("}".to_string());
            }
            Shape::Operation {
                input,
                output,
                errors,
                ..
            } => {
                out.push(format!("operation {} {{", name));
                if let Some(input) = input {
                    out.push(format!("{}input: {}", INDENT, local_name(&input.target)));
                }
                if let Some(output) = output {
                    out.push(format!("{}output: {}", INDENT, local_name(&output.target)));
                }
                if let Some(errors) = errors {
                    let mut names: Vec<&str> =
                        errors.iter().map(|e| local_name(&e.target)).collect();
                    let required = self.config.required_error.as_str();
                    if !names.contains(&required) {
                        names.insert(0, required);
                    }
                    out.push(format!("{}errors: [", INDENT));
                    for error in names {
                        out.push(format!("{0}{0}{1}", INDENT, error));
                    }
                    out.push(format!("{}]", INDENT));
                }
                out.push("}".to_string());
            }
            Shape::Structure { members, .. } => {
                if let Some(severity) = shape.error_trait() {
                    out.push(format!("@error({})", quoted(severity)));
                }
                out.push(format!("structure {} {{", name));
                self.push_members(out, members, true);
                out.push("}".to_string());
            }
            Shape::Union { members, .. } => {
                out.push(format!("union {} {{", name));
                self.push_members(out, members, false);
                out.push("}".to_string());
            }
            Shape::Map { key, value, .. } => {
                out.push(format!("map {} {{", name));
                out.push(format!("{}key: {}", INDENT, local_name(&key.target)));
                out.push(format!("{}value: {}", INDENT, local_name(&value.target)));
                out.push("}".to_string());
            }
            Shape::List { member, .. } => {
                out.push(format!("list {} {{", name));
                out.push(format!("{}member: {}", INDENT, local_name(&member.target)));
                out.push("}".to_string());
            }
            Shape::String { .. } => match shape.enum_values() {
                Some(values) => {
                    out.push(format!("enum {} {{", name));
                    for value in &values {
                        out.push(format!(
                            "{}{} = {}",
                            INDENT,
                            value.display_name(),
                            quoted(&value.value)
                        ));
                    }
                    out.push("}".to_string());
                }
                None => out.push(format!("string {}", name)),
            },
            Shape::Integer { .. }
            | Shape::Long { .. }
            | Shape::Boolean { .. }
            | Shape::Blob { .. }
            | Shape::Double { .. }
            | Shape::Timestamp { .. } => {
                out.push(format!("{} {}", shape.kind(), name));
            }
            Shape::Other(other) => {
                tracing::debug!(shape = name, kind = %other.kind, "skipping unsupported shape type");
                return;
            }
        }

        out.push(String::new());
    }

    /// One `name: Target` line per member; structures also mark `@required`
    fn push_members(&self, out: &mut Vec<String>, members: &Members, mark_required: bool) {
        for (member_name, member) in members {
            if self.config.include_docs {
                push_docs(out, INDENT, member.documentation());
            }
            let required = if mark_required && member.is_required() {
                "@required "
            } else {
                ""
            };
            out.push(format!(
                "{}{}{}: {}",
                INDENT,
                required,
                member_name,
                local_name(&member.target)
            ));
        }
    }
}

/// IDL string literal with `\` and `"` escaped
fn quoted(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            literal.push('\\');
        }
        literal.push(c);
    }
    literal.push('"');
    literal
}

/// `///` comment lines for every non-blank documentation line
fn push_docs(out: &mut Vec<String>, indent: &str, docs: Option<&str>) {
    let Some(docs) = docs else {
        return;
    };
    out.extend(
        docs.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!("{}/// {}", indent, line)),
    );
}
