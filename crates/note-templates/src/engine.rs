//! Built-in `{{name}}` substitution engine.

use crate::{Render, RenderContext, TemplateEngine, TemplateError, TemplateRole};

/// One piece of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(&'static str),
}

/// A template compiled to a flat segment list.
struct Compiled {
    segments: Vec<Segment>,
}

impl Render for Compiled {
    fn render(&self, context: &RenderContext) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some(value) = context.get(name) {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }
}

/// Default template engine: literal text with `{{name}}` placeholders.
///
/// Placeholder names are validated against the role's allowed set at
/// compile time, so a typo in a custom template surfaces before any
/// notes are written. A single `{` or `}` is literal text.
pub struct PlaceholderEngine;

impl TemplateEngine for PlaceholderEngine {
    fn compile(&self, role: TemplateRole, text: &str) -> Result<Box<dyn Render>, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = text;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            let Some(end) = rest[start + 2..].find("}}") else {
                return Err(TemplateError::UnclosedPlaceholder {
                    offset: offset + start,
                });
            };

            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }

            let raw_name = rest[start + 2..start + 2 + end].trim();
            let name = role
                .placeholders()
                .iter()
                .find(|known| **known == raw_name)
                .copied()
                .ok_or_else(|| TemplateError::UnknownPlaceholder {
                    role,
                    name: raw_name.to_string(),
                })?;
            segments.push(Segment::Placeholder(name));

            let consumed = start + 2 + end + 2;
            rest = &rest[consumed..];
            offset += consumed;
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Box::new(Compiled { segments }))
    }
}
