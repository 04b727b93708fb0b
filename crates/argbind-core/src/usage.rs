//! Usage text rendering
//!
//! Output is a pure function of the descriptor tree: one line per option,
//! nested options indented under their parent, and every description
//! starting in the same column.

use crate::{Element, FieldInfo, OptionDescriptor, Options, Shape, describe, type_placeholder};

const LINE_PREFIX: &str = "  ";
const COLUMN_DELIMITER: &str = "        :  ";
const INDENT: &str = "    ";

struct Entry {
    flag: String,
    description: Vec<String>,
}

/// Render usage text for a bindable type, headed by its root option if any
///
/// # Example
///
/// ```
/// use argbind_core::{OptionDescriptor, OptionField, Options, usage};
///
/// #[derive(Default)]
/// struct Greeting {
///     name: Option<String>,
/// }
///
/// impl Options for Greeting {
///     fn option_fields() -> Vec<OptionField<Self>> {
///         vec![OptionField::single(
///             OptionDescriptor::new("name").with_required(true),
///             |g| &g.name,
///             |g| &mut g.name,
///         )]
///     }
///
///     fn root() -> Option<OptionDescriptor> {
///         Some(OptionDescriptor::new("Xgreet").with_description("Say hello"))
///     }
/// }
///
/// let text = usage::<Greeting>();
/// assert_eq!(
///     text,
///     "  -Xgreet                  :  Say hello\n      -name=<value>        :  [required]"
/// );
/// ```
pub fn usage<T: Options>() -> String {
    render_usage(T::root().as_ref(), &describe::<T>())
}

/// Render usage text from an already described field tree
pub fn render_usage(root: Option<&OptionDescriptor>, fields: &[FieldInfo]) -> String {
    let mut entries = Vec::new();
    if let Some(root) = root {
        entries.push(Entry {
            flag: root.signature(),
            description: split_lines(&root.description),
        });
    }
    collect(fields, INDENT.to_string(), &mut entries);

    let width = entries
        .iter()
        .map(|entry| entry.flag.chars().count())
        .max()
        .unwrap_or(0);
    let column = LINE_PREFIX.len() + width + COLUMN_DELIMITER.len();

    let mut lines = Vec::new();
    for entry in &entries {
        let mut description = entry.description.iter();
        let first = description.next().map(String::as_str).unwrap_or_default();
        let line = format!(
            "{LINE_PREFIX}{flag:<width$}{COLUMN_DELIMITER}{first}",
            flag = entry.flag
        );
        lines.push(line);
        for continuation in description {
            lines.push(format!("{:column$}{continuation}", ""));
        }
    }
    lines.join("\n")
}

fn collect(fields: &[FieldInfo], indent: String, entries: &mut Vec<Entry>) {
    for field in fields {
        let descriptor = &field.descriptor;
        let mut flag = format!("{indent}{}", descriptor.signature());
        let composite_elements = matches!(field.shape, Shape::Collection(_))
            && field.element == Element::Composite
            && field.nested.is_some_and(|nested| !nested().is_empty());
        if !composite_elements {
            let placeholder = descriptor
                .placeholder
                .as_deref()
                .unwrap_or_else(|| type_placeholder(field.value_type));
            flag.push_str(&format!("{}<{placeholder}>", descriptor.delimiter));
        }
        entries.push(Entry {
            flag,
            description: describe_field(field),
        });

        if let Some(nested) = field.nested {
            collect(&nested(), indent.repeat(2), entries);
        }
    }
}

fn describe_field(field: &FieldInfo) -> Vec<String> {
    let descriptor = &field.descriptor;
    let mut parts = Vec::new();
    if !descriptor.description.is_empty() {
        parts.push(descriptor.description.clone());
    }
    if descriptor.required {
        parts.push("[required]".to_string());
    }
    if let Some(default) = &descriptor.default_value {
        parts.push(format!("[default={default}]"));
    }
    if matches!(field.shape, Shape::Collection(_)) {
        parts.push("[repeatable]".to_string());
    }
    split_lines(&parts.join(" "))
}

fn split_lines(text: &str) -> Vec<String> {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
