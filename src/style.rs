use crate::form::state::{Field, FormState};

/// How container width/height are named in the emitted CSS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropertyNaming {
    /// Lower-cased control name (`containerwidth`, `containerheight`).
    ///
    /// Browsers ignore these properties, so the container is not actually sized. Kept as the
    /// default for output compatibility with snippets exported by earlier versions.
    #[default]
    Literal,
    /// Real CSS properties (`width`, `height`).
    Standard,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleOptions {
    pub naming: PropertyNaming,
}

const FIXED_DECLARATIONS: &str = "position: relative; overflow: hidden;";

fn property_name(field: Field, naming: PropertyNaming) -> String {
    match (field, naming) {
        (Field::ImagePositionX, _) => "left".to_string(),
        (Field::ImagePositionY, _) => "top".to_string(),
        (Field::ContainerWidth, PropertyNaming::Standard) => "width".to_string(),
        (Field::ContainerHeight, PropertyNaming::Standard) => "height".to_string(),
        (other, _) => other.name().to_lowercase(),
    }
}

/// `<property>: <value>px;` for a present field, `None` when absent.
///
/// The value is inserted verbatim; non-numeric input produces invalid CSS rather than an error.
fn declaration(form: &FormState, field: Field, naming: PropertyNaming) -> Option<String> {
    form.value(field)
        .map(|v| format!("{}: {v}px;", property_name(field, naming)))
}

/// Inline style for the container `<div>` with the default (literal) naming.
pub fn container_style(form: &FormState) -> String {
    container_style_with(form, StyleOptions::default())
}

/// Inline style for the container `<div>`.
///
/// Order: width, height, fixed `position`/`overflow`, left, top. Absent fields are skipped.
pub fn container_style_with(form: &FormState, opts: StyleOptions) -> String {
    let decl = |field| declaration(form, field, opts.naming);

    let parts = [
        decl(Field::ContainerWidth),
        decl(Field::ContainerHeight),
        Some(FIXED_DECLARATIONS.to_string()),
        decl(Field::ImagePositionX),
        decl(Field::ImagePositionY),
    ];

    parts.into_iter().flatten().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "../tests/unit/style.rs"]
mod tests;
