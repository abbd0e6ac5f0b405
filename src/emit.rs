use crate::{
    animation::{ANIMATED_IMAGE_CLASS, animation_style},
    form::state::{Field, FormState, basename},
    style::{StyleOptions, container_style_with},
};

/// Directory the exported `<img>` is expected to find its file in.
pub const ASSETS_DIR: &str = "assets";

/// Render the exported fragment: one `<style>` block and one `<div>` wrapping the `<img>`.
///
/// `animation_class` selects the keyframes; the image path and size come from `form`.
/// Values are interpolated without HTML escaping.
pub fn generate_html(form: &FormState, animation_class: &str, opts: StyleOptions) -> String {
    let animation = animation_style(animation_class);
    let container = container_style_with(form, opts);
    let src = format!("{ASSETS_DIR}/{}", basename(&form.image));
    let width = form
        .value(Field::ImageSize)
        .map(|size| format!(" width=\"{size}\""))
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str("<style>\n");
    if !animation.is_empty() {
        out.push_str(&animation);
        out.push('\n');
    }
    out.push_str("</style>\n");
    out.push_str(&format!("<div style=\"{container}\">\n"));
    out.push_str(&format!(
        "  <img src=\"{src}\"{width} class=\"{ANIMATED_IMAGE_CLASS}\"/>\n"
    ));
    out.push_str("</div>\n");
    out
}

#[cfg(test)]
#[path = "../tests/unit/emit.rs"]
mod tests;
