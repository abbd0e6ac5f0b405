//! imganim exports a standalone HTML snippet that embeds one image with an entrance animation.
//!
//! # Pipeline overview
//!
//! 1. **Fill**: user input lands in a [`FormState`] held by an [`ExportForm`]
//! 2. **Submit**: [`ExportForm::on_submit`] checks the required fields and derives a [`Submission`]
//! 3. **Compose**: [`container_style`] and [`animation_style`] build the CSS
//! 4. **Emit**: [`generate_html`] renders `<style>` plus `<div><img/></div>`
//! 5. **Export**: [`ExportForm::export`] hands `output.html` to an [`ArtifactSink`]
//!
//! Composition and emission are pure. Field values are interpolated verbatim: nothing is
//! escaped or checked for being numeric.
#![forbid(unsafe_code)]

mod animation;
mod emit;
mod export;
mod form;
mod foundation;
mod style;

pub use animation::{ANIMATED_IMAGE_CLASS, Animation, animation_style};
pub use emit::{ASSETS_DIR, generate_html};
pub use export::{Artifact, ArtifactSink, FsSink, HTML_MIME, InMemorySink, OUTPUT_FILE_NAME};
pub use form::session::{
    Alert, ExportForm, INVALID_FORM_ALERT, LogAlert, Phase, RecordingAlert, Submission,
};
pub use form::state::{Field, FieldFlags, FormState, basename};
pub use foundation::error::{ImgAnimError, ImgAnimResult};
pub use style::{PropertyNaming, StyleOptions, container_style, container_style_with};
