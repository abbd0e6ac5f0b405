use crate::{
    emit::generate_html,
    export::{Artifact, ArtifactSink},
    form::state::{Field, FieldFlags, FormState, basename},
    foundation::error::{ImgAnimError, ImgAnimResult},
    style::StyleOptions,
};

/// Text of the blocking alert raised by an invalid submit.
pub const INVALID_FORM_ALERT: &str = "Form is not valid";

/// Surface for blocking user-facing alerts.
pub trait Alert {
    fn alert(&mut self, message: &str);
}

/// Alert that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlert;

impl Alert for LogAlert {
    fn alert(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Alert that records every message, for tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingAlert {
    pub messages: Vec<String>,
}

impl Alert for RecordingAlert {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Values derived by a successful submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Trailing filename of [`FormState::image`].
    pub image_url: String,
    /// Raw copy of [`FormState::animation`].
    pub animation_class: String,
}

/// Observable phase of an [`ExportForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No successful submit since creation or the last reset.
    Idle,
    /// A submit succeeded; [`ExportForm::submission`] is populated.
    Ready,
}

/// The export form: field values, interaction flags and the last successful submission.
pub struct ExportForm<A: Alert = LogAlert> {
    state: FormState,
    flags: FieldFlags,
    submission: Option<Submission>,
    style: StyleOptions,
    alert: A,
}

impl ExportForm<LogAlert> {
    pub fn new() -> Self {
        Self::with_alert(LogAlert)
    }
}

impl Default for ExportForm<LogAlert> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Alert> ExportForm<A> {
    pub fn with_alert(alert: A) -> Self {
        Self {
            state: FormState::default(),
            flags: FieldFlags::default(),
            submission: None,
            style: StyleOptions::default(),
            alert,
        }
    }

    pub fn style_options(mut self, style: StyleOptions) -> Self {
        self.style = style;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn flags(&self) -> FieldFlags {
        self.flags
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// `Some` once a submit has succeeded, cleared by [`ExportForm::reset`].
    pub fn image_url(&self) -> Option<&str> {
        self.submission.as_ref().map(|s| s.image_url.as_str())
    }

    pub fn alert_surface(&self) -> &A {
        &self.alert
    }

    pub fn phase(&self) -> Phase {
        if self.submission.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// User input into one control.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.state.set(field, value);
        self.flags.dirty = true;
        self.flags.touched = true;
    }

    /// Apply every non-empty value of `values` as user input.
    pub fn fill(&mut self, values: &FormState) {
        for field in Field::ALL {
            if let Some(v) = values.value(field) {
                self.set(field, v);
            }
        }
    }

    /// A control was visited without changing its value.
    pub fn touch(&mut self, field: Field) {
        tracing::trace!(%field, "touched");
        self.flags.touched = true;
    }

    /// Validate and derive the submission.
    ///
    /// On failure the alert fires once and neither the fields nor a previous submission change.
    #[tracing::instrument(skip(self), fields(image = %self.state.image, animation = %self.state.animation))]
    pub fn on_submit(&mut self) -> ImgAnimResult<&Submission> {
        if !self.state.is_valid() {
            tracing::debug!(missing = ?self.state.missing_required(), "submit rejected");
            self.alert.alert(INVALID_FORM_ALERT);
            return Err(ImgAnimError::InvalidForm);
        }

        let submission = Submission {
            image_url: basename(&self.state.image).to_string(),
            animation_class: self.state.animation.clone(),
        };
        tracing::debug!(image_url = %submission.image_url, "submit accepted");
        Ok(self.submission.insert(submission))
    }

    /// Clear every field, the submission and the interaction flags.
    pub fn reset(&mut self) {
        self.state = FormState::default();
        self.flags = FieldFlags::default();
        self.submission = None;
        tracing::debug!("form reset");
    }

    /// The HTML the export would write right now.
    ///
    /// Keyframes follow the last submitted animation; before any submit the style block is empty.
    pub fn html(&self) -> String {
        let animation_class = self
            .submission
            .as_ref()
            .map(|s| s.animation_class.as_str())
            .unwrap_or("");
        generate_html(&self.state, animation_class, self.style)
    }

    /// Emit `output.html` through `sink`.
    #[tracing::instrument(skip(self, sink), fields(phase = ?self.phase()))]
    pub fn export(&self, sink: &mut dyn ArtifactSink) -> ImgAnimResult<()> {
        let artifact = Artifact::html(self.html());
        sink.emit(&artifact)?;
        tracing::info!(name = %artifact.file_name, bytes = artifact.bytes.len(), "exported");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/session.rs"]
mod tests;
