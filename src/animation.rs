use std::str::FromStr;

use crate::foundation::error::{ImgAnimError, ImgAnimResult};

/// CSS class every exported image carries; animation rules bind to it.
pub const ANIMATED_IMAGE_CLASS: &str = "animated-image";

/// Entrance animations the exporter knows how to write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Animation {
    /// Vertical translation from `-100%` to `0`.
    SlideInFromTop,
    /// Scale from `0` to `1`.
    ZoomInFromBottom,
}

impl Animation {
    pub const ALL: [Animation; 2] = [Animation::SlideInFromTop, Animation::ZoomInFromBottom];

    pub fn id(self) -> &'static str {
        match self {
            Self::SlideInFromTop => "slideInFromTop",
            Self::ZoomInFromBottom => "zoomInFromBottom",
        }
    }

    /// Exact identifier match; no trimming or case folding.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    fn keyframe_steps(self) -> (&'static str, &'static str) {
        match self {
            Self::SlideInFromTop => ("translateY(-100%)", "translateY(0)"),
            Self::ZoomInFromBottom => ("scale(0)", "scale(1)"),
        }
    }

    /// The `@keyframes` block followed by the rule binding it to [`ANIMATED_IMAGE_CLASS`].
    pub fn css(self) -> String {
        let id = self.id();
        let (from, to) = self.keyframe_steps();
        format!(
            "@keyframes {id} {{\n  from {{\n    transform: {from};\n  }}\n  to {{\n    transform: {to};\n  }}\n}}\n\
             .{ANIMATED_IMAGE_CLASS} {{\n  animation: {id} 1s ease-in-out;\n}}"
        )
    }
}

impl std::fmt::Display for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Animation {
    type Err = ImgAnimError;

    fn from_str(s: &str) -> ImgAnimResult<Self> {
        Self::from_id(s)
            .ok_or_else(|| ImgAnimError::validation(format!("unknown animation '{s}'")))
    }
}

/// CSS for an animation identifier; empty for anything unrecognized, including `""`.
pub fn animation_style(id: &str) -> String {
    match Animation::from_id(id) {
        Some(anim) => anim.css(),
        None => {
            if !id.is_empty() {
                tracing::warn!(id, "unrecognized animation identifier, emitting no keyframes");
            }
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/animation.rs"]
mod tests;
