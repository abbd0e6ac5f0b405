use std::str::FromStr;

use crate::foundation::error::{ImgAnimError, ImgAnimResult};

/// Every user-entered value of the export form.
///
/// All fields are plain strings; an empty string means "not provided". Required fields are
/// [`FormState::image`] and [`FormState::animation`], see [`FormState::is_valid`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FormState {
    /// Filesystem-style path of the chosen image. Only the trailing filename is exported.
    pub image: String,
    /// Animation identifier (`slideInFromTop` or `zoomInFromBottom`).
    pub animation: String,
    /// Image width in pixels.
    pub image_size: String,
    /// Container width in pixels.
    pub container_width: String,
    /// Container height in pixels.
    pub container_height: String,
    /// Horizontal image offset in pixels.
    pub image_position_x: String,
    /// Vertical image offset in pixels.
    pub image_position_y: String,
}

/// Names one control of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// [`FormState::image`]
    Image,
    /// [`FormState::animation`]
    Animation,
    /// [`FormState::image_size`]
    ImageSize,
    /// [`FormState::container_width`]
    ContainerWidth,
    /// [`FormState::container_height`]
    ContainerHeight,
    /// [`FormState::image_position_x`]
    ImagePositionX,
    /// [`FormState::image_position_y`]
    ImagePositionY,
}

impl Field {
    /// All controls in form order.
    pub const ALL: [Field; 7] = [
        Field::Image,
        Field::Animation,
        Field::ImageSize,
        Field::ContainerWidth,
        Field::ContainerHeight,
        Field::ImagePositionX,
        Field::ImagePositionY,
    ];

    /// Control name as used in form JSON.
    pub fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Animation => "animation",
            Self::ImageSize => "imageSize",
            Self::ContainerWidth => "containerWidth",
            Self::ContainerHeight => "containerHeight",
            Self::ImagePositionX => "imagePositionX",
            Self::ImagePositionY => "imagePositionY",
        }
    }

    /// Whether submission requires this control to be non-empty.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Image | Self::Animation)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = ImgAnimError;

    fn from_str(s: &str) -> ImgAnimResult<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ImgAnimError::validation(format!("unknown form field '{s}'")))
    }
}

impl FormState {
    /// An empty form (every field absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Both required fields are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.image.is_empty() && !self.animation.is_empty()
    }

    /// Required fields that are currently empty, in form order.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Image => &self.image,
            Field::Animation => &self.animation,
            Field::ImageSize => &self.image_size,
            Field::ContainerWidth => &self.container_width,
            Field::ContainerHeight => &self.container_height,
            Field::ImagePositionX => &self.image_position_x,
            Field::ImagePositionY => &self.image_position_y,
        }
    }

    /// `Some(value)` for a non-empty field, `None` when absent.
    pub fn value(&self, field: Field) -> Option<&str> {
        Some(self.get(field)).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Image => &mut self.image,
            Field::Animation => &mut self.animation,
            Field::ImageSize => &mut self.image_size,
            Field::ContainerWidth => &mut self.container_width,
            Field::ContainerHeight => &mut self.container_height,
            Field::ImagePositionX => &mut self.image_position_x,
            Field::ImagePositionY => &mut self.image_position_y,
        };
        *slot = value.into();
    }

    pub fn from_json(s: &str) -> ImgAnimResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Trailing filename of a backslash-separated path; the whole string when no backslash exists.
pub fn basename(path: &str) -> &str {
    match path.rfind('\\') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Interaction flags of the form as a whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldFlags {
    /// A value was changed through user input.
    pub dirty: bool,
    /// A control was visited.
    pub touched: bool,
}

impl FieldFlags {
    pub fn is_pristine(self) -> bool {
        !self.dirty
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/state.rs"]
mod tests;
