use serde::{Deserialize, Serialize};

use crate::border::BorderStyle;

/// Rendering options.
///
/// Missing fields take their defaults when deserialized, so an empty
/// configuration document is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Border style for every grid, nested ones included.
    pub style: BorderStyle,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: BorderStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let options = RenderOptions::new().style(BorderStyle::Rounded);
        assert_eq!(options.style, BorderStyle::Rounded);
    }

    #[test]
    fn deserialize_empty_document() {
        let options: RenderOptions = serde_yaml::from_str("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn deserialize_style() {
        let options: RenderOptions = serde_yaml::from_str("style: double").unwrap();
        assert_eq!(options.style, BorderStyle::Double);
    }
}
