//! Declarative per-frame scene output handed to an external renderer.

use crate::foundation::core::{Rgba8Premul, Transform2D, Vec2};

/// Full visual state of one scene at one local frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualDescription {
    /// Scene that produced this description.
    pub scene_id: String,
    /// Scene backdrop.
    pub background: Background,
    /// Elements in flow order; later elements paint on top.
    pub elements: Vec<Element>,
}

impl VisualDescription {
    /// Empty description with a backdrop.
    pub fn new(scene_id: impl Into<String>, background: Background) -> Self {
        Self {
            scene_id: scene_id.into(),
            background,
            elements: Vec::new(),
        }
    }

    /// Append an element.
    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// Scene backdrop fill.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    /// Flat color.
    Solid {
        /// Fill color.
        color: Rgba8Premul,
    },
    /// Two-stop linear gradient.
    LinearGradient {
        /// Gradient angle in degrees, CSS convention.
        angle_deg: f64,
        /// Color at 0%.
        from: Rgba8Premul,
        /// Color at 100%.
        to: Rgba8Premul,
    },
}

/// Typographic role of a text element; the renderer maps roles to fonts and sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// Scene hero title.
    Title,
    /// Section heading.
    Heading,
    /// Secondary heading.
    Subtitle,
    /// Running text.
    Body,
    /// Small labels and tags.
    Caption,
    /// Monospaced code or command text.
    Mono,
}

/// One positioned, animated visual item.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    /// Stable identifier within the scene.
    pub id: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Animated offset/scale relative to the element's layout slot.
    pub transform: Transform2D,
    /// What to draw.
    pub kind: ElementKind,
}

/// Drawable payload of an [`Element`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementKind {
    /// A run of text, optionally only partially typed out.
    Text {
        /// Full text.
        text: String,
        /// Typographic role.
        role: TextRole,
        /// Text color.
        color: Rgba8Premul,
        /// Number of leading characters shown; `None` shows all.
        visible_chars: Option<usize>,
    },
    /// Rounded rectangle.
    Panel {
        /// Size in pixels.
        size: Vec2,
        /// Corner radius in pixels.
        corner_radius: f64,
        /// Fill color.
        fill: Rgba8Premul,
        /// Optional 1px border color.
        stroke: Option<Rgba8Premul>,
    },
    /// Horizontal bar filled from the left.
    Bar {
        /// Filled fraction of the track.
        fill_fraction: f64,
        /// Fill color; the track is drawn with a faded version.
        color: Rgba8Premul,
    },
    /// Single symbol such as an arrow or cursor.
    Glyph {
        /// Symbol to draw.
        symbol: String,
        /// Symbol color.
        color: Rgba8Premul,
    },
}

impl Element {
    /// Fully opaque element with an identity transform.
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            opacity: 1.0,
            transform: Transform2D::default(),
            kind,
        }
    }

    /// Text element showing all characters.
    pub fn text(
        id: impl Into<String>,
        text: impl Into<String>,
        role: TextRole,
        color: Rgba8Premul,
    ) -> Self {
        Self::new(
            id,
            ElementKind::Text {
                text: text.into(),
                role,
                color,
                visible_chars: None,
            },
        )
    }

    /// Glyph element.
    pub fn glyph(id: impl Into<String>, symbol: impl Into<String>, color: Rgba8Premul) -> Self {
        Self::new(
            id,
            ElementKind::Glyph {
                symbol: symbol.into(),
                color,
            },
        )
    }

    /// Rounded rectangle without a border.
    pub fn panel(id: impl Into<String>, size: Vec2, corner_radius: f64, fill: Rgba8Premul) -> Self {
        Self::new(
            id,
            ElementKind::Panel {
                size,
                corner_radius,
                fill,
                stroke: None,
            },
        )
    }

    /// Progress-style bar filled to `fill_fraction` (clamped to `[0, 1]`).
    pub fn bar(id: impl Into<String>, fill_fraction: f64, color: Rgba8Premul) -> Self {
        Self::new(
            id,
            ElementKind::Bar {
                fill_fraction: fill_fraction.clamp(0.0, 1.0),
                color,
            },
        )
    }

    /// Add a border to a panel. No-op for other kinds.
    pub fn stroke(mut self, color: Rgba8Premul) -> Self {
        if let ElementKind::Panel { stroke, .. } = &mut self.kind {
            *stroke = Some(color);
        }
        self
    }

    /// Set opacity, clamped to `[0, 1]` the way CSS clamps it.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Offset from the layout slot in pixels.
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.transform.translate = Vec2::new(x, y);
        self
    }

    /// Uniform scale around the element center.
    pub fn scale(mut self, s: f64) -> Self {
        self.transform.scale = Vec2::new(s, s);
        self
    }

    /// Limit a text element to its first `n` characters. No-op for other kinds.
    pub fn typed(mut self, n: usize) -> Self {
        if let ElementKind::Text { visible_chars, .. } = &mut self.kind {
            *visible_chars = Some(n);
        }
        self
    }

    /// Text as it currently appears (respecting `visible_chars`), if this is a text element.
    pub fn visible_text(&self) -> Option<String> {
        match &self.kind {
            ElementKind::Text {
                text,
                visible_chars,
                ..
            } => Some(match visible_chars {
                Some(n) => text.chars().take(*n).collect(),
                None => text.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/model.rs"]
mod tests;
