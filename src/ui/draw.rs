//! Host drawing surface: rectangles, colors, and the immediate-mode widget
//! calls the overview needs.

use glam::Vec2;
use serde::Serialize;

/// UI Color representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UIColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl UIColor {
    pub const GRAY: UIColor = UIColor {
        r: 0.5,
        g: 0.5,
        b: 0.5,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// UI Rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UIRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl UIRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Move the top edge, keeping the bottom edge fixed
    pub fn with_y_min(self, y_min: f32) -> Self {
        let y_max = self.y_max();
        Self {
            y: y_min,
            height: (y_max - y_min).max(0.0),
            ..self
        }
    }

    /// Move the bottom edge, keeping the top edge fixed
    pub fn with_y_max(self, y_max: f32) -> Self {
        Self {
            height: (y_max - self.y).max(0.0),
            ..self
        }
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UIElement {
    Rect {
        rect: UIRect,
        color: UIColor,
    },
    Label {
        rect: UIRect,
        text: String,
    },
    Button {
        rect: UIRect,
        label: String,
    },
    LineHorizontal {
        start: Vec2,
        width: f32,
        color: UIColor,
    },
}

/// Widget toolkit supplied by the host
pub trait DrawSurface {
    /// Size of the screen the window lives on
    fn screen_size(&self) -> Vec2;

    /// Width the given text occupies when drawn as a label
    fn text_width(&self, text: &str) -> f32;

    /// Draw a text button; returns true if it was clicked this frame
    fn button_text(&mut self, rect: UIRect, label: &str) -> bool;

    fn label(&mut self, rect: UIRect, text: &str);

    fn line_horizontal(&mut self, x: f32, y: f32, width: f32);

    fn draw_rect(&mut self, rect: UIRect, color: UIColor);
}

/// Recording surface for immediate mode UI
///
/// Draw calls are kept as [`UIElement`]s for the current frame. Clicks are
/// queued with [`UIRenderer::click_at`] and consumed by the first button that
/// contains them.
pub struct UIRenderer {
    elements: Vec<UIElement>,
    screen_size: Vec2,
    char_width: f32,
    pending_click: Option<Vec2>,
}

impl UIRenderer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            elements: Vec::new(),
            screen_size: Vec2::new(width, height),
            char_width: 8.0,
            pending_click: None,
        }
    }

    pub fn with_char_width(mut self, char_width: f32) -> Self {
        self.char_width = char_width;
        self
    }

    pub fn begin_frame(&mut self) {
        self.elements.clear();
    }

    /// Queue a click to be delivered to the next button drawn under it
    pub fn click_at(&mut self, x: f32, y: f32) {
        self.pending_click = Some(Vec2::new(x, y));
    }

    pub fn elements(&self) -> &[UIElement] {
        &self.elements
    }

    /// Rectangles of every button drawn this frame, by label
    pub fn button_rects(&self) -> Vec<(&str, UIRect)> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                UIElement::Button { rect, label } => Some((label.as_str(), *rect)),
                _ => None,
            })
            .collect()
    }

    /// Text of every label drawn this frame
    pub fn label_texts(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                UIElement::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for UIRenderer {
    fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn button_text(&mut self, rect: UIRect, label: &str) -> bool {
        self.elements.push(UIElement::Button {
            rect,
            label: label.to_string(),
        });
        match self.pending_click {
            Some(click) if rect.contains(click.x, click.y) => {
                self.pending_click = None;
                true
            }
            _ => false,
        }
    }

    fn label(&mut self, rect: UIRect, text: &str) {
        self.elements.push(UIElement::Label {
            rect,
            text: text.to_string(),
        });
    }

    fn line_horizontal(&mut self, x: f32, y: f32, width: f32) {
        self.elements.push(UIElement::LineHorizontal {
            start: Vec2::new(x, y),
            width,
            color: UIColor::GRAY,
        });
    }

    fn draw_rect(&mut self, rect: UIRect, color: UIColor) {
        self.elements.push(UIElement::Rect { rect, color });
    }
}
