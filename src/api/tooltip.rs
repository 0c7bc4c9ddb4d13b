use crate::core::{Color, CursorPoint, Viewport};
use crate::render::{FontWeight, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

const CURSOR_OFFSET: f64 = 14.0;
const PADDING: f64 = 10.0;
const LINE_HEIGHT: f64 = 18.0;
const TITLE_FONT_SIZE: f64 = 13.0;
const TEXT_FONT_SIZE: f64 = 12.0;
const SWATCH_SIZE: f64 = 10.0;
const SWATCH_GAP: f64 = 6.0;
const CHAR_WIDTH_RATIO: f64 = 0.6;
const MIN_WIDTH: f64 = 60.0;

const BACKGROUND: Color = Color::rgb(24, 24, 28);
const TEXT_COLOR: Color = Color::rgb(230, 230, 235);
const FOOTER_COLOR: Color = Color::rgb(160, 160, 170);

/// Assembled tooltip content for the single hovered primitive of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub panels: Vec<TooltipPanel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPanel {
    /// Swatch echoing the hovered primitive's color.
    pub color: Color,
    pub texts: Vec<String>,
    pub footer: Option<String>,
}

/// Resolved tooltip box, positioned near the cursor and clamped to the
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Monospace-style width estimate; real text metrics belong to backends.
#[must_use]
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * CHAR_WIDTH_RATIO
}

/// Computes the tooltip box for `content`, keeping it inside the viewport.
#[must_use]
pub fn layout_tooltip(
    viewport: Viewport,
    cursor: CursorPoint,
    content: &TooltipContent,
) -> TooltipLayout {
    let mut width = estimate_text_width(&content.title, TITLE_FONT_SIZE);
    let mut line_count = 1usize;

    for panel in &content.panels {
        for text in &panel.texts {
            width = width.max(
                SWATCH_SIZE + SWATCH_GAP + estimate_text_width(text, TEXT_FONT_SIZE),
            );
            line_count += 1;
        }
        if let Some(footer) = &panel.footer {
            width = width.max(estimate_text_width(footer, TEXT_FONT_SIZE));
            line_count += 1;
        }
    }

    let width = (width + PADDING * 2.0).max(MIN_WIDTH);
    let height = line_count as f64 * LINE_HEIGHT + PADDING * 2.0;

    let max_x = (viewport.width_px() - width).max(0.0);
    let max_y = (viewport.height_px() - height).max(0.0);
    let x = (cursor.x + CURSOR_OFFSET).clamp(0.0, max_x);
    let y = (cursor.y + CURSOR_OFFSET).clamp(0.0, max_y);

    TooltipLayout {
        x,
        y,
        width,
        height,
    }
}

/// Renders the tooltip panel into the frame.
pub(super) fn push_tooltip(
    frame: &mut RenderFrame,
    viewport: Viewport,
    cursor: CursorPoint,
    content: &TooltipContent,
) {
    let layout = layout_tooltip(viewport, cursor, content);

    frame.push_rect(
        RectPrimitive::new(layout.x, layout.y, layout.width, layout.height, BACKGROUND)
            .with_alpha(0.92),
    );

    let text_x = layout.x + PADDING;
    let mut line_y = layout.y + PADDING + LINE_HEIGHT / 2.0;

    if !content.title.is_empty() {
        frame.push_text(
            TextPrimitive::new(
                content.title.clone(),
                text_x,
                line_y,
                TITLE_FONT_SIZE,
                TEXT_COLOR,
                TextHAlign::Left,
            )
            .with_weight(FontWeight::Bold),
        );
    }
    line_y += LINE_HEIGHT;

    for panel in &content.panels {
        for (index, text) in panel.texts.iter().enumerate() {
            if index == 0 {
                frame.push_rect(RectPrimitive::new(
                    text_x,
                    line_y - SWATCH_SIZE / 2.0,
                    SWATCH_SIZE,
                    SWATCH_SIZE,
                    panel.color,
                ));
            }
            if !text.is_empty() {
                frame.push_text(TextPrimitive::new(
                    text.clone(),
                    text_x + SWATCH_SIZE + SWATCH_GAP,
                    line_y,
                    TEXT_FONT_SIZE,
                    TEXT_COLOR,
                    TextHAlign::Left,
                ));
            }
            line_y += LINE_HEIGHT;
        }

        if let Some(footer) = &panel.footer {
            if !footer.is_empty() {
                frame.push_text(TextPrimitive::new(
                    footer.clone(),
                    text_x,
                    line_y,
                    TEXT_FONT_SIZE,
                    FOOTER_COLOR,
                    TextHAlign::Left,
                ));
            }
            line_y += LINE_HEIGHT;
        }
    }
}
