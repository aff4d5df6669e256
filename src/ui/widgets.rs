//! Basic page widgets

use macroquad::prelude::*;
use super::{theme, Rect, UiContext};

/// Approximate glyph advance as a fraction of font size. macroquad's
/// measure_text is slow for long bodies and needs a live context, so
/// wrapping uses this instead.
const CHAR_WIDTH_RATIO: f32 = 0.5;

/// Wrap text to fit within a given pixel width.
/// Explicit newlines start a new line.
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let char_width = font_size * CHAR_WIDTH_RATIO;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate_len = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };

            if current.is_empty() {
                current.push_str(word);
            } else if candidate_len as f32 * char_width <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }

    lines
}

/// Draw wrapped text starting at `y` (top of first line). Returns the y
/// just below the last line.
pub fn draw_wrapped(text: &str, x: f32, y: f32, width: f32, font_size: f32, color: Color) -> f32 {
    let line_height = (font_size * 1.5).round();
    let mut y = y;
    for line in wrap_text(text, font_size, width) {
        draw_text(&line, x.round(), (y + font_size).round(), font_size, color);
        y += line_height;
    }
    y
}

/// Height `draw_wrapped` will use for this text
pub fn wrapped_height(text: &str, font_size: f32, width: f32) -> f32 {
    wrap_text(text, font_size, width).len() as f32 * (font_size * 1.5).round()
}

/// Visual style of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Filled accent button ("Read More", "Close", "Send Message")
    Accent,
    /// Flat text link (nav entries); `true` when it is the current one
    Link { active: bool },
}

/// Button size for a label at the given font size
pub fn button_size(label: &str, font_size: f32) -> (f32, f32) {
    let dims = measure_text(label, None, font_size as u16, 1.0);
    ((dims.width + font_size * 1.6).round(), (font_size * 2.2).round())
}

/// Draw a text button, returns true if clicked
pub fn button(ctx: &mut UiContext, rect: Rect, label: &str, style: ButtonStyle, tooltip: &str) -> bool {
    let mouse = ctx.pointer();
    let hovered = mouse.inside(&rect);
    let pressed = mouse.clicking(&rect);
    let clicked = mouse.clicked(&rect);

    if hovered && !tooltip.is_empty() {
        ctx.set_tooltip(tooltip, mouse.x, mouse.y);
    }

    let font_size = (rect.h / 2.2).round();
    let text_color = match style {
        ButtonStyle::Accent => {
            let bg = if hovered || pressed { theme::ACCENT_HOVER } else { theme::ACCENT_COLOR };
            draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 6.0, bg);
            theme::ACCENT_TEXT
        }
        ButtonStyle::Link { active } => {
            if active || hovered {
                theme::ACCENT_COLOR
            } else {
                theme::TEXT_COLOR
            }
        }
    };

    let dims = measure_text(label, None, font_size as u16, 1.0);
    let text_x = (rect.center_x() - dims.width * 0.5).round();
    let text_y = (rect.center_y() + dims.offset_y * 0.5).round();
    draw_text(label, text_x, text_y, font_size, text_color);

    clicked
}

/// Three-bar menu button, returns true if clicked
pub fn hamburger(ctx: &mut UiContext, rect: Rect) -> bool {
    let mouse = ctx.pointer();
    let hovered = mouse.inside(&rect);
    if hovered {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 4.0, theme::GHOST_HOVER);
    }
    let bar_w = (rect.w * 0.5).round();
    let bar_x = (rect.center_x() - bar_w * 0.5).round();
    for i in -1..=1 {
        let bar_y = (rect.center_y() + i as f32 * 6.0 - 1.0).round();
        draw_rectangle(bar_x, bar_y, bar_w, 2.0, theme::TEXT_COLOR);
    }
    mouse.clicked(&rect)
}

/// Draw the tooltip queued this frame, if any (call last)
pub fn draw_tooltip(ctx: &UiContext) {
    let Some((text, x, y)) = ctx.tooltip() else {
        return;
    };
    let font_size = theme::FONT_SIZE_SMALL;
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let w = dims.width + 12.0;
    let h = font_size + 10.0;
    // Below-right of the cursor, kept on screen
    let tx = (x + 12.0).min(screen_width() - w - 4.0).round();
    let ty = (y + 18.0).min(screen_height() - h - 4.0).round();
    draw_rounded_rect(tx, ty, w, h, 4.0, theme::TOOLTIP_BG);
    draw_text(text, tx + 6.0, ty + 5.0 + font_size * 0.8, font_size, theme::ACCENT_TEXT);
}

/// Restrict drawing to `rect` until `end_clip`
pub fn begin_clip(rect: Rect) {
    // Scissor uses physical pixels
    let dpi = screen_dpi_scale();
    gl_use_default_material();
    unsafe {
        get_internal_gl().quad_gl.scissor(Some((
            (rect.x * dpi) as i32,
            (rect.y * dpi) as i32,
            (rect.w * dpi) as i32,
            (rect.h * dpi) as i32,
        )));
    }
}

pub fn end_clip() {
    unsafe {
        get_internal_gl().quad_gl.scissor(None);
    }
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    let r = r.min(w * 0.5).min(h * 0.5);
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        // 10px per char at size 20
        let lines = wrap_text("aaaa bbbb cccc dddd", 20.0, 95.0);
        assert_eq!(lines, vec!["aaaa bbbb", "cccc dddd"]);
    }

    #[test]
    fn test_wrap_long_word_and_newlines() {
        let lines = wrap_text("supercalifragilistic\nok", 20.0, 50.0);
        assert_eq!(lines, vec!["supercalifragilistic", "ok"]);
        assert_eq!(wrap_text("", 20.0, 50.0), vec![String::new()]);
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("one two", 20.0, 1000.0), 30.0);
        assert_eq!(wrapped_height("one two", 20.0, 40.0), 60.0);
    }
}
