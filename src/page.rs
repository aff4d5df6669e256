//! Page shell
//!
//! Header (or the mobile menu bar), the two-column main area, the article
//! overlay and the footer. Layout is computed up front from the screen
//! size so it can be checked without a window; the draw functions report
//! what the reader clicked as a `PageAction`.

use macroquad::prelude::*;
use crate::articles::{Article, ARTICLES, ISSUE_LABEL};
use crate::richtext::{self, Block};
use crate::ui::{
    begin_clip, button, button_size, draw_wrapped, end_clip, hamburger, theme, wrapped_height,
    ActionRegistry, ButtonStyle, Fade, Rect, UiContext,
};
use crate::view::{View, ViewController};

pub const BRAND: &str = "ARTISANATTITUDE.";

const BLURB: [&str; 2] = [
    "ARTISANATTITUDE. is a cutting-edge digital magazine exploring the intersections of art, technology, and urban culture. Our platform showcases innovative projects, thought-provoking articles, and visionary ideas that shape the future of creative expression and city living.",
    "Dive into our curated collection of articles, featuring insights from leading artists, designers, and thinkers. Experience the fusion of traditional craftsmanship with modern digital techniques, and discover how this synergy is transforming our urban landscapes and artistic practices.",
];

const ABOUT_TITLE: &str = "About ARTISANATTITUDE.";
const ABOUT_TEXT: &str = "ARTISANATTITUDE. is a digital platform dedicated to exploring the cutting edge of art, design, and urban culture. We bring together visionaries, creators, and thinkers to showcase innovative ideas and projects that are shaping our future.";

const CONTACT_TITLE: &str = "Contact Us";
const CONTACT_TEXT: &str = "Get in touch with ARTISANATTITUDE. for collaborations, submissions, or inquiries.";

const FOOTER_TEXT: &str = "© 2024 ARTISANATTITUDE. All rights reserved.";

pub const FALLBACK_TEXT: &str = "Something went wrong displaying the magazine.";

// Layout metrics (logical pixels)
const HEADER_H: f32 = 56.0;
const MOBILE_BAR_H: f32 = 44.0;
const FOOTER_H: f32 = 48.0;
const PADDING: f32 = 16.0;
const MENU_ENTRY_H: f32 = 36.0;
/// Share of the viewport height given to the 3D canvas
const CANVAS_VH: f32 = 0.6;
/// Width cap of the overlay's reading column
const OVERLAY_MAX_W: f32 = 896.0;
const SCROLL_SPEED: f32 = 3.0;

/// Something the reader asked for this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageAction {
    SelectView(View),
    ChooseFromMenu(View),
    ToggleMenu,
    CloseMenu,
    OpenArticle(&'static Article),
    CloseArticle,
    SendMessage,
}

/// What the left column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftPanel {
    Magazine3d,
    Blurb,
}

impl LeftPanel {
    pub fn for_view(view: View) -> Self {
        match view {
            View::Magazine => LeftPanel::Magazine3d,
            _ => LeftPanel::Blurb,
        }
    }
}

/// What the right column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightPanel {
    Empty,
    ArticleList,
    About,
    Contact,
}

impl RightPanel {
    pub fn for_view(view: View) -> Self {
        match view {
            View::Magazine => RightPanel::Empty,
            View::Articles => RightPanel::ArticleList,
            View::About => RightPanel::About,
            View::Contact => RightPanel::Contact,
        }
    }
}

/// Regions of the page for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Narrow window: menu bar instead of the full header
    pub mobile: bool,
    pub header: Rect,
    pub left: Rect,
    pub right: Rect,
    pub footer: Rect,
    /// Where the 3D surface renders (magazine view only)
    pub canvas: Option<Rect>,
    /// Dropdown under the mobile bar
    pub menu: Rect,
}

impl PageLayout {
    pub fn compute(screen: Rect, mobile_breakpoint: f32, view: View) -> Self {
        let mobile = screen.w < mobile_breakpoint;
        let (header, rest) = screen.take_top(if mobile { MOBILE_BAR_H } else { HEADER_H });
        let (main, footer) = rest.take_bottom(FOOTER_H);
        let canvas_h = (screen.h * CANVAS_VH).round();

        let (left, right) = if mobile {
            // Stacked: left column on top
            let left_h = match LeftPanel::for_view(view) {
                LeftPanel::Magazine3d => canvas_h + PADDING * 2.0,
                LeftPanel::Blurb => (main.h * 0.45).round(),
            };
            main.take_top(left_h)
        } else {
            main.split_h(0.5)
        };

        let canvas = match LeftPanel::for_view(view) {
            LeftPanel::Magazine3d => {
                let inner = left.pad(PADDING);
                Some(Rect::new(inner.x, inner.y, inner.w, canvas_h.min(inner.h)))
            }
            LeftPanel::Blurb => None,
        };

        let menu_h = MENU_ENTRY_H * View::ALL.len() as f32 + PADDING * 2.0;
        let menu = Rect::new(screen.x, header.bottom(), screen.w, menu_h);

        Self { mobile, header, left, right, footer, canvas, menu }
    }
}

/// Scroll offsets and running fades
#[derive(Debug, Default)]
pub struct PageState {
    pub right_scroll: f32,
    pub overlay_scroll: f32,
    pub overlay_fade: Option<Fade>,
    /// Article still fading out after its overlay was closed
    pub overlay_exit: Option<(&'static Article, Fade)>,
    pub menu_fade: Option<Fade>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_changed(&mut self) {
        self.right_scroll = 0.0;
    }

    pub fn article_opened(&mut self, now: f64) {
        self.overlay_scroll = 0.0;
        self.overlay_fade = Some(Fade::start(now));
        self.overlay_exit = None;
    }

    pub fn article_closed(&mut self, article: &'static Article, now: f64) {
        self.overlay_fade = None;
        self.overlay_exit = Some((article, Fade::exit(now)));
    }

    /// The article whose overlay is still fading out, if any
    pub fn closing_article(&mut self, now: f64) -> Option<&'static Article> {
        match self.overlay_exit {
            Some((_, fade)) if fade.is_finished(now) => {
                self.overlay_exit = None;
                None
            }
            Some((article, _)) => Some(article),
            None => None,
        }
    }

    pub fn menu_opened(&mut self, now: f64) {
        self.menu_fade = Some(Fade::start(now));
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, color.a * alpha)
}

fn hairline(x: f32, y: f32, w: f32) {
    draw_rectangle(x.round(), y.round(), w.round(), 1.0, theme::BORDER_COLOR);
}

/// Desktop header: brand left, nav right
pub fn draw_header(ctx: &mut UiContext, rect: Rect, views: &ViewController, actions: &ActionRegistry) -> Option<PageAction> {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::BG_COLOR);
    hairline(rect.x, rect.bottom() - 1.0, rect.w);

    let brand_size = theme::FONT_SIZE_SUBHEADING;
    draw_text(BRAND, rect.x + PADDING, (rect.center_y() + brand_size * 0.35).round(), brand_size, theme::TEXT_COLOR);

    let font_size = theme::FONT_SIZE_BODY;
    let mut x = rect.right() - PADDING;
    let mut clicked = None;
    // Laid out right to left so the last entry hugs the edge
    for view in View::ALL.iter().rev() {
        let (w, h) = button_size(view.label(), font_size);
        x -= w;
        let button_rect = Rect::new(x, (rect.center_y() - h * 0.5).round(), w, h);
        let tooltip = actions.tooltip(view.action_id());
        if button(ctx, button_rect, view.label(), ButtonStyle::Link { active: views.is_active(*view) }, &tooltip) {
            clicked = Some(PageAction::SelectView(*view));
        }
        x -= PADDING * 0.25;
    }
    clicked
}

/// Mobile bar: menu button and brand
pub fn draw_mobile_bar(ctx: &mut UiContext, rect: Rect) -> Option<PageAction> {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::BG_COLOR);
    hairline(rect.x, rect.bottom() - 1.0, rect.w);

    let size = rect.h - 8.0;
    let menu_button = Rect::new(rect.x + 4.0, rect.y + 4.0, size, size);
    let font_size = theme::FONT_SIZE_BODY;
    draw_text(
        BRAND,
        menu_button.right() + PADDING * 0.5,
        (rect.center_y() + font_size * 0.35).round(),
        font_size,
        theme::TEXT_COLOR,
    );
    hamburger(ctx, menu_button).then_some(PageAction::ToggleMenu)
}

/// Dropdown with the four nav entries (drawn above the main area)
pub fn draw_mobile_menu(ctx: &mut UiContext, rect: Rect, views: &ViewController, fade: Option<Fade>, now: f64) -> Option<PageAction> {
    let (alpha, rise) = fade.map_or((1.0, 0.0), |f| (f.opacity(now), f.offset_y(now)));
    // Slides down from above
    let rect = rect.translate(0.0, -rise);
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, with_alpha(theme::BG_COLOR, alpha));
    hairline(rect.x, rect.bottom() - 1.0, rect.w);

    let mut y = rect.y + PADDING;
    let mut clicked = None;
    for view in View::ALL {
        let entry = Rect::new(rect.x + PADDING, y, rect.w - PADDING * 2.0, MENU_ENTRY_H);
        let mouse = ctx.pointer();
        let color = if views.is_active(view) || mouse.inside(&entry) {
            theme::ACCENT_COLOR
        } else {
            theme::TEXT_COLOR
        };
        let font_size = theme::FONT_SIZE_BODY;
        draw_text(view.label(), entry.x, (entry.center_y() + font_size * 0.35).round(), font_size, with_alpha(color, alpha));
        if mouse.clicked(&entry) {
            clicked = Some(PageAction::ChooseFromMenu(view));
        }
        y += MENU_ENTRY_H;
    }

    // Tapping outside the dropdown dismisses it
    let mouse = ctx.pointer();
    if clicked.is_none() && mouse.left_pressed && !mouse.inside(&rect) {
        clicked = Some(PageAction::CloseMenu);
    }
    clicked
}

/// Left column outside the magazine view: brand, blurb, issue label
pub fn draw_blurb(rect: Rect) {
    let inner = rect.pad(PADDING);
    begin_clip(rect);
    let mut y = inner.y;
    draw_text(BRAND, inner.x, y + theme::FONT_SIZE_HEADING, theme::FONT_SIZE_HEADING, theme::TEXT_COLOR);
    y += theme::FONT_SIZE_HEADING * 1.6;
    for (i, paragraph) in BLURB.iter().enumerate() {
        if i > 0 {
            y += PADDING;
        }
        y = draw_wrapped(paragraph, inner.x, y, inner.w, theme::FONT_SIZE_SMALL, theme::TEXT_MUTED);
    }
    y += PADDING;
    draw_text(ISSUE_LABEL, inner.x, y + theme::FONT_SIZE_SMALL, theme::FONT_SIZE_SMALL, theme::TEXT_COLOR);
    end_clip();
}

/// Right column: article list, about text, or contact
pub fn draw_right_panel(ctx: &mut UiContext, rect: Rect, panel: RightPanel, state: &mut PageState) -> Option<PageAction> {
    if panel == RightPanel::Empty {
        return None;
    }

    let mouse = ctx.pointer();
    if mouse.inside(&rect) {
        state.right_scroll = (state.right_scroll + mouse.scroll * SCROLL_SPEED).min(0.0);
    }

    begin_clip(rect);
    let inner = rect.pad(PADDING);
    let top = inner.y + state.right_scroll;
    let mut y = top;
    let mut clicked = None;

    match panel {
        RightPanel::ArticleList => {
            for article in ARTICLES.iter() {
                let title_size = theme::FONT_SIZE_SUBHEADING;
                draw_text(article.title, inner.x, (y + title_size).round(), title_size, theme::TEXT_COLOR);
                y += (title_size * 1.5).round();
                y = draw_wrapped(article.excerpt, inner.x, y, inner.w, theme::FONT_SIZE_SMALL, theme::TEXT_MUTED);
                y += PADDING * 0.5;

                let (w, h) = button_size("Read More", theme::FONT_SIZE_BODY);
                let read_more = Rect::new(inner.x, y.round(), w, h);
                // Scrolled out of the panel: not clickable
                let visible = read_more.y >= rect.y && read_more.bottom() <= rect.bottom();
                if button(ctx, read_more, "Read More", ButtonStyle::Accent, "") && visible {
                    clicked = Some(PageAction::OpenArticle(article));
                }
                y += h + PADDING * 2.0;
                hairline(inner.x, y, inner.w);
                y += PADDING * 2.0;
            }
        }
        RightPanel::About => {
            y = draw_panel_heading(ABOUT_TITLE, inner.x, y);
            y = draw_wrapped(ABOUT_TEXT, inner.x, y, inner.w, theme::FONT_SIZE_SMALL, theme::TEXT_MUTED);
        }
        RightPanel::Contact => {
            y = draw_panel_heading(CONTACT_TITLE, inner.x, y);
            y = draw_wrapped(CONTACT_TEXT, inner.x, y, inner.w, theme::FONT_SIZE_SMALL, theme::TEXT_MUTED);
            y += PADDING;
            let (w, h) = button_size("Send Message", theme::FONT_SIZE_BODY);
            if button(ctx, Rect::new(inner.x, y.round(), w, h), "Send Message", ButtonStyle::Accent, "") {
                clicked = Some(PageAction::SendMessage);
            }
            y += h;
        }
        RightPanel::Empty => {}
    }

    end_clip();

    // Clamp scroll to content
    let content_height = y - top;
    let max_scroll = -(content_height - inner.h).max(0.0);
    state.right_scroll = state.right_scroll.max(max_scroll);

    clicked
}

fn draw_panel_heading(text: &str, x: f32, y: f32) -> f32 {
    let size = theme::FONT_SIZE_HEADING;
    draw_text(text, x, (y + size).round(), size, theme::TEXT_COLOR);
    y + (size * 1.6).round()
}

/// Reading column of the overlay for a given screen
pub fn overlay_column(screen: Rect) -> Rect {
    screen.pad_xy(PADDING, PADDING * 2.0).centered_max_w(OVERLAY_MAX_W)
}

/// Font size and color for a rich-text block
fn block_style(block: &Block) -> (f32, Color) {
    match block {
        Block::Heading { level: 1, .. } => (theme::FONT_SIZE_TITLE, theme::TEXT_COLOR),
        Block::Heading { level: 2, .. } => (theme::FONT_SIZE_HEADING, theme::TEXT_COLOR),
        Block::Heading { .. } => (theme::FONT_SIZE_SUBHEADING, theme::TEXT_COLOR),
        Block::Paragraph(_) | Block::Bullet(_) => (theme::FONT_SIZE_BODY, theme::TEXT_COLOR),
    }
}

/// Full-screen article view. Fades in and rises into place.
pub fn draw_article_overlay(
    ctx: &mut UiContext,
    screen: Rect,
    article: &Article,
    state: &mut PageState,
    now: f64,
) -> Option<PageAction> {
    let mouse = ctx.pointer();
    state.overlay_scroll = (state.overlay_scroll + mouse.scroll * SCROLL_SPEED).min(0.0);

    let column = overlay_column(screen);
    // Clamp scroll to content
    let max_scroll = -(overlay_content_height(article, column.w) - column.h).max(0.0);
    state.overlay_scroll = state.overlay_scroll.max(max_scroll);

    let fade = state.overlay_fade;
    let close = draw_overlay_content(ctx, screen, article, state.overlay_scroll, fade, now);
    close.then_some(PageAction::CloseArticle)
}

/// Fade out the overlay of a just-closed article. Purely visual: the page
/// underneath is already live.
pub fn draw_closing_overlay(ctx: &mut UiContext, screen: Rect, state: &mut PageState, now: f64) {
    let Some(article) = state.closing_article(now) else {
        return;
    };
    let fade = state.overlay_exit.map(|(_, fade)| fade);
    ctx.begin_modal();
    draw_overlay_content(ctx, screen, article, state.overlay_scroll, fade, now);
    ctx.end_modal();
}

/// Backdrop, close button and article body. Returns whether Close was clicked.
fn draw_overlay_content(
    ctx: &mut UiContext,
    screen: Rect,
    article: &Article,
    scroll: f32,
    fade: Option<Fade>,
    now: f64,
) -> bool {
    let (alpha, rise) = fade.map_or((1.0, 0.0), |f| (f.opacity(now), f.offset_y(now)));
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, with_alpha(theme::BG_COLOR, alpha));

    let column = overlay_column(screen);
    let mut y = column.y + scroll;

    let (w, h) = button_size("Close", theme::FONT_SIZE_BODY);
    let close = button(ctx, Rect::new(column.x, y.round(), w, h), "Close", ButtonStyle::Accent, "Close (Esc)");
    y += h + PADDING;

    // Article content slides while fading
    let mut cy = y + rise;
    let title_size = theme::FONT_SIZE_TITLE;
    draw_text(article.title, column.x, (cy + title_size).round(), title_size, with_alpha(theme::TEXT_COLOR, alpha));
    cy += title_size + PADDING * 1.5;

    for block in richtext::parse(article.body) {
        let (size, color) = block_style(&block);
        let color = with_alpha(color, alpha);
        match &block {
            Block::Heading { text, .. } => {
                cy += PADDING * 0.5;
                cy = draw_wrapped(text, column.x, cy, column.w, size, color);
                cy += PADDING * 0.25;
            }
            Block::Paragraph(text) => {
                cy = draw_wrapped(text, column.x, cy, column.w, size, color);
                cy += PADDING;
            }
            Block::Bullet(text) => {
                draw_text("•", column.x, (cy + size).round(), size, color);
                cy = draw_wrapped(text, column.x + size, cy, column.w - size, size, color);
                cy += PADDING * 0.5;
            }
        }
    }

    close
}

/// Height the overlay content needs for an article at a given column width
pub fn overlay_content_height(article: &Article, column_w: f32) -> f32 {
    let button_h = (theme::FONT_SIZE_BODY * 2.2).round();
    let mut h = button_h + PADDING + theme::FONT_SIZE_TITLE + PADDING * 1.5;
    for block in richtext::parse(article.body) {
        let (size, _) = block_style(&block);
        let text = block.text();
        h += match &block {
            Block::Heading { .. } => PADDING * 0.75 + wrapped_height(text, size, column_w),
            Block::Paragraph(_) => wrapped_height(text, size, column_w) + PADDING,
            Block::Bullet(_) => wrapped_height(text, size, column_w - size) + PADDING * 0.5,
        };
    }
    h
}

pub fn draw_footer(rect: Rect) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::BG_COLOR);
    hairline(rect.x, rect.y, rect.w);
    let size = theme::FONT_SIZE_SMALL;
    let dims = measure_text(FOOTER_TEXT, None, size as u16, 1.0);
    draw_text(
        FOOTER_TEXT,
        (rect.center_x() - dims.width * 0.5).round(),
        (rect.center_y() + size * 0.35).round(),
        size,
        theme::TEXT_MUTED,
    );
}

/// Static stand-in for the 3D surface after it failed
pub fn draw_boundary_fallback(rect: Rect) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::CANVAS_BG);
    let size = theme::FONT_SIZE_BODY;
    let dims = measure_text(FALLBACK_TEXT, None, size as u16, 1.0);
    draw_text(
        FALLBACK_TEXT,
        (rect.center_x() - dims.width * 0.5).max(rect.x + PADDING).round(),
        (rect.center_y() + size * 0.35).round(),
        size,
        theme::TEXT_MUTED,
    );
}

/// Column divider between left and right (desktop)
pub fn draw_column_divider(layout: &PageLayout) {
    if !layout.mobile {
        draw_rectangle(layout.left.right() - 1.0, layout.left.y, 1.0, layout.left.h, theme::BORDER_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);
    const PHONE: Rect = Rect::new(0.0, 0.0, 390.0, 844.0);

    #[test]
    fn test_desktop_layout() {
        let layout = PageLayout::compute(DESKTOP, 768.0, View::Magazine);
        assert!(!layout.mobile);
        assert_eq!(layout.header.h, HEADER_H);
        assert_eq!(layout.left.w, 640.0);
        assert_eq!(layout.right.x, 640.0);
        assert_eq!(layout.footer.bottom(), 800.0);
        assert_eq!(layout.left.y, HEADER_H);

        let canvas = layout.canvas.unwrap();
        assert_eq!(canvas.h, 480.0);
        assert_eq!(canvas.x, PADDING);
        assert!(canvas.bottom() <= layout.left.bottom());
    }

    #[test]
    fn test_canvas_only_on_magazine() {
        for view in [View::Articles, View::About, View::Contact] {
            assert_eq!(PageLayout::compute(DESKTOP, 768.0, view).canvas, None);
        }
    }

    #[test]
    fn test_mobile_layout_stacks_columns() {
        let layout = PageLayout::compute(PHONE, 768.0, View::Magazine);
        assert!(layout.mobile);
        assert_eq!(layout.header.h, MOBILE_BAR_H);
        assert_eq!(layout.left.w, PHONE.w);
        assert_eq!(layout.right.y, layout.left.bottom());
        assert_eq!(layout.menu.y, MOBILE_BAR_H);
        assert_eq!(layout.canvas.unwrap().h, (844.0f32 * 0.6).round());

        // Breakpoint from config decides
        assert!(!PageLayout::compute(PHONE, 300.0, View::Magazine).mobile);
    }

    #[test]
    fn test_panels_follow_view() {
        assert_eq!(RightPanel::for_view(View::Magazine), RightPanel::Empty);
        assert_eq!(RightPanel::for_view(View::Articles), RightPanel::ArticleList);
        assert_eq!(RightPanel::for_view(View::About), RightPanel::About);
        assert_eq!(RightPanel::for_view(View::Contact), RightPanel::Contact);
        assert_eq!(LeftPanel::for_view(View::Magazine), LeftPanel::Magazine3d);
        assert_eq!(LeftPanel::for_view(View::Contact), LeftPanel::Blurb);
    }

    #[test]
    fn test_overlay_column_and_height() {
        let column = overlay_column(DESKTOP);
        assert_eq!(column.w, OVERLAY_MAX_W);
        assert_eq!(column.center_x(), DESKTOP.center_x());

        // Narrow column wraps more, so needs more room
        let wide = overlay_content_height(&ARTICLES[1], 896.0);
        let narrow = overlay_content_height(&ARTICLES[1], 300.0);
        assert!(narrow > wide);
    }

    #[test]
    fn test_page_state_transitions() {
        let mut state = PageState::new();
        state.right_scroll = -120.0;
        state.view_changed();
        assert_eq!(state.right_scroll, 0.0);

        state.overlay_scroll = -50.0;
        state.article_opened(4.0);
        assert_eq!(state.overlay_scroll, 0.0);
        assert_eq!(state.overlay_fade.unwrap().opacity(4.0), 0.0);
        state.article_closed(&ARTICLES[0], 6.0);
        assert!(state.overlay_fade.is_none());
    }

    #[test]
    fn test_closed_overlay_fades_out() {
        let mut state = PageState::new();
        state.article_opened(1.0);
        state.article_closed(&ARTICLES[1], 2.0);

        assert_eq!(state.closing_article(2.2).map(|a| a.id), Some(ARTICLES[1].id));
        let (_, fade) = state.overlay_exit.unwrap();
        assert!(fade.opacity(2.2) < 1.0);
        assert!(fade.offset_y(2.2) < 0.0);

        // Gone once the fade has run
        assert!(state.closing_article(2.5).is_none());
        assert!(state.overlay_exit.is_none());
    }

    #[test]
    fn test_reopening_cancels_exit() {
        let mut state = PageState::new();
        state.article_closed(&ARTICLES[0], 1.0);
        state.article_opened(1.1);
        assert!(state.closing_article(1.2).is_none());
    }
}
