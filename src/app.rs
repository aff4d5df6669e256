//! Application state
//!
//! Owns the view controller, the page's scroll/fade state and the 3D
//! surface behind its fault boundary. Everything the reader does arrives
//! here as a `PageAction`, whether it came from a click or a shortcut.

use macroquad::logging::info;
use macroquad::prelude::*;
use crate::boundary::FaultBoundary;
use crate::config::SiteConfig;
use crate::magazine::cover::PendingCover;
use crate::magazine::{MagazineSurface, SurfaceEvent};
use crate::page::{self, LeftPanel, PageAction, PageLayout, PageState, RightPanel};
use crate::ui::{draw_tooltip, Action, ActionContext, ActionRegistry, MouseState, Rect, Shortcut, UiContext};
use crate::view::{View, ViewController};

/// Condition flags for shortcut enable checks
pub mod flags {
    /// An article overlay is showing
    pub const OVERLAY_OPEN: u32 = 1 << 0;
    /// The mobile dropdown is showing
    pub const MENU_OPEN: u32 = 1 << 1;
    /// Window is below the mobile breakpoint
    pub const MOBILE: u32 = 1 << 2;
}

/// Keyboard shortcuts for the page
pub fn create_page_actions() -> ActionRegistry {
    let mut registry = ActionRegistry::new();

    let keys = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];
    for (view, key) in View::ALL.into_iter().zip(keys) {
        registry.register(
            Action::new(view.action_id())
                .label(view.label())
                .shortcut(Shortcut::key(key)),
        );
    }

    registry.register(
        Action::new("overlay.dismiss")
            .label("Close")
            .shortcut(Shortcut::key(KeyCode::Escape))
            .status_tip("Close the article or menu")
            .enabled_when(|ctx| ctx.has_flag(flags::OVERLAY_OPEN) || ctx.has_flag(flags::MENU_OPEN)),
    );

    registry.register(
        Action::new("menu.toggle")
            .label("Menu")
            .shortcut(Shortcut::key(KeyCode::M))
            .enabled_when(|ctx| ctx.has_flag(flags::MOBILE) && !ctx.has_flag(flags::OVERLAY_OPEN)),
    );

    registry
}

pub struct AppState {
    pub views: ViewController,
    pub page: PageState,
    pub ui: UiContext,
    pub magazine: FaultBoundary<MagazineSurface>,
    pub config: SiteConfig,
    pub actions: ActionRegistry,
}

impl AppState {
    pub fn new(config: SiteConfig, cover: PendingCover, now: f64) -> Self {
        let surface = MagazineSurface::new(cover, now, config.orbit_sensitivity);
        Self {
            views: ViewController::new(),
            page: PageState::new(),
            ui: UiContext::new(),
            magazine: FaultBoundary::new("Magazine", surface),
            config,
            actions: create_page_actions(),
        }
    }

    pub fn layout(&self, screen: Rect) -> PageLayout {
        PageLayout::compute(screen, self.config.mobile_breakpoint, self.views.view())
    }

    /// Flags for shortcut enable checks
    pub fn action_context(&self, mobile: bool) -> ActionContext {
        let mut ctx = ActionContext::new();
        if self.views.active_article().is_some() {
            ctx = ctx.with_flag(flags::OVERLAY_OPEN);
        }
        if self.views.menu_open() {
            ctx = ctx.with_flag(flags::MENU_OPEN);
        }
        if mobile {
            ctx = ctx.with_flag(flags::MOBILE);
        }
        ctx
    }

    /// Apply one reader action
    pub fn apply(&mut self, action: PageAction, now: f64) {
        match action {
            PageAction::SelectView(view) => {
                let changed = self.views.select_view(view);
                self.view_selected(view, changed, now);
            }
            PageAction::ChooseFromMenu(view) => {
                let changed = self.views.choose_from_menu(view);
                self.view_selected(view, changed, now);
            }
            PageAction::ToggleMenu => {
                self.views.toggle_menu();
                if self.views.menu_open() {
                    self.page.menu_opened(now);
                }
            }
            PageAction::CloseMenu => self.views.close_menu(),
            PageAction::OpenArticle(article) => {
                info!("Opening article {}: {}", article.id, article.title);
                self.views.open_article(article);
                self.page.article_opened(now);
            }
            PageAction::CloseArticle => {
                if let Some(article) = self.views.active_article() {
                    self.page.article_closed(article, now);
                }
                self.views.close_article();
            }
            PageAction::SendMessage => send_message(&self.config.contact_email),
        }
    }

    fn view_selected(&mut self, view: View, changed: bool, now: f64) {
        if !changed {
            return;
        }
        self.page.view_changed();
        if view == View::Magazine {
            // Coming back to the cover starts its animation over
            if let Some(surface) = self.magazine.get_mut() {
                surface.mount(now);
            }
        }
    }

    /// Map a triggered shortcut to its action
    pub fn shortcut_action(&self, id: &str) -> Option<PageAction> {
        if let Some(view) = View::ALL.into_iter().find(|v| v.action_id() == id) {
            return Some(PageAction::SelectView(view));
        }
        match id {
            "overlay.dismiss" if self.views.active_article().is_some() => Some(PageAction::CloseArticle),
            "overlay.dismiss" => Some(PageAction::CloseMenu),
            "menu.toggle" => Some(PageAction::ToggleMenu),
            _ => None,
        }
    }

    pub fn handle_shortcuts(&mut self, mobile: bool, now: f64) {
        let ctx = self.action_context(mobile);
        for id in self.actions.process_triggers(&ctx) {
            if let Some(action) = self.shortcut_action(id) {
                self.apply(action, now);
            }
        }
    }

    /// Poll the 3D surface and route its input. Errors trip the boundary.
    pub fn update_magazine(&mut self, canvas: Rect, mouse: &MouseState, now: f64) {
        let event = self.magazine.run(|surface| surface.update(&canvas, mouse, now)).flatten();
        if event == Some(SurfaceEvent::MagazineClicked) {
            info!("Magazine clicked, opening articles");
            self.apply(PageAction::SelectView(View::Articles), now);
        }
    }

    /// Draw the whole page for this frame
    pub fn frame(&mut self, screen: Rect, now: f64) {
        let layout = self.layout(screen);
        self.views.fit_to(layout.mobile);

        clear_background(crate::ui::theme::BG_COLOR);

        let overlay_open = self.views.active_article().is_some();
        let menu_open = layout.mobile && self.views.menu_open();
        let mouse_in_menu = menu_open && self.ui.mouse.inside(&layout.menu);

        // Everything under the overlay or the open dropdown is inert
        if overlay_open || mouse_in_menu {
            self.ui.begin_modal();
        }

        match (LeftPanel::for_view(self.views.view()), layout.canvas) {
            (LeftPanel::Magazine3d, Some(canvas)) => {
                let pointer = self.ui.pointer();
                self.update_magazine(canvas, &pointer, now);
                if self.magazine.is_faulted() {
                    page::draw_boundary_fallback(canvas);
                } else if let Some(surface) = self.magazine.get_mut() {
                    surface.draw(canvas, now);
                }
            }
            _ => page::draw_blurb(layout.left),
        }

        page::draw_column_divider(&layout);
        let panel = RightPanel::for_view(self.views.view());
        let mut action = page::draw_right_panel(&mut self.ui, layout.right, panel, &mut self.page);
        page::draw_footer(layout.footer);

        // Header is drawn after main so it paints over scrolled content
        if layout.mobile {
            action = action.or(page::draw_mobile_bar(&mut self.ui, layout.header));
            if menu_open {
                self.ui.end_modal();
                if overlay_open {
                    self.ui.begin_modal();
                }
                let fade = self.page.menu_fade;
                action = action.or(page::draw_mobile_menu(&mut self.ui, layout.menu, &self.views, fade, now));
            }
        } else {
            action = action.or(page::draw_header(&mut self.ui, layout.header, &self.views, &self.actions));
        }

        self.ui.end_modal();

        if let Some(article) = self.views.active_article() {
            action = page::draw_article_overlay(&mut self.ui, screen, article, &mut self.page, now).or(action);
        } else {
            page::draw_closing_overlay(&mut self.ui, screen, &mut self.page, now);
        }

        draw_tooltip(&self.ui);

        if let Some(action) = action {
            self.apply(action, now);
        }
    }
}

/// Open the reader's mail client with the contact address
#[cfg(not(target_arch = "wasm32"))]
fn send_message(email: &str) {
    let link = format!("mailto:{}", email);
    match webbrowser::open(&link) {
        Ok(()) => info!("Opened {}", link),
        Err(e) => macroquad::logging::warn!("Could not open {}: {}", link, e),
    }
}

#[cfg(target_arch = "wasm32")]
fn send_message(email: &str) {
    info!("Send Message: contact {}", email);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::ARTICLES;
    use crate::magazine::cover::{AssetError, CoverImage};

    const SCREEN: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

    fn app_with(cover: PendingCover) -> AppState {
        AppState::new(SiteConfig::default(), cover, 0.0)
    }

    fn ready_app() -> AppState {
        let image = CoverImage { width: 2, height: 2, rgba: vec![200; 16] };
        app_with(PendingCover::ready(Ok(image)))
    }

    fn press(x: f32, y: f32) -> MouseState {
        MouseState { x, y, left_down: true, left_pressed: true, ..Default::default() }
    }

    fn release(x: f32, y: f32) -> MouseState {
        MouseState { x, y, left_released: true, ..Default::default() }
    }

    #[test]
    fn test_starts_on_magazine() {
        let app = ready_app();
        assert_eq!(app.views.view(), View::Magazine);
        assert!(app.views.active_article().is_none());
        assert!(!app.views.menu_open());
        assert_eq!(RightPanel::for_view(app.views.view()), RightPanel::Empty);
    }

    #[test]
    fn test_clicking_magazine_shows_articles() {
        let mut app = ready_app();
        let canvas = app.layout(SCREEN).canvas.unwrap();
        let (x, y) = (canvas.center_x(), canvas.center_y());

        app.update_magazine(canvas, &press(x, y), 1.0);
        assert_eq!(app.views.view(), View::Magazine);
        app.update_magazine(canvas, &release(x, y), 1.0);

        assert_eq!(app.views.view(), View::Articles);
        assert_eq!(RightPanel::for_view(app.views.view()), RightPanel::ArticleList);
        assert!(app.layout(SCREEN).canvas.is_none());
    }

    #[test]
    fn test_dragging_does_not_navigate() {
        let mut app = ready_app();
        let canvas = app.layout(SCREEN).canvas.unwrap();
        let (x, y) = (canvas.center_x(), canvas.center_y());

        app.update_magazine(canvas, &press(x, y), 1.0);
        let drag = MouseState { x: x + 40.0, y, left_down: true, ..Default::default() };
        app.update_magazine(canvas, &drag, 1.0);
        app.update_magazine(canvas, &release(x + 40.0, y), 1.0);
        assert_eq!(app.views.view(), View::Magazine);
    }

    #[test]
    fn test_open_second_article() {
        let mut app = ready_app();
        app.apply(PageAction::SelectView(View::Articles), 1.0);
        app.apply(PageAction::OpenArticle(&ARTICLES[1]), 2.0);

        let article = app.views.active_article().unwrap();
        assert_eq!(article.title, "The Evolution of Digital Art");
        assert!(app.page.overlay_fade.is_some());

        app.apply(PageAction::CloseArticle, 3.0);
        assert!(app.views.active_article().is_none());
        assert_eq!(app.views.view(), View::Articles);
        // The closed overlay lingers only while it fades out
        assert_eq!(app.page.closing_article(3.1).map(|a| a.id), Some(ARTICLES[1].id));
        assert!(app.page.closing_article(3.6).is_none());
    }

    #[test]
    fn test_failed_cover_keeps_nav_working() {
        let failed = PendingCover::ready(Err(AssetError::Read {
            path: "assets/magazine-cover.png".into(),
            message: "not found".into(),
        }));
        let mut app = app_with(failed);
        let canvas = app.layout(SCREEN).canvas.unwrap();

        app.update_magazine(canvas, &MouseState::default(), 0.5);
        assert!(app.magazine.is_faulted());
        assert!(app.magazine.get_mut().is_none());

        // Later frames and clicks on the dead region do nothing
        app.update_magazine(canvas, &press(canvas.center_x(), canvas.center_y()), 0.6);
        assert_eq!(app.views.view(), View::Magazine);

        // Nav is untouched
        app.apply(PageAction::SelectView(View::Contact), 1.0);
        assert_eq!(app.views.view(), View::Contact);
        app.apply(PageAction::SelectView(View::Magazine), 2.0);
        assert_eq!(app.views.view(), View::Magazine);
        assert!(app.magazine.is_faulted());
    }

    #[test]
    fn test_cover_still_loading_keeps_page_live() {
        let (sender, receiver) = std::sync::mpsc::channel();
        let mut app = app_with(PendingCover::from_receiver(receiver));
        let canvas = app.layout(SCREEN).canvas.unwrap();
        let (x, y) = (canvas.center_x(), canvas.center_y());

        // Frames keep running while the fetch is outstanding
        for frame in 0..3 {
            app.update_magazine(canvas, &MouseState::default(), frame as f64 * 0.016);
        }
        assert!(!app.magazine.is_faulted());
        assert!(!app.magazine.get_mut().unwrap().is_ready());

        // Clicks on the placeholder do nothing, nav still works
        app.update_magazine(canvas, &press(x, y), 0.1);
        app.update_magazine(canvas, &release(x, y), 0.1);
        assert_eq!(app.views.view(), View::Magazine);
        app.apply(PageAction::SelectView(View::About), 0.2);
        app.apply(PageAction::SelectView(View::Magazine), 0.3);

        let image = CoverImage { width: 2, height: 2, rgba: vec![200; 16] };
        sender.send(Ok(image)).unwrap();
        app.update_magazine(canvas, &MouseState::default(), 0.4);
        assert!(app.magazine.get_mut().unwrap().is_ready());
    }

    #[test]
    fn test_widening_window_closes_menu() {
        let mut app = ready_app();
        let phone = Rect::new(0.0, 0.0, 390.0, 844.0);
        app.apply(PageAction::ToggleMenu, 0.0);

        app.views.fit_to(app.layout(phone).mobile);
        assert!(app.views.menu_open());
        app.views.fit_to(app.layout(SCREEN).mobile);
        assert!(!app.views.menu_open());
    }

    #[test]
    fn test_menu_actions() {
        let mut app = ready_app();
        app.apply(PageAction::ToggleMenu, 0.0);
        assert!(app.views.menu_open());
        assert!(app.page.menu_fade.is_some());

        app.apply(PageAction::ChooseFromMenu(View::About), 0.1);
        assert!(!app.views.menu_open());
        assert_eq!(app.views.view(), View::About);
    }

    #[test]
    fn test_shortcut_mapping() {
        let mut app = ready_app();
        assert_eq!(app.shortcut_action("view.contact"), Some(PageAction::SelectView(View::Contact)));
        assert_eq!(app.shortcut_action("menu.toggle"), Some(PageAction::ToggleMenu));
        assert_eq!(app.shortcut_action("overlay.dismiss"), Some(PageAction::CloseMenu));
        assert_eq!(app.shortcut_action("nope"), None);

        app.apply(PageAction::OpenArticle(&ARTICLES[0]), 0.0);
        assert_eq!(app.shortcut_action("overlay.dismiss"), Some(PageAction::CloseArticle));
    }

    fn enabled(app: &AppState, id: &str, ctx: &ActionContext) -> bool {
        app.actions.get(id).unwrap().is_enabled(ctx)
    }

    #[test]
    fn test_shortcut_enable_flags() {
        let mut app = ready_app();
        let desktop = app.action_context(false);
        assert!(!enabled(&app, "overlay.dismiss", &desktop));
        assert!(!enabled(&app, "menu.toggle", &desktop));
        assert!(enabled(&app, "view.about", &desktop));
        assert!(enabled(&app, "menu.toggle", &app.action_context(true)));

        app.apply(PageAction::OpenArticle(&ARTICLES[1]), 0.0);
        let ctx = app.action_context(true);
        assert!(enabled(&app, "overlay.dismiss", &ctx));
        assert!(!enabled(&app, "menu.toggle", &ctx));
        assert_eq!(app.actions.tooltip("view.articles"), "Articles (2)");
    }

    #[test]
    fn test_returning_to_magazine_remounts() {
        let mut app = ready_app();
        app.apply(PageAction::SelectView(View::About), 5.0);
        app.apply(PageAction::SelectView(View::Magazine), 9.0);
        assert_eq!(app.magazine.get_mut().unwrap().elapsed(9.0), 0.0);

        // Re-selecting the current view is a no-op
        app.apply(PageAction::SelectView(View::Magazine), 12.0);
        assert_eq!(app.magazine.get_mut().unwrap().elapsed(12.0), 3.0);
    }
}
