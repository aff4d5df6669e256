//! View controller
//!
//! Fixed set of mutually exclusive panels plus an orthogonal article overlay.
//! Every transition is total: any view can be selected from any other, and
//! the overlay can sit on top of whichever view is active.

use crate::articles::Article;

/// The top-level panels (one nav entry each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Magazine,
    Articles,
    About,
    Contact,
}

impl View {
    pub const ALL: [View; 4] = [View::Magazine, View::Articles, View::About, View::Contact];

    /// Get the nav label for this view
    pub fn label(&self) -> &'static str {
        match self {
            View::Magazine => "Magazine",
            View::Articles => "Articles",
            View::About => "About",
            View::Contact => "Contact",
        }
    }

    /// Action id used for the keyboard shortcut of this view
    pub fn action_id(&self) -> &'static str {
        match self {
            View::Magazine => "view.magazine",
            View::Articles => "view.articles",
            View::About => "view.about",
            View::Contact => "view.contact",
        }
    }
}

/// Current view, active article and mobile menu state
#[derive(Debug)]
pub struct ViewController {
    view: View,
    active_article: Option<&'static Article>,
    menu_open: bool,
}

impl ViewController {
    /// Start on the magazine with nothing open
    pub fn new() -> Self {
        Self {
            view: View::Magazine,
            active_article: None,
            menu_open: false,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn active_article(&self) -> Option<&'static Article> {
        self.active_article
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether `view` is the one currently shown (nav highlight)
    pub fn is_active(&self, view: View) -> bool {
        self.view == view
    }

    /// Switch panels. Returns true if the view actually changed.
    pub fn select_view(&mut self, view: View) -> bool {
        let changed = self.view != view;
        self.view = view;
        changed
    }

    /// Show an article in the overlay
    pub fn open_article(&mut self, article: &'static Article) {
        self.active_article = Some(article);
    }

    /// Hide the overlay, leaving the view underneath untouched
    pub fn close_article(&mut self) {
        self.active_article = None;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// The menu only exists at mobile widths; widening past the breakpoint closes it
    pub fn fit_to(&mut self, mobile: bool) {
        if !mobile {
            self.menu_open = false;
        }
    }

    /// Select a view from the mobile menu (closes the menu)
    pub fn choose_from_menu(&mut self, view: View) -> bool {
        self.menu_open = false;
        self.select_view(view)
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::ARTICLES;

    #[test]
    fn test_starts_on_magazine() {
        let vc = ViewController::new();
        assert_eq!(vc.view(), View::Magazine);
        assert!(vc.active_article().is_none());
        assert!(!vc.menu_open());
    }

    #[test]
    fn test_select_every_view() {
        let mut vc = ViewController::new();
        for from in View::ALL {
            for to in View::ALL {
                vc.select_view(from);
                vc.select_view(to);
                assert_eq!(vc.view(), to);
                // Idempotent
                assert!(!vc.select_view(to));
                assert_eq!(vc.view(), to);
            }
        }
    }

    #[test]
    fn test_open_close_keeps_view() {
        let mut vc = ViewController::new();
        vc.select_view(View::About);
        vc.open_article(&ARTICLES[0]);
        assert_eq!(vc.active_article().map(|a| a.id), Some(1));
        assert_eq!(vc.view(), View::About);

        vc.close_article();
        assert!(vc.active_article().is_none());
        assert_eq!(vc.view(), View::About);
    }

    #[test]
    fn test_second_article_title() {
        let mut vc = ViewController::new();
        vc.select_view(View::Articles);
        vc.open_article(&ARTICLES[1]);
        assert_eq!(
            vc.active_article().map(|a| a.title),
            Some("The Evolution of Digital Art")
        );
    }

    #[test]
    fn test_menu_choice_closes_menu() {
        let mut vc = ViewController::new();
        vc.toggle_menu();
        assert!(vc.menu_open());
        assert!(vc.choose_from_menu(View::Contact));
        assert!(!vc.menu_open());
        assert!(vc.is_active(View::Contact));
    }

    #[test]
    fn test_widening_closes_menu() {
        let mut vc = ViewController::new();
        vc.toggle_menu();
        vc.fit_to(true);
        assert!(vc.menu_open());

        vc.fit_to(false);
        assert!(!vc.menu_open());
        assert!(vc.is_active(View::Magazine));

        // Narrowing again does not reopen it
        vc.fit_to(true);
        assert!(!vc.menu_open());
    }

    #[test]
    fn test_labels_and_action_ids() {
        let labels: Vec<_> = View::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(labels, ["Magazine", "Articles", "About", "Contact"]);
        assert_eq!(View::Contact.action_id(), "view.contact");
    }
}
