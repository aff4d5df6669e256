//! Action registry
//!
//! Keyboard shortcuts and button tooltips for page actions, with enable
//! conditions evaluated against the current page state.
//!
//! # Example
//! ```ignore
//! let mut registry = ActionRegistry::new();
//!
//! registry.register(Action::new("overlay.dismiss")
//!     .label("Close")
//!     .shortcut(Shortcut::key(KeyCode::Escape))
//!     .enabled_when(|ctx| ctx.has_flag(flags::OVERLAY_OPEN)));
//!
//! for id in registry.process_triggers(&ctx) {
//!     // dispatch on id
//! }
//! ```

use macroquad::logging::warn;
use macroquad::prelude::*;
use std::collections::HashMap;

/// A keyboard shortcut. Page shortcuts are bare keys: held modifiers
/// cancel them so browser/OS combos pass through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub key: KeyCode,
}

impl Shortcut {
    pub fn key(key: KeyCode) -> Self {
        Self { key }
    }

    /// Check if this shortcut was pressed this frame
    pub fn is_pressed(&self) -> bool {
        if !is_key_pressed(self.key) {
            return false;
        }
        let modifier_down = [
            KeyCode::LeftControl,
            KeyCode::RightControl,
            KeyCode::LeftSuper,
            KeyCode::RightSuper,
            KeyCode::LeftAlt,
            KeyCode::RightAlt,
        ]
        .into_iter()
        .any(is_key_down);
        !modifier_down
    }

    /// Format shortcut for display (e.g., "Esc", "2")
    pub fn display(&self) -> &'static str {
        key_name(self.key)
    }
}

/// Get a human-readable name for a key
fn key_name(key: KeyCode) -> &'static str {
    match key {
        KeyCode::Key1 => "1",
        KeyCode::Key2 => "2",
        KeyCode::Key3 => "3",
        KeyCode::Key4 => "4",
        KeyCode::M => "M",
        KeyCode::Escape => "Esc",
        _ => "?",
    }
}

/// Context for checking action enable conditions
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionContext {
    /// App-specific condition flags
    pub flags: u32,
}

impl ActionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag
    pub fn with_flag(mut self, flag: u32) -> Self {
        self.flags |= flag;
        self
    }

    /// Check if a flag is set
    pub fn has_flag(&self, flag: u32) -> bool {
        (self.flags & flag) != 0
    }
}

/// Type alias for enable condition functions
type EnableFn = fn(&ActionContext) -> bool;

fn always_enabled(_: &ActionContext) -> bool {
    true
}

/// A registered action
#[derive(Clone)]
pub struct Action {
    /// Unique identifier (e.g., "view.articles")
    pub id: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub shortcut: Option<Shortcut>,
    /// Tooltip text
    pub status_tip: &'static str,
    enabled_fn: EnableFn,
}

impl Action {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            label: "",
            shortcut: None,
            status_tip: "",
            enabled_fn: always_enabled,
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn status_tip(mut self, tip: &'static str) -> Self {
        self.status_tip = tip;
        self
    }

    pub fn enabled_when(mut self, f: EnableFn) -> Self {
        self.enabled_fn = f;
        self
    }

    pub fn is_enabled(&self, ctx: &ActionContext) -> bool {
        (self.enabled_fn)(ctx)
    }

    /// Check if this action's shortcut is pressed and action is enabled
    pub fn is_triggered(&self, ctx: &ActionContext) -> bool {
        self.is_enabled(ctx) && self.shortcut.as_ref().map_or(false, |s| s.is_pressed())
    }

    /// Get tooltip with shortcut hint
    pub fn tooltip(&self) -> String {
        let text = if self.status_tip.is_empty() { self.label } else { self.status_tip };
        match &self.shortcut {
            Some(shortcut) => format!("{} ({})", text, shortcut.display()),
            None => text.to_string(),
        }
    }
}

/// Central registry for all actions
pub struct ActionRegistry {
    actions: HashMap<&'static str, Action>,
    /// Map from shortcut to action ID (for conflict detection)
    shortcut_map: HashMap<Shortcut, &'static str>,
    /// Registration order, so triggers are processed deterministically
    order: Vec<&'static str>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            shortcut_map: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register an action. An action whose shortcut is already taken by
    /// another action is rejected (returns false).
    pub fn register(&mut self, action: Action) -> bool {
        if let Some(ref shortcut) = action.shortcut {
            if let Some(&existing) = self.shortcut_map.get(shortcut) {
                if existing != action.id {
                    warn!("Shortcut {} of {} already bound to {}", shortcut.display(), action.id, existing);
                    return false;
                }
            }
            self.shortcut_map.insert(shortcut.clone(), action.id);
        }
        if !self.actions.contains_key(action.id) {
            self.order.push(action.id);
        }
        self.actions.insert(action.id, action);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Action> {
        self.actions.get(id)
    }

    /// Get tooltip for an action
    pub fn tooltip(&self, id: &str) -> String {
        self.get(id).map_or_else(String::new, Action::tooltip)
    }

    /// IDs of all actions triggered this frame, in registration order
    pub fn process_triggers(&self, ctx: &ActionContext) -> Vec<&'static str> {
        self.order
            .iter()
            .filter_map(|id| self.actions.get(id))
            .filter(|a| a.is_triggered(ctx))
            .map(|a| a.id)
            .collect()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
