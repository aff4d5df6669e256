//! Fault boundary
//!
//! Wraps a component whose frame can fail. The first error is logged, the
//! component is dropped, and from then on the caller draws a static fallback
//! in its place. Nothing outside the boundary is affected.

use macroquad::logging::error;
use std::fmt::Display;

enum Slot<T> {
    Live(T),
    Faulted(String),
}

pub struct FaultBoundary<T> {
    name: &'static str,
    slot: Slot<T>,
}

impl<T> FaultBoundary<T> {
    pub fn new(name: &'static str, inner: T) -> Self {
        Self { name, slot: Slot::Live(inner) }
    }

    /// Run one step of the wrapped component. Returns `None` once faulted
    /// (including on the step that failed).
    pub fn run<R, E: Display>(&mut self, f: impl FnOnce(&mut T) -> Result<R, E>) -> Option<R> {
        let Slot::Live(inner) = &mut self.slot else {
            return None;
        };
        match f(inner) {
            Ok(r) => Some(r),
            Err(e) => {
                error!("{} failed, showing fallback: {}", self.name, e);
                self.slot = Slot::Faulted(e.to_string());
                None
            }
        }
    }

    pub fn is_faulted(&self) -> bool {
        matches!(self.slot, Slot::Faulted(_))
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match &mut self.slot {
            Slot::Live(inner) => Some(inner),
            Slot::Faulted(_) => None,
        }
    }
}
