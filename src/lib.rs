//! A small windowed demo built on [cushy](https://crates.io/crates/cushy).
//!
//! The demo window shows a greeting, a Save button, a labeled text field, and
//! a labeled slider. Widgets are declared up front through [`declare`], which
//! gives each window explicit ownership of its widgets and each callback a
//! typed event payload, and then lowered into cushy widgets when the window is
//! opened.

pub mod declare;
mod ui;

use std::io::{self, Write};

pub use declare::{Button, Input, Slider, Text, Widget, WidgetCallback, WidgetEvent, Window};

/// Declares the demo window: a greeting, a Save button that reports every
/// activation on standard output, a text field, and a slider.
#[must_use]
pub fn demo_window() -> Window {
    let mut window = Window::new("Example Window");
    window.push(Text::new("Hello, world"));
    window.push(Button::new("Save").on_click(|event| {
        if let Err(error) = save_clicked(&mut io::stdout(), &event) {
            tracing::error!(%error, "failed to report save");
        }
    }));
    window.push(Input::new("string", "Quick brown fox"));
    window.push(Slider::new("float", 0.273, 1.));
    window
}

/// Handles an activation of the Save button by appending one `Save Clicked`
/// line to `out`.
///
/// The handler is stateless: the output is the same for every event payload,
/// and each invocation appends exactly one line.
pub fn save_clicked<W: Write>(out: &mut W, _event: &WidgetEvent) -> io::Result<()> {
    writeln!(out, "Save Clicked")
}
