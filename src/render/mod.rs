//! Presentation layers for a composed [`PopoverView`](crate::popover::PopoverView).

mod html;
mod tui;

pub use html::render_html;
pub use tui::{PopoverStyle, PopoverWidget, popover_lines, render_plain};
