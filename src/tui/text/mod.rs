//! Text helpers for display: wrapping, search highlighting, span building.

mod highlight;
mod spans;
mod wrap;


pub(crate) use highlight::highlight_pieces;
pub(crate) use spans::styled_lines;
pub(crate) use wrap::wrap_message;
