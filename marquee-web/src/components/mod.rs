//! Reusable HTML components for the Tailwind UI
//!
//! Components are server-rendered HTML fragments used by the page
//! handlers. All styling uses Tailwind CSS.

pub mod cards;
pub mod layout;

// Re-export main component functions
pub use cards::{category_row, content_card, search_form};
pub use layout::{button, nav_bar, page_header, render_page};
