//! Landing page sections, one component per block of the page.

mod features;
mod footer;
mod hero;
mod icons;
mod nav;
mod projects;
mod theme_toggle;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use nav::Nav;
pub use projects::Projects;
pub use theme_toggle::{ThemeFallback, ThemeSlot, ThemeToggle};
