//! Team color lookup for Athletic Insider organization badges.
//!
//! A [`ColorTable`] maps organization name variants to colors. The
//! [`NameColorResolver`] built from it turns noisy school names ("  Iowa State
//! University ") into the best known color, trying an exact match, then a
//! longer name extending the input, then a known name contained in the input,
//! and finally the caller's fallback.

pub mod color;
pub mod index;
pub mod normalize;
pub mod resolver;
pub mod table;

pub use color::contrast_text_color;
pub use index::LookupIndex;
pub use normalize::normalize_name;
pub use resolver::{BadgeStyle, ColorMatch, MatchTier, NameColorResolver};
pub use table::{ColorTable, TableError};
