//! UI components.

pub mod error_display;
pub mod header;
pub mod product_card;
pub mod product_grid;
pub mod search_bar;
pub mod search_input;
pub mod search_results;
pub mod skeleton;

pub use error_display::ErrorDisplay;
pub use header::Header;
pub use product_card::ProductCard;
pub use product_grid::{GridState, ProductGrid};
pub use search_bar::SearchBar;
pub use skeleton::{ProductGridSkeleton, SKELETON_COUNT};
