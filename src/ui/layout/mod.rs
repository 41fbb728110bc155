// src/ui/layout/mod.rs - Layout system components

mod header;
mod main_layout;
mod sidebar;

pub use header::Header;
pub use main_layout::Layout;
pub use sidebar::Sidebar;
