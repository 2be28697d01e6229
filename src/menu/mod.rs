//! Navigation tree: items, groups, sections and the root menu.
//!
//! Trees are built per request, serialized to JSON for the presentation
//! layer, then dropped.

pub mod badge;
mod container;
pub mod group;
pub mod item;
pub mod root;
pub mod section;
pub mod state_id;
pub mod user_menu;

pub use badge::{Badge, BadgeSupplier, Visibility};
pub use group::MenuGroup;
pub use item::MenuItem;
pub use root::{ContainerRef, Menu, MenuEntry};
pub use section::{MenuSection, SectionEntry};
pub use user_menu::UserMenu;
