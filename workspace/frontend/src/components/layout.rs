pub mod hero;
pub mod layout;
pub mod tabs;
