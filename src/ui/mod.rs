pub mod components;
pub mod keypad;
pub mod layout;
pub mod theme;
