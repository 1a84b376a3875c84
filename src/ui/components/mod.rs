pub mod check_button;
pub mod clue_panel;
pub mod header;
pub mod letter_grid;
pub mod toast;
pub mod video_overlay;
pub mod virtual_keyboard;
