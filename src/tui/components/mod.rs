// Components module - the panels that make up the calculator screen
//
// - Display panel: pending expression and current value
// - Keypad: clickable button grid
// - Status bar: key hints and theme name
// - Logs panel: captured log entries
// - Help overlay and toast notifications draw on top
//
// Each component is a focused, single-responsibility module.

pub mod display_panel;
pub mod help;
pub mod keypad;
pub mod logs_panel;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;
