//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear form shortcut display
#[cfg(target_os = "macos")]
pub const CLEAR_SHORTCUT: &str = "Cmd+L";

#[cfg(not(target_os = "macos"))]
pub const CLEAR_SHORTCUT: &str = "Ctrl+L";
