//! Browser console logging. Installed once from `main` before the app mounts.

use log::Level;

/// Routes the `log` facade to the browser console and panics to `console.error`.
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(Level::Info).is_err() {
        // A logger is already installed (hot reload); keep it.
        log::debug!("console logger already initialized");
    }
}
