//! Application entry point for the fractal pattern viewer.
//!
//! This binary sets up eframe/egui and delegates all rendering to
//! [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// Initializes logging, configures [`eframe::NativeOptions`] with default
/// settings and launches the main window titled `"Fractal Patterns"`.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop, or
///   if scene generation fails at startup.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Fractal Patterns",
        options,
        Box::new(|_cc| {
            // Generate both scenes up front; they are static afterwards.
            Ok(Box::new(Viewer::new()?))
        }),
    )
}
