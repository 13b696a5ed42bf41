//! Route `log` records into the in-UI log console.
//!
//! Records are buffered by `tui-logger` and drained by its widget when the
//! console is drawn, so diagnostics emitted while loading dictionaries survive
//! the switch to the alternate screen.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the logger backend. Safe to call more than once.
pub fn initialize() {
	INIT.call_once(|| {
		if tui_logger::init_logger(LevelFilter::Debug).is_ok() {
			tui_logger::set_default_level(LevelFilter::Debug);
		}
	});
}
