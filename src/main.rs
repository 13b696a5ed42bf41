mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::parse_cli;
use dictpane::ui::{self, App, theme};
use dictpane::{Dictionary, logging};
use settings::{DictionarySource, ResolvedConfig};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	logging::initialize();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run(resolved)
}

/// Load both dictionaries and hand them to the UI for the rest of the process.
fn run(config: ResolvedConfig) -> Result<()> {
	let left = load_dictionary(&config.left)?;
	let right = load_dictionary(&config.right)?;
	let missing_file = left.is_none() || right.is_none();
	let (left, right) = (left.unwrap_or_default(), right.unwrap_or_default());

	let app = App::new(&left, &right)
		.with_labels(config.labels())
		.with_theme(config.theme)
		.with_initial_query(config.initial_query)
		.with_log_visible(missing_file);
	ui::run(app)
}

/// Load one side; `None` means its file does not exist.
fn load_dictionary(source: &DictionarySource) -> Result<Option<Dictionary>> {
	Dictionary::try_load(&source.path)
		.with_context(|| format!("failed to load the {} dictionary", source.label))
}
