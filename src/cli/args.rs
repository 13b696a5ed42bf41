use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

use crate::settings::config_dir;

/// Produce the full version banner including the configuration directory.
fn long_version() -> &'static str {
	let config_dir = config_dir()
		.map(|path| path.display().to_string())
		.unwrap_or_else(|| "unavailable".to_string());

	let mut details = format!("dictpane {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "dictpane",
	version,
	long_version = long_version(),
	about = "Search two JSON dictionaries side by side",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `dictpane` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DICTPANE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "Dictionary shown in the left panel (default: men.json)"
	)]
	pub(crate) left: Option<PathBuf>,
	#[arg(
		long,
		value_name = "FILE",
		help = "Dictionary shown in the right panel (default: women.json)"
	)]
	pub(crate) right: Option<PathBuf>,
	#[arg(
		long = "left-label",
		value_name = "TEXT",
		help = "Title of the left panel (default: Men)"
	)]
	pub(crate) left_label: Option<String>,
	#[arg(
		long = "right-label",
		value_name = "TEXT",
		help = "Title of the right panel (default: Women)"
	)]
	pub(crate) right_label: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the title bar text (default: Difficulty Dictionary)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
}
