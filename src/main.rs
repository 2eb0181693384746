use anyhow::{Context, Result};
use clap::Parser;
use mapvi::{app::App, cli::Cli, config::Config, input::InputPump, logging, ui::TerminalSession, window::MappedWindow};
use tracing::info;

fn main() {
	if let Err(err) = run() {
		eprintln!("{:#}", err);
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();
	let config = Config::load(cli.config.as_deref()).context("load config failed")?;
	logging::init_logging(&config.log_filter).context("initialize logging failed")?;

	let window = MappedWindow::open(&cli.path, cli.offset, cli.size).context("map file window failed")?;
	logging::log_window(&cli.path, cli.offset, cli.size);
	let title = format!("mapvi {} @0x{:x}", cli.path.display(), cli.offset);
	let mut app = App::new(window, cli.offset, &config);

	let mut session = TerminalSession::enter(&title).context("enter terminal session failed")?;
	let mut input = InputPump::start();
	app.run(&mut input, &mut session).context("run editor failed")?;
	drop(session);
	info!("window released, exiting");
	Ok(())
}
