use clap::Parser;
use console::style;
use log::info;

use mdvault::{App, Cli, Config};

fn initialize_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    let config = match cli.data_dir {
        Some(data_dir) => Config::with_data_dir(data_dir),
        None => Config::default(),
    };

    let result = App::new(config).and_then(|mut app| app.run(cli.command));
    if let Err(e) = result {
        eprintln!("{} {}", style("error:").red().bold(), e);
        std::process::exit(1);
    }
}
