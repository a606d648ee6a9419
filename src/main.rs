mod formatter;
mod frontend;
mod i18n;
mod network;
mod palette;
mod parser;
mod quake;
mod row;
mod source;

use i18n::I18N_LOADER;

use frontend::cli::QuakeReport;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: QuakeReport = argh::from_env();
    let result = frontend::Settings::from_args(&args).and_then(|settings| match args.command {
        Some(command) => frontend::cli::cli_main(command, &settings),
        None => {
            frontend::tui::tui_main(settings);
            Ok(())
        }
    });

    if let Err(e) = result {
        log::debug!("{:?}", e);
        eprintln!("{}", fl!("error-prefix", error = format!("{:#}", e)));
        std::process::exit(1);
    }
}
