use clap::Parser;
use cruciverbal_cli::{App, Args, Settings, logger, preferences};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logger::init_logger(args.verbose);

    let settings = Settings::new(&args, preferences::load_preferences());
    tracing::debug!("Settings: {:?}", settings);

    let mut app = App::new(std::io::stdin().lock(), std::io::stdout().lock(), settings);
    app.run(args.puzzle)?;
    Ok(())
}
