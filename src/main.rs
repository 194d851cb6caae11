use tracing::error;

use pressure_export::{Converter, Settings};

fn main() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    if let Err(err) = run() {
        error!(error = %err, "Conversion failed");
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> pressure_export::Result<()> {
    let settings = Settings::load()?;

    let converter = Converter::new().with_detect_delimiter(settings.detect_delimiter);
    converter.convert(&settings.input_path, &settings.output_path)?;

    Ok(())
}
