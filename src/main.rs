use anyhow::Result;
use paste_json_as_code::cli::{build_host, run_init, Cli, Commands, PasteArgs};
use paste_json_as_code::config::Config;
use paste_json_as_code::logging;
use paste_json_as_code::models::SupportedLanguageSet;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Paste(args) => {
            if !run_paste(&args)? {
                std::process::exit(1);
            }
        }
        Commands::Init { output, force } => {
            run_init(&output, force)?;

            println!("Created configuration file: {}", output.display());
            println!("\nEdit the file to configure:");
            println!("  - generator.executable: quicktype executable name or path");
            println!("  - generator.keep_temp_files: keep the JSON input files after each run");
            println!("  - document.languages: extension to language overrides");
        }
        Commands::Languages => {
            for language in SupportedLanguageSet::quicktype().iter() {
                println!("{}", language);
            }
        }
    }

    Ok(())
}

/// Run the paste command, returning whether code was inserted.
///
/// Invocation failures have already been shown to the user; only
/// configuration errors come back as `Err`.
fn run_paste(args: &PasteArgs) -> Result<bool> {
    logging::init(args.verbose);

    let config = Config::load_or_default(args.config.as_deref())?;
    let host = build_host(args, &config);

    Ok(host.workflow().execute().is_ok())
}
