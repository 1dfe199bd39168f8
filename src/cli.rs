use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::generator::{locate_generator, QuicktypeProcess};
use crate::host::{
    declared_language, ActiveDocumentProvider, ClipboardSource, ConsoleNotifier, FileClipboard,
    FileDocument, PrintDocument, ReaderClipboard, Selection, SystemClipboard, SystemTempStore,
};
use crate::workflow::{Collaborators, InvocationWorkflow};

/// Paste JSON from the clipboard as typed source code
#[derive(Parser, Debug)]
#[command(name = "paste-json-as-code")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate code from clipboard JSON and insert it into a source file
    Paste(PasteArgs),

    /// Initialize a new configuration file
    Init {
        /// Output path for the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(short, long, default_value = "false")]
        force: bool,
    },

    /// List the supported language identifiers
    Languages,
}

#[derive(Args, Debug)]
pub struct PasteArgs {
    /// Source file that receives the generated code
    pub file: PathBuf,

    /// Language identifier of the file (defaults to one derived from its extension)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Where to insert: a byte offset, a START..END byte range to replace, or "end"
    #[arg(short, long, default_value = "end")]
    pub selection: Selection,

    /// Read the JSON from standard input instead of the clipboard
    #[arg(long, conflicts_with = "input")]
    pub stdin: bool,

    /// Read the JSON from a file instead of the clipboard
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print the generated code to stdout instead of editing the file
    #[arg(long)]
    pub print: bool,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Where `paste` reads its JSON from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardChoice {
    System,
    Stdin,
    File(PathBuf),
}

impl PasteArgs {
    pub fn clipboard_choice(&self) -> ClipboardChoice {
        match (&self.input, self.stdin) {
            (Some(path), _) => ClipboardChoice::File(path.clone()),
            (None, true) => ClipboardChoice::Stdin,
            (None, false) => ClipboardChoice::System,
        }
    }

    /// `--lang` if given, otherwise the language declared by the file extension
    pub fn document_language(&self, config: &Config) -> String {
        self.lang
            .clone()
            .unwrap_or_else(|| declared_language(&self.file, &config.document.languages))
    }
}

/// The collaborators the CLI stands in for an editor with
pub struct CliHost {
    clipboard: Box<dyn ClipboardSource>,
    document: Box<dyn ActiveDocumentProvider>,
    temp_files: SystemTempStore,
    generator_path: PathBuf,
}

impl CliHost {
    pub fn clipboard(&self) -> &dyn ClipboardSource {
        self.clipboard.as_ref()
    }

    pub fn document(&self) -> &dyn ActiveDocumentProvider {
        self.document.as_ref()
    }

    pub fn generator_path(&self) -> &Path {
        &self.generator_path
    }

    pub fn workflow(&self) -> InvocationWorkflow<'_> {
        let host = Collaborators {
            clipboard: self.clipboard.as_ref(),
            document: self.document.as_ref(),
            temp_files: &self.temp_files,
            generator: &QuicktypeProcess,
            notifier: &ConsoleNotifier,
        };
        InvocationWorkflow::new(host, self.generator_path.clone())
    }
}

/// Wire up the CLI host for one `paste` invocation
pub fn build_host(args: &PasteArgs, config: &Config) -> CliHost {
    let language = args.document_language(config);

    let clipboard: Box<dyn ClipboardSource> = match args.clipboard_choice() {
        ClipboardChoice::File(path) => Box::new(FileClipboard::new(path)),
        ClipboardChoice::Stdin => Box::new(ReaderClipboard::stdin()),
        ClipboardChoice::System => Box::new(SystemClipboard::new()),
    };
    let document: Box<dyn ActiveDocumentProvider> = if args.print {
        Box::new(PrintDocument::stdout(args.file.clone(), language))
    } else {
        Box::new(FileDocument::new(args.file.clone(), language, args.selection))
    };

    CliHost {
        clipboard,
        document,
        temp_files: SystemTempStore::new(config.generator.keep_temp_files),
        generator_path: locate_generator(&config.generator.executable),
    }
}

/// Write the default configuration to `output_path`, refusing to overwrite without `force`
pub fn run_init(output_path: &Path, force: bool) -> Result<()> {
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    Config::default_config().save(output_path)
}
