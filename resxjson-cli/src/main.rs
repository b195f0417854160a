use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;

use resxjson::{ConverterOptions, KeyCasing, OutputFormat, OverwriteMode, Severity, convert};

const EXAMPLES: &str = "\
EXAMPLES:
  resxjson -i ./Server -d ./dist/locales -c camel -f
      Convert every resx bundle under ./Server into AMD modules in
      ./dist/locales, one js file per bundle, camel-cased keys.

  resxjson -i Messages.resx -i Messages.nl.resx -i Messages.de.resx -o ./client/resources.js
      Merge the given files into a single bundle named 'resources'.

  resxjson -i ./Server -d ./content/locales --format i18next --fallback en
      Produce i18next JSON dictionaries, base resources under 'en/'.
";

/// Convert .resx resource bundles into RequireJS i18n modules or i18next
/// JSON dictionaries.
#[derive(Parser, Debug)]
#[command(author, version, about, after_help = EXAMPLES)]
struct Args {
    /// Path to a .resx file or a directory containing .resx files
    /// (repeatable; defaults to the current directory)
    #[arg(short, long = "input")]
    input: Vec<PathBuf>,

    /// Directory where result files are placed, one output per bundle
    #[arg(short = 'd', long = "output-dir", conflicts_with = "output_file")]
    output_dir: Option<PathBuf>,

    /// Single output file; multiple bundles are merged into it
    #[arg(short = 'o', long = "output-file")]
    output_file: Option<PathBuf>,

    /// Output flavor
    #[arg(long = "format", value_enum, default_value_t = FormatArg::Requirejs)]
    format: FormatArg,

    /// Culture subdirectory that receives the base resources under i18next
    #[arg(long = "fallback", default_value = "dev")]
    fallback: String,

    /// Resource key casing
    #[arg(short = 'c', long = "case", value_enum, default_value_t = CaseArg::Keep)]
    case: CaseArg,

    /// Overwrite existing read-only files
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Search input directories recursively
    #[arg(short = 'r', long = "recursive")]
    recursive: bool,

    /// Print the run log as a JSON array instead of colored text
    #[arg(long = "log-json")]
    log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// AMD modules suitable for the RequireJS i18n plugin
    Requirejs,
    /// JSON dictionary files usable with i18next
    I18next,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Requirejs => OutputFormat::RequireJs,
            FormatArg::I18next => OutputFormat::I18next,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CaseArg {
    /// Do not change key names
    Keep,
    /// 'SomeMsg' -> 'someMsg'
    Camel,
    /// 'SomeMsg' -> 'somemsg'
    Lower,
}

impl From<CaseArg> for KeyCasing {
    fn from(value: CaseArg) -> Self {
        match value {
            CaseArg::Keep => KeyCasing::Keep,
            CaseArg::Camel => KeyCasing::Camel,
            CaseArg::Lower => KeyCasing::Lower,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let log_json = args.log_json;

    let options = match build_options(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{} {}", "ERROR:".red(), message.as_str().red());
            return ExitCode::from(2);
        }
    };

    let log = convert(&options);

    if log_json {
        match serde_json::to_string_pretty(&log) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("{} could not serialize the log: {}", "ERROR:".red(), e);
                return ExitCode::from(1);
            }
        }
        return ExitCode::SUCCESS;
    }

    for item in &log {
        match item.severity {
            Severity::Trace => println!("{}", item.message.as_str().dark_grey()),
            Severity::Info => println!("{}", item.message),
            Severity::Warning => println!("{}", item.message.as_str().yellow()),
            Severity::Error => eprintln!("{}", item.message.as_str().dark_red()),
        }
    }

    // Partial conversion failures are reported in the log, not the exit code.
    ExitCode::SUCCESS
}

/// Pre-flight: resolve and classify inputs, apply defaulting rules. Errors
/// here are fatal, before the converter runs.
fn build_options(args: Args) -> Result<ConverterOptions, String> {
    let cwd = std::env::current_dir()
        .map_err(|e| format!("could not determine the current directory: {}", e))?;

    let mut options = ConverterOptions::default();

    if args.input.is_empty() {
        options.input_folders.push(cwd.clone());
    }
    for input in args.input {
        let path = if input.is_absolute() {
            input
        } else {
            cwd.join(input)
        };
        if path.is_dir() {
            options.input_folders.push(path);
        } else if path.is_file() {
            options.input_files.push(path);
        } else {
            return Err(format!(
                "input path '{}' doesn't relate to a file or a directory",
                path.display()
            ));
        }
    }

    options.recursive = args.recursive;
    options.output_file = args.output_file;
    options.output_folder = if args.output_dir.is_none() && options.output_file.is_none() {
        Some(cwd)
    } else {
        args.output_dir
    };
    options.output_format = args.format.into();
    options.fallback_culture = args.fallback;
    options.casing = args.case.into();
    options.overwrite = if args.force {
        OverwriteMode::Force
    } else {
        OverwriteMode::Skip
    };

    Ok(options)
}
