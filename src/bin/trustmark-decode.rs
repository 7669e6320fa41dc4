use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use log::{error, LevelFilter};

use trustmark_decode::{
    backend_available, detect_watermark, DetectOptions, DetectionReport, Error, ModelType,
    DEFAULT_MODELS_DIR,
};

const USAGE: &str = "Usage: trustmark-decode <image_path> [model_type]";
const MODELS_ENV: &str = "TRUSTMARK_MODELS";

#[derive(Parser)]
#[command(
    name = "trustmark-decode",
    about = "Detect TrustMark watermarks in an image and print the result as JSON",
    version,
    after_help = "The result is printed to stdout as a JSON object with the fields\n\
                  success, hasWatermark, watermarkData and error.\n\
                  Detection failures exit 0 with success=false; a missing image\n\
                  path or missing backend exits 1."
)]
struct Cli {
    /// Image to inspect
    image_path: Option<PathBuf>,

    /// TrustMark model type (P or Q)
    #[arg(default_value = "P")]
    model_type: String,

    /// Ignored extra arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<OsString>,

    /// Directory containing the TrustMark ONNX models
    #[arg(long, env = MODELS_ENV, default_value = DEFAULT_MODELS_DIR)]
    models: PathBuf,

    /// Log decoding steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Read `<image_path> [model_type]` straight from argv, for arguments
    /// clap rejects (e.g. an image path that looks like a flag).
    fn from_positionals(args: &[OsString]) -> Self {
        let mut positionals = args.iter().skip(1);
        Self {
            image_path: positionals.next().map(PathBuf::from),
            model_type: positionals.next().map_or_else(
                || ModelType::default().code().to_string(),
                |m| m.to_string_lossy().into_owned(),
            ),
            _rest: positionals.cloned().collect(),
            models: std::env::var_os(MODELS_ENV)
                .map_or_else(|| PathBuf::from(DEFAULT_MODELS_DIR), PathBuf::from),
            verbose: false,
        }
    }
}

/// Parse argv, exiting only for `--help` and `--version`.
fn parse_args(args: Vec<OsString>) -> Cli {
    match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => Cli::from_positionals(&args),
    }
}

fn main() {
    let cli = parse_args(std::env::args_os().collect());
    init_logging(cli.verbose);

    if !backend_available() {
        exit_with(&Error::MissingDependency.to_string());
    }

    let Some(image_path) = cli.image_path else {
        exit_with(USAGE);
    };

    let opts = DetectOptions {
        model_type: cli.model_type,
        models_dir: cli.models,
    };
    let report = detect_watermark(&image_path, &opts);

    match report.to_json_pretty() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("failed to serialize report: {e}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

/// Print a startup error as a single JSON line and exit 1.
fn exit_with(message: &str) -> ! {
    let report = DetectionReport::failure(message);
    match report.to_json_compact() {
        Ok(json) => println!("{json}"),
        Err(e) => error!("failed to serialize report: {e}"),
    }
    process::exit(1);
}
