//! Command-line interface.

use clap::error::ErrorKind as ClapErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

const WORKFLOW: &str = "\
Workflow:
  1. In the web file browser, open the month's folder of the image repository,
     e.g. https://github.com/modem-56k/img/tree/main/2025/10
  2. Expand every day folder so all image files are listed in the tree.
  3. Open the developer tools (F12), find the tree's <li> element in the
     Elements panel, right-click > Copy > Copy outerHTML, and save it to a
     text file such as outerhtml.txt.
  4. Run: folio outerhtml.txt
  5. The manifest is written to data/<YYYYMM>.json (e.g. data/202510.json).
     An existing manifest for the same month is overwritten, so re-running
     after adding photos updates it.
  6. Upload the manifest to the gallery's data/ directory.";

#[derive(Debug, Parser)]
#[command(
    name = "folio",
    version,
    about = "Generate a monthly photo gallery manifest from a file-tree HTML snapshot",
    arg_required_else_help = true,
    after_help = WORKFLOW
)]
pub struct Cli {
    /// Text file holding the copied file-tree HTML
    pub input: PathBuf,
    /// Configuration file (default: ./folio.toml, then the user config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Directory to write the manifest to (default: data)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
    /// Increase log verbosity; repeat for more (ignored when RUST_LOG is set)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Usage text for a failed parse when the operator got the arity wrong: clap's
/// own error followed by the full help, so the workflow is always in view.
/// `None` for anything clap should report on its own (help, version, bad
/// values).
pub fn arity_usage(err: &clap::Error) -> Option<String> {
    match err.kind() {
        ClapErrorKind::UnknownArgument | ClapErrorKind::TooManyValues => {
            Some(format!("{}\n{}", err.render(), Cli::command().render_long_help()))
        },
        _ => None,
    }
}
