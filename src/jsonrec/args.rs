use clap::Parser;
use jsonrec::operation::Flag;
use jsonrec::request::Arguments;
use std::ffi::OsString;

/// Switches that take no value and may also be spelled with one dash.
const SWITCHES: &[&str] = &["verbose", "help", "version"];

#[derive(Parser, Debug)]
#[command(
    name = "jsonrec",
    bin_name = "jsonrec",
    version,
    about = "Manage records stored as a JSON array in a single file",
    long_about = None,
    args_override_self = true
)]
pub struct Cli {
    /// Possible values are 'list', 'add', 'findById', 'remove'
    #[arg(long = "operation", value_name = "OPERATION", allow_hyphen_values = true)]
    pub operation: Option<String>,

    /// Path to the backing JSON file
    #[arg(
        long = "fileName",
        value_name = "PATH",
        env = "JSONREC_FILE",
        allow_hyphen_values = true
    )]
    pub file_name: Option<String>,

    /// Record to add, as JSON (e.g. '{"id":"1","email":"a@b.com","age":30}')
    #[arg(long = "item", value_name = "JSON", allow_hyphen_values = true)]
    pub item: Option<String>,

    /// Record id to find or remove
    #[arg(long = "id", value_name = "ID", allow_hyphen_values = true)]
    pub id: Option<String>,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn into_arguments(self) -> Arguments {
        Arguments::new(self.operation, self.file_name, self.item, self.id)
    }
}

/// Rewrite single-dash long flags (`-operation list`, `-id=3`) into the
/// double-dash form clap parses.
///
/// The token after a value-taking flag is its value and is never rewritten,
/// so `-id -fileName` sets the id to `-fileName`. Rewriting stops at `--` or
/// at the first token that is not a flag.
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    let mut expect_value = false;
    let mut done = false;

    for arg in args {
        if done || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let text = match arg.to_str() {
            Some(text) => text.to_owned(),
            None => {
                done = true;
                out.push(arg);
                continue;
            }
        };

        if text == "--" || !text.starts_with('-') {
            done = true;
            out.push(arg);
            continue;
        }

        let body = text.trim_start_matches('-');
        let (name, has_inline_value) = match body.split_once('=') {
            Some((name, _)) => (name, true),
            None => (body, false),
        };

        if Flag::for_name(name).is_some() {
            expect_value = !has_inline_value;
            out.push(OsString::from(format!("--{}", body)));
        } else if SWITCHES.contains(&name) {
            out.push(OsString::from(format!("--{}", body)));
        } else {
            out.push(arg);
        }
    }

    out
}
