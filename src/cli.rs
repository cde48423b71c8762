use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(
    name = "feed-fetcher",
    version,
    about = "Fetch a syndication feed and print its entries"
)]
pub struct Cli {
    #[arg(help = "Absolute URL of the feed (http, https or file)")]
    pub url: String,
}

/// Parses the full argv (program name first).
///
/// Anything other than exactly one argument is rejected before clap sees it,
/// so `--help` alongside another argument is still a usage error.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let given = args.len().saturating_sub(1);
    if given != 1 {
        return Err(Cli::command().error(
            ErrorKind::WrongNumberOfValues,
            format!("expected exactly one <URL> argument, got {given}"),
        ));
    }
    Cli::try_parse_from(args)
}
