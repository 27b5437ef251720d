//! Command-line front end for omnisort
//!
//! Sorts one file in place (keeping a `.bak` copy by default), writes the
//! sorted lines to stdout, or checks that the file is already sorted.

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;
use std::process;

use omnisort::{
    approach,
    config::{LocaleTag, OutputMode, SortConfig, SortConfigBuilder},
    error::SortResult,
    logging, sort, APPROACHES,
};

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("omnisort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;
    logging::init(config.debug)?;
    sort(&config)
}

fn long_help() -> String {
    let mut help = String::from("Sort approaches:\n");
    for approach in APPROACHES.iter() {
        help.push_str(&format!("\n  {}\n      {}\n", approach.name, approach.description));
        let mut flags = vec!["--reverse"];
        if approach.supports_locale {
            flags.extend(["--locale", "--case-insensitive"]);
        }
        if approach.supports_path_flavor {
            flags.push("--windows");
        }
        help.push_str(&format!("      Accepts: {}\n", flags.join(", ")));
    }
    help
}

fn build_cli() -> Command {
    Command::new("omnisort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort the lines of a file as text, numbers, datetimes, paths or addresses")
        .max_term_width(100)
        .after_long_help(long_help())
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .help("The type of sorting to use")
                .value_name("APPROACH")
                .required(true)
                .value_parser(PossibleValuesParser::new(approach::names())),
        )
        .arg(
            Arg::new("locale")
                .short('l')
                .long("locale")
                .help("The locale to use for sorting; code point order when not given")
                .value_name("CODE"),
        )
        .arg(
            Arg::new("unique")
                .short('u')
                .long("unique")
                .help("Make the file contents unique, or check that they are with --check")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("comment-prefix")
                .long("comment-prefix")
                .help("Lines starting with PREFIX are comments that move with the next line")
                .long_help(
                    "A string that precedes comments. Comment lines starting with this string \
                     are kept directly before the line that follows them in the input. If the \
                     comment is preceded by an empty line, that empty line is kept too, unless \
                     the comment ends up first in the file. With --unique only the comment of \
                     the first kept instance of a repeated line survives. Repeated lines keep \
                     their input order under --reverse too, so that is still the comment of \
                     the first instance in the file.",
                )
                .value_name("PREFIX"),
        )
        .arg(
            Arg::new("case-insensitive")
                .short('c')
                .long("case-insensitive")
                .help("Sort case-insensitively")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("reverse")
                .short('r')
                .long("reverse")
                .help("Sort in reverse order")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("windows")
                .long("windows")
                .help("Parse paths as Windows paths for path sort")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("in-place")
                .short('i')
                .long("in-place")
                .help("Modify the file in place instead of making a backup")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the sorted output to stdout instead of rewriting the file")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Check that the file is sorted; exit status 1 if it is not")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Print debugging info while running")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .help("The file to sort")
                .value_name("FILE")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &ArgMatches) -> SortResult<SortConfig> {
    let mut builder = SortConfigBuilder::new();

    if let Some(name) = matches.get_one::<String>("sort") {
        builder = builder.approach(name);
    }
    if let Some(locale) = matches.get_one::<String>("locale") {
        builder = builder.locale(locale.parse::<LocaleTag>()?);
    }
    if let Some(prefix) = matches.get_one::<String>("comment-prefix") {
        builder = builder.comment_prefix(prefix);
    }
    if let Some(file) = matches.get_one::<PathBuf>("file") {
        builder = builder.input_file(file.clone());
    }

    if matches.get_flag("unique") {
        builder = builder.unique();
    }
    if matches.get_flag("case-insensitive") {
        builder = builder.case_insensitive();
    }
    if matches.get_flag("reverse") {
        builder = builder.reverse();
    }
    if matches.get_flag("windows") {
        builder = builder.windows();
    }

    // Output modes; the builder rejects more than one
    if matches.get_flag("in-place") {
        builder = builder.output(OutputMode::InPlace);
    }
    if matches.get_flag("stdout") {
        builder = builder.output(OutputMode::Stdout);
    }
    if matches.get_flag("check") {
        builder = builder.output(OutputMode::Check);
    }

    builder.debug(matches.get_flag("debug")).build()
}
