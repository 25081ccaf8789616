// SPDX-FileCopyrightText: 2021 - 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command, ValueHint};
use cli_utils::BoxResult;
use const_format::formatcp;

use crate::{
    constants::{DEFAULT_ADDRESS, DEFAULT_PORT},
    Config,
};

pub const A_S_VERSION: char = 'V';
pub const A_L_VERSION: &str = "version";
pub const A_S_QUIET: char = 'q';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_PORT: char = 'p';
pub const A_L_PORT: &str = "port";
pub const A_S_ADDR: char = 'a';
pub const A_L_ADDR: &str = "address";
pub const A_S_BASE_URL: char = 'b';
pub const A_L_BASE_URL: &str = "base-url";
pub const A_S_CATALOG: char = 'c';
pub const A_L_CATALOG: &str = "catalog";

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stderr")
        .long_help("Minimize or suppress output to stderr; stdout is never used by this program, with or without this option set.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_port() -> Arg {
    Arg::new(A_L_PORT)
        .help("the IP port to host this service on")
        .num_args(1)
        .short(A_S_PORT)
        .long(A_L_PORT)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("PORT")
        .default_value(formatcp!("{DEFAULT_PORT}"))
}

fn arg_addr() -> Arg {
    Arg::new(A_L_ADDR)
        .help("the IP address (v4 or v6) to host this service on")
        .num_args(1)
        .short(A_S_ADDR)
        .long(A_L_ADDR)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("IP_ADDRESS")
        .default_value(DEFAULT_ADDRESS)
}

fn arg_base_url() -> Arg {
    Arg::new(A_L_BASE_URL)
        .help("the public URL this service is reachable under")
        .long_help(
            "The public URL this service is reachable under. \
All dataset URIs and links in the served RDF are built from it. \
Defaults to 'http://<address>:<port>/'.",
        )
        .num_args(1)
        .short(A_S_BASE_URL)
        .long(A_L_BASE_URL)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Url)
        .value_name("URL")
}

fn arg_catalog() -> Arg {
    Arg::new(A_L_CATALOG)
        .help("a JSON file containing the licenses and datasets to serve")
        .num_args(1)
        .short(A_S_CATALOG)
        .long(A_L_CATALOG)
        .action(ArgAction::Set)
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
        .value_name("JSON_FILE")
}

#[must_use]
pub fn args_matcher() -> Command {
    command!()
        .about(clap::crate_description!())
        .bin_name("datacat")
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_version())
        .arg(arg_verbose())
        .arg(arg_quiet())
        .arg(arg_port())
        .arg(arg_addr())
        .arg(arg_base_url())
        .arg(arg_catalog())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", crate::VERSION);
    std::process::exit(0);
}

#[derive(Clone, Debug)]
pub struct Args {
    pub quiet: bool,
    pub verbose: bool,
    pub config: Config,
}

fn config_from_matches(args: &ArgMatches) -> BoxResult<Config> {
    let port = args
        .get_one::<String>(A_L_PORT)
        .map(|port_str| port_str.parse())
        .transpose()?
        .unwrap_or(DEFAULT_PORT);
    let ip_addr_str = args
        .get_one::<String>(A_L_ADDR)
        .cloned()
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_owned());
    let ip_addr = IpAddr::from_str(&ip_addr_str)?;
    let addr = SocketAddr::from((ip_addr, port));
    let base_url = args
        .get_one::<String>(A_L_BASE_URL)
        .cloned()
        .unwrap_or_else(|| format!("http://{addr}/"));
    let catalog = args.get_one::<PathBuf>(A_L_CATALOG).cloned();

    Ok(Config {
        addr,
        base_url,
        catalog,
    })
}

/// Parses the command-line arguments of this process.
///
/// # Errors
///
/// If the port or the IP address can not be parsed.
pub fn parse() -> BoxResult<Args> {
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let config = config_from_matches(&args)?;

    Ok(Args {
        quiet,
        verbose,
        config,
    })
}
