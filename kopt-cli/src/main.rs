//! A command line interface to k-opt local search for the *Euclidean Traveling Salesman Problem*.
//!

#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use std::process;

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}

mod cli {
    use super::*;
    use crate::commands::create_write_buffer;
    use crate::commands::solve::{get_solve_app, run_solve};
    use clap::{ArgMatches, Command};

    pub fn get_app() -> Command {
        Command::new("K-opt local search for Euclidean TSP")
            .version(env!("CARGO_PKG_VERSION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .about("A command line interface to k-opt local search for Euclidean Traveling Salesman Problem")
            .subcommand(get_solve_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".into()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
