#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use kopt_cli::extensions::solve::config::{DEFAULT_LOG_EVERY, SolverSettings, create_settings_from_config_file};
use kopt_cli::extensions::solve::formats::get_formats;
use kopt_cli::extensions::solve::interruption::create_interruption_quota;
use kopt_core::prelude::*;
use kopt_core::solver::Checkpoint;
use std::io::BufReader;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const INIT_TOUR_ARG_NAME: &str = "init-tour";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const KMAX_ARG_NAME: &str = "kmax";
const TIME_ARG_NAME: &str = "max-time";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const LOG_ARG_NAME: &str = "log";
const VALIDATE_ARG_NAME: &str = "validate";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Improves a tour of Euclidean Traveling Salesman Problem with k-opt local search")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem type")
                .required(true)
                .value_parser(["plain", "tsplib"])
                .index(1),
        )
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(2))
        .arg(
            Arg::new(INIT_TOUR_ARG_NAME)
                .help("Specifies path to file with initial tour in the problem format")
                .short('i')
                .long(INIT_TOUR_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(KMAX_ARG_NAME)
                .help("Specifies maximum amount of edges replaced by one move")
                .short('k')
                .long(KMAX_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(VALIDATE_ARG_NAME)
                .help("Specifies whether final tour should be validated")
                .long(VALIDATE_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let formats = get_formats();

    // required
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem path is not set")?;
    let problem_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("problem format is not set")?;
    let (problem_reader, tour_reader, tour_writer) =
        formats.get(problem_format.as_str()).ok_or_else(|| format!("unknown format: '{problem_format}'"))?;

    // optional
    let settings = get_settings(matches)?;
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).cloned();
    let tour_name = get_tour_name(problem_path);

    let points = problem_reader.0(open_file(problem_path, "problem")?).map_err(|err| {
        err.with_context(format!("cannot read {problem_format} problem from '{problem_path}'").as_str())
    })?;
    let points = Arc::new(points);
    let lengths = Rc::new(settings.create_lengths(points.clone()));

    let tour = match matches.get_one::<String>(INIT_TOUR_ARG_NAME) {
        Some(path) => {
            let order = tour_reader.0(open_file(path, "initial tour")?)
                .map_err(|err| err.with_context("cannot read initial tour"))?;
            Tour::new(lengths, order.as_slice())?
        }
        None => Tour::identity(lengths)?,
    };

    let quadtree = Quadtree::with_max_depth(points, settings.max_depth)?;
    let finder = Finder::new(&quadtree, settings.finder.clone(), Rc::new(settings.create_random()))?;

    let mut climber = HillClimber::new(finder, settings.hill_climb.clone())
        .with_quota(create_interruption_quota(settings.max_time));

    // checkpoint writes the final tour too
    let has_checkpoint = out_result.is_some() && settings.hill_climb.save_period.is_some();
    if let Some(path) = out_result.clone().filter(|_| has_checkpoint) {
        let tour_writer = tour_writer.clone();
        let tour_name = tour_name.clone();
        let checkpoint: Checkpoint = Box::new(move |tour: &Tour| -> GenericResult<()> {
            let file = create_file(path.as_str(), "checkpoint")?;
            tour_writer.0(tour, tour_name.as_str(), create_write_buffer(Some(file)))
        });

        climber = climber.with_checkpoint(checkpoint);
    }

    let telemetry = settings.create_telemetry(Arc::new(|msg: &str| println!("{msg}")));
    let (tour, _) = Solver::new(climber, settings.perturbation.clone(), telemetry).solve(tour)?;

    if has_checkpoint {
        return Ok(());
    }

    let out_file = out_result.map(|path| create_file(path.as_str(), "out result")).transpose()?;

    tour_writer.0(&tour, tour_name.as_str(), out_writer_func(out_file))
}

/// Reads settings from config file and applies command line overrides.
fn get_settings(matches: &ArgMatches) -> GenericResult<SolverSettings> {
    let mut settings = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => create_settings_from_config_file(BufReader::new(open_file(path, "config")?))
            .map_err(|err| err.with_context("cannot read config"))?,
        None => SolverSettings::default(),
    };

    if let Some(kmax) = parse_int_value::<usize>(matches, KMAX_ARG_NAME, "kmax")? {
        settings.finder.kmax = kmax;
    }

    if let Some(max_time) = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")? {
        settings.max_time = Some(max_time);
    }

    if let Some(seed) = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")? {
        settings.seed = Some(seed);
    }

    if matches.get_flag(LOG_ARG_NAME) && settings.log_every.is_none() {
        settings.log_every = Some(DEFAULT_LOG_EVERY);
    }

    if matches.get_flag(VALIDATE_ARG_NAME) {
        settings.hill_climb.validate_tour = true;
    }

    Ok(settings)
}

fn get_tour_name(problem_path: &str) -> String {
    let stem = Path::new(problem_path).file_stem().and_then(|stem| stem.to_str()).unwrap_or("solution");

    format!("{stem}.tour")
}
