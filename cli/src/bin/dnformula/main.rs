#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate serde_derive;

mod samples;
mod settings;

use anyhow::{Context, Result};
use clap::{App, Arg};
use dnformula_core::dnf::{PipelineResult, Stage};
use dnformula_core::FormulaRef;
use log::{debug, info};
use samples::Sample;
use settings::Settings;
use simplelog::{LevelFilter, SimpleLogger, TermLogger};

fn print_dump(node: &FormulaRef, identity: bool) {
    if identity {
        print!("{}", node.dump());
    } else {
        print!("{}", node.dump().without_identity());
    }
}

fn print_result(sample: &Sample, result: &PipelineResult, identity: bool) {
    println!();
    if let Some((Stage::Original, original)) = result.stages().first() {
        println!("{}: {}", sample.name, original);
    }
    for (stage, node) in result.stages() {
        println!("{} ===========================", stage);
        print_dump(node, identity);
    }
}

fn init_logging(debug: bool) {
    let log_filter = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_config = simplelog::ConfigBuilder::new().build();

    if let Err(e) = TermLogger::init(
        log_filter,
        log_config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error, can't initialize the terminal log output: {}.\nWill degrade to a more simple logger", e);
        if let Err(e_simple) = SimpleLogger::init(log_filter, log_config) {
            eprintln!("Simple logging failed too: {}", e_simple);
        }
    }
}

fn main() -> Result<()> {
    let matches = App::new("dnformula")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Transforms sample formulas into Disjunctive Normal Form and prints each step.")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .help("Configuration file in TOML format")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("Enables debug output")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("sample")
                .short("s")
                .long("sample")
                .help("Only run the sample with this name")
                .multiple(true)
                .number_of_values(1)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("list")
                .long("list")
                .help("Lists the available samples")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("normalize-first")
                .long("normalize-first")
                .help("Also normalizes the formula before distributing it")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("no-identity")
                .long("no-identity")
                .help("Omits the node addresses from the output")
                .takes_value(false),
        )
        .get_matches();

    let mut settings =
        Settings::with_file(matches.value_of("config")).context("could not load configuration")?;
    if matches.is_present("debug") {
        settings.logging.debug = true;
    }
    if matches.is_present("normalize-first") {
        settings.pipeline.normalize_before = true;
    }
    if matches.is_present("no-identity") {
        settings.output.identity = false;
    }

    init_logging(settings.logging.debug);
    debug!("{:?}", settings);

    if matches.is_present("list") {
        for s in samples::SAMPLES {
            let formula = s.build()?;
            println!("{}\t{}", s.name, formula);
        }
        return Ok(());
    }

    let selected: Vec<&Sample> = if let Some(names) = matches.values_of("sample") {
        let mut selected = Vec::new();
        for name in names {
            match samples::find(name) {
                Some(s) => selected.push(s),
                None => bail!("unknown sample {}, use --list to show all samples", name),
            }
        }
        selected
    } else {
        samples::SAMPLES.iter().collect()
    };

    info!("Transforming {} sample formula(s)", selected.len());
    for sample in selected {
        let root = sample.build()?;
        root.validate()
            .with_context(|| format!("sample {} is not well-formed", sample.name))?;

        let result = settings.pipeline.run(&root);
        print_result(sample, &result, settings.output.identity);
    }

    Ok(())
}
