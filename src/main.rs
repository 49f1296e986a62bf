use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use subnet_calculator::cli::{self, Command};
use subnet_calculator::{calculate_with, output};

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let command = cli::parse_args(std::env::args().skip(1)).unwrap_or_else(|e| fail(&*e));
    let args = match command {
        Command::Help => {
            println!("{}", cli::USAGE);
            return;
        }
        Command::Run(args) => args,
    };

    let result = calculate_with(&args.address, args.prefix, args.host_index, &args.options)
        .unwrap_or_else(|e| fail(&e));

    if args.json {
        match output::to_json(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(&*e),
        }
    } else {
        output::print_result(&result);
    }
}

/// Load log4rs.yml (path overridable via SUBNET_CALCULATOR_LOG4RS); fall
/// back to a stderr console appender so the binary runs from anywhere.
/// Logs go to stderr only, stdout stays clean for results.
fn init_logging() {
    let config_file = std::env::var("SUBNET_CALCULATOR_LOG4RS")
        .unwrap_or_else(|_| "log4rs.yml".to_string());
    if log4rs::init_file(&config_file, Default::default()).is_err() {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{d} {h({l})} {t} - {m}{n}")))
            .build();
        let fallback = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
            .expect("Error building fallback log config");
        log4rs::init_config(fallback).expect("Error initializing log4rs");
    }
}

fn fail(err: &dyn Error) -> ! {
    log::error!("{err}");
    eprintln!("{} {err}", "Error:".red());
    std::process::exit(1);
}
