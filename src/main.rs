#[macro_use]
extern crate serde;
extern crate clap;
extern crate colored;
extern crate exitcode;
extern crate glob;
extern crate serde_json;

use clap::App;
use colored::Colorize;

mod config;
mod entry;
mod generate;

fn main() {
    App::new("rmtpl")
        .version("0.1.0")
        .about(
            "Builds a templates configuration file for the reMarkable 2 \
            from the PNG images in ./template-templates.",
        )
        .get_matches();

    let config = config::GeneratorConfig::default();
    if let Err(err) = generate::run(&config) {
        eprintln!("{}", err.to_string().red());
        std::process::exit(exitcode::IOERR);
    }
}
