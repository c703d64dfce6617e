
mod logger;

use std::fs::{self, File};
use std::io::prelude::*;
use std::process;

use clap::{Arg, App, ArgMatches};
use log::debug;

use codegen::generate_lexer;

// Artifact order, which is also the order outputs are created in.
const OUTPUTS: [(&str, &str); 4] = [
    ("symbol", "Where to write the symbol module"),
    ("terminals", "Where to write the terminals module"),
    ("lexer", "Where to write the lexer module"),
    ("definitions", "Where to write the lexer definitions"),
];

fn path<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    // Every positional argument is required: clap exits before we get here.
    matches.value_of(name).unwrap_or_default()
}

fn io_error(path: &str, e: std::io::Error) -> codegen::Error {
    automata::Error::io(path, e).into()
}

/*
 * Every output file is created before anything gets written, so that
 * a bad path fails without leaving complete-looking outputs behind.
 */
fn run(matches: &ArgMatches) -> codegen::Result<()> {
    let input = path(matches, "input");
    let contents = fs::read_to_string(input).map_err(|e| io_error(input, e))?;

    let (automaton, artifacts) = generate_lexer(input, &contents)?;
    print!("{}", automaton.dump());

    let paths: Vec<&str> = OUTPUTS.iter().map(|(name, _)| path(matches, name)).collect();

    let mut files = Vec::with_capacity(paths.len());
    for p in &paths {
        files.push(File::create(p).map_err(|e| io_error(p, e))?);
    }

    for ((file, p), text) in files.iter_mut().zip(&paths).zip(artifacts.render().iter()) {
        file.write_all(text.as_bytes()).map_err(|e| io_error(p, e))?;
        debug!("wrote {}", p);
    }

    Ok(())
}

fn main() {
    let mut app = App::new("generator")
        .version("0.1.0")
        .about("Generates a maximal-munch tokenizer from a terminal definition file")
        .arg(Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .help("Logs the pipeline stages on stderr"))
        .arg(Arg::with_name("input")
            .help("The terminal definition file")
            .required(true)
            .index(1));

    for (i, &(name, help)) in OUTPUTS.iter().enumerate() {
        app = app.arg(Arg::with_name(name)
            .help(help)
            .required(true)
            .index(i as u64 + 2));
    }

    let matches = app.get_matches();

    if matches.is_present("verbose") {
        logger::init();
    }

    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
