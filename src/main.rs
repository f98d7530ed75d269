use std::{path::PathBuf, process::ExitCode};

use clap::{command, crate_name, Arg, ArgAction};
use log::debug;
use validator::{CheckOptions, Validator};

mod error;
mod front_matter;
mod post;
mod renderer;
mod validator;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let matches = command!()
        .about("Checks a Jekyll post's file name and front matter before publishing")
        .args([
            Arg::new("post")
                .help("Path of the post, e.g. _posts/YYYY-MM-DD-title-slug.md")
                .value_parser(clap::value_parser!(PathBuf)),
            Arg::new("strict")
                .long("strict")
                .help("Require '---' delimiters and ignore field-like lines outside them")
                .action(ArgAction::SetTrue),
        ])
        .get_matches();

    let Some(post) = matches.get_one::<PathBuf>("post") else {
        println!("Usage: {} _posts/YYYY-MM-DD-filename.md", crate_name!());
        return Ok(ExitCode::FAILURE);
    };
    if !post.exists() {
        println!("Error: File '{}' not found.", post.display());
        return Ok(ExitCode::SUCCESS);
    }

    let options = CheckOptions {
        strict: matches.get_flag("strict"),
    };
    debug!("checking {post:?} with {options:?}");

    let validator = Validator::new(options)?;
    let passed = validator.validate(post, &mut std::io::stdout().lock())?;

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
