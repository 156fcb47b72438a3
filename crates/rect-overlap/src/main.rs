//! Reports whether two rotated rectangles overlap.
//!
//! ```text
//! rect-overlap x1 y1 w1 h1 r1 x2 y2 w2 h2 r2
//! ```
//!
//! Exits with `0` when the rectangles are separated, `1` when they overlap, and `2`
//! when the command line is invalid. Set `RUST_LOG=debug` to trace the parsed input.

use std::process::ExitCode;

use report::Outcome;

mod args;
mod report;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let [rect1, rect2] = match args::parse_rectangles(&args) {
        Ok(rects) => rects,
        Err(err) => {
            log::debug!("Rejected command line {:?}: {:?}", args, err);
            eprintln!("error: {}", err);
            print!("{}", report::USAGE);
            return ExitCode::from(report::USAGE_EXIT_CODE);
        }
    };

    log::debug!("Rect1: {}", rect1);
    log::debug!("Rect2: {}", rect2);

    let outcome = Outcome::of(&rect1, &rect2);
    log::debug!("Outcome: {:?}", outcome);

    print!("{}", report::render(outcome, &rect1, &rect2));
    ExitCode::from(outcome.exit_code())
}
