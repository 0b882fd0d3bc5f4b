use std::env;

use anyhow::{anyhow, Result};
use crossterm::style::Stylize;

use fretchords::fretboard::{self, TUNING};
use fretchords::music::notes::{Spelling, Translator};
use fretchords::music::scales;
use fretchords::render::{self, Orientation};


fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: fretchords-show <note> [convention] [frets] [orientation]");
        std::process::exit(1);
    }

    let note = args[1].as_str();
    let convention = args.get(2).map(String::as_str).unwrap_or("neolatin");
    let fret_count = match args.get(3) {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| anyhow!("invalid fret count '{}' (expected a positive integer)", raw))?,
        None => 5,
    };
    let orientation = args
        .get(4)
        .map(String::as_str)
        .unwrap_or("vertical")
        .parse::<Orientation>()?;

    let translator = Translator::with_standard_conventions();
    let root = translator.name_to_pitch(note, convention)?;
    let scale = scales::major_scale(root);
    let triad = scales::triad(&scale);

    let grid = fretboard::build(
        &triad,
        &TUNING,
        fret_count,
        &translator,
        convention,
        Spelling::Diesis,
        |label| format!("{}", label.blue()),
    )?;
    print!("{}", render::render(&grid, orientation));

    Ok(())
}
