use crate::music::notes::{Spelling, Translator};
use crate::{Error, PitchClass};


/// Standard six-string tuning, lowest string first: E A D G B E.
pub const TUNING: [PitchClass; 6] = [5, 10, 3, 8, 12, 5];


/// One labelled position on the fretboard.
#[derive(Debug)]
pub struct Cell {
    pub label: String,
    pub in_triad: bool,
}


/// Open-string header plus one row of cells per fret, strings left to right.
#[derive(Debug)]
pub struct FretboardGrid {
    pub header: Vec<Cell>,
    pub frets: Vec<Vec<Cell>>,
}


/// Lay `triad` out across the fretboard.
///
/// `highlight` wraps the label of every triad member; the renderer later
/// treats the wrapped text as opaque. The fret index is reduced `% 12` before
/// the addition, so fret 12 lands on the open-string note again.
pub fn build<H>(
    triad: &[PitchClass; 3],
    tuning: &[PitchClass; 6],
    fret_count: usize,
    translator: &Translator,
    convention: &str,
    spelling: Spelling,
    highlight: H,
) -> Result<FretboardGrid, Error>
where
    H: Fn(&str) -> String,
{
    let cell = |pitch: PitchClass| -> Result<Cell, Error> {
        let name = translator.pitch_to_name(pitch, convention, spelling)?;
        let in_triad = triad.contains(&pitch);
        let label = if in_triad { highlight(name) } else { name.to_string() };
        Ok(Cell { label, in_triad })
    };

    let mut header = Vec::with_capacity(tuning.len());
    for &open in tuning.iter() {
        header.push(cell(open)?);
    }

    let mut frets = Vec::with_capacity(fret_count);
    for f in 1..=fret_count {
        let offset = (f % 12) as PitchClass;
        let mut row = Vec::with_capacity(tuning.len());
        for &open in tuning.iter() {
            let mut candidate = open + offset;
            if candidate > 12 {
                candidate %= 12;
            }
            row.push(cell(candidate)?);
        }
        frets.push(row);
    }

    Ok(FretboardGrid { header, frets })
}
