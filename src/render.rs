use std::str::FromStr;

use crate::fretboard::{Cell, FretboardGrid};
use crate::Error;


#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}


impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "vertical" => Ok(Orientation::Vertical),
            "horizontal" => Ok(Orientation::Horizontal),
            other => Err(Error::InvalidOrientation(other.to_string())),
        }
    }
}


pub fn render(grid: &FretboardGrid, orientation: Orientation) -> String {
    match orientation {
        Orientation::Vertical => render_vertical(grid),
        Orientation::Horizontal => render_horizontal(grid),
    }
}


/// Border rule: `left`, then `count` dashed segments each closed by `junction`.
fn rule(left: char, junction: char, segment: usize, count: usize) -> String {
    let mut line = String::new();
    line.push(left);
    for _ in 0..count {
        for _ in 0..segment {
            line.push('─');
        }
        line.push(junction);
    }
    line
}


fn row_line(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|c| c.label.as_str())
        .collect::<Vec<&str>>()
        .join("\t")
}


/// Strings as columns, frets as rows.
fn render_vertical(grid: &FretboardGrid) -> String {
    let vline = grid
        .header
        .iter()
        .map(|_| "|")
        .collect::<Vec<&str>>()
        .join("\t");

    let mut out = String::new();
    out.push_str(&row_line(&grid.header));
    out.push('\n');
    out.push_str(&rule('┌', '┬', 7, 5));
    out.push('\n');
    for (i, row) in grid.frets.iter().enumerate() {
        out.push_str(&vline);
        out.push('\n');
        out.push_str(&row_line(row));
        out.push('\n');
        out.push_str(&vline);
        out.push('\n');
        let line = if i + 1 < grid.frets.len() {
            rule('├', '┼', 7, 5)
        } else {
            rule('└', '┴', 7, 5)
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}


/// Strings as rows, frets as columns.
fn render_horizontal(grid: &FretboardGrid) -> String {
    let fret_count = grid.frets.len();

    let mut out = String::new();
    out.push('\t');
    out.push_str(&rule('┌', '┬', 15, fret_count));
    out.push('\n');
    for (i, open) in grid.header.iter().enumerate() {
        let mut cells = Vec::with_capacity(fret_count + 1);
        cells.push(open.label.as_str());
        for row in grid.frets.iter() {
            cells.push(row[i].label.as_str());
        }
        out.push_str(&cells.join("\t│\t"));
        out.push_str(" \t│\n");
        let line = if i + 1 < grid.header.len() {
            rule('├', '┼', 15, fret_count)
        } else {
            rule('└', '┴', 15, fret_count)
        };
        out.push('\t');
        out.push_str(&line);
        out.push('\n');
    }
    out
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::fretboard::{build, TUNING};
    use crate::music::notes::{Spelling, Translator};
    use crate::music::scales::{major_scale, triad};

    fn mark(label: &str) -> String {
        format!("[{}]", label)
    }

    fn c_major_grid(fret_count: usize) -> FretboardGrid {
        let translator = Translator::with_standard_conventions();
        let t = triad(&major_scale(1));
        build(&t, &TUNING, fret_count, &translator, "english", Spelling::Diesis, mark).unwrap()
    }

    #[test]
    fn test_orientation_from_str() {
        assert_eq!("vertical".parse::<Orientation>().unwrap(), Orientation::Vertical);
        assert_eq!("horizontal".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        assert_eq!(
            "diagonal".parse::<Orientation>(),
            Err(Error::InvalidOrientation("diagonal".to_string())),
        );
    }

    #[test]
    fn test_vertical_layout() {
        let out = render(&c_major_grid(2), Orientation::Vertical);
        let lines: Vec<&str> = out.lines().collect();

        // header, top rule, then four lines per fret
        assert_eq!(lines.len(), 2 + 4 * 2);
        assert_eq!(lines[0], "[E]\tA\tD\t[G]\tB\t[E]");
        assert_eq!(lines[1], "┌───────┬───────┬───────┬───────┬───────┬");
        assert_eq!(lines[2], "|\t|\t|\t|\t|\t|");
        assert_eq!(lines[3], "F\tA#\tD#\tG#\t[C]\tF");
        assert_eq!(lines[5], "├───────┼───────┼───────┼───────┼───────┼");
        assert_eq!(lines[9], "└───────┴───────┴───────┴───────┴───────┴");
    }

    #[test]
    fn test_horizontal_layout() {
        let out = render(&c_major_grid(3), Orientation::Horizontal);
        let lines: Vec<&str> = out.lines().collect();

        // top rule, then two lines per string
        assert_eq!(lines.len(), 1 + 2 * 6);
        assert_eq!(lines[0], "\t┌───────────────┬───────────────┬───────────────┬");
        assert_eq!(lines[1], "[E]\t│\tF\t│\tF#\t│\t[G] \t│");
        assert!(lines[2].starts_with("\t├"));
        assert!(lines[12].starts_with("\t└───────────────┴"));
    }

    #[test]
    fn test_zero_frets_vertical() {
        let out = render(&c_major_grid(0), Orientation::Vertical);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
    }
}
