use crate::{Error, PitchClass};


/// Preferred spelling for the five altered pitch classes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Spelling {
    Diesis,
    Bemolle,
}


/// A complete note-naming table for one notation system.
///
/// Entries are indexed by pitch class, `Do`/`C` = 1 through `Si`/`B` = 12.
/// Natural classes carry a single name; altered classes carry the sharp
/// spelling first and the flat spelling second.
pub struct Convention {
    key: &'static str,
    names: [&'static [&'static str]; 12],
}


impl Convention {
    pub fn new(key: &'static str, names: [&'static [&'static str]; 12]) -> Self {
        Self { key, names }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn neolatin() -> Self {
        Self::new("neolatin", [
            &["Do"],
            &["Do#", "Reb"],
            &["Re"],
            &["Re#", "Mib"],
            &["Mi"],
            &["Fa"],
            &["Fa#", "Solb"],
            &["Sol"],
            &["Sol#", "Lab"],
            &["La"],
            &["La#", "Sib"],
            &["Si"],
        ])
    }

    pub fn english() -> Self {
        Self::new("english", [
            &["C"],
            &["C#", "Db"],
            &["D"],
            &["D#", "Eb"],
            &["E"],
            &["F"],
            &["F#", "Gb"],
            &["G"],
            &["G#", "Ab"],
            &["A"],
            &["A#", "Bb"],
            &["B"],
        ])
    }
}


/// Converts between pitch classes and display names.
///
/// The convention tables are handed in at construction; there is no ambient
/// global table.
pub struct Translator {
    conventions: Vec<Convention>,
}


impl Translator {
    pub fn new(conventions: Vec<Convention>) -> Self {
        Self { conventions }
    }

    /// The two conventions shipped with the tool.
    pub fn with_standard_conventions() -> Self {
        Self::new(vec![Convention::neolatin(), Convention::english()])
    }

    fn convention(&self, key: &str) -> Result<&Convention, Error> {
        self.conventions
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| Error::UnknownConvention {
                name: key.to_string(),
                known: self
                    .conventions
                    .iter()
                    .map(|c| c.key)
                    .collect::<Vec<&str>>()
                    .join(", "),
            })
    }

    /// Exact-match lookup of a display name within one convention.
    pub fn name_to_pitch(&self, name: &str, convention: &str) -> Result<PitchClass, Error> {
        let table = self.convention(convention)?;
        for (i, entry) in table.names.iter().enumerate() {
            if entry.iter().any(|n| *n == name) {
                return Ok(i as PitchClass + 1);
            }
        }
        Err(Error::UnknownNoteName {
            name: name.to_string(),
            convention: convention.to_string(),
        })
    }

    /// Display name for a pitch class.
    ///
    /// Accepts raw transposition sums: anything above 12 is folded back into
    /// range first. Exactly 12 is `Si`/`B`, not an overflow. Classes with a
    /// single name ignore the spelling preference.
    pub fn pitch_to_name(
        &self,
        pitch: PitchClass,
        convention: &str,
        spelling: Spelling,
    ) -> Result<&'static str, Error> {
        let table = self.convention(convention)?;
        let pitch = if pitch > 12 { pitch % 12 } else { pitch };
        let entry = table.names[pitch as usize - 1];
        match spelling {
            Spelling::Bemolle if entry.len() > 1 => Ok(entry[1]),
            _ => Ok(entry[0]),
        }
    }
}
