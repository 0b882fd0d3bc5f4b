use crate::PitchClass;


/// Interval pattern of the major scale, in semitone steps.
const MAJOR_STEPS: [PitchClass; 7] = [2, 2, 1, 2, 2, 2, 1];


/// Walk the major-scale pattern up from `root`.
///
/// Returns the root, the six inner degrees and the closing octave. Running
/// sums fold back with `% 12` only once they pass 12; a step landing exactly
/// on 12 stays 12, since 12 (`Si`/`B`) is a valid class in the 1-based
/// numbering. Fret arithmetic relies on the same boundary.
pub fn major_scale(root: PitchClass) -> [PitchClass; 8] {
    let mut scale = [root; 8];
    let mut current = root;
    for (i, &step) in MAJOR_STEPS.iter().enumerate() {
        current += step;
        if current > 12 {
            current %= 12;
        }
        scale[i + 1] = current;
    }
    scale
}


/// Root, major third and perfect fifth of a scale.
pub fn triad(scale: &[PitchClass; 8]) -> [PitchClass; 3] {
    [scale[0], scale[2], scale[4]]
}
