use amara_core::models::AnswerSet;

/// One severity band: an inclusive score interval with its label, client
/// color tag, and advisory text. Bands for an instrument are checked lowest
/// first; the first interval containing the score wins.
#[derive(Debug, Clone, Copy)]
pub struct SeverityBand {
    pub min: u16,
    pub max: u16,
    pub severity: &'static str,
    pub color_tag: &'static str,
    pub description: &'static str,
}

/// Sum of all answer values present. Partial answer sets are allowed (used
/// for live progress display); an empty set scores 0. Values are not
/// re-validated here; that happens at the input boundary.
pub fn compute_score(answers: &AnswerSet) -> u16 {
    answers.values().map(|&v| u16::from(v)).sum()
}
