/// Share of completed files as an integer percentage, rounded to the
/// nearest whole number. A project with nothing to process counts as
/// fully complete.
pub fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}
