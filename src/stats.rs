#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub date: String,
    /// `None` when the log has no entries for `date`.
    pub winners: Option<Vec<String>>,
    pub records: usize,
    pub dropped: usize,
}
