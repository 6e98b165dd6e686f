use seoaudit_types::Finding;

/// Accumulates the output of one audit run.
///
/// Findings, critical error text and recommendations are recorded side by
/// side; [`Collector::push`] returns an [`Annotation`] so a rule attaches its
/// advice in the same call that appends the triggering finding.
#[derive(Debug, Default)]
pub struct Collector {
    findings: Vec<Finding>,
    errors: Vec<String>,
    recommendations: Vec<String>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) -> Annotation<'_> {
        self.findings.push(finding);
        Annotation { collector: self }
    }

    /// Record error text that has no finding of its own.
    pub fn critical(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn recommend(&mut self, message: impl Into<String>) {
        self.recommendations.push(message.into());
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn into_parts(self) -> (Vec<Finding>, Vec<String>, Vec<String>) {
        (self.findings, self.errors, self.recommendations)
    }
}

/// Handle returned by [`Collector::push`].
pub struct Annotation<'a> {
    collector: &'a mut Collector,
}

impl Annotation<'_> {
    pub fn recommend(self, message: impl Into<String>) -> Self {
        self.collector.recommend(message);
        self
    }

    pub fn critical(self, message: impl Into<String>) -> Self {
        self.collector.critical(message);
        self
    }
}
