/// One of the three priority classifications, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Must,
    Should,
    Optional,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Must, Bucket::Should, Bucket::Optional];

    pub fn title(self) -> &'static str {
        match self {
            Bucket::Must => "Must Do",
            Bucket::Should => "Should Do",
            Bucket::Optional => "Optional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Priorities {
    pub must: Vec<String>,
    pub should: Vec<String>,
    pub optional: Vec<String>,
}

impl Priorities {
    pub fn bucket(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Must => &self.must,
            Bucket::Should => &self.should,
            Bucket::Optional => &self.optional,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub minutes: u32,
}

/// Ordered steps for one task, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBreakdown {
    pub task: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextAction {
    pub task: String,
    pub step: String,
    pub minutes: u32,
}

/// A complete analysis as returned by the remote analyzer.
///
/// `breakdown` keeps the order in which the server listed the tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub priorities: Priorities,
    pub breakdown: Vec<TaskBreakdown>,
    pub next_action: NextAction,
}
