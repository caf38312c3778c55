//! Splits an [`AnalysisResult`] into the three display sections.
//!
//! Each section is built from its own slice of the result; nothing here looks
//! across sections, so an empty bucket or an empty breakdown never hides
//! another section.

use crate::{AnalysisResult, Bucket, NextAction, Priorities, TaskBreakdown};

pub const NEXT_ACTION_TITLE: &str = "What to do in the next 10 minutes";
pub const PRIORITIES_TITLE: &str = "Prioritized Tasks";
pub const BREAKDOWN_TITLE: &str = "Task Breakdowns";
pub const EMPTY_BUCKET_TEXT: &str = "No tasks in this category";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub next_action: NextActionView,
    pub priorities: [BucketView; 3],
    pub breakdown: Vec<BreakdownView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextActionView {
    pub task: String,
    pub step: String,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketView {
    pub bucket: Bucket,
    pub title: &'static str,
    pub body: BucketBody,
}

impl BucketView {
    pub fn count(&self) -> usize {
        match &self.body {
            BucketBody::Tasks(tasks) => tasks.len(),
            BucketBody::Empty => 0,
        }
    }

    /// Header line, e.g. `Must Do (2)`.
    pub fn heading(&self) -> String {
        format!("{} ({})", self.title, self.count())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketBody {
    Tasks(Vec<String>),
    /// Rendered as [`EMPTY_BUCKET_TEXT`].
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownView {
    pub task: String,
    pub steps: Vec<StepRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    /// 1-based position in execution order.
    pub number: usize,
    pub text: String,
    pub minutes: u32,
}

impl ResultsView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            next_action: next_action_section(&result.next_action),
            priorities: priorities_section(&result.priorities),
            breakdown: breakdown_section(&result.breakdown),
        }
    }
}

fn next_action_section(action: &NextAction) -> NextActionView {
    NextActionView {
        task: action.task.clone(),
        step: action.step.clone(),
        minutes: action.minutes,
    }
}

fn priorities_section(priorities: &Priorities) -> [BucketView; 3] {
    Bucket::ALL.map(|bucket| {
        let tasks = priorities.bucket(bucket);
        BucketView {
            bucket,
            title: bucket.title(),
            body: if tasks.is_empty() {
                BucketBody::Empty
            } else {
                BucketBody::Tasks(tasks.to_vec())
            },
        }
    })
}

fn breakdown_section(breakdown: &[TaskBreakdown]) -> Vec<BreakdownView> {
    breakdown
        .iter()
        .map(|entry| BreakdownView {
            task: entry.task.clone(),
            steps: entry
                .steps
                .iter()
                .enumerate()
                .map(|(index, step)| StepRow {
                    number: index + 1,
                    text: step.text.clone(),
                    minutes: step.minutes,
                })
                .collect(),
        })
        .collect()
}
