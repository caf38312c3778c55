//! Plain-text rendering of a results view, used by one-shot mode.

use prioritizer_core::{
    BucketBody, ResultsView, BREAKDOWN_TITLE, EMPTY_BUCKET_TEXT, NEXT_ACTION_TITLE,
    PRIORITIES_TITLE,
};

pub fn render_results(results: &ResultsView) -> Vec<String> {
    let mut lines = Vec::new();

    let action = &results.next_action;
    lines.push(format!(">> {NEXT_ACTION_TITLE}"));
    lines.push(format!("   Task: {}", action.task));
    lines.push(format!("   {}", action.step));
    lines.push(format!("   Estimated time: {} minutes", action.minutes));
    lines.push(String::new());

    lines.push(PRIORITIES_TITLE.to_string());
    for bucket in &results.priorities {
        lines.push(format!("  {}", bucket.heading()));
        match &bucket.body {
            BucketBody::Tasks(tasks) => {
                lines.extend(tasks.iter().map(|task| format!("    - {task}")));
            }
            BucketBody::Empty => lines.push(format!("    {EMPTY_BUCKET_TEXT}")),
        }
    }
    lines.push(String::new());

    lines.push(BREAKDOWN_TITLE.to_string());
    for entry in &results.breakdown {
        lines.push(format!("  {}", entry.task));
        lines.extend(entry.steps.iter().map(|step| {
            format!("    {}. {} ({} min)", step.number, step.text, step.minutes)
        }));
    }

    lines
}
