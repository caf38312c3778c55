//! JSON shapes exchanged with the analyzer and their mapping to core types.

use std::fmt;
use std::marker::PhantomData;

use prioritizer_core::{AnalysisResult, NextAction, Priorities, Step, TaskBreakdown};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeRequest<'a> {
    pub tasks: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    priorities: WirePriorities,
    #[serde(deserialize_with = "ordered_entries")]
    breakdown: Vec<(String, WireBreakdown)>,
    next_action: WireNextAction,
}

// Buckets the server leaves out are treated as empty.
#[derive(Debug, Default, Deserialize)]
struct WirePriorities {
    #[serde(default)]
    must: Vec<String>,
    #[serde(default)]
    should: Vec<String>,
    #[serde(default)]
    optional: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireBreakdown {
    steps: Vec<WireStep>,
}

#[derive(Debug, Deserialize)]
struct WireStep {
    step: String,
    minutes: u32,
}

#[derive(Debug, Deserialize)]
struct WireNextAction {
    task: String,
    step: String,
    minutes: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

pub(crate) fn decode_analysis(bytes: &[u8]) -> Result<AnalysisResult, serde_json::Error> {
    let response: AnalyzeResponse = serde_json::from_slice(bytes)?;
    Ok(AnalysisResult {
        priorities: Priorities {
            must: response.priorities.must,
            should: response.priorities.should,
            optional: response.priorities.optional,
        },
        breakdown: response
            .breakdown
            .into_iter()
            .map(|(task, breakdown)| TaskBreakdown {
                task,
                steps: breakdown
                    .steps
                    .into_iter()
                    .map(|step| Step {
                        text: step.step,
                        minutes: step.minutes,
                    })
                    .collect(),
            })
            .collect(),
        next_action: NextAction {
            task: response.next_action.task,
            step: response.next_action.step,
            minutes: response.next_action.minutes,
        },
    })
}

/// Pulls a string `detail` out of an error body. Non-string details (such as
/// a list of validation errors) are ignored.
pub(crate) fn decode_error_detail(bytes: &[u8]) -> Option<String> {
    let body: ErrorBody = serde_json::from_slice(bytes).ok()?;
    match body.detail? {
        serde_json::Value::String(detail) => Some(detail),
        _ => None,
    }
}

/// Deserializes a JSON object into its entries in document order.
/// A repeated key replaces the earlier value in place.
fn ordered_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object mapping task names to breakdowns")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries: Vec<(String, V)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                match entries.iter_mut().find(|(existing, _)| *existing == key) {
                    Some(slot) => slot.1 = value,
                    None => entries.push((key, value)),
                }
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}
