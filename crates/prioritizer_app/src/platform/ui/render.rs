use prioritizer_core::{
    AppViewModel, BackendStatus, BucketBody, InputView, LifecycleView, ResultsView,
    BREAKDOWN_TITLE, EMPTY_BUCKET_TEXT, MAX_INPUT_CHARS, NEXT_ACTION_TITLE, PRIORITIES_TITLE,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::keys::KEY_HELP;
use super::layout;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const PLACEHOLDER: &str =
    "Paste your tasks here...\n\nExample:\nWrite quarterly report\nCall client about project\nBuy groceries\nReview code changes";

/// Presentation state that lives outside the core (scroll, animation).
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    pub scroll: u16,
    pub spinner: usize,
}

pub fn render(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let areas = layout::split(frame.area());

    render_header(frame, areas.header, view.backend);
    render_input(frame, areas.input, &view.input);
    render_submit(frame, areas.submit, &view.input);
    render_body(frame, areas.body, &view.lifecycle, ui);

    let footer = Paragraph::new(Line::from(Span::styled(
        KEY_HELP,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, areas.footer);
}

fn render_header(frame: &mut Frame, area: Rect, backend: BackendStatus) {
    let (marker, label, color) = match backend {
        BackendStatus::Unknown => ("○", "backend unknown", Color::DarkGray),
        BackendStatus::Checking => ("○", "checking backend", Color::Yellow),
        BackendStatus::Online => ("●", "backend online", Color::Green),
        BackendStatus::Offline => ("●", "backend offline", Color::Red),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "ToDo Prioritizer ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(format!("{marker} {label}"), Style::default().fg(color)),
    ]));
    frame.render_widget(header, area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &InputView) {
    let counter_style = if input.near_limit {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let counter = Line::from(Span::styled(
        format!(" {} / {} ", input.remaining, MAX_INPUT_CHARS),
        counter_style,
    ))
    .alignment(Alignment::Right);

    let border_style = if input.read_only {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Blue)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Tasks ")
        .title_bottom(counter);

    let paragraph = if input.text.is_empty() {
        Paragraph::new(PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: false })
    } else {
        let mut text = input.text.clone();
        if !input.read_only {
            text.push('▏');
        }
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let offset = tail_offset(&paragraph, area);
        paragraph.scroll((offset, 0))
    };
    frame.render_widget(paragraph.block(block), area);
}

/// Rows to scroll so the last wrapped row of a bordered paragraph stays in
/// view; the end of the text is where typing happens.
fn tail_offset(paragraph: &Paragraph<'_>, area: Rect) -> u16 {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2) as usize;
    if inner_width == 0 {
        return 0;
    }
    let rows = paragraph.line_count(inner_width);
    u16::try_from(rows.saturating_sub(inner_height)).unwrap_or(u16::MAX)
}

fn render_submit(frame: &mut Frame, area: Rect, input: &InputView) {
    let button_style = if input.can_submit {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    };
    let mut lines = vec![Line::from(Span::styled(
        format!("[ {} ]", input.submit_label),
        button_style,
    ))];
    if let Some(hint) = &input.hint {
        let hint_style = if input.can_submit {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(hint.clone(), hint_style)));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_body(frame: &mut Frame, area: Rect, lifecycle: &LifecycleView, ui: &UiState) {
    match lifecycle {
        LifecycleView::Idle => {
            let idle = Paragraph::new("Results appear here after you analyze your tasks.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(idle, area);
        }
        LifecycleView::Loading => {
            let frame_symbol = SPINNER[ui.spinner % SPINNER.len()];
            let loading = Paragraph::new(format!("{frame_symbol} Analyzing your tasks..."))
                .style(Style::default().fg(Color::Blue))
                .alignment(Alignment::Center);
            frame.render_widget(loading, area);
        }
        LifecycleView::Failed { message } => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red))
                        .title(" Error "),
                );
            frame.render_widget(error, area);
        }
        LifecycleView::Results(results) => {
            let paragraph = Paragraph::new(results_lines(results))
                .wrap(Wrap { trim: false })
                .scroll((ui.scroll, 0))
                .block(Block::default().borders(Borders::TOP));
            frame.render_widget(paragraph, area);
        }
    }
}

fn results_lines(results: &ResultsView) -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    // Next action always comes first.
    let action = &results.next_action;
    let highlight = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);
    lines.push(Line::from(Span::styled(
        format!("● {NEXT_ACTION_TITLE}"),
        highlight,
    )));
    lines.push(Line::from(vec![
        Span::styled("  Task: ", muted),
        Span::styled(action.task.clone(), heading),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", action.step),
        highlight,
    )));
    lines.push(Line::from(Span::styled(
        format!("  Estimated time: {} minutes", action.minutes),
        muted,
    )));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(PRIORITIES_TITLE, heading)));
    for bucket in &results.priorities {
        let color = match bucket.bucket {
            prioritizer_core::Bucket::Must => Color::Red,
            prioritizer_core::Bucket::Should => Color::Yellow,
            prioritizer_core::Bucket::Optional => Color::Gray,
        };
        lines.push(Line::from(Span::styled(
            format!("  {}", bucket.heading()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        match &bucket.body {
            BucketBody::Tasks(tasks) => {
                for task in tasks {
                    lines.push(Line::from(Span::styled(
                        format!("    │ {task}"),
                        Style::default().fg(color),
                    )));
                }
            }
            BucketBody::Empty => lines.push(Line::from(Span::styled(
                format!("    {EMPTY_BUCKET_TEXT}"),
                muted.add_modifier(Modifier::ITALIC),
            ))),
        }
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(BREAKDOWN_TITLE, heading)));
    for entry in &results.breakdown {
        lines.push(Line::from(Span::styled(format!("  {}", entry.task), heading)));
        for step in &entry.steps {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("   {:>2}. ", step.number),
                    Style::default().fg(Color::Blue),
                ),
                Span::raw(step.text.clone()),
                Span::styled(format!("  ({} min)", step.minutes), muted),
            ]));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use prioritizer_core::{
        update, AnalysisResult, AppState, Failure, FailureKind, Msg, NextAction, Priorities,
        Step, TaskBreakdown,
    };
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(view: &AppViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 48)).unwrap();
        terminal
            .draw(|frame| render(frame, view, &UiState::default()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn loaded_state(outcome: Result<AnalysisResult, Failure>) -> AppState {
        let (state, _) = update(AppState::new(), Msg::InputChanged("Write report".into()));
        let (state, _) = update(state, Msg::SubmitClicked);
        let (state, _) = update(
            state,
            Msg::AnalysisCompleted {
                request_id: 1,
                outcome,
            },
        );
        state
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            priorities: Priorities {
                must: Vec::new(),
                should: vec!["Write report".into()],
                optional: Vec::new(),
            },
            breakdown: vec![TaskBreakdown {
                task: "Write report".into(),
                steps: vec![
                    Step {
                        text: "Draft outline".into(),
                        minutes: 5,
                    },
                    Step {
                        text: "Write body".into(),
                        minutes: 15,
                    },
                ],
            }],
            next_action: NextAction {
                task: "Write report".into(),
                step: "Draft outline".into(),
                minutes: 5,
            },
        }
    }

    #[test]
    fn idle_screen_shows_placeholder_and_counter() {
        let screen = draw(&AppState::new().view());

        assert!(screen.contains("Paste your tasks here..."));
        assert!(screen.contains("2000 / 2000"));
        assert!(screen.contains("[ Get Clarity ]"));
        assert!(screen.contains("Enter at least one task to enable the button"));
    }

    #[test]
    fn loading_screen_shows_spinner_label() {
        let (state, _) = update(AppState::new(), Msg::InputChanged("Write report".into()));
        let (state, _) = update(state, Msg::SubmitClicked);

        let screen = draw(&state.view());

        assert!(screen.contains("[ Analyzing... ]"));
        assert!(screen.contains("Analyzing your tasks..."));
    }

    #[test]
    fn results_screen_shows_every_section() {
        let screen = draw(&loaded_state(Ok(sample_result())).view());

        assert!(screen.contains(NEXT_ACTION_TITLE));
        assert!(screen.contains("Must Do (0)"));
        assert!(screen.contains("Should Do (1)"));
        assert!(screen.contains("Optional (0)"));
        assert_eq!(screen.matches(EMPTY_BUCKET_TEXT).count(), 2);
        assert!(screen.contains(" 1. Draft outline"));
        assert!(screen.contains(" 2. Write body"));
        assert!(screen.contains("(15 min)"));
    }

    #[test]
    fn long_single_line_keeps_its_end_in_view() {
        let text = format!("{}ZZZ", "a".repeat(1500));
        let (state, _) = update(AppState::new(), Msg::InputChanged(text));

        let screen = draw(&state.view());

        assert!(screen.contains("ZZZ"));
        assert!(screen.contains("497 / 2000"));
    }

    #[test]
    fn many_short_lines_keep_the_last_one_in_view() {
        let text = (1..=30)
            .map(|n| format!("Task {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let (state, _) = update(AppState::new(), Msg::InputChanged(text));

        let screen = draw(&state.view());

        assert!(screen.contains("Task 30"));
        assert!(!screen.contains("Task 1 "));
    }

    #[test]
    fn error_screen_shows_message_without_results() {
        let failure = Failure::new(FailureKind::Server, "model unavailable");
        let screen = draw(&loaded_state(Err(failure)).view());

        assert!(screen.contains("Error"));
        assert!(screen.contains("model unavailable"));
        assert!(!screen.contains(PRIORITIES_TITLE));
        // The form is still there and usable.
        assert!(screen.contains("[ Get Clarity ]"));
    }
}
