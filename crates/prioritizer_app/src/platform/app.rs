use std::time::Duration;

use crossterm::event::{self, Event};
use prioritizer_core::{update, AppState, Msg};
use prioritizer_logging::{prio_debug, prio_error, prio_info};

use super::effects::EffectRunner;
use super::ui::keys::{map_key, paste_msg, KeyAction};
use super::ui::render::{render, UiState};
use super::ui::{self, Tui};

/// Input poll interval; also drives the loading spinner.
const TICK: Duration = Duration::from_millis(75);
const SCROLL_STEP: u16 = 5;

pub fn run_tui(effects: EffectRunner) -> anyhow::Result<()> {
    let mut terminal = ui::init()?;
    install_panic_hook();

    let mut app = App::new(effects);
    let result = app.run(&mut terminal);

    ui::restore()?;
    result
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    let ui_thread = std::thread::current().id();
    std::panic::set_hook(Box::new(move |info| {
        // Engine task panics surface as failed requests; keep the screen intact.
        if std::thread::current().id() != ui_thread {
            prio_error!("Background panic: {}", info);
            return;
        }
        let _ = ui::restore();
        previous(info);
    }));
}

struct App {
    state: AppState,
    effects: EffectRunner,
    ui: UiState,
    ui_dirty: bool,
    should_quit: bool,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
            ui: UiState::default(),
            ui_dirty: false,
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut Tui) -> anyhow::Result<()> {
        self.dispatch_msg(Msg::Started);
        let mut needs_draw = true;

        while !self.should_quit {
            if needs_draw {
                let view = self.state.view();
                let ui_state = self.ui;
                terminal.draw(|frame| render(frame, &view, &ui_state))?;
                needs_draw = false;
            }

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_action(map_key(key)),
                    Event::Paste(text) => self.dispatch_msg(paste_msg(&text)),
                    Event::Resize(..) => needs_draw = true,
                    _ => {}
                }
            } else if self.state.lifecycle().is_loading() {
                self.ui.spinner = self.ui.spinner.wrapping_add(1);
                needs_draw = true;
            }

            for msg in self.effects.poll() {
                self.dispatch_msg(msg);
            }

            if self.state.consume_dirty() || self.ui_changed() {
                needs_draw = true;
            }
        }

        prio_info!("Quit requested");
        Ok(())
    }

    fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Dispatch(msg) => self.dispatch_msg(msg),
            KeyAction::ScrollUp => self.scroll_by(-(SCROLL_STEP as i32)),
            KeyAction::ScrollDown => self.scroll_by(SCROLL_STEP as i32),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Ignore => {}
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let starts_request = matches!(msg, Msg::SubmitClicked);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        if starts_request && !effects.is_empty() {
            self.ui.scroll = 0;
            self.mark_ui_changed();
        }
        if !effects.is_empty() {
            prio_debug!("Dispatching {} effect(s)", effects.len());
        }
        self.effects.enqueue(effects);
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.ui.scroll as i32 + delta).clamp(0, u16::MAX as i32) as u16;
        if next != self.ui.scroll {
            self.ui.scroll = next;
            self.mark_ui_changed();
        }
    }

    fn mark_ui_changed(&mut self) {
        self.ui_dirty = true;
    }

    fn ui_changed(&mut self) -> bool {
        std::mem::take(&mut self.ui_dirty)
    }
}
