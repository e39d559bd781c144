use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use deck_common::GenerateRequest;
use deck_core::{
    BoundaryMode, Deck, Direction as NavDirection, NavCommand, Navigator, Swipe, SwipeTracker,
    TextGenerator,
};
use deck_gemini::GenerateError;
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};
use unicode_width::UnicodeWidthStr;

use crate::keys;

/// Terminal cells are much coarser than the 50px touch threshold, so a
/// drag only needs to travel a few columns to count as a swipe.
const SWIPE_CELL_THRESHOLD: f32 = 4.0;

/// Ticks the direction glyph stays visible after a navigation.
const TRANSITION_TICKS: u8 = 3;

/// Completed demo call routed back into the UI loop.
struct DemoOutcome {
    slide: usize,
    result: Result<String, GenerateError>,
}

/// Per-slide demo widget state. Kept for the whole session so revisiting
/// a slide shows its last output; a result that arrives for a slide no
/// longer visible is stored silently.
#[derive(Default)]
struct DemoState {
    input: String,
    output: Option<String>,
    error: Option<String>,
    busy: bool,
}

enum LoopEvent {
    Tick,
    Outcome(DemoOutcome),
    Term(Event),
    Idle,
}

pub struct App {
    deck: Deck,
    nav: Navigator,
    tracker: SwipeTracker,
    demos: HashMap<usize, DemoState>,
    generator: Arc<dyn TextGenerator>,
    outcome_tx: mpsc::Sender<DemoOutcome>,
    outcome_rx: mpsc::Receiver<DemoOutcome>,
    input_focused: bool,
    transition_ticks: u8,
    running: bool,
}

impl App {
    pub fn new(deck: Deck, boundary: BoundaryMode, generator: Arc<dyn TextGenerator>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel(16);
        let demos = deck
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.demo.is_some())
            .map(|(index, _)| (index, DemoState::default()))
            .collect();
        let nav = Navigator::new(deck.len(), boundary);

        Self {
            deck,
            nav,
            tracker: SwipeTracker::new(SWIPE_CELL_THRESHOLD),
            demos,
            generator,
            outcome_tx,
            outcome_rx,
            input_focused: false,
            transition_ticks: 0,
            running: true,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let mut tick = interval(Duration::from_millis(250));

        while self.running {
            terminal.draw(|f| self.draw(f))?;

            let loop_event = tokio::select! {
                _ = tick.tick() => LoopEvent::Tick,
                outcome = self.outcome_rx.recv() => match outcome {
                    Some(outcome) => LoopEvent::Outcome(outcome),
                    None => LoopEvent::Idle,
                },
                poll = tokio::task::spawn_blocking(|| -> io::Result<Option<Event>> {
                    if event::poll(std::time::Duration::from_millis(50))? {
                        Ok(Some(event::read()?))
                    } else {
                        Ok(None)
                    }
                }) => match poll {
                    Ok(Ok(Some(term_event))) => LoopEvent::Term(term_event),
                    _ => LoopEvent::Idle,
                },
            };

            match loop_event {
                LoopEvent::Tick => self.on_tick(),
                LoopEvent::Outcome(outcome) => self.handle_outcome(outcome),
                LoopEvent::Term(term_event) => self.handle_terminal_event(term_event),
                LoopEvent::Idle => {}
            }
        }

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn on_tick(&mut self) {
        self.transition_ticks = self.transition_ticks.saturating_sub(1);
    }

    fn handle_terminal_event(&mut self, term_event: Event) {
        match term_event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.input_focused {
            self.handle_input_key(key);
            return;
        }
        if let Some(command) = keys::nav_command(&key) {
            self.navigate(command);
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Tab | KeyCode::Enter => {
                if self.demos.contains_key(&self.nav.current()) {
                    self.input_focused = true;
                }
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Tab => self.input_focused = false,
            KeyCode::Enter => self.run_demo(),
            KeyCode::Char(c) => {
                if let Some(demo) = self.demos.get_mut(&self.nav.current()) {
                    demo.input.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(demo) = self.demos.get_mut(&self.nav.current()) {
                    demo.input.pop();
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(_) => self
                .tracker
                .pointer_down(f32::from(mouse.column), f32::from(mouse.row)),
            MouseEventKind::Drag(_) => self
                .tracker
                .pointer_move(f32::from(mouse.column), f32::from(mouse.row)),
            MouseEventKind::Up(_) => match self.tracker.pointer_up() {
                Some(Swipe::Left) => self.navigate(NavCommand::Next),
                Some(Swipe::Right) => self.navigate(NavCommand::Previous),
                // Vertical swipes are reserved, not wired to navigation.
                Some(Swipe::Up | Swipe::Down) | None => {}
            },
            _ => {}
        }
    }

    fn navigate(&mut self, command: NavCommand) {
        self.nav.apply(command);
        self.input_focused = false;
        self.transition_ticks = TRANSITION_TICKS;
    }

    fn run_demo(&mut self) {
        let slide = self.nav.current();
        let instruction = self
            .deck
            .slide(slide)
            .and_then(|info| info.demo.as_ref())
            .and_then(|demo| demo.instruction.clone());

        let Some(demo) = self.demos.get_mut(&slide) else {
            return;
        };
        let prompt = demo.input.trim().to_string();
        if prompt.is_empty() || demo.busy {
            return;
        }
        demo.busy = true;
        demo.error = None;

        let request = GenerateRequest {
            prompt,
            system_instruction: instruction,
        };
        let generator = self.generator.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = generator.generate(request).await;
            // The receiver is gone once the app shuts down; a late
            // result is simply dropped.
            let _ = tx.send(DemoOutcome { slide, result }).await;
        });
    }

    fn handle_outcome(&mut self, outcome: DemoOutcome) {
        if let Some(demo) = self.demos.get_mut(&outcome.slide) {
            demo.busy = false;
            match outcome.result {
                Ok(text) => {
                    demo.output = Some(text);
                    demo.error = None;
                }
                Err(err) => demo.error = Some(err.to_string()),
            }
        }
    }

    fn draw(&self, f: &mut Frame) {
        let area = f.area();
        let has_demo = self.demos.contains_key(&self.nav.current());

        let constraints = if has_demo {
            vec![
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(9),
                Constraint::Length(1),
            ]
        } else {
            vec![
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
            ]
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.draw_header(f, chunks[0]);
        self.draw_slide(f, chunks[1]);
        if has_demo {
            self.draw_demo(f, chunks[2]);
        }
        self.draw_footer(f, chunks[chunks.len() - 1]);
    }

    fn draw_header(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(area);

        let title = Paragraph::new(self.deck.title())
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(title, columns[0]);

        let clock = Paragraph::new(Local::now().format("%H:%M").to_string())
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(clock, columns[1]);
    }

    fn draw_slide(&self, f: &mut Frame, area: Rect) {
        let Some(slide) = self.deck.slide(self.nav.current()) else {
            return;
        };

        let glyph = if self.transition_ticks > 0 {
            match self.nav.last_direction() {
                NavDirection::Forward => " \u{203a}",
                NavDirection::Backward => " \u{2039}",
            }
        } else {
            ""
        };

        let block = Block::default()
            .title(format!(" {}{glyph} ", slide.title))
            .borders(Borders::ALL);

        let paragraph = Paragraph::new(slide.body.as_str())
            .block(block)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    fn draw_demo(&self, f: &mut Frame, area: Rect) {
        let Some(demo) = self.demos.get(&self.nav.current()) else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let input_title = if self.input_focused {
            " Prompt (Enter to run, Esc to leave) "
        } else {
            " Prompt (Tab to focus) "
        };
        let input_style = if self.input_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let input = Paragraph::new(demo.input.as_str())
            .block(Block::default().title(input_title).borders(Borders::ALL))
            .style(input_style);
        f.render_widget(input, chunks[0]);

        if self.input_focused {
            let x = chunks[0].x + 1 + demo.input.width() as u16;
            let y = chunks[0].y + 1;
            f.set_cursor_position(Position::new(x, y));
        }

        let output_block = Block::default().title(" Output ").borders(Borders::ALL);
        let output = if demo.busy {
            Paragraph::new("Generating...")
                .style(Style::default().fg(Color::DarkGray))
                .block(output_block)
        } else if let Some(error) = &demo.error {
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .block(output_block)
                .wrap(Wrap { trim: true })
        } else {
            Paragraph::new(demo.output.as_deref().unwrap_or(""))
                .block(output_block)
                .wrap(Wrap { trim: true })
        };
        f.render_widget(output, chunks[1]);
    }

    fn draw_footer(&self, f: &mut Frame, area: Rect) {
        let position = format!(
            "{}/{}  \u{2190}/\u{2192} navigate · Home/End jump · q quit",
            self.nav.current() + 1,
            self.nav.slide_count()
        );
        let footer = Paragraph::new(position).style(Style::default().fg(Color::DarkGray));
        f.render_widget(footer, area);
    }
}
