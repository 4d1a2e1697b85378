//! Terminal shell for the walkthrough.
//!
//! Six pages mirror the original learning journey: home, blockchain intro,
//! zero-knowledge concepts, the two vote simulations, and results. One
//! cooperative loop drives everything: each iteration races the frame
//! interval against the pending auto-play and submission deadlines, applies
//! whichever fired, drains buffered key input, and redraws. All state
//! mutation happens on this single logical thread; the only shared value is
//! the log buffer written by the tracing subscriber and read by the log
//! pane.

use crate::{
    ballot::{Ballot, Kind, Status},
    content,
    explorer::Explorer,
    i18n::{Language, Lexicon, Store},
    results::{self, View},
    wallet::{self, Provider},
};
use commonware_macros::select;
use commonware_runtime::{Clock, Metrics, Storage};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::future::{self, Either};
use prometheus_client::metrics::counter::Counter;
use rand::RngCore;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use std::{
    future::Future,
    io::stdout,
    sync::{Arc, Mutex},
    time::{Duration, SystemTime},
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// How often the interface redraws when nothing else wakes it.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Width of the vote-share bars in the results distribution panel.
const BAR_WIDTH: usize = 20;

/// Errors raised by the terminal shell.
#[derive(Error, Debug)]
pub enum Error {
    #[error("terminal: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("storage: {0}")]
    Storage(#[from] commonware_runtime::Error),
}

/// The pages of the walkthrough, in navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    BlockchainIntro,
    ZkConcepts,
    TraditionalVote,
    ZkVote,
    Results,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::BlockchainIntro,
        Page::ZkConcepts,
        Page::TraditionalVote,
        Page::ZkVote,
        Page::Results,
    ];

    /// Lexicon key for the page's navigation label.
    pub fn title_key(&self) -> &'static str {
        match self {
            Page::Home => "nav.home",
            Page::BlockchainIntro => "nav.blockchainIntro",
            Page::ZkConcepts => "nav.zkConcepts",
            Page::TraditionalVote => "nav.traditionalVote",
            Page::ZkVote => "nav.zkVote",
            Page::Results => "nav.results",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|page| page == self).unwrap_or(0)
    }

    /// The next page, wrapping at the end.
    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The previous page, wrapping at the start.
    pub fn previous(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A proportional text bar, `filled` of `width` cells.
fn bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

/// Sleep until `deadline`, or forever if none is armed.
fn advance<E: Clock>(
    context: &E,
    deadline: Option<SystemTime>,
) -> impl Future<Output = ()> + Send + 'static + use<'_, E> {
    match deadline {
        Some(deadline) => Either::Left(context.sleep_until(deadline)),
        None => Either::Right(future::pending()),
    }
}

/// The interactive application: every page's state plus the shared chrome.
pub struct App<E: Clock + Storage + Metrics + RngCore> {
    context: E,
    lexicon: Lexicon,
    store: Store<E>,
    wallet: wallet::Simulated,
    logs: Arc<Mutex<Vec<String>>>,

    page: Page,
    frames: u64,

    // Home.
    path: Explorer,

    // Blockchain intro: one explorer per section, plus the section tabs.
    // Only the lifecycle walker auto-plays.
    sections: Explorer,
    concepts: Explorer,
    walker: Explorer,
    fields: Explorer,
    mechanisms: Explorer,

    // Zero-knowledge concepts.
    topics: Explorer,

    // Vote simulations.
    traditional: Ballot,
    traditional_cursor: usize,
    zk: Ballot,
    zk_cursor: usize,

    // Results.
    view: View,

    votes_submitted: Counter,
    proofs_generated: Counter,
    language_toggles: Counter,
}

impl<E: Clock + Storage + Metrics + RngCore> App<E> {
    /// Restore the language preference and assemble the application.
    ///
    /// `language` overrides (and persists over) the stored preference.
    pub async fn init(
        context: E,
        logs: Arc<Mutex<Vec<String>>>,
        partition: &str,
        seed: u64,
        language: Option<Language>,
    ) -> Result<Self, Error> {
        let mut store = Store::init(&context, partition).await?;
        if let Some(language) = language {
            store.set(language).await?;
        }
        info!(language = store.language().code(), "language restored");

        let votes_submitted = Counter::default();
        context.register(
            "votes_submitted",
            "Simulated votes submitted",
            votes_submitted.clone(),
        );
        let proofs_generated = Counter::default();
        context.register(
            "proofs_generated",
            "Placeholder proofs generated",
            proofs_generated.clone(),
        );
        let language_toggles = Counter::default();
        context.register(
            "language_toggles",
            "Language preference changes",
            language_toggles.clone(),
        );

        Ok(Self {
            context,
            lexicon: content::lexicon(),
            store,
            wallet: wallet::Simulated::new(seed),
            logs,
            page: Page::Home,
            frames: 0,
            path: Explorer::new(content::LEARNING_PATH.len()),
            sections: Explorer::new(content::INTRO_SECTIONS.len()),
            concepts: Explorer::new(content::BLOCKCHAIN_CONCEPTS.len()),
            walker: Explorer::new(content::TRANSACTION_STAGES.len()),
            fields: Explorer::new(content::TRANSACTION_FIELDS.len()),
            mechanisms: Explorer::new(content::CONSENSUS_MECHANISMS.len()),
            topics: Explorer::new(content::ZK_TOPICS.len()),
            traditional: Ballot::new(Kind::Traditional, content::CANDIDATES.len()),
            traditional_cursor: 0,
            zk: Ballot::new(Kind::ZeroKnowledge, content::CANDIDATES.len()),
            zk_cursor: 0,
            view: View::default(),
            votes_submitted,
            proofs_generated,
            language_toggles,
        })
    }

    /// Take over the terminal and run the interface until the user quits.
    pub async fn run(mut self) -> Result<(), Error> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

        // Restore the terminal before surfacing any error.
        let result = self.serve(&mut terminal).await;
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    async fn serve(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), Error> {
        loop {
            self.frames += 1;
            terminal.draw(|frame| self.draw(frame))?;

            // Wake on the next frame or on whichever deadline fires first.
            let frame = self.context.sleep(FRAME_INTERVAL);
            let walker = advance(&self.context, self.walker.deadline());
            let traditional = advance(&self.context, self.traditional.deadline());
            let zk = advance(&self.context, self.zk.deadline());
            select! {
                _ = frame => {},
                _ = walker => {},
                _ = traditional => {},
                _ = zk => {},
            }

            let now = self.context.current();
            let before = self.walker.index();
            self.walker.tick(now);
            if self.walker.index() != before {
                debug!(stage = self.walker.index(), "lifecycle advanced");
            }
            self.complete(Kind::Traditional, now);
            self.complete(Kind::ZeroKnowledge, now);

            // Drain whatever input arrived since the last frame.
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle(key.code).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Complete `kind`'s submission if its deadline has passed.
    fn complete(&mut self, kind: Kind, now: SystemTime) {
        let ballot = match kind {
            Kind::Traditional => &mut self.traditional,
            Kind::ZeroKnowledge => &mut self.zk,
        };
        if ballot.status() != Status::Generating {
            return;
        }
        ballot.tick(now, &mut self.context);
        let ballot = match kind {
            Kind::Traditional => &self.traditional,
            Kind::ZeroKnowledge => &self.zk,
        };
        if ballot.status() != Status::Submitted {
            return;
        }
        self.votes_submitted.inc();
        match ballot.proof() {
            Some(proof) => {
                self.proofs_generated.inc();
                info!(proof = &proof[..8], "proof generated, vote submitted");
            }
            None => info!("vote submitted"),
        }
    }

    /// Apply one key press. Returns true when the user quits.
    async fn handle(&mut self, code: KeyCode) -> Result<bool, Error> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Tab => self.page = self.page.next(),
            KeyCode::BackTab => self.page = self.page.previous(),
            KeyCode::Char(digit @ '1'..='6') => {
                let index = digit as usize - '1' as usize;
                self.page = Page::ALL[index];
            }
            KeyCode::Char('t') => {
                let language = self.store.language().toggled();
                // Best-effort persistence: the in-memory language changes
                // regardless.
                if let Err(err) = self.store.set(language).await {
                    warn!(?err, "failed to persist language");
                }
                self.language_toggles.inc();
                info!(language = language.code(), "language set");
            }
            KeyCode::Char('c') => {
                if !self.wallet.connected() {
                    let connector = self.wallet.connectors()[0];
                    self.wallet.connect(connector.id);
                    if let Some(account) = self.wallet.account() {
                        info!(
                            connector = connector.id,
                            account = %wallet::truncated(account),
                            "wallet connected"
                        );
                    }
                }
            }
            KeyCode::Char('d') => {
                if self.wallet.connected() {
                    self.wallet.disconnect();
                    info!("wallet disconnected");
                }
            }
            _ => self.handle_page(code),
        }
        Ok(false)
    }

    /// Keys that depend on the active page.
    fn handle_page(&mut self, code: KeyCode) {
        match self.page {
            Page::Home => match code {
                KeyCode::Up | KeyCode::Char('k') => self.path.previous(),
                KeyCode::Down | KeyCode::Char('j') => self.path.next(),
                _ => {}
            },
            Page::BlockchainIntro => match code {
                KeyCode::Up | KeyCode::Char('k') => self.sections.previous(),
                KeyCode::Down | KeyCode::Char('j') => self.sections.next(),
                KeyCode::Left | KeyCode::Char('h') => self.section_explorer().previous(),
                KeyCode::Right | KeyCode::Char('l') => self.section_explorer().next(),
                KeyCode::Char(' ') if self.sections.index() == 1 => {
                    let now = self.context.current();
                    let playing = self.walker.playing();
                    self.walker.set_playing(!playing, now);
                    debug!(playing = !playing, "lifecycle auto-play toggled");
                }
                _ => {}
            },
            Page::ZkConcepts => match code {
                KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                    self.topics.previous()
                }
                KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                    self.topics.next()
                }
                _ => {}
            },
            Page::TraditionalVote => Self::handle_vote(
                code,
                &mut self.traditional,
                &mut self.traditional_cursor,
                &self.wallet,
                self.context.current(),
            ),
            Page::ZkVote => Self::handle_vote(
                code,
                &mut self.zk,
                &mut self.zk_cursor,
                &self.wallet,
                self.context.current(),
            ),
            Page::Results => match code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                    self.view = self.view.toggled();
                }
                _ => {}
            },
        }
    }

    /// Cursor movement, selection, and submission on a vote page.
    ///
    /// Enter selects the candidate under the cursor; Enter on the already
    /// selected candidate submits. Both fall through to the ballot's own
    /// guards, so a press at the wrong moment does nothing.
    fn handle_vote(
        code: KeyCode,
        ballot: &mut Ballot,
        cursor: &mut usize,
        wallet: &wallet::Simulated,
        now: SystemTime,
    ) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => *cursor = cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if *cursor + 1 < content::CANDIDATES.len() {
                    *cursor += 1;
                }
            }
            KeyCode::Enter => {
                if !wallet.connected() {
                    debug!("selection ignored: wallet not connected");
                    return;
                }
                if ballot.selected() == Some(*cursor) {
                    ballot.submit(now);
                    if ballot.status() == Status::Generating {
                        info!(
                            candidate = content::CANDIDATES[*cursor].id,
                            "submission started"
                        );
                    }
                } else {
                    ballot.select(*cursor, true);
                    if ballot.selected() == Some(*cursor) {
                        debug!(candidate = content::CANDIDATES[*cursor].id, "selected");
                    }
                }
            }
            _ => {}
        }
    }

    /// The explorer behind the active intro section.
    fn section_explorer(&mut self) -> &mut Explorer {
        match self.sections.index() {
            0 => &mut self.concepts,
            1 => &mut self.walker,
            2 => &mut self.fields,
            _ => &mut self.mechanisms,
        }
    }

    fn t(&self, key: &'static str) -> &'static str {
        self.lexicon.translate(self.store.language(), key)
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(frame.size());

        self.draw_nav(frame, chunks[0]);
        match self.page {
            Page::Home => self.draw_home(frame, chunks[1]),
            Page::BlockchainIntro => self.draw_intro(frame, chunks[1]),
            Page::ZkConcepts => self.draw_topics(frame, chunks[1]),
            Page::TraditionalVote => {
                self.draw_vote(frame, chunks[1], &self.traditional, self.traditional_cursor)
            }
            Page::ZkVote => self.draw_vote(frame, chunks[1], &self.zk, self.zk_cursor),
            Page::Results => self.draw_results(frame, chunks[1]),
        }
        self.draw_logs(frame, chunks[2]);
        self.draw_status(frame, chunks[3]);
    }

    fn draw_nav(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<String> = Page::ALL
            .iter()
            .enumerate()
            .map(|(index, page)| format!("{} {}", index + 1, self.t(page.title_key())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.page.position())
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.t("hero.title")),
            );
        frame.render_widget(tabs, area);
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(6),
                Constraint::Min(0),
            ])
            .split(area);

        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                self.t("hero.subtitle"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(self.t("hero.description")),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.t("hero.title")),
        );
        frame.render_widget(hero, chunks[0]);

        let features: Vec<ListItem> = content::FEATURES
            .iter()
            .map(|(title, description)| {
                ListItem::new(Line::from(vec![
                    Span::styled(self.t(title), Style::default().fg(Color::Cyan)),
                    Span::raw(": "),
                    Span::raw(self.t(description)),
                ]))
            })
            .collect();
        let features = List::new(features).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.t("features.title")),
        );
        frame.render_widget(features, chunks[1]);

        let mut lines = Vec::new();
        for (index, step) in content::LEARNING_PATH.iter().enumerate() {
            let marker = if index == self.path.index() { "▶" } else { " " };
            let style = if index == self.path.index() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{marker} {}. ", index + 1)),
                Span::styled(self.t(step.title_key), style),
                Span::raw(format!(" ({}, {})", step.duration, step.level)),
            ]));
            if index == self.path.index() {
                lines.push(Line::from(format!("   {}", self.t(step.summary_key))));
                lines.push(Line::from(format!("   {}", step.topics.join(" · "))));
            }
        }
        let path = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.t("learningPath.title")),
        );
        frame.render_widget(path, chunks[2]);
    }

    fn draw_intro(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let titles: Vec<&str> = content::INTRO_SECTIONS
            .iter()
            .map(|section| section.title)
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.sections.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(content::INTRO_TITLE),
            );
        frame.render_widget(tabs, chunks[0]);

        let header = Paragraph::new(content::INTRO_SUBTITLE)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(header, chunks[1]);

        let subtitle = content::INTRO_SECTIONS[self.sections.index()].subtitle;
        let subtitle = Paragraph::new(subtitle)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(subtitle, chunks[2]);

        match self.sections.index() {
            0 => self.draw_concepts(frame, chunks[3]),
            1 => self.draw_walker(frame, chunks[3]),
            2 => self.draw_fields(frame, chunks[3]),
            _ => self.draw_mechanisms(frame, chunks[3]),
        }
    }

    fn draw_concepts(&self, frame: &mut Frame, area: Rect) {
        let concept = &content::BLOCKCHAIN_CONCEPTS[self.concepts.index()];
        let mut lines = vec![Line::from(concept.summary), Line::default()];
        for point in concept.points {
            lines.push(Line::from(format!("  • {point}")));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(
                "◀ ▶ concept {}/{}",
                self.concepts.index() + 1,
                self.concepts.steps()
            ),
            Style::default().fg(Color::DarkGray),
        )));
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(concept.title),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_walker(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for (index, stage) in content::TRANSACTION_STAGES.iter().enumerate() {
            let current = index == self.walker.index();
            let marker = if current { "●" } else { "○" };
            let style = if current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{marker} ")),
                Span::styled(stage.title, style),
                Span::styled(
                    format!("  [{}]", stage.duration),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            if current {
                lines.push(Line::from(format!("   {}", stage.summary)));
                lines.push(Line::from(format!("   {}", stage.details)));
            }
        }
        lines.push(Line::default());
        let play = if self.walker.playing() {
            "⏸ space pauses auto-play"
        } else {
            "▶ space starts auto-play"
        };
        lines.push(Line::from(Span::styled(
            play,
            Style::default().fg(Color::DarkGray),
        )));
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(content::INTRO_SECTIONS[1].title),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_fields(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(vec![
            Span::styled("hash: ", Style::default().fg(Color::DarkGray)),
            Span::raw(content::TRANSACTION_HASH),
        ])];
        for (index, field) in content::TRANSACTION_FIELDS.iter().enumerate() {
            let current = index == self.fields.index();
            let style = if current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:>10}", field.name), style),
                Span::raw(format!("  {}", field.value)),
                Span::styled(
                    format!("  ({})", field.kind),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            if current {
                lines.push(Line::from(format!("            {}", field.description)));
            }
        }
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(content::INTRO_SECTIONS[2].title),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_mechanisms(&self, frame: &mut Frame, area: Rect) {
        let mechanism = &content::CONSENSUS_MECHANISMS[self.mechanisms.index()];
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(area);

        let mut lines = vec![Line::from(mechanism.summary), Line::default()];
        for pro in mechanism.pros {
            lines.push(Line::from(Span::styled(
                format!("  + {pro}"),
                Style::default().fg(Color::Green),
            )));
        }
        for con in mechanism.cons {
            lines.push(Line::from(Span::styled(
                format!("  - {con}"),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(format!(
            "  examples: {}",
            mechanism.examples.join(", ")
        )));
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default().borders(Borders::ALL).title(format!(
                "{} ({}/{})",
                mechanism.name,
                self.mechanisms.index() + 1,
                self.mechanisms.steps()
            )),
        );
        frame.render_widget(paragraph, chunks[0]);

        let metrics = [
            ("energy", mechanism.energy),
            ("speed", mechanism.speed),
            ("decentralization", mechanism.decentralization),
            ("security", mechanism.security),
        ];
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1); 4])
            .split(chunks[1]);
        for (row, (label, value)) in rows.iter().zip(metrics) {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(Color::Cyan))
                .percent(value as u16)
                .label(format!("{label} {value}%"));
            frame.render_widget(gauge, *row);
        }
    }

    fn draw_topics(&self, frame: &mut Frame, area: Rect) {
        let language = self.store.language();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let titles: Vec<&str> = content::ZK_TOPICS
            .iter()
            .map(|topic| topic.title.get(language))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.topics.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(content::ZK_INTRO_TITLE.get(language)),
            );
        frame.render_widget(tabs, chunks[0]);

        let topic = &content::ZK_TOPICS[self.topics.index()];
        let mut lines = vec![
            Line::from(Span::styled(
                content::ZK_INTRO_SUBTITLE.get(language),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(topic.summary.get(language)),
            Line::default(),
        ];
        for point in topic.points {
            let label = point.label.get(language);
            if label.is_empty() {
                lines.push(Line::from(format!("  • {}", point.body.get(language))));
            } else {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {label}: "),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(point.body.get(language)),
                ]));
            }
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            topic.note.get(language),
            Style::default().fg(Color::Yellow),
        )));
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(topic.title.get(language)),
        );
        frame.render_widget(paragraph, chunks[1]);
    }

    fn draw_vote(&self, frame: &mut Frame, area: Rect, ballot: &Ballot, cursor: usize) {
        let zk = ballot.kind() == Kind::ZeroKnowledge;
        let (title, subtitle) = if zk {
            (content::ZK_VOTE_TITLE, content::ZK_VOTE_SUBTITLE)
        } else {
            (content::VOTE_TITLE, content::VOTE_SUBTITLE)
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(content::CANDIDATES.len() as u16 * 2 + 2),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(subtitle),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(header, chunks[0]);

        let mut lines = Vec::new();
        for (index, candidate) in content::CANDIDATES.iter().enumerate() {
            let marker = if ballot.selected() == Some(index) {
                "✓"
            } else if index == cursor {
                "▶"
            } else {
                " "
            };
            let style = if index == cursor {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{marker} ")),
                Span::styled(candidate.name, style),
                Span::styled(
                    format!("  {} votes", candidate.votes),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(format!("   {}", candidate.description)));
        }
        let candidates = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Candidates @ block {}", content::BLOCK_HEIGHT)),
        );
        frame.render_widget(candidates, chunks[1]);

        let status = match ballot.status() {
            Status::NotSelected if !self.wallet.connected() => Line::from(Span::styled(
                format!("press c to {}", self.t("nav.connect")),
                Style::default().fg(Color::Yellow),
            )),
            Status::NotSelected => Line::from("↑↓ choose a candidate, enter to select"),
            Status::Selected => Line::from("enter again to submit"),
            Status::Generating => {
                let spinner = ['|', '/', '-', '\\'][self.frames as usize % 4];
                let label = if zk {
                    "generating Groth16 proof (simulated)"
                } else {
                    "waiting for confirmation (simulated)"
                };
                Line::from(Span::styled(
                    format!("{spinner} {label}"),
                    Style::default().fg(Color::Yellow),
                ))
            }
            Status::Submitted => Line::from(Span::styled(
                "✓ vote recorded on the simulated chain",
                Style::default().fg(Color::Green),
            )),
        };
        let mut lines = vec![status];
        let gas = if zk {
            format!("gas: {} — {}", content::PROOF_GAS, content::PROOF_SAVINGS)
        } else {
            format!("gas: {}", content::VOTE_GAS)
        };
        lines.push(Line::from(Span::styled(
            gas,
            Style::default().fg(Color::DarkGray),
        )));
        if let Some(proof) = ballot.proof() {
            lines.push(Line::from(vec![
                Span::styled("proof: ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("0x{proof}")),
            ]));
        }
        let status = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[2]);

        if zk {
            self.draw_workflow(frame, chunks[3], ballot.status());
        } else {
            self.draw_limitations(frame, chunks[3]);
        }
    }

    fn draw_limitations(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for limitation in content::LIMITATIONS {
            lines.push(Line::from(Span::styled(
                limitation.title,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("   {}", limitation.problem)));
            lines.push(Line::from(Span::styled(
                format!("   {}", limitation.impact),
                Style::default().fg(Color::DarkGray),
            )));
        }
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Why this is a problem"),
        );
        frame.render_widget(paragraph, area);
    }

    /// The four-step proof workflow, with progress implied by the ballot.
    fn draw_workflow(&self, frame: &mut Frame, area: Rect, status: Status) {
        let reached = match status {
            Status::NotSelected => 0,
            Status::Selected => 1,
            Status::Generating => 3,
            Status::Submitted => 4,
        };
        let mut lines = Vec::new();
        for (index, step) in content::ZK_WORKFLOW.iter().enumerate() {
            let done = index < reached;
            let marker = if done { "✓" } else { "○" };
            let style = if done {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker} {} ", step.icon), style),
                Span::styled(step.title, style),
            ]));
            lines.push(Line::from(format!("   {}", step.description)));
        }
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title("How the proof works"),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_results(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(content::METHOD_COMPARISON.len() as u16 + 2),
            ])
            .split(area);

        let tabs = Tabs::new(vec!["Traditional", "Zero-Knowledge"])
            .select(match self.view {
                View::Traditional => 0,
                View::ZeroKnowledge => 1,
            })
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(content::RESULTS_TITLE),
            );
        frame.render_widget(tabs, chunks[0]);

        let subtitle = Paragraph::new(content::RESULTS_SUBTITLE)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(subtitle, chunks[1]);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        let tally = results::tally(self.view);

        // Distribution: declaration order with vote-share bars.
        let mut lines = Vec::new();
        for count in tally.distribution() {
            let share = count.votes as f64 / tally.total as f64;
            lines.push(Line::from(count.name));
            lines.push(Line::from(format!(
                "  {} {} votes ({}%)",
                bar(share, BAR_WIDTH),
                count.votes,
                tally.percent(count.votes)
            )));
        }
        lines.push(Line::from(format!("total ballots: {}", tally.total)));
        if let (Some(submitted), Some(verified)) =
            (tally.proofs_submitted, tally.proofs_verified)
        {
            lines.push(Line::from(Span::styled(
                format!("proofs submitted: {submitted}, verified on-chain: {verified}"),
                Style::default().fg(Color::Cyan),
            )));
        }
        let distribution = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title("得票统计 / Vote Distribution"),
        );
        frame.render_widget(distribution, panels[0]);

        // Ranking: highest votes first.
        let mut lines = Vec::new();
        for (rank, count) in tally.ranked().iter().enumerate() {
            let style = if rank == 0 {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}. {}", rank + 1, count.name), style),
                Span::raw(if rank == 0 { "  ★ leading" } else { "" }),
            ]));
            lines.push(Line::from(format!(
                "   {} votes ({}%)",
                count.votes,
                tally.percent(count.votes)
            )));
        }
        let ranking = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title("候选人排名 / Candidate Ranking"),
        );
        frame.render_widget(ranking, panels[1]);

        let mut lines = Vec::new();
        for row in content::METHOD_COMPARISON {
            lines.push(Line::from(format!(
                "{:<30} {:<22} {}",
                row.feature, row.traditional, row.zero_knowledge
            )));
        }
        let comparison = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Traditional vs ZK"),
        );
        frame.render_widget(comparison, chunks[3]);
    }

    fn draw_logs(&self, frame: &mut Frame, area: Rect) {
        let logs = self.logs.lock().unwrap();
        let visible = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = logs
            .iter()
            .rev()
            .take(visible)
            .rev()
            .map(|line| ListItem::new(line.as_str()))
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Logs"));
        frame.render_widget(list, area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let wallet = match self.wallet.account() {
            Some(account) => format!("wallet {}", wallet::truncated(account)),
            None => format!("wallet not connected (c to {})", self.t("nav.connect")),
        };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.store.language().code()),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(format!(" {wallet} ")),
            Span::styled(
                "tab/1-6 pages · t language · c/d wallet · q quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commonware_macros::test_traced;
    use commonware_runtime::{deterministic, Runner};
    use ratatui::backend::TestBackend;

    /// Flatten the rendered buffer into one searchable string.
    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test_traced]
    fn test_results_page_renders_both_views() {
        let executor = deterministic::Runner::default();
        executor.start(|context| async move {
            let logs = Arc::new(Mutex::new(Vec::new()));
            let mut app = App::init(context, logs, "test_ui", 42, None)
                .await
                .expect("failed to initialize app");
            app.page = Page::Results;
            let mut terminal =
                Terminal::new(TestBackend::new(120, 40)).expect("failed to create terminal");
            terminal
                .draw(|frame| app.draw(frame))
                .expect("failed to draw");

            // Distribution (declaration order) and ranking render side by
            // side, with the leader flagged only in the ranking.
            let screen = screen(&terminal);
            assert!(screen.contains("Vote Distribution"));
            assert!(screen.contains("Candidate Ranking"));
            assert!(screen.contains("★ leading"));
            assert!(screen.contains("total ballots: 150"));
            assert!(screen.contains("proofs submitted: 150"));

            // The traditional view drops the proof figures.
            app.view = app.view.toggled();
            terminal
                .draw(|frame| app.draw(frame))
                .expect("failed to draw");
            let screen = self::screen(&terminal);
            assert!(screen.contains("Vote Distribution"));
            assert!(!screen.contains("proofs submitted"));
        });
    }

    #[test_traced]
    fn test_intro_page_renders_header() {
        let executor = deterministic::Runner::default();
        executor.start(|context| async move {
            let logs = Arc::new(Mutex::new(Vec::new()));
            let mut app = App::init(context, logs, "test_ui", 42, None)
                .await
                .expect("failed to initialize app");
            app.page = Page::BlockchainIntro;
            let mut terminal =
                Terminal::new(TestBackend::new(120, 40)).expect("failed to create terminal");
            terminal
                .draw(|frame| app.draw(frame))
                .expect("failed to draw");

            // The page header carries both the title and its subtitle, above
            // the active section's own subtitle.
            let screen = screen(&terminal);
            assert!(screen.contains("Understanding Blockchain Transactions"));
            assert!(screen.contains("from creation to confirmation"));
            assert!(screen.contains("Blockchain Fundamentals"));
        });
    }

    #[test]
    fn test_page_order_matches_navigation() {
        assert_eq!(Page::ALL[0], Page::Home);
        assert_eq!(Page::ALL[5], Page::Results);
        assert_eq!(Page::Home.next(), Page::BlockchainIntro);
        assert_eq!(Page::Results.next(), Page::Home);
        assert_eq!(Page::Home.previous(), Page::Results);

        // Walking forward through every page returns to the start.
        let mut page = Page::Home;
        for _ in 0..Page::ALL.len() {
            page = page.next();
        }
        assert_eq!(page, Page::Home);
    }

    #[test]
    fn test_page_titles_resolve() {
        let lexicon = content::lexicon();
        for page in Page::ALL {
            let key = page.title_key();
            assert_ne!(lexicon.translate(Language::Zh, key), key);
            assert_ne!(lexicon.translate(Language::En, key), key);
        }
    }

    #[test]
    fn test_bar_proportions() {
        assert_eq!(bar(0.0, 4), "░░░░");
        assert_eq!(bar(1.0, 4), "████");
        assert_eq!(bar(0.5, 4), "██░░");

        // Out-of-range ratios clamp instead of panicking.
        assert_eq!(bar(-1.0, 4), "░░░░");
        assert_eq!(bar(2.0, 4), "████");
    }
}
