use crate::config::Config;
use crate::feeds::stats::StatsClient;
use crate::feeds::{StatsFetcher, StatsSnapshot, TweetKind};
use crate::ui;
use crate::ui::widgets::actions::{ActionId, ActionsPanel};
use crate::ui::widgets::config_form::ConfigForm;
use crate::ui::widgets::counters::CountersPanel;
use crate::ui::widgets::last_tweet::LastTweetPanel;
use crate::ui::widgets::notifications::{NotificationStack, Severity};
use crate::ui::widgets::overlay::LoadingOverlay;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The timestamp line refreshes on this fixed period.
const CLOCK_INTERVAL: Duration = Duration::from_secs(60);
/// Animation frames and deadlines are evaluated at this cadence.
const UI_TICK: Duration = Duration::from_millis(100);

const EXPORT_DELAY: Duration = Duration::from_secs(2);
const CONN_TEST_DELAY: Duration = Duration::from_secs(3);

const MSG_POLL_FAILED: &str = "Error al actualizar datos";
const MSG_OFFLINE: &str = "Sin conexión a internet";
const MSG_ONLINE: &str = "Conexión restaurada";
const MSG_CONFIG_SAVED: &str = "Configuración guardada exitosamente";
const MSG_CONFIG_SAVE_FAILED: &str = "Error al guardar la configuración";
const MSG_EXPORT_STUB: &str = "Funcionalidad de exportación en desarrollo";
const MSG_CONN_TEST_STUB: &str = "Funcionalidad de prueba de conexiones en desarrollo";
const MSG_TEST_TWEET_OK: &str = "Tweet de prueba publicado";
const MSG_TEST_TWEET_FAILED: &str = "Error al publicar tweet de prueba";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Config,
}

/// A poll failure, split by where it happened so connectivity
/// transitions can be derived from transport-level outcomes.
#[derive(Debug)]
pub enum PollError {
    Transport(String),
    Endpoint(String),
}

pub type PollResult = std::result::Result<StatsSnapshot, PollError>;

fn classify_poll_error(err: anyhow::Error) -> PollError {
    match err.downcast_ref::<reqwest::Error>() {
        Some(e) if e.is_connect() || e.is_timeout() => PollError::Transport(err.to_string()),
        _ => PollError::Endpoint(err.to_string()),
    }
}

/// Completion messages sent back to the event loop by spawned tasks.
enum AppMessage {
    Poll { seq: u64, result: PollResult },
    TestTweet(std::result::Result<(), String>),
}

/// Side effects the state asks the event loop to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Poll,
    TestTweet(TweetKind),
    SaveConfig(Config),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DelayedEffect {
    FinishExport,
    FinishConnTest,
}

#[derive(Debug, Clone)]
struct Delayed {
    fire_at: Instant,
    effect: DelayedEffect,
}

/// All dashboard state, mutated only from the event loop. Every
/// transition takes an explicit `now` so tests can drive it without a
/// terminal or real timers.
pub struct DashboardState {
    config: Config,
    screen: Screen,
    counters: CountersPanel,
    last_tweet: LastTweetPanel,
    actions: ActionsPanel,
    notifications: NotificationStack,
    overlay: LoadingOverlay,
    form: ConfigForm,
    last_update: Option<String>,
    online: bool,
    last_applied_seq: u64,
    delayed: Vec<Delayed>,
    should_quit: bool,
}

impl DashboardState {
    pub fn new(config: Config) -> Self {
        let form = ConfigForm::from_config(&config);
        Self {
            config,
            screen: Screen::Dashboard,
            counters: CountersPanel::new(),
            last_tweet: LastTweetPanel::new(),
            actions: ActionsPanel::new(),
            notifications: NotificationStack::new(),
            overlay: LoadingOverlay::new(),
            form,
            last_update: None,
            online: true,
            last_applied_seq: 0,
            delayed: Vec::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Advance animations and fire every due deadline. A deadline always
    /// runs once scheduled; its effect is a guarded no-op when the
    /// target state has already moved on.
    pub fn tick(&mut self, now: Instant) {
        self.counters.tick(now);
        self.actions.tick(now);
        self.notifications.tick(now);
        self.overlay.tick(now);

        let mut due = Vec::new();
        self.delayed.retain(|d| {
            if d.fire_at <= now {
                due.push(d.effect);
                false
            } else {
                true
            }
        });
        for effect in due {
            match effect {
                DelayedEffect::FinishExport => {
                    self.overlay.hide();
                    self.notifications.push(MSG_EXPORT_STUB, Severity::Info, now);
                }
                DelayedEffect::FinishConnTest => {
                    self.overlay.hide();
                    self.notifications.push(MSG_CONN_TEST_STUB, Severity::Info, now);
                }
            }
        }
    }

    pub fn refresh_timestamp(&mut self) {
        self.last_update = Some(ui::format_timestamp(Local::now()));
    }

    /// Apply one poll completion. Completions are tagged with a
    /// monotonic sequence; anything older than the last applied one is
    /// stale and dropped, so a slow response can never overwrite a
    /// newer one.
    pub fn apply_poll(&mut self, seq: u64, result: PollResult, now: Instant) {
        if seq <= self.last_applied_seq {
            debug!(seq, "dropping stale poll completion");
            return;
        }
        self.last_applied_seq = seq;

        match result {
            Ok(snapshot) => {
                debug!(?snapshot, "stats updated");
                if !self.online {
                    self.online = true;
                    self.notifications.push(MSG_ONLINE, Severity::Success, now);
                }
                self.counters.apply(&snapshot, now);
                if let Some(tweet) = snapshot.last_tweet {
                    self.last_tweet.update(tweet);
                }
                self.refresh_timestamp();
            }
            Err(err) => {
                warn!("poll failed: {:?}", err);
                if let PollError::Transport(_) = err {
                    if self.online {
                        self.online = false;
                        self.notifications.push(MSG_OFFLINE, Severity::Warning, now);
                    }
                }
                self.notifications.push(MSG_POLL_FAILED, Severity::Error, now);
            }
        }
    }

    fn apply_test_tweet(&mut self, result: std::result::Result<(), String>, now: Instant) {
        match result {
            Ok(()) => {
                self.notifications.push(MSG_TEST_TWEET_OK, Severity::Success, now);
            }
            Err(err) => {
                warn!("test tweet failed: {err}");
                self.notifications.push(MSG_TEST_TWEET_FAILED, Severity::Error, now);
            }
        }
    }

    /// The config file was written; reflect the new settings and tell
    /// the user.
    pub fn config_saved(&mut self, config: Config, now: Instant) {
        self.config = config;
        self.overlay.hide();
        self.notifications.push(MSG_CONFIG_SAVED, Severity::Success, now);
    }

    pub fn config_save_failed(&mut self, now: Instant) {
        self.overlay.hide();
        self.notifications.push(MSG_CONFIG_SAVE_FAILED, Severity::Error, now);
    }

    pub fn handle_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        now: Instant,
    ) -> Option<AppCommand> {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(code, now),
            Screen::Config => self.handle_config_key(code, now),
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode, now: Instant) -> Option<AppCommand> {
        match code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('r') => Some(AppCommand::Poll),
            KeyCode::Char('x') => {
                self.notifications.dismiss_oldest();
                None
            }
            KeyCode::Char('c') => {
                self.form = ConfigForm::from_config(&self.config);
                self.screen = Screen::Config;
                None
            }
            KeyCode::Char('e') => {
                self.overlay.show("Preparando exportación...", now);
                self.delayed.push(Delayed {
                    fire_at: now + EXPORT_DELAY,
                    effect: DelayedEffect::FinishExport,
                });
                None
            }
            KeyCode::Char('p') => {
                self.overlay.show("Probando conexiones...", now);
                self.delayed.push(Delayed {
                    fire_at: now + CONN_TEST_DELAY,
                    effect: DelayedEffect::FinishConnTest,
                });
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.actions.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.actions.select_next();
                None
            }
            KeyCode::Enter => match self.actions.activate(now)? {
                ActionId::TestTweet(kind) => Some(AppCommand::TestTweet(kind)),
                ActionId::ExportLogs => {
                    self.overlay.show("Preparando exportación...", now);
                    self.delayed.push(Delayed {
                        fire_at: now + EXPORT_DELAY,
                        effect: DelayedEffect::FinishExport,
                    });
                    None
                }
                ActionId::TestConnections => {
                    self.overlay.show("Probando conexiones...", now);
                    self.delayed.push(Delayed {
                        fire_at: now + CONN_TEST_DELAY,
                        effect: DelayedEffect::FinishConnTest,
                    });
                    None
                }
            },
            _ => None,
        }
    }

    fn handle_config_key(&mut self, code: KeyCode, now: Instant) -> Option<AppCommand> {
        match code {
            KeyCode::Esc => {
                self.screen = Screen::Dashboard;
                None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_previous();
                None
            }
            KeyCode::Backspace => {
                self.form.backspace();
                None
            }
            KeyCode::Enter => {
                let config = self.form.submit()?;
                self.overlay.show("Guardando configuración...", now);
                self.screen = Screen::Dashboard;
                Some(AppCommand::SaveConfig(config))
            }
            KeyCode::Char(c) => {
                self.form.input_char(c);
                None
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, now: Instant) {
        let area = frame.area();

        match self.screen {
            Screen::Dashboard => self.render_dashboard(frame, area),
            Screen::Config => {
                let modal = ui::widgets::center_rect(70, 60, area);
                self.form.render(frame, modal);
            }
        }

        self.overlay.render(frame, area, now);
        self.notifications.render(frame, area);
    }

    fn render_dashboard(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Min(7),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.counters.render(frame, chunks[1]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(34)])
            .split(chunks[2]);

        self.last_tweet.render(frame, middle[0]);
        self.actions.render(frame, middle[1], true);

        let footer = Paragraph::new(Line::from(Span::styled(
            "r: actualizar | c: configuración | e: exportar logs | p: probar conexiones | x: cerrar aviso | q: salir",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(footer, chunks[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            "Bot de Twitter — Panel de control",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, area);

        let mut right = Vec::new();
        if !self.online {
            right.push(Span::styled("sin conexión", Style::default().fg(Color::Red)));
            right.push(Span::raw("  "));
        }
        if let Some(last_update) = &self.last_update {
            right.push(Span::styled(
                format!("Última actualización: {last_update}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let status = Paragraph::new(Line::from(right)).alignment(Alignment::Right);
        frame.render_widget(status, area);
    }
}

/// The Dashboard Controller: owns the terminal loop, both repeating
/// timers, and the channel draining fetch completions.
pub struct App {
    state: DashboardState,
    config: Config,
    config_path: PathBuf,
    fetcher: Arc<dyn StatsFetcher>,
    next_seq: u64,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        let fetcher: Arc<dyn StatsFetcher> = Arc::new(StatsClient::new(
            config.base_url.clone(),
            config.timeout_secs,
        ));
        Self {
            state: DashboardState::new(config.clone()),
            config,
            config_path,
            fetcher,
            next_seq: 0,
        }
    }

    pub async fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();

        let mut poll_timer =
            tokio::time::interval(Duration::from_secs(self.config.poll_interval_secs));
        let mut clock_timer = tokio::time::interval(CLOCK_INTERVAL);
        let mut ui_tick = tokio::time::interval(UI_TICK);
        let mut events = EventStream::new();

        self.state.refresh_timestamp();
        info!("dashboard started, polling {}", self.config.base_url);

        while !self.state.should_quit() {
            tokio::select! {
                _ = poll_timer.tick() => {
                    self.spawn_poll(&tx);
                }
                _ = clock_timer.tick() => {
                    self.state.refresh_timestamp();
                }
                _ = ui_tick.tick() => {
                    let now = Instant::now();
                    self.state.tick(now);
                    terminal.draw(|frame| self.state.render(frame, now))?;
                }
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            let command =
                                self.state.handle_key(key.code, key.modifiers, Instant::now());
                            if let Some(command) = command {
                                self.dispatch(command, &tx, &mut poll_timer);
                            }
                        }
                        Some(Ok(_)) => {}
                        Some(Err(err)) => {
                            warn!("terminal event error: {err}");
                        }
                        None => break,
                    }
                }
                Some(message) = rx.recv() => {
                    let now = Instant::now();
                    match message {
                        AppMessage::Poll { seq, result } => {
                            self.state.apply_poll(seq, result, now);
                        }
                        AppMessage::TestTweet(result) => {
                            self.state.apply_test_tweet(result, now);
                        }
                    }
                }
            }
        }

        info!("dashboard stopped");
        Ok(())
    }

    fn dispatch(
        &mut self,
        command: AppCommand,
        tx: &mpsc::UnboundedSender<AppMessage>,
        poll_timer: &mut tokio::time::Interval,
    ) {
        match command {
            AppCommand::Poll => self.spawn_poll(tx),
            AppCommand::TestTweet(kind) => {
                let fetcher = Arc::clone(&self.fetcher);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = fetcher
                        .post_test_tweet(kind)
                        .await
                        .map_err(|err| err.to_string());
                    let _ = tx.send(AppMessage::TestTweet(result));
                });
            }
            AppCommand::SaveConfig(config) => {
                let now = Instant::now();
                match config.save(&self.config_path) {
                    Ok(()) => {
                        info!("configuration saved to {}", self.config_path.display());
                        self.config = config.clone();
                        self.fetcher = Arc::new(StatsClient::new(
                            config.base_url.clone(),
                            config.timeout_secs,
                        ));
                        *poll_timer = tokio::time::interval(Duration::from_secs(
                            config.poll_interval_secs,
                        ));
                        self.state.config_saved(config, now);
                    }
                    Err(err) => {
                        error!("failed to save configuration: {err:#}");
                        self.state.config_save_failed(now);
                    }
                }
            }
        }
    }

    /// Fire one poll. Fire-and-forget: the completion comes back over
    /// the channel tagged with its sequence number.
    fn spawn_poll(&mut self, tx: &mpsc::UnboundedSender<AppMessage>) {
        self.next_seq += 1;
        let seq = self.next_seq;
        let fetcher = Arc::clone(&self.fetcher);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = fetcher.fetch().await.map_err(classify_poll_error);
            let _ = tx.send(AppMessage::Poll { seq, result });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::LastTweet;
    use crate::ui::widgets::counters::ANIMATION_WINDOW;
    use crate::ui::widgets::notifications::NOTIFICATION_TTL;

    fn make_state() -> DashboardState {
        DashboardState::new(Config::default())
    }

    fn snapshot(total: i64, today: i64, rate: f64) -> StatsSnapshot {
        StatsSnapshot {
            total_tweets: total,
            today_tweets: today,
            success_rate: rate,
            last_tweet: None,
        }
    }

    #[test]
    fn test_successful_poll_updates_counters_and_timestamp() {
        let now = Instant::now();
        let mut state = make_state();

        let mut snap = snapshot(150, 12, 97.5);
        snap.last_tweet = Some(LastTweet {
            content: "Hello world".to_string(),
            kind: "greeting".to_string(),
            posted_at: "01/01/2024 10:00".to_string(),
        });
        state.apply_poll(1, Ok(snap), now);
        state.tick(now + ANIMATION_WINDOW);

        assert_eq!(state.counters.total_text(), "150");
        assert_eq!(state.counters.today_text(), "12");
        assert_eq!(state.counters.success_rate_text(), "97.5%");
        assert_eq!(state.last_tweet.tweet().unwrap().content, "Hello world");
        assert!(state.last_update.is_some());
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_failed_poll_leaves_displays_untouched() {
        let now = Instant::now();
        let mut state = make_state();
        state.apply_poll(1, Ok(snapshot(140, 10, 96.0)), now);
        state.tick(now + ANIMATION_WINDOW);

        state.apply_poll(
            2,
            Err(PollError::Endpoint("stats endpoint error: 500".to_string())),
            now + ANIMATION_WINDOW,
        );

        assert_eq!(state.counters.total_text(), "140");
        assert_eq!(state.counters.today_text(), "10");
        assert_eq!(state.counters.success_rate_text(), "96%");
        assert_eq!(state.notifications.items().len(), 1);
        assert_eq!(state.notifications.items()[0].severity, Severity::Error);
        assert_eq!(state.notifications.items()[0].message, "Error al actualizar datos");
    }

    #[test]
    fn test_error_notification_expires_on_its_own() {
        let now = Instant::now();
        let mut state = make_state();
        state.apply_poll(1, Err(PollError::Endpoint("500".to_string())), now);
        assert_eq!(state.notifications.items().len(), 1);

        state.tick(now + NOTIFICATION_TTL);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_stale_poll_completion_is_dropped() {
        let now = Instant::now();
        let mut state = make_state();
        state.apply_poll(2, Ok(snapshot(150, 12, 97.5)), now);
        state.tick(now + ANIMATION_WINDOW);

        // Sequence 1 finished late; it must not overwrite sequence 2.
        state.apply_poll(1, Ok(snapshot(100, 5, 80.0)), now + ANIMATION_WINDOW);
        state.tick(now + ANIMATION_WINDOW * 2);

        assert_eq!(state.counters.total_text(), "150");
        assert_eq!(state.counters.success_rate_text(), "97.5%");
    }

    #[test]
    fn test_transport_failure_produces_offline_then_online_notifications() {
        let now = Instant::now();
        let mut state = make_state();

        state.apply_poll(1, Err(PollError::Transport("refused".to_string())), now);
        let messages: Vec<_> = state
            .notifications
            .items()
            .iter()
            .map(|n| n.message.clone())
            .collect();
        assert!(messages.contains(&"Sin conexión a internet".to_string()));

        // A second transport failure does not repeat the offline banner.
        state.apply_poll(2, Err(PollError::Transport("refused".to_string())), now);
        let offline_count = state
            .notifications
            .items()
            .iter()
            .filter(|n| n.message == "Sin conexión a internet")
            .count();
        assert_eq!(offline_count, 1);

        state.apply_poll(3, Ok(snapshot(1, 1, 100.0)), now);
        assert!(state
            .notifications
            .items()
            .iter()
            .any(|n| n.message == "Conexión restaurada" && n.severity == Severity::Success));
    }

    #[test]
    fn test_refresh_key_requests_a_poll() {
        let now = Instant::now();
        let mut state = make_state();
        let command = state.handle_key(KeyCode::Char('r'), KeyModifiers::NONE, now);
        assert_eq!(command, Some(AppCommand::Poll));
    }

    #[test]
    fn test_test_tweet_activation_flows_through() {
        let now = Instant::now();
        let mut state = make_state();
        let command = state.handle_key(KeyCode::Enter, KeyModifiers::NONE, now);
        assert_eq!(command, Some(AppCommand::TestTweet(TweetKind::Weather)));

        // Button is processing: a second Enter is a no-op.
        let command = state.handle_key(KeyCode::Enter, KeyModifiers::NONE, now);
        assert_eq!(command, None);
    }

    #[test]
    fn test_export_logs_stub_sequence() {
        let now = Instant::now();
        let mut state = make_state();
        state.handle_key(KeyCode::Char('e'), KeyModifiers::NONE, now);

        assert!(state.overlay.is_visible());
        assert_eq!(state.overlay.message(), Some("Preparando exportación..."));

        state.tick(now + Duration::from_secs(1));
        assert!(state.overlay.is_visible());

        state.tick(now + EXPORT_DELAY);
        assert!(!state.overlay.is_visible());
        assert_eq!(
            state.notifications.items()[0].message,
            "Funcionalidad de exportación en desarrollo"
        );
        assert_eq!(state.notifications.items()[0].severity, Severity::Info);
    }

    #[test]
    fn test_connection_test_stub_sequence() {
        let now = Instant::now();
        let mut state = make_state();
        state.handle_key(KeyCode::Char('p'), KeyModifiers::NONE, now);
        assert_eq!(state.overlay.message(), Some("Probando conexiones..."));

        state.tick(now + CONN_TEST_DELAY);
        assert!(!state.overlay.is_visible());
        assert_eq!(
            state.notifications.items()[0].message,
            "Funcionalidad de prueba de conexiones en desarrollo"
        );
    }

    #[test]
    fn test_config_form_submit_emits_save_command_and_overlay() {
        let now = Instant::now();
        let mut state = make_state();
        state.handle_key(KeyCode::Char('c'), KeyModifiers::NONE, now);
        assert_eq!(state.screen, Screen::Config);

        let command = state.handle_key(KeyCode::Enter, KeyModifiers::NONE, now);
        match command {
            Some(AppCommand::SaveConfig(config)) => assert_eq!(config, Config::default()),
            other => panic!("expected SaveConfig, got {other:?}"),
        }
        assert_eq!(state.overlay.message(), Some("Guardando configuración..."));
        assert_eq!(state.screen, Screen::Dashboard);

        state.config_saved(Config::default(), now);
        assert!(!state.overlay.is_visible());
        assert_eq!(
            state.notifications.items()[0].message,
            "Configuración guardada exitosamente"
        );
    }

    #[test]
    fn test_config_form_blocked_submit_stays_on_form() {
        let now = Instant::now();
        let mut state = make_state();
        state.handle_key(KeyCode::Char('c'), KeyModifiers::NONE, now);

        // Blank out the URL field, then try to submit.
        let url_len = state.form.field(0).value().len();
        for _ in 0..url_len {
            state.handle_key(KeyCode::Backspace, KeyModifiers::NONE, now);
        }
        let command = state.handle_key(KeyCode::Enter, KeyModifiers::NONE, now);
        assert_eq!(command, None);
        assert_eq!(state.screen, Screen::Config);
        assert!(!state.overlay.is_visible());
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();
        let mut state = make_state();
        state.handle_key(KeyCode::Char('q'), KeyModifiers::NONE, now);
        assert!(state.should_quit());

        let mut state = make_state();
        state.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL, now);
        assert!(state.should_quit());
    }

    #[test]
    fn test_dismiss_key_removes_oldest_notification() {
        let now = Instant::now();
        let mut state = make_state();
        state.apply_poll(1, Err(PollError::Endpoint("500".to_string())), now);
        state.apply_poll(2, Err(PollError::Endpoint("500".to_string())), now);
        assert_eq!(state.notifications.items().len(), 2);

        state.handle_key(KeyCode::Char('x'), KeyModifiers::NONE, now);
        assert_eq!(state.notifications.items().len(), 1);
    }

    #[test]
    fn test_snapshot_without_last_tweet_keeps_previous_one() {
        let now = Instant::now();
        let mut state = make_state();
        let mut snap = snapshot(10, 1, 100.0);
        snap.last_tweet = Some(LastTweet {
            content: "primero".to_string(),
            kind: "news".to_string(),
            posted_at: "10:00:00".to_string(),
        });
        state.apply_poll(1, Ok(snap), now);

        state.apply_poll(2, Ok(snapshot(11, 2, 100.0)), now);
        assert_eq!(state.last_tweet.tweet().unwrap().content, "primero");
    }
}
