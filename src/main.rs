mod event;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use cryptic::app::{App, ExitNavigator};
use cryptic::config::Config;
use cryptic::input::{self, KeyAction};
use cryptic::logging;
use cryptic::puzzle::config::PuzzleConfig;
use cryptic::ui::components::check_button::CheckButton;
use cryptic::ui::components::clue_panel::{CluePanel, PuzzleMeta};
use cryptic::ui::components::header::Header;
use cryptic::ui::components::letter_grid::LetterGrid;
use cryptic::ui::components::toast::ToastView;
use cryptic::ui::components::video_overlay::VideoOverlayView;
use cryptic::ui::components::virtual_keyboard::VirtualKeyboard;
use cryptic::ui::keypad::Control;
use cryptic::ui::layout::PuzzleLayout;
use cryptic::ui::theme::Theme;
use event::{AppEvent, EventHandler};

#[derive(Parser)]
#[command(name = "cryptic", version, about = "Terminal cryptic-clue puzzle")]
struct Cli {
    #[arg(short, long, help = "Puzzle file (.toml or .json)")]
    puzzle: Option<PathBuf>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Log file path")]
    log_file: Option<PathBuf>,

    #[arg(long, help = "Write the default config file and exit")]
    init_config: bool,

    #[arg(long, help = "List bundled themes and exit")]
    list_themes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();

    if cli.init_config {
        config.save()?;
        println!("Wrote {}", Config::config_path().display());
        return Ok(());
    }
    if cli.list_themes {
        for name in Theme::available_themes() {
            println!("{name}");
        }
        return Ok(());
    }

    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(path) = cli.log_file {
        config.log_file = path.to_string_lossy().to_string();
    }
    if let Err(err) = logging::init(Path::new(&config.log_file)) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    let puzzle = match &cli.puzzle {
        Some(path) => PuzzleConfig::load(path)
            .with_context(|| format!("loading puzzle {}", path.display()))?,
        None => PuzzleConfig::default(),
    };
    let theme = Theme::load(&config.theme).unwrap_or_default();
    let tick_rate = Duration::from_millis(config.tick_rate_ms);

    let mut app = App::new(config, puzzle, theme, ExitNavigator::default());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("Error: {err:?}");
    }
    if let Some(target) = &app.navigator.target {
        println!("Back to {target}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        let completed = terminal.draw(|frame| render(frame, app))?;
        app.viewport = completed.area;

        match events.next()? {
            AppEvent::Key(key) => {
                let action = input::map_key(key, app.video_open());
                app.handle_action(action);
            }
            AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(_, _) => {}
        }

        // Deferred effects run on every pass, not only on ticks, so a busy
        // stream of input does not stall animations.
        app.run_timers();

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(control) = app.control_at(mouse.column, mouse.row) {
        app.handle_action(KeyAction::Tap(control));
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let Some(session) = app.session.as_ref() else {
        return;
    };

    let layout = PuzzleLayout::new(area);
    let selected = app.cursor.control();

    frame.render_widget(Header::new("cryptic", &app.theme), layout.header);
    frame.render_widget(PuzzleMeta::new(session, &app.theme), layout.meta);
    frame.render_widget(CluePanel::new(session, &app.theme), layout.clue);
    frame.render_widget(
        LetterGrid::new(session, &app.theme).shake_offset(app.shake_offset()),
        layout.grid,
    );
    frame.render_widget(
        VirtualKeyboard::new(Some(selected), &app.theme),
        layout.keyboard,
    );
    frame.render_widget(
        CheckButton::new(
            session.is_complete(),
            selected == Control::Check,
            &app.theme,
        ),
        layout.check,
    );

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Arrows] Select  [Space] Tap  [?] Info  [Esc] Back  [Ctrl+C] Quit ",
        Style::default().fg(colors.muted()),
    )));
    frame.render_widget(footer, layout.footer);

    if let Some(toast) = session.feedback().latest_toast() {
        frame.render_widget(ToastView::new(toast, &app.theme), area);
    }
    if let Some(video) = session.feedback().video() {
        frame.render_widget(VideoOverlayView::new(video, &app.theme), area);
    }
}
