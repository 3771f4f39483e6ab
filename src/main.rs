use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::time::Duration;
use trivia_quiz::{
    db, logger, spawn_fetch_worker, App, Config, FetchResponse, OpenTdbClient,
    SqliteHighScoreStore,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> io::Result<()> {
    let config = Config::from_env();
    logger::init(&config.log_path());
    logger::log(&format!("Starting with API {}", config.api_url));

    let conn = db::init_db(&config.db_path()).map_err(io::Error::other)?;
    let store = SqliteHighScoreStore::new(conn);
    let client = OpenTdbClient::new(&config).map_err(io::Error::other)?;

    let (request_tx, request_rx) = crossbeam_channel::unbounded();
    let (response_tx, response_rx) = crossbeam_channel::unbounded::<FetchResponse>();
    let _worker = spawn_fetch_worker(client, response_tx, request_rx);

    let mut app = App::new(store, request_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &response_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exiting with error: {}", e));
    }
    result
}

fn run<B: ratatui::backend::Backend + Write>(
    terminal: &mut Terminal<B>,
    app: &mut App<SqliteHighScoreStore>,
    responses: &crossbeam_channel::Receiver<FetchResponse>,
) -> io::Result<()> {
    loop {
        for response in responses.try_iter() {
            app.handle_fetch_response(response);
        }

        if let Some(cue) = app.tick() {
            let backend = terminal.backend_mut();
            backend.write_all(cue.bell().as_bytes())?;
            Write::flush(backend)?;
        }

        terminal.draw(|f| app.draw(f))?;

        if event::poll(FRAME_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            logger::log("Quit requested");
            return Ok(());
        }
    }
}
