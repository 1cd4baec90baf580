use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyhop::frame::FrameClock;
use skyhop::game::{self, handle_input, GameInput, RunStatus, Session};
use skyhop::{build_info, ui, TICK_INTERVAL_MS};
use std::io;
use std::time::{Duration, Instant};

/// Event-poll timeout while no run is active and no frame is pending.
const IDLE_POLL_MS: u64 = 50;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skyhop {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyhop - Terminal Arcade Game\n");
                println!("Usage: skyhop [options]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!("\nControls:");
                println!("  Space/Up/Enter/Click  Flap (or start a run)");
                println!("  R                     Restart");
                println!("  Q/Esc                 Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyhop --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = Session::new();
    let mut rng = rand::thread_rng();
    let mut clock = FrameClock::new(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        terminal.draw(|frame| ui::draw(frame, &session))?;

        // Block until the next frame is due (or idle-poll when no run is active)
        let now = Instant::now();
        let timeout = clock.poll_timeout(now, Duration::from_millis(IDLE_POLL_MS));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                        handle_input(&mut session, GameInput::Primary);
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        handle_input(&mut session, GameInput::Restart);
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        break;
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if matches!(mouse.kind, MouseEventKind::Down(_)) {
                        handle_input(&mut session, GameInput::Primary);
                    }
                }
                _ => {}
            }
        }

        // Frame scheduling follows the session lifecycle: registered on
        // every transition into Active, cancelled on every transition out
        let now = Instant::now();
        if session.status == RunStatus::Active {
            if !clock.running() {
                clock.start(now);
            }
        } else if clock.running() {
            clock.stop();
        }

        if clock.tick_due(now) {
            game::step(&mut session, &mut rng);
            if session.status != RunStatus::Active {
                clock.stop();
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
