use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use shell_wm::apps::AppId;
use shell_wm::content::default_loader;
use shell_wm::event_loop::{ControlFlow, EventLoop};
use shell_wm::identity::{AppIdentity, ContentProps};
use shell_wm::runner::Shell;
use shell_wm::tracing_sub;

#[derive(Debug, Parser)]
#[command(name = "shell-wm", version, about = "A desktop shell for the terminal")]
struct Cli {
    /// JSON manifest of agents to install at startup.
    #[arg(long)]
    agents: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Render/poll interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Start with no windows instead of the default chat window.
    #[arg(long)]
    empty: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log_file.as_deref());

    let mut shell = Shell::new(default_loader());
    if let Some(path) = &cli.agents {
        if let Err(err) = shell.session.agents_mut().load_manifest(path) {
            // start without agents rather than refusing to start
            eprintln!("shell-wm: {err}");
        }
    }
    if !cli.empty {
        shell
            .session
            .open(AppIdentity::Builtin(AppId::Chat), ContentProps::Empty);
    }

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = EventLoop::new(Duration::from_millis(cli.tick_ms)).run(|event| {
        match event {
            Some(evt) => {
                if let ControlFlow::Quit = shell.handle_event(&evt) {
                    return Ok(ControlFlow::Quit);
                }
            }
            None => shell.tick(),
        }
        terminal.draw(|frame| shell.draw(frame))?;
        Ok(ControlFlow::Continue)
    });

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;

    result
}
