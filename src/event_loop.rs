use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

pub enum ControlFlow {
    Continue,
    Quit,
}

/// The single synchronous pump driving the shell. All session mutations
/// happen inside one `handler` call; there is never overlap between two
/// mutations of the window collection.
pub struct EventLoop {
    poll_interval: Duration,
}

impl EventLoop {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Run until the handler asks to quit. The handler is called with
    /// `None` when the poll interval elapses without input (render ticks,
    /// deferred renderer settlement) and with `Some(event)` for input.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(None)? {
                break;
            }

            if event::poll(self.poll_interval)? {
                // Drain bursts so rapid mouse drags do not fall behind the
                // input stream.
                loop {
                    let evt = event::read()?;
                    if let ControlFlow::Quit = handler(Some(evt))? {
                        return Ok(());
                    }
                    if !event::poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}
