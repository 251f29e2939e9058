//! Line input that can be interrupted.
//!
//! Standard input is read on a dedicated thread and forwarded over a
//! channel, so a pending read can be raced against Ctrl-C without blocking
//! the runtime or process exit.

use std::future::{Future, pending};
use std::io::{self, BufRead};
use std::pin::Pin;
use std::thread;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// What the next read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// The input stream reached end of file.
    Closed,
    /// The user pressed Ctrl-C while input was pending.
    Interrupted,
}

type Interrupt = Pin<Box<dyn Future<Output = ()> + Send>>;

pub struct Console {
    lines: mpsc::UnboundedReceiver<io::Result<String>>,
    interrupt: Interrupt,
}

impl Console {
    /// Builds a console from a line channel and an interrupt future.
    pub fn new<F>(
        lines: mpsc::UnboundedReceiver<io::Result<String>>,
        interrupt: F,
    ) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            lines,
            interrupt: Box::pin(interrupt),
        }
    }

    /// A console that is never interrupted, fed from `lines`.
    pub fn from_lines(lines: mpsc::UnboundedReceiver<io::Result<String>>) -> Self {
        Self::new(lines, pending())
    }

    /// Reads the process's standard input and listens for Ctrl-C.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || read_lines(io::stdin().lock(), tx));

        let (signal_tx, signal_rx) = oneshot::channel();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    debug!("received Ctrl-C");
                    let _ = signal_tx.send(());
                }
                Err(error) => warn!(%error, "failed to listen for Ctrl-C"),
            }
        });

        Self::new(rx, async move {
            if signal_rx.await.is_err() {
                // No listener; never report an interrupt.
                pending::<()>().await;
            }
        })
    }

    /// Waits for the next line, end of input, or an interrupt.
    ///
    /// The trailing newline is removed. Once `Interrupted` has been
    /// returned the console must not be read again.
    pub async fn next_line(&mut self) -> io::Result<Line> {
        tokio::select! {
            biased;
            () = &mut self.interrupt => Ok(Line::Interrupted),
            line = self.lines.recv() => match line {
                Some(Ok(text)) => Ok(Line::Text(text)),
                Some(Err(error)) => Err(error),
                None => Ok(Line::Closed),
            },
        }
    }
}

/// Forwards lines from `reader` until end of input, a read error, or the
/// receiver going away.
fn read_lines<R: BufRead>(
    mut reader: R,
    tx: mpsc::UnboundedSender<io::Result<String>>,
) {
    loop {
        let mut buf = String::new();
        let next = match reader.read_line(&mut buf) {
            Ok(0) => break,
            Ok(_) => Ok(buf.trim_end_matches(['\r', '\n']).to_string()),
            Err(error) => Err(error),
        };
        let failed = next.is_err();

        if tx.send(next).is_err() || failed {
            break;
        }
    }
    debug!("stdin reader finished");
}
