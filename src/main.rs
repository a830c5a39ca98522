//! slaybot -- a heuristic agent for hexagonal territory-control games.
//!
//! This binary reads JSON-lines events from stdin and writes the agent's
//! actions to stdout, one JSON object per line. A transport adapter owns the
//! connection to the game server.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use log::{debug, info, warn};

use slaybot::agent::Agent;
use slaybot::board::{Action, ActionSink};
use slaybot::economy::GameClock;
use slaybot::protocol::{
    encode_action, encode_surrender, parse_event, roster, Event, ProtocolError, UpdateMessage,
};

/// Writes actions as protocol lines.
struct LineSink<W: Write> {
    out: W,
}

impl<W: Write> LineSink<W> {
    fn send(&mut self, line: Result<String, ProtocolError>) {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("failed to encode action: {}", e);
                return;
            }
        };
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            warn!("failed to write action: {}", e);
        }
    }
}

impl<W: Write> ActionSink for LineSink<W> {
    fn emit(&mut self, action: Action) {
        self.send(encode_action(&action));
    }

    fn surrender(&mut self) {
        self.send(encode_surrender());
    }
}

/// The game currently being played.
struct Session {
    agent: Agent,
    clock: Option<GameClock>,
    deadline: Option<Instant>,
}

impl Session {
    fn update(&mut self, msg: UpdateMessage) {
        let snapshot = match msg.into_snapshot(self.agent.config()) {
            Ok(s) => s,
            Err(e) => {
                warn!("dropping update: {}", e);
                return;
            }
        };
        if snapshot.balance.is_valid() {
            self.clock = Some(GameClock::new(snapshot.now));
        }
        if let Some(delay) = self.agent.update(snapshot) {
            if self.deadline.is_none() {
                self.deadline = Some(Instant::now() + delay);
            }
        }
    }

    fn fire<W: Write>(&mut self, sink: &mut LineSink<W>) {
        self.deadline = None;
        let Some(clock) = self.clock else {
            return;
        };
        if let Some(delay) = self.agent.tick(clock.now(), sink) {
            debug!("next round in {:?}", delay);
            self.deadline = Some(Instant::now() + delay);
        }
    }

    fn stop(&mut self) {
        self.agent.stop();
        self.deadline = None;
    }
}

/// Parses stdin on a background thread so the main loop can wait on
/// events and its own timer at once.
fn spawn_reader() -> Receiver<Event> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_event(&line) {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => warn!("skipping line: {}", e),
            }
        }
    });
    rx
}

/// Runs the main loop: dispatches events and fires the agent's wake-ups.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let events = spawn_reader();
    let stdout = io::stdout();
    let mut sink = LineSink {
        out: io::BufWriter::new(stdout.lock()),
    };
    let mut session: Option<Session> = None;

    loop {
        let deadline = session.as_ref().and_then(|s| s.deadline);
        if let (Some(at), Some(s)) = (deadline, session.as_mut()) {
            if Instant::now() >= at {
                s.fire(&mut sink);
                continue;
            }
        }

        let received = match deadline {
            Some(at) => events.recv_timeout(at.saturating_duration_since(Instant::now())),
            None => events.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        let event = match received {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        match event {
            Event::Config { config, players } => {
                if let Some(mut old) = session.take() {
                    old.stop();
                }
                let players = match roster(&players, &config) {
                    Ok(p) => p,
                    Err(e) => {
                        warn!("rejecting config: {}", e);
                        continue;
                    }
                };
                info!("playing with:");
                for p in &players {
                    info!(" - {} ({})", p.name, p.rating);
                }
                session = Some(Session {
                    agent: Agent::from_entropy(config, players),
                    clock: None,
                    deadline: None,
                });
            }
            Event::Update(msg) => match session.as_mut() {
                Some(s) => s.update(msg),
                None => warn!("dropping update: {}", ProtocolError::NoConfig),
            },
            Event::Stop => {
                if let Some(s) = session.as_mut() {
                    s.stop();
                }
            }
            Event::Quit => break,
        }
    }
}
