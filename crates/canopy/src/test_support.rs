//! Scripted nodes and event logs shared by the unit tests.

use std::sync::{Arc, Mutex};

use crate::{Context, Node, Status};

/// Shared event log. Nodes push `"name:hook"` entries as the protocol
/// drives them, and tests assert on ordering or counts.
pub(crate) type EventLog = Arc<Mutex<Vec<String>>>;

pub(crate) fn new_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn entries(log: &EventLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

pub(crate) fn count(log: &EventLog, entry: &str) -> usize {
    log.lock().unwrap().iter().filter(|e| *e == entry).count()
}

/// Leaf that replays a scripted list of results, repeating the last entry
/// once the script runs out, and records every hook invocation.
pub(crate) struct ScriptNode {
    name: &'static str,
    status: Status,
    script: Vec<Status>,
    cursor: usize,
    log: Option<EventLog>,
}

impl ScriptNode {
    pub fn new(script: Vec<Status>) -> Self {
        assert!(!script.is_empty(), "script must have at least one entry");
        Self {
            name: "node",
            status: Status::Idle,
            script,
            cursor: 0,
            log: None,
        }
    }

    /// Script node that returns the same status forever.
    pub fn always(status: Status) -> Self {
        Self::new(vec![status])
    }

    /// Named variant that records hook calls into the given log.
    pub fn named(name: &'static str, script: Vec<Status>, log: &EventLog) -> Self {
        let mut node = Self::new(script);
        node.name = name;
        node.log = Some(Arc::clone(log));
        node
    }

    fn record(&self, hook: &str) {
        if let Some(log) = &self.log {
            log.lock().unwrap().push(format!("{}:{}", self.name, hook));
        }
    }
}

impl<B> Node<B> for ScriptNode {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn execute(&mut self, _ctx: &mut Context<B>) -> Status {
        self.record("execute");
        let index = self.cursor.min(self.script.len() - 1);
        self.cursor += 1;
        self.script[index]
    }

    fn on_initialize(&mut self, _ctx: &mut Context<B>) {
        self.record("initialize");
    }

    fn on_begin(&mut self, _ctx: &mut Context<B>) {
        self.record("begin");
    }

    fn on_end(&mut self, _ctx: &mut Context<B>) {
        self.record("end");
    }

    fn on_abort(&mut self, _ctx: &mut Context<B>) {
        self.record("abort");
    }

    fn on_dispose(&mut self, _ctx: &mut Context<B>) {
        self.record("dispose");
    }
}
