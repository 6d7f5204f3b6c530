//! Rendering surface without a renderer.
//!
//! Records every load and keeps scripts pending until the caller completes
//! them, which makes the asynchronous script round trip observable. Used by
//! the command line and by tests.

use crate::kernel::services::ports::{RenderSurface, ScriptReply};
use std::collections::VecDeque;

struct PendingScript {
    script: String,
    reply: ScriptReply,
}

#[derive(Default)]
pub struct HeadlessSurface {
    loaded: Vec<String>,
    pending: VecDeque<PendingScript>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }

    pub fn current_uri(&self) -> Option<&str> {
        self.loaded.last().map(String::as_str)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Sources of the scripts still in flight, oldest first.
    pub fn pending_scripts(&self) -> Vec<&str> {
        self.pending.iter().map(|p| p.script.as_str()).collect()
    }

    /// Completes the oldest pending script with `result`.
    pub fn complete_next(&mut self, result: &str) -> bool {
        match self.pending.pop_front() {
            Some(pending) => {
                pending.reply.resolve(result);
                true
            }
            None => false,
        }
    }

    /// Completes the newest pending script, leaving older ones in flight.
    pub fn complete_last(&mut self, result: &str) -> bool {
        match self.pending.pop_back() {
            Some(pending) => {
                pending.reply.resolve(result);
                true
            }
            None => false,
        }
    }

    /// Completes every pending script with the same result.
    pub fn resolve_all(&mut self, result: &str) -> usize {
        let mut count = 0;
        while self.complete_next(result) {
            count += 1;
        }
        count
    }
}

impl RenderSurface for HeadlessSurface {
    fn load(&mut self, uri: &str) {
        tracing::debug!(uri, "surface load");
        self.loaded.push(uri.to_string());
    }

    fn run_script(&mut self, script: &str, reply: ScriptReply) {
        self.pending.push_back(PendingScript {
            script: script.to_string(),
            reply,
        });
    }
}
