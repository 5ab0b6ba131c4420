//! Optimistic per-button vote state.
//!
//! DESIGN
//! ======
//! A click toggles `voted` and moves `count` by one immediately, then the
//! component issues `POST /vote/{id}` tagged with a request token. Only the
//! outcome for the newest token touches the display; older outcomes are
//! stale. On failure the display returns to the snapshot taken just before
//! the newest click.
//!
//! Rapid repeated clicks are not queued or rejected: each issues its own
//! request and the newest one decides the final display.

#[cfg(test)]
#[path = "vote_test.rs"]
mod vote_test;

/// Displayed vote values for one tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteSnapshot {
    pub voted: bool,
    pub count: i64,
}

/// What the component must do after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteAction {
    /// Viewer is signed out: show the sign-in notice, nothing else.
    SignInRequired,
    /// Send the vote request for `tool_id`, tagged with `token`.
    Submit { tool_id: u32, token: u64 },
}

/// Result of a finished vote request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    Confirmed { new_count: i64, voted: bool },
    Failed { reason: String },
}

/// How an outcome was applied to the display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoteResolution {
    /// Server values now shown.
    Applied,
    /// Display restored after a failure.
    RolledBack { reason: String },
    /// A newer request is in flight or already resolved; display untouched.
    Stale,
}

/// Vote state owned by a single button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteState {
    pub tool_id: u32,
    pub voted: bool,
    pub count: i64,
    pub disabled: bool,
    issued: u64,
    pending: Option<Pending>,
}

/// Newest outstanding request and the display it replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    token: u64,
    before: VoteSnapshot,
}

impl VoteState {
    pub fn new(tool_id: u32, voted: bool, count: i64, disabled: bool) -> Self {
        Self {
            tool_id,
            voted,
            count,
            disabled,
            issued: 0,
            pending: None,
        }
    }

    pub fn snapshot(&self) -> VoteSnapshot {
        VoteSnapshot { voted: self.voted, count: self.count }
    }

    /// Whether a request for the newest click is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a click. Disabled buttons do not change.
    pub fn click(&mut self) -> VoteAction {
        if self.disabled {
            return VoteAction::SignInRequired;
        }
        let before = self.snapshot();
        self.voted = !self.voted;
        self.count += if self.voted { 1 } else { -1 };
        self.issued += 1;
        self.pending = Some(Pending { token: self.issued, before });
        VoteAction::Submit { tool_id: self.tool_id, token: self.issued }
    }

    /// Apply the outcome of the request tagged `token`.
    pub fn resolve(&mut self, token: u64, outcome: VoteOutcome) -> VoteResolution {
        let Some(pending) = self.pending.filter(|p| p.token == token) else {
            return VoteResolution::Stale;
        };
        self.pending = None;
        match outcome {
            VoteOutcome::Confirmed { new_count, voted } => {
                self.voted = voted;
                self.count = new_count;
                VoteResolution::Applied
            }
            VoteOutcome::Failed { reason } => {
                self.voted = pending.before.voted;
                self.count = pending.before.count;
                VoteResolution::RolledBack { reason }
            }
        }
    }
}

impl From<Result<crate::net::types::VoteReceipt, String>> for VoteOutcome {
    fn from(result: Result<crate::net::types::VoteReceipt, String>) -> Self {
        match result {
            Ok(receipt) => Self::Confirmed { new_count: receipt.new_count, voted: receipt.voted },
            Err(reason) => Self::Failed { reason },
        }
    }
}
