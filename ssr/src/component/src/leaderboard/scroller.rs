use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use consts::leaderboard::MAX_SCROLL_ATTEMPTS;

use super::list_host::{ListHost, ScrollToIndexOptions};
use super::types::ThisPlayer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollState {
    Idle,
    Scrolling { attempts: u32 },
    Succeeded { attempts: u32 },
    Exhausted { attempts: u32 },
    Unmounted,
}

impl ScrollState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Idle | Self::Scrolling { .. })
    }
}

/// Raised by the list host when it could not honour a scroll request.
#[derive(Clone, Debug, Default)]
pub struct FailureFlag(Arc<AtomicBool>);

impl FailureFlag {
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Keeps asking the list host to reveal the current player's row until one
/// attempt goes through or the attempt budget runs out.
///
/// Rows outside the rendered window have no layout, so early attempts are
/// expected to fail. Failures are never surfaced.
#[derive(Debug)]
pub struct VisibilityScroller {
    target: Option<usize>,
    max_attempts: u32,
    options: ScrollToIndexOptions,
    failure: FailureFlag,
    state: ScrollState,
}

impl VisibilityScroller {
    pub fn new(this_player: &ThisPlayer) -> Self {
        Self {
            target: this_player.target_index(),
            max_attempts: MAX_SCROLL_ATTEMPTS,
            options: ScrollToIndexOptions::default(),
            failure: FailureFlag::default(),
            state: ScrollState::Idle,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Handle for the list host's failure callback.
    pub fn failure_flag(&self) -> FailureFlag {
        self.failure.clone()
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn mount(&mut self) -> ScrollState {
        if self.state == ScrollState::Idle {
            self.state = match self.target {
                Some(_) if self.max_attempts > 0 => ScrollState::Scrolling { attempts: 0 },
                _ => ScrollState::Exhausted { attempts: 0 },
            };
        }
        self.state
    }

    /// One timer tick. A no-op unless scrolling.
    pub fn tick<H: ListHost + ?Sized>(&mut self, host: &H) -> ScrollState {
        let ScrollState::Scrolling { attempts } = self.state else {
            return self.state;
        };
        let Some(index) = self.target else {
            self.state = ScrollState::Exhausted { attempts };
            return self.state;
        };

        self.failure.clear();
        let result = host.scroll_to_index(index, self.options);
        if let Err(e) = &result {
            log::debug!("scroll to row {index} failed: {e}");
        }

        let attempts = attempts + 1;
        self.state = if result.is_ok() && !self.failure.is_raised() {
            ScrollState::Succeeded { attempts }
        } else if attempts >= self.max_attempts {
            ScrollState::Exhausted { attempts }
        } else {
            ScrollState::Scrolling { attempts }
        };
        self.state
    }

    pub fn unmount(&mut self) -> ScrollState {
        if !self.state.is_terminal() {
            self.state = ScrollState::Unmounted;
        }
        self.state
    }
}
