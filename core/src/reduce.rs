//! Sequence predicates over [`Logic`] values.
//!
//! `all`, `any` and `known` split large slices into one contiguous chunk per
//! task and scan the chunks on scoped threads. The first task to meet a
//! decisive element raises a shared flag; the others check it before every
//! element and stop. Small slices are scanned on the calling thread.
//!
//! The process-wide [`Config::global`] is stored in relaxed atomics. A call
//! already in flight keeps the settings it read on entry, and concurrent
//! adjustments through [`parallel_tasks`] may lose updates.

use std::{
    num::NonZeroUsize,
    ops::Range,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    thread,
};

use tracing::{debug, trace};

use crate::{Logic, Trit};

const DEFAULT_TASKS_PER_CPU: usize = 2;
const MAX_TASKS_PER_CPU: usize = 16;

/// Smallest chunk a task is given before the scan stays sequential.
pub const DEFAULT_MIN_LOAD: usize = 1024;

// Zero means "not set yet", resolved to the default on read.
static GLOBAL_TASKS: AtomicUsize = AtomicUsize::new(0);
static GLOBAL_MIN_LOAD: AtomicUsize = AtomicUsize::new(DEFAULT_MIN_LOAD);

fn hardware_concurrency() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Upper bound for the task count.
#[must_use]
pub fn max_tasks() -> usize {
    hardware_concurrency() * MAX_TASKS_PER_CPU
}

fn clamp_tasks(tasks: usize) -> usize {
    tasks.clamp(1, max_tasks())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    tasks: usize,
    min_load: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tasks: clamp_tasks(hardware_concurrency() * DEFAULT_TASKS_PER_CPU),
            min_load: DEFAULT_MIN_LOAD,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Config {
        Config::default()
    }

    /// Reads the process-wide configuration.
    #[must_use]
    pub fn global() -> Config {
        let tasks = match GLOBAL_TASKS.load(Ordering::Relaxed) {
            0 => Config::default().tasks,
            n => n,
        };
        Config {
            tasks,
            min_load: GLOBAL_MIN_LOAD.load(Ordering::Relaxed),
        }
    }

    /// Replaces the process-wide configuration.
    pub fn install(self) {
        GLOBAL_TASKS.store(self.tasks, Ordering::Relaxed);
        GLOBAL_MIN_LOAD.store(self.min_load, Ordering::Relaxed);
    }

    #[must_use]
    pub fn with_tasks(mut self, tasks: usize) -> Config {
        self.tasks = clamp_tasks(tasks);
        self
    }

    #[must_use]
    pub fn with_min_load(mut self, min_load: usize) -> Config {
        self.min_load = min_load.max(1);
        self
    }

    #[must_use]
    pub fn tasks(&self) -> usize {
        self.tasks
    }

    #[must_use]
    pub fn min_load(&self) -> usize {
        self.min_load
    }

    /// Adds `delta` to the task count, clamps it to `1..=max_tasks()` and
    /// returns the new count.
    pub fn adjust_tasks(&mut self, delta: isize) -> usize {
        self.tasks = clamp_tasks(self.tasks.saturating_add_signed(delta));
        self.tasks
    }

    /// True iff every element is True. Empty input is False.
    pub fn all<T: Logic + Sync>(&self, values: &[T]) -> Trit {
        ALL.reduce(self, values)
    }

    /// True iff some element is True. Empty input is False.
    pub fn any<T: Logic + Sync>(&self, values: &[T]) -> Trit {
        ANY.reduce(self, values)
    }

    /// True iff no element is True. Empty input is True.
    ///
    /// Always scans on the calling thread, so the task settings do not apply.
    #[allow(clippy::unused_self)]
    pub fn none<T: Logic>(&self, values: &[T]) -> Trit {
        NONE.scan(values)
    }

    /// True iff no element is Unknown. Empty input is False.
    pub fn known<T: Logic + Sync>(&self, values: &[T]) -> Trit {
        KNOWN.reduce(self, values)
    }
}

/// Reads the process-wide task count, first adding `delta` to it when
/// `delta` is non-zero. The result is clamped to `1..=max_tasks()`.
pub fn parallel_tasks(delta: isize) -> usize {
    let mut config = Config::global();
    if delta != 0 {
        GLOBAL_TASKS.store(config.adjust_tasks(delta), Ordering::Relaxed);
    }
    config.tasks
}

pub fn all<T: Logic + Sync>(values: &[T]) -> Trit {
    Config::global().all(values)
}

pub fn any<T: Logic + Sync>(values: &[T]) -> Trit {
    Config::global().any(values)
}

pub fn none<T: Logic>(values: &[T]) -> Trit {
    Config::global().none(values)
}

pub fn known<T: Logic + Sync>(values: &[T]) -> Trit {
    Config::global().known(values)
}

/// A short-circuiting quantifier: the first element for which `decisive`
/// holds fixes the result to `verdict`.
struct Quantifier {
    decisive: fn(Trit) -> bool,
    verdict: Trit,
    otherwise: Trit,
    empty: Trit,
}

fn not_true(t: Trit) -> bool {
    !t.is_true()
}

const ALL: Quantifier = Quantifier {
    decisive: not_true,
    verdict: Trit::FALSE,
    otherwise: Trit::TRUE,
    empty: Trit::FALSE,
};

const ANY: Quantifier = Quantifier {
    decisive: Trit::is_true,
    verdict: Trit::TRUE,
    otherwise: Trit::FALSE,
    empty: Trit::FALSE,
};

const NONE: Quantifier = Quantifier {
    decisive: Trit::is_true,
    verdict: Trit::FALSE,
    otherwise: Trit::TRUE,
    empty: Trit::TRUE,
};

const KNOWN: Quantifier = Quantifier {
    decisive: Trit::is_unknown,
    verdict: Trit::FALSE,
    otherwise: Trit::TRUE,
    empty: Trit::FALSE,
};

impl Quantifier {
    fn reduce<T: Logic + Sync>(&self, config: &Config, values: &[T]) -> Trit {
        if values.is_empty() {
            return self.empty;
        }
        let tasks = config.tasks;
        let chunk = values.len() / tasks;
        if tasks == 1 || chunk < config.min_load {
            trace!(len = values.len(), tasks, chunk, "sequential scan");
            return self.scan(values);
        }

        debug!(len = values.len(), tasks, chunk, "parallel scan");
        let decided = AtomicBool::new(false);
        thread::scope(|scope| {
            for range in chunks(values.len(), tasks) {
                let part = &values[range];
                let decided = &decided;
                let spawned = thread::Builder::new()
                    .spawn_scoped(scope, move || self.scan_chunk(part, decided));
                if let Err(err) = spawned {
                    debug!(%err, len = part.len(), "spawn failed, scanning chunk inline");
                    self.scan_chunk(part, decided);
                }
            }
        });

        if decided.into_inner() {
            self.verdict
        } else {
            self.otherwise
        }
    }

    fn scan<T: Logic>(&self, values: &[T]) -> Trit {
        if values.is_empty() {
            self.empty
        } else if values.iter().any(|v| (self.decisive)(v.to_trit())) {
            self.verdict
        } else {
            self.otherwise
        }
    }

    fn scan_chunk<T: Logic>(&self, part: &[T], decided: &AtomicBool) {
        for v in part {
            if decided.load(Ordering::Relaxed) {
                trace!("chunk cancelled");
                return;
            }
            if (self.decisive)(v.to_trit()) {
                decided.store(true, Ordering::Relaxed);
                return;
            }
        }
    }
}

/// Splits `0..len` into `tasks` contiguous ranges of `len / tasks` elements;
/// the last range absorbs the remainder.
fn chunks(len: usize, tasks: usize) -> impl Iterator<Item = Range<usize>> {
    let size = len / tasks;
    (0..tasks).map(move |i| {
        let start = i * size;
        let end = if i + 1 == tasks { len } else { start + size };
        start..end
    })
}
