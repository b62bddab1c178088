//! Doubles shared by the unit tests: an in-memory store, a hand-cranked clock,
//! a recording tracker and a logger that keeps error records per thread.

use futures::channel::oneshot;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::analytics::{ConversionEvent, ConversionTracker};
use crate::funnel::lead::{Lead, StoredLead};
use crate::funnel::scheduler::Scheduler;
use crate::store::{LeadStore, StoreError};

#[derive(Default)]
struct MemoryTable {
    rows: Vec<StoredLead>,
    inserts: usize,
    fail_with: Option<StoreError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Clones share the same table.
#[derive(Clone, Default)]
pub struct MemoryStore {
    table: Rc<RefCell<MemoryTable>>,
}

impl MemoryStore {
    pub fn failing(error: StoreError) -> Self {
        let store = Self::default();
        store.table.borrow_mut().fail_with = Some(error);
        store
    }

    /// The next write waits until the returned sender fires (or is dropped).
    pub fn hold_next_write(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.table.borrow_mut().gate = Some(rx);
        tx
    }

    pub fn seed(&self, row: StoredLead) {
        self.table.borrow_mut().rows.push(row);
    }

    pub fn rows(&self) -> Vec<StoredLead> {
        self.table.borrow().rows.clone()
    }

    /// Write attempts, including failed ones.
    pub fn inserts(&self) -> usize {
        self.table.borrow().inserts
    }

    async fn store(&self, lead: &Lead) -> Result<StoredLead, StoreError> {
        let gate = {
            let mut table = self.table.borrow_mut();
            table.inserts += 1;
            table.gate.take()
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let mut table = self.table.borrow_mut();
        if let Some(error) = table.fail_with.clone() {
            return Err(error);
        }
        let id = table.rows.len() as i64 + 1;
        let row = StoredLead {
            id: Some(id),
            lead: lead.clone(),
            created_at: Some(format!("2024-08-10T12:00:{:02}.000+00:00", id)),
        };
        table.rows.push(row.clone());
        Ok(row)
    }
}

impl LeadStore for MemoryStore {
    async fn insert(&self, lead: &Lead) -> Result<(), StoreError> {
        self.store(lead).await.map(|_| ())
    }

    async fn insert_returning(&self, lead: &Lead) -> Result<Vec<StoredLead>, StoreError> {
        self.store(lead).await.map(|row| vec![row])
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let table = self.table.borrow();
        match &table.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(table.rows.len() as u64),
        }
    }

    async fn recent(&self, limit: usize) -> Result<Vec<StoredLead>, StoreError> {
        let table = self.table.borrow();
        if let Some(error) = &table.fail_with {
            return Err(error.clone());
        }
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit);
        Ok(rows)
    }
}

struct ManualTask {
    due: Duration,
    cancelled: Rc<Cell<bool>>,
    task: Option<Box<dyn FnOnce()>>,
}

#[derive(Default)]
struct ManualClockState {
    now: Duration,
    tasks: Vec<ManualTask>,
}

/// Time only moves when a test calls [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualClockState>>,
}

pub struct ManualHandle(Rc<Cell<bool>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        state.tasks.push(ManualTask {
            due,
            cancelled: Rc::clone(&cancelled),
            task: Some(task),
        });
        ManualHandle(cancelled)
    }
}

impl ManualScheduler {
    pub fn advance(&self, by: Duration) {
        let due: Vec<Box<dyn FnOnce()>> = {
            let mut state = self.state.borrow_mut();
            state.now += by;
            let now = state.now;
            state
                .tasks
                .iter_mut()
                .filter(|t| t.due <= now && !t.cancelled.get())
                .filter_map(|t| t.task.take())
                .collect()
        };
        for task in due {
            task();
        }
    }

    /// Tasks that are neither run nor cancelled.
    pub fn pending(&self) -> usize {
        self.state
            .borrow()
            .tasks
            .iter()
            .filter(|t| t.task.is_some() && !t.cancelled.get())
            .count()
    }
}

#[derive(Clone, Default)]
pub struct RecordingTracker {
    events: Rc<RefCell<Vec<ConversionEvent>>>,
}

impl RecordingTracker {
    pub fn names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(ConversionEvent::name).collect()
    }
}

impl ConversionTracker for RecordingTracker {
    fn track(&self, event: &ConversionEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

thread_local! {
    static ERRORS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Error
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            ERRORS.with(|errors| errors.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Starts collecting error-level records for the current thread.
pub fn capture_errors() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Warn);
    ERRORS.with(|errors| errors.borrow_mut().clear());
}

pub fn captured_errors() -> Vec<String> {
    ERRORS.with(|errors| errors.borrow().clone())
}
