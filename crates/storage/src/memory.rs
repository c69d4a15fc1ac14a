use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use trainer_web_app::log;

/// Log entries kept for the lifetime of the page, newest first.
#[derive(Clone, Default)]
pub struct MemoryLog {
    entries: Arc<Mutex<VecDeque<log::Entry>>>,
}

impl MemoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl log::Repository for MemoryLog {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| log::Error::Unknown(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        Ok(())
    }
}
