use std::collections::VecDeque;

use crate::log;

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use ::log::Level;
    use pretty_assertions::assert_eq;

    use crate::log::{self, Repository as _, Service as _};

    use super::*;

    #[derive(Default)]
    struct Repository {
        entries: Mutex<VecDeque<log::Entry>>,
    }

    impl log::Repository for Repository {
        fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
            self.entries
                .lock()
                .map(|entries| entries.clone())
                .map_err(|err| log::Error::Unknown(err.to_string()))
        }

        fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
            self.entries
                .lock()
                .map(|mut entries| entries.push_front(entry))
                .map_err(|err| log::Error::Unknown(err.to_string()))
        }
    }

    #[test]
    fn test_get_log_entries() {
        let repository = Repository::default();
        let entry = log::Entry {
            time: "Oct 17 10:00:00".to_string(),
            level: Level::Info,
            message: "connected".to_string(),
        };

        repository.write_entry(entry.clone()).unwrap();
        let service = Service::new(repository);

        assert_eq!(service.get_log_entries().unwrap(), VecDeque::from([entry]));
    }
}
