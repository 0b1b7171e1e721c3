#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    BatchStart { total: u64 },
    SequenceValidated { index: usize, valid: bool },
    BatchFinish { accepted: usize, rejected: usize },

    Message(String),
}

/// Receives progress events; batch runs invoke it from worker threads.
pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn silent_reporter_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("nothing listens".into()));
    }

    #[test]
    fn callback_receives_events_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            seen.lock().unwrap().push(event);
        }));

        reporter.report(Progress::BatchStart { total: 1 });
        reporter.report(Progress::SequenceValidated {
            index: 0,
            valid: true,
        });
        drop(reporter);

        assert_eq!(
            seen.into_inner().unwrap(),
            vec![
                Progress::BatchStart { total: 1 },
                Progress::SequenceValidated {
                    index: 0,
                    valid: true
                }
            ]
        );
    }
}
