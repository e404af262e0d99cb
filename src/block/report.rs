/// Receives diagnostics about failed classifications.
///
/// A reporter only observes, it never changes the classified outcome.
pub trait Reporter {
    /// The codec flagged `rc` as an error.
    fn codec_error(&mut self, rc: usize, name: &str);

    /// `rc` is a valid byte count, but too large to be represented.
    fn size_error(&mut self, rc: usize, name: &str);
}

/// Emits reports as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn codec_error(&mut self, rc: usize, name: &str) {
        tracing::warn!(rc, "codec error: {name}");
    }

    fn size_error(&mut self, rc: usize, name: &str) {
        tracing::warn!(rc, "size error: {name}");
    }
}

/// Whether the [`TracingReporter`] is used when no reporter is supplied.
pub const VERBOSE_DIAGNOSTICS: bool = cfg!(feature = "verbose-diagnostics");

/// Hands `report` the supplied reporter, or the default one when the
/// crate is built with verbose diagnostics.
pub(crate) fn emit(reporter: Option<&mut dyn Reporter>, report: impl FnOnce(&mut dyn Reporter)) {
    match reporter {
        Some(reporter) => report(reporter),
        None if VERBOSE_DIAGNOSTICS => report(&mut TracingReporter),
        None => {}
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Report {
        Codec(usize, String),
        Size(usize, String),
    }

    /// Remembers every report it receives.
    #[derive(Debug, Default)]
    pub struct Recorder(pub Vec<Report>);

    impl Reporter for Recorder {
        fn codec_error(&mut self, rc: usize, name: &str) {
            self.0.push(Report::Codec(rc, name.to_owned()));
        }

        fn size_error(&mut self, rc: usize, name: &str) {
            self.0.push(Report::Size(rc, name.to_owned()));
        }
    }

    #[test]
    fn emit_uses_supplied_reporter() {
        let mut recorder = Recorder::default();

        emit(Some(&mut recorder), |r| r.codec_error(1, "one"));
        emit(Some(&mut recorder), |r| r.size_error(2, "two"));

        assert_eq!(
            recorder.0,
            [
                Report::Codec(1, "one".to_owned()),
                Report::Size(2, "two".to_owned())
            ]
        );
    }

    #[test]
    fn emit_without_reporter() {
        let mut called = false;
        emit(None, |_| called = true);
        assert_eq!(called, VERBOSE_DIAGNOSTICS);
    }
}
