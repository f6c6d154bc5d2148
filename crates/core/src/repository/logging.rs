//! Logging repository decorator.
//!
//! Wraps a `Repository<T>` and records every call before delegating.

use std::marker::PhantomData;

use super::{Labeled, Record, Repository};

/// Logging repository decorator.
///
/// Emits one `INFO` event per `list` call, formatted as
/// `Calling <label><<element>>.List()`, then returns whatever the wrapped
/// repository returned without touching it.
///
/// The label is [`Labeled::LABEL`] of the wrapped type and the element name
/// is [`Record::NAME`]; nothing here inspects types at runtime.
///
/// # Type Parameters
///
/// * `T` - The element type being listed
/// * `R` - The wrapped repository implementation
pub struct LoggingRepository<T, R> {
    repository: R,
    _element: PhantomData<fn() -> T>,
}

impl<T, R> LoggingRepository<T, R>
where
    T: Record,
    R: Repository<T> + Labeled,
{
    /// Creates a new logging repository delegating to `repository`.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _element: PhantomData,
        }
    }
}

impl<T, R> Repository<T> for LoggingRepository<T, R>
where
    T: Record,
    R: Repository<T> + Labeled,
{
    fn list(&mut self) -> Vec<T> {
        tracing::info!("Calling {}<{}>.List()", R::LABEL, T::NAME);

        self.repository.list()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;

    use super::*;
    use crate::forecast::ForecastRecord;
    use crate::repository::test_support::{with_captured_logs, CapturedOutput};
    use crate::repository::SampleRepository;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    struct Widget;

    impl Record for Widget {
        const NAME: &'static str = "Widget";
    }

    /// Records how many log lines existed whenever it is called.
    struct Probe {
        output: CapturedOutput,
        lines_at_call: Arc<Mutex<Vec<usize>>>,
    }

    impl Labeled for Probe {
        const LABEL: &'static str = "Probe";
    }

    impl Repository<Widget> for Probe {
        fn list(&mut self) -> Vec<Widget> {
            self.lines_at_call
                .lock()
                .unwrap()
                .push(self.output.lines().len());
            vec![Widget, Widget]
        }
    }

    #[test]
    fn test_returns_delegate_result_unchanged() {
        let mut standalone = SampleRepository::seeded(11).with_clock(fixed_today);
        let mut decorated: LoggingRepository<ForecastRecord, _> =
            LoggingRepository::new(SampleRepository::seeded(11).with_clock(fixed_today));

        for _ in 0..3 {
            let expected: Vec<ForecastRecord> = standalone.list();
            let actual: Vec<ForecastRecord> = decorated.list();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_empty_delegate_stays_empty() {
        let mut decorated: LoggingRepository<Widget, _> =
            LoggingRepository::new(SampleRepository::seeded(1));

        assert!(decorated.list().is_empty());
    }

    #[test]
    fn test_emits_one_line_per_call() {
        let output = CapturedOutput::default();
        let mut decorated: LoggingRepository<ForecastRecord, _> =
            LoggingRepository::new(SampleRepository::seeded(3).with_clock(fixed_today));

        with_captured_logs(&output, || {
            let _: Vec<ForecastRecord> = decorated.list();
            let _: Vec<ForecastRecord> = decorated.list();
        });

        let lines = output.lines();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(
                line.ends_with("Calling SampleRepository<WeatherForecast>.List()"),
                "unexpected line: {line}"
            );
            assert!(line.contains("INFO"));
            assert!(!line.contains("implementation="));
            assert!(!line.contains("element="));
        }
    }

    #[test]
    fn test_logs_before_delegating() {
        let output = CapturedOutput::default();
        let lines_at_call = Arc::new(Mutex::new(Vec::new()));
        let probe = Probe {
            output: output.clone(),
            lines_at_call: lines_at_call.clone(),
        };
        let mut decorated: LoggingRepository<Widget, _> = LoggingRepository::new(probe);

        let widgets = with_captured_logs(&output, || decorated.list());

        assert_eq!(widgets.len(), 2);
        assert_eq!(*lines_at_call.lock().unwrap(), vec![1]);
        assert!(output.lines()[0].contains("Calling Probe<Widget>.List()"));
    }

    #[test]
    fn test_decorated_repository_is_a_trait_object() {
        let output = CapturedOutput::default();
        let mut repo: Box<dyn Repository<ForecastRecord>> =
            Box::new(LoggingRepository::<ForecastRecord, _>::new(
                SampleRepository::seeded(1).with_clock(fixed_today),
            ));

        let forecasts = with_captured_logs(&output, || repo.list());

        assert_eq!(forecasts.len(), 5);
        assert_eq!(output.lines().len(), 1);
    }
}
