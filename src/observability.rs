use biometrics::{Collector, Counter};

pub(crate) static LOG_ENTRIES: Counter = Counter::new("wiretrace.logger.entries");
pub(crate) static LOG_SUPPRESSED: Counter = Counter::new("wiretrace.logger.suppressed");
pub(crate) static RENDER_ERRORS: Counter = Counter::new("wiretrace.logger.render_errors");

pub(crate) static FILE_OPENS: Counter = Counter::new("wiretrace.sink.file_opens");
pub(crate) static FILE_OPEN_ERRORS: Counter = Counter::new("wiretrace.sink.file_open_errors");
pub(crate) static FILE_WRITE_ERRORS: Counter = Counter::new("wiretrace.sink.file_write_errors");
pub(crate) static CONSOLE_WRITE_ERRORS: Counter =
    Counter::new("wiretrace.sink.console_write_errors");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&LOG_ENTRIES);
    collector.register_counter(&LOG_SUPPRESSED);
    collector.register_counter(&RENDER_ERRORS);

    collector.register_counter(&FILE_OPENS);
    collector.register_counter(&FILE_OPEN_ERRORS);
    collector.register_counter(&FILE_WRITE_ERRORS);
    collector.register_counter(&CONSOLE_WRITE_ERRORS);
}
