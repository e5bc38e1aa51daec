use std::io::{self, Write};
use log::{
    LevelFilter,
    Metadata,
    Record
};

static SERVICE_LOGGER: ServiceLogger = ServiceLogger;
struct ServiceLogger;
impl log::Log for ServiceLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!(
                "[{}] [{}] {}",
                record.target(),
                record.level(),
                record.args()
            );
        }
    }
    fn flush(&self) {
        io::stdout().flush().unwrap();
    }
}

static NULL_LOGGER: NullLogger = NullLogger;
struct NullLogger;
impl log::Log for NullLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        false
    }
    fn log(&self, _: &Record) {}
    fn flush(&self) {}
}

pub fn setup(level: LevelFilter) {
    _ = log::set_logger(&SERVICE_LOGGER);
    _ = log::set_max_level(level);
}

pub fn teardown() {
    _ = log::set_logger(&NULL_LOGGER);
}
