
/// Route `log` output through the test harness so log statements run under test.
pub(crate) fn init_logging() {
    // Only the first call can install a logger.
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}
