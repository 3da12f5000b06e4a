mod traversal;
mod tree;

/// Route `log` output through the test harness so log statements run under test.
fn init_logging() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}
