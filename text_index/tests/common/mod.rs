use tracing_subscriber::EnvFilter;

/// Routes library logs to the test harness; set `RUST_LOG=text_index=trace` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
