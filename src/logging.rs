use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use tracing_subscriber::fmt;

/// ログ初期化（stderrへ出力）
///
/// RUST_LOG があればそれを使い、なければ verbose で debug / 通常は warn。
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_target(verbose)
        .with_writer(std::io::stderr);

    // テストなどで二重に初期化された場合は無視
    let _ = Registry::default().with(filter).with(layer).try_init();
}
