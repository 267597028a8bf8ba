//! 診断ログ
//!
//! ~/.wpp/wpp.log へのファイル出力のみ。TUI画面を汚さないため
//! 標準出力には一切書かない。フィルタは WPP_LOG で上書きできる。

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// tracing を初期化する。戻り値の guard はプロセス終了まで保持すること。
/// HOME が無い・ディレクトリが作れない場合はログなしで続行する。
pub fn init() -> Option<WorkerGuard> {
    let home = std::env::var("HOME").ok().filter(|s| !s.is_empty())?;
    let log_dir = std::path::PathBuf::from(home).join(".wpp");
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "wpp.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env("WPP_LOG").unwrap_or_else(|_| EnvFilter::new("wpp=info"));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    Some(guard)
}
