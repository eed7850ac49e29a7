use env_logger::{Builder, Env};
use log::error;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Warnings и диагностика идут в stderr, stdout остаётся чистым каналом данных.
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = ClearTail::cli::run() {
        // Логируем ошибку и выходим с кодом 1; частичный выход невалиден.
        error!("{:#}", e);
        std::process::exit(1);
    }
}
