//! segment — фильтрация одного WAL-сегмента (пострановая обработка).
//!
//! Разделение:
//! - probe.rs    — проба первой страницы: длинный заголовок, геометрия сегмента.
//! - classify.rs — классификация страницы: live или под обнуление.
//! - filter.rs   — основной цикл фильтра и state machine перехода Live → Zeroing.
//!
//! В этом модуле (mod.rs) лежат:
//! - SegmentGeometry (выводится пробой один раз, дальше неизменна),
//! - re-export публичных типов/функций из подмодулей.

use crate::page::RecPtr;

/// Геометрия сегмента, выведенная из длинного заголовка первой страницы.
/// Иммутабельна после пробы; поток обязан ей соответствовать.
#[derive(Debug, Clone, Copy)]
pub struct SegmentGeometry {
    /// xlp_magic первой страницы. Любая страница с другим значением обнуляется.
    pub magic: u16,
    /// Адрес первой страницы; ожидаемый адрес каждой следующей выводится из него.
    pub start: RecPtr,
    /// Ожидаемая длина всего потока в байтах.
    pub seg_size: u32,
    /// Размер страницы; заголовок встречается с этим шагом.
    pub blcksz: u32,
}

pub mod classify;
pub mod filter;
pub mod probe;

pub use classify::is_live_page;
pub use filter::{filter_segment, FilterSummary};
pub use probe::probe_geometry;
