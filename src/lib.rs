#![allow(non_snake_case)]

// Базовые модули
pub mod consts;
pub mod page;

// Ядро фильтра (папка с mod.rs)
pub mod segment; // src/segment/{mod,probe,classify,filter}.rs

// Утилиты (read_full/write_full)
pub mod util; // src/util/mod.rs

// CLI surface (вызывается из main.rs)
pub mod cli;

// Удобные реэкспорты
pub use page::{LongPageHeader, PageHeader, RecPtr};
pub use segment::{filter_segment, is_live_page, probe_geometry, FilterSummary, SegmentGeometry};
pub use util::{read_full, write_full};
