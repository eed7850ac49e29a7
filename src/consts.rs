//! Общие константы формата XLOG-страниц (короткий/длинный заголовок, дефолтная геометрия).

// -------- Page header magic / flags --------

/// Ожидаемое значение xlp_magic. Несовпадение на первой странице — warning, не отказ:
/// magic меняется между ревизиями формата, файл всё равно обрабатывается.
pub const XLOG_PAGE_MAGIC: u16 = 0xD062;

/// Бит в xlp_info: страница несёт длинный заголовок (полная геометрия сегмента).
pub const XLP_LONG_HEADER: u16 = 0x0002;

// -------- Short page header --------
// Layout (LE):
// [xlp_magic u16]
// [xlp_info  u16]
// [xlp_tli   u32]
// [xlogid    u32]   -- pageaddr, старшая часть
// [xrecoff   u32]   -- pageaddr, младшая часть
//
// Total = 2 + 2 + 4 + 4 + 4 = 16 bytes.
pub const XLOG_PHD_SIZE: usize = 16;

// Offsets inside the short header
pub const XLP_OFF_MAGIC: usize = 0;
pub const XLP_OFF_INFO: usize = 2;
pub const XLP_OFF_TLI: usize = 4;
pub const XLP_OFF_XLOGID: usize = 8;
pub const XLP_OFF_XRECOFF: usize = 12;

// -------- Long page header (только первая страница сегмента) --------
// Продолжение короткого заголовка:
// [xlp_sysid       u64]
// [xlp_seg_size    u32]  -- ожидаемая длина всего потока
// [xlp_xlog_blcksz u32]  -- размер страницы; заголовок встречается с этим шагом
//
// Total = 16 + 8 + 4 + 4 = 32 bytes.
pub const XLOG_LONG_PHD_SIZE: usize = 32;

// Offsets inside the long header
pub const XLP_OFF_SYSID: usize = 16;
pub const XLP_OFF_SEG_SIZE: usize = 24;
pub const XLP_OFF_BLCKSZ: usize = 28;

// -------- Compiled-in defaults --------
// Поток авторитетен: значения из длинного заголовка перекрывают дефолты,
// буфер страницы ресайзится один раз после пробы.

pub const XLOG_BLCKSZ: usize = 8192;
pub const XLOG_SEG_SIZE: u32 = 16 * 1024 * 1024;
