// src/page.rs — разбор заголовков XLOG-страниц.
//
// Короткий заголовок (16 байт) стоит в начале каждой страницы; длинный (32 байта)
// обязателен для первой страницы сегмента и дополнительно несёт геометрию
// (seg_size, blcksz). Оба парсятся явными функциями по фиксированным смещениям
// из байтового среза — никаких перекрывающихся typed-view поверх одного буфера.

use anyhow::{bail, Result};
use byteorder::{ByteOrder, LittleEndian};

use crate::consts::{
    XLOG_LONG_PHD_SIZE, XLOG_PHD_SIZE, XLP_OFF_BLCKSZ, XLP_OFF_INFO, XLP_OFF_MAGIC,
    XLP_OFF_SEG_SIZE, XLP_OFF_SYSID, XLP_OFF_TLI, XLP_OFF_XLOGID, XLP_OFF_XRECOFF,
};

/// Логический адрес страницы в потоке XLOG: пара (xlogid, xrecoff).
/// Monotonно растёт; сравнение — по обеим компонентам.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecPtr {
    pub xlogid: u32,
    pub xrecoff: u32,
}

impl RecPtr {
    /// Сдвинуть адрес на размер одной страницы.
    ///
    /// Младшее слово складывается wrapping, перенос в xlogid НЕ выполняется:
    /// сегмент никогда не пересекает границу 4 GiB, поэтому wrap возможен только
    /// после последней страницы, где сравнение уже не выполняется.
    #[inline]
    pub fn advance(&mut self, blcksz: u32) {
        self.xrecoff = self.xrecoff.wrapping_add(blcksz);
    }
}

/// Короткий заголовок страницы (есть на каждой странице).
#[derive(Debug, Clone, Copy)]
pub struct PageHeader {
    pub magic: u16,
    pub info: u16,
    pub tli: u32,
    pub pageaddr: RecPtr,
}

/// Длинный заголовок (короткий + геометрия сегмента). Валиден только для первой страницы.
#[derive(Debug, Clone, Copy)]
pub struct LongPageHeader {
    pub std: PageHeader,
    pub sysid: u64,
    pub seg_size: u32,
    pub blcksz: u32,
}

/// Разобрать короткий заголовок из начала страницы.
pub fn parse_page_header(buf: &[u8]) -> Result<PageHeader> {
    if buf.len() < XLOG_PHD_SIZE {
        bail!("page buffer too small for header ({} B)", buf.len());
    }
    Ok(PageHeader {
        magic: LittleEndian::read_u16(&buf[XLP_OFF_MAGIC..XLP_OFF_MAGIC + 2]),
        info: LittleEndian::read_u16(&buf[XLP_OFF_INFO..XLP_OFF_INFO + 2]),
        tli: LittleEndian::read_u32(&buf[XLP_OFF_TLI..XLP_OFF_TLI + 4]),
        pageaddr: RecPtr {
            xlogid: LittleEndian::read_u32(&buf[XLP_OFF_XLOGID..XLP_OFF_XLOGID + 4]),
            xrecoff: LittleEndian::read_u32(&buf[XLP_OFF_XRECOFF..XLP_OFF_XRECOFF + 4]),
        },
    })
}

/// Разобрать длинный заголовок (первая страница сегмента).
pub fn parse_long_page_header(buf: &[u8]) -> Result<LongPageHeader> {
    if buf.len() < XLOG_LONG_PHD_SIZE {
        bail!("page buffer too small for long header ({} B)", buf.len());
    }
    let std = parse_page_header(buf)?;
    Ok(LongPageHeader {
        std,
        sysid: LittleEndian::read_u64(&buf[XLP_OFF_SYSID..XLP_OFF_SYSID + 8]),
        seg_size: LittleEndian::read_u32(&buf[XLP_OFF_SEG_SIZE..XLP_OFF_SEG_SIZE + 4]),
        blcksz: LittleEndian::read_u32(&buf[XLP_OFF_BLCKSZ..XLP_OFF_BLCKSZ + 4]),
    })
}
