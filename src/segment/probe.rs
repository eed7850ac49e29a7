//! segment/probe — проба первой страницы и вывод геометрии сегмента.
//!
//! Читает ровно XLOG_LONG_PHD_SIZE байт; прочитанное НЕ выбрасывается —
//! вызывающий код переиспользует его как начало тела первой страницы
//! (возвращается continue_from).

use anyhow::{bail, Result};
use log::warn;
use std::io::Read;

use super::SegmentGeometry;
use crate::consts::{XLOG_LONG_PHD_SIZE, XLOG_PAGE_MAGIC, XLP_LONG_HEADER};
use crate::page::parse_long_page_header;
use crate::util::read_full;

/// Считать длинный заголовок первой страницы и вывести из него геометрию.
///
/// Возвращает (геометрия, число уже потреблённых байт в buf).
///
/// Поведение:
/// - конец потока раньше XLOG_LONG_PHD_SIZE байт — fatal (геометрии нет);
/// - xlp_magic != XLOG_PAGE_MAGIC — warning, обработка продолжается
///   (magic меняется между ревизиями формата);
/// - отсутствие бита XLP_LONG_HEADER — fatal: первая страница обязана нести
///   полную геометрию;
/// - несогласованная геометрия (blcksz меньше длинного заголовка, seg_size
///   нулевой или не кратен blcksz) — fatal: дальнейший разбор был бы
///   угадыванием.
pub fn probe_geometry<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<(SegmentGeometry, usize)> {
    read_full(input, &mut buf[..XLOG_LONG_PHD_SIZE], 0, "input")?;

    let long = parse_long_page_header(&buf[..XLOG_LONG_PHD_SIZE])?;

    if long.std.magic != XLOG_PAGE_MAGIC {
        warn!(
            "input: unexpected magic number {:#06x} (expected {:#06x})",
            long.std.magic, XLOG_PAGE_MAGIC
        );
    }

    if long.std.info & XLP_LONG_HEADER == 0 {
        bail!("input: first page header not long format");
    }

    if (long.blcksz as usize) < XLOG_LONG_PHD_SIZE {
        bail!("input: implausible block size {}", long.blcksz);
    }
    if long.seg_size == 0 || long.seg_size % long.blcksz != 0 {
        bail!(
            "input: segment size {} not a positive multiple of block size {}",
            long.seg_size,
            long.blcksz
        );
    }

    let geo = SegmentGeometry {
        magic: long.std.magic,
        start: long.std.pageaddr,
        seg_size: long.seg_size,
        blcksz: long.blcksz,
    };
    Ok((geo, XLOG_LONG_PHD_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{ByteOrder, LittleEndian};
    use std::io::Cursor;

    use crate::consts::{
        XLP_OFF_BLCKSZ, XLP_OFF_INFO, XLP_OFF_MAGIC, XLP_OFF_SEG_SIZE, XLP_OFF_XLOGID,
        XLP_OFF_XRECOFF,
    };

    fn long_header(info: u16, seg_size: u32, blcksz: u32) -> Vec<u8> {
        let mut h = vec![0u8; XLOG_LONG_PHD_SIZE];
        LittleEndian::write_u16(&mut h[XLP_OFF_MAGIC..XLP_OFF_MAGIC + 2], XLOG_PAGE_MAGIC);
        LittleEndian::write_u16(&mut h[XLP_OFF_INFO..XLP_OFF_INFO + 2], info);
        LittleEndian::write_u32(&mut h[XLP_OFF_XLOGID..XLP_OFF_XLOGID + 4], 2);
        LittleEndian::write_u32(&mut h[XLP_OFF_XRECOFF..XLP_OFF_XRECOFF + 4], 0x0040_0000);
        LittleEndian::write_u32(&mut h[XLP_OFF_SEG_SIZE..XLP_OFF_SEG_SIZE + 4], seg_size);
        LittleEndian::write_u32(&mut h[XLP_OFF_BLCKSZ..XLP_OFF_BLCKSZ + 4], blcksz);
        h
    }

    #[test]
    fn probe_reads_geometry_and_reports_consumed() {
        let bytes = long_header(XLP_LONG_HEADER, 65536, 8192);
        let mut buf = vec![0u8; 8192];
        let (geo, consumed) =
            probe_geometry(&mut Cursor::new(bytes), &mut buf).expect("probe");
        assert_eq!(consumed, XLOG_LONG_PHD_SIZE);
        assert_eq!(geo.magic, XLOG_PAGE_MAGIC);
        assert_eq!(geo.seg_size, 65536);
        assert_eq!(geo.blcksz, 8192);
        assert_eq!(geo.start.xlogid, 2);
        assert_eq!(geo.start.xrecoff, 0x0040_0000);
    }

    #[test]
    fn probe_requires_long_header_flag() {
        let bytes = long_header(0, 65536, 8192);
        let mut buf = vec![0u8; 8192];
        let err = probe_geometry(&mut Cursor::new(bytes), &mut buf).unwrap_err();
        assert!(err.to_string().contains("not long format"));
    }

    #[test]
    fn probe_fails_before_geometry_on_short_input() {
        let bytes = long_header(XLP_LONG_HEADER, 65536, 8192);
        let mut buf = vec![0u8; 8192];
        let err = probe_geometry(&mut Cursor::new(&bytes[..XLOG_LONG_PHD_SIZE - 5]), &mut buf)
            .unwrap_err();
        assert!(err.to_string().contains("unexpected end-of-file"));
    }

    #[test]
    fn probe_rejects_non_dividing_segment_size() {
        let bytes = long_header(XLP_LONG_HEADER, 65536 + 1, 8192);
        let mut buf = vec![0u8; 8192];
        let err = probe_geometry(&mut Cursor::new(bytes), &mut buf).unwrap_err();
        assert!(err.to_string().contains("not a positive multiple"));
    }

    #[test]
    fn probe_rejects_tiny_block_size() {
        let bytes = long_header(XLP_LONG_HEADER, 64, 16);
        let mut buf = vec![0u8; 8192];
        let err = probe_geometry(&mut Cursor::new(bytes), &mut buf).unwrap_err();
        assert!(err.to_string().contains("implausible block size"));
    }
}
