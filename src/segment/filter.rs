//! segment/filter — основной цикл фильтра и state machine Live → Zeroing.
//!
//! Один линейный проход: проба геометрии, затем seg_size/blcksz итераций
//! «считать страницу → классифицировать → записать страницу или нули».
//! Переход в Zeroing одноразовый; живая страница после начала обнуления —
//! нарушение протокола (хвост сегмента обязан быть непрерывным суффиксом).
//!
//! Ресурсы: один буфер страницы (ресайз один раз после пробы) и, только если
//! обнуление вообще началось, один ленивый нулевой буфер на все страницы хвоста.

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};
use std::io::{ErrorKind, Read, Write};

use super::{is_live_page, probe_geometry};
use crate::consts::XLOG_BLCKSZ;
use crate::page::parse_page_header;
use crate::util::{read_full, write_full};

/// Итог одного прогона фильтра (для логов/статуса CLI).
#[derive(Debug, Clone, Copy)]
pub struct FilterSummary {
    pub blcksz: u32,
    pub seg_size: u32,
    pub pages_total: u32,
    pub pages_zeroed: u32,
}

/// Профильтровать один WAL-сегмент из input в output, обнулив неиспользуемый хвост.
///
/// Живые страницы копируются байт-в-байт; длина выхода равна длине входа.
/// Любая аномалия из перечня ошибок — немедленный возврат Err, частичный
/// выход невалиден. Перед Ok(...) выход финализируется flush'ем.
pub fn filter_segment<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<FilterSummary> {
    let mut buf = vec![0u8; XLOG_BLCKSZ];

    let (geo, mut continue_from) = probe_geometry(input, &mut buf)?;

    // Поток объявил другой размер страницы — ресайз один раз, проба в начале
    // буфера сохраняется (blcksz >= длинного заголовка гарантирован пробой).
    if geo.blcksz as usize != buf.len() {
        debug!(
            "resizing page buffer {} -> {} per stream geometry",
            buf.len(),
            geo.blcksz
        );
        buf.resize(geo.blcksz as usize, 0);
    }

    let npages = geo.seg_size / geo.blcksz;
    let mut expected = geo.start;
    let mut zeroing = false;
    let mut zero_buf: Option<Vec<u8>> = None;
    let mut pages_zeroed = 0u32;

    for pageno in 0..npages {
        read_full(input, &mut buf, continue_from, "input")?;
        continue_from = 0;

        let hdr = parse_page_header(&buf)?;
        let live = is_live_page(&hdr, &geo, expected);

        if zeroing && live {
            bail!("input: good page found after bad page (page {})", pageno);
        }
        if !zeroing && !live {
            debug!(
                "zeroing from page {} (magic {:#06x}, addr {}/{:#010x}, expected {}/{:#010x})",
                pageno, hdr.magic, hdr.pageaddr.xlogid, hdr.pageaddr.xrecoff,
                expected.xlogid, expected.xrecoff
            );
            zeroing = true;
        }

        // Курсор адреса двигается на каждую страницу независимо от классификации.
        expected.advance(geo.blcksz);

        let out: &[u8] = if zeroing {
            pages_zeroed += 1;
            zero_buf.get_or_insert_with(|| vec![0u8; geo.blcksz as usize])
        } else {
            &buf
        };
        write_full(output, out, "output")?;
    }

    // Объявленная длина сегмента авторитетна: лишний читаемый байт — ошибка.
    let mut extra = [0u8; 1];
    loop {
        match input.read(&mut extra) {
            Ok(0) => break,
            Ok(_) => bail!("input: input longer than expected"),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(anyhow!("input: read: {}", e)),
        }
    }

    output.flush().context("output: flush failed")?;

    let summary = FilterSummary {
        blcksz: geo.blcksz,
        seg_size: geo.seg_size,
        pages_total: npages,
        pages_zeroed,
    };
    info!(
        "segment filtered: {} pages x {} B, {} zeroed",
        summary.pages_total, summary.blcksz, summary.pages_zeroed
    );
    Ok(summary)
}
