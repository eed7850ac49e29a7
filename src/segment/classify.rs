//! segment/classify — решение «живая страница или под обнуление».
//!
//! Правило ровно одно: страница жива ⇔ её magic совпадает с геометрией И обе
//! компоненты адреса равны ожидаемым. Всё остальное (другой magic, расхождение
//! любой половины адреса, и то и другое) — под обнуление. Решение бинарное и
//! окончательное; бит XLP_LONG_HEADER на не-первой странице классификацией
//! игнорируется.

use super::SegmentGeometry;
use crate::page::{PageHeader, RecPtr};

/// true — страницу пропускаем как есть; false — страница подлежит обнулению.
#[inline]
pub fn is_live_page(hdr: &PageHeader, geo: &SegmentGeometry, expected: RecPtr) -> bool {
    hdr.magic == geo.magic && hdr.pageaddr == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geo() -> SegmentGeometry {
        SegmentGeometry {
            magic: 0xD062,
            start: RecPtr {
                xlogid: 1,
                xrecoff: 0,
            },
            seg_size: 16 * 1024 * 1024,
            blcksz: 8192,
        }
    }

    fn hdr(magic: u16, xlogid: u32, xrecoff: u32) -> PageHeader {
        PageHeader {
            magic,
            info: 0,
            tli: 1,
            pageaddr: RecPtr { xlogid, xrecoff },
        }
    }

    #[test]
    fn live_requires_magic_and_both_address_parts() {
        let g = geo();
        let exp = RecPtr {
            xlogid: 1,
            xrecoff: 8192,
        };
        assert!(is_live_page(&hdr(0xD062, 1, 8192), &g, exp));
        // другой magic
        assert!(!is_live_page(&hdr(0xD061, 1, 8192), &g, exp));
        // расхождение младшей части адреса
        assert!(!is_live_page(&hdr(0xD062, 1, 16384), &g, exp));
        // расхождение старшей части адреса
        assert!(!is_live_page(&hdr(0xD062, 2, 8192), &g, exp));
    }

    #[test]
    fn long_header_bit_does_not_affect_classification() {
        let g = geo();
        let exp = RecPtr {
            xlogid: 1,
            xrecoff: 8192,
        };
        let mut h = hdr(0xD062, 1, 8192);
        h.info = crate::consts::XLP_LONG_HEADER;
        assert!(is_live_page(&h, &g, exp));
    }
}
