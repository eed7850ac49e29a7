//! util — примитивы чтения/записи «до конца».
//!
//! Содержит:
//! - read_full(): дочитать буфер до конца, прозрачно обрабатывая короткие чтения.
//! - write_full(): дописать буфер до конца; запись в 0 байт — ошибка, не no-op.
//!
//! Оба принимают метку потока ("input"/"output") для диагностик — вместо
//! глобального progname вся привязка к контексту идёт параметром.

use anyhow::{anyhow, bail, Result};
use std::io::{ErrorKind, Read, Write};

/// Дочитать `buf[continue_from..]` целиком.
///
/// `continue_from` поддерживает случай, когда начало буфера уже заполнено
/// предыдущим чтением (проба длинного заголовка переиспользуется как начало
/// тела первой страницы).
///
/// Ошибки:
/// - конец потока до заполнения буфера — fatal "unexpected end-of-file";
/// - ошибка I/O — fatal с системным текстом; ErrorKind::Interrupted ретраится.
pub fn read_full<R: Read>(
    r: &mut R,
    buf: &mut [u8],
    continue_from: usize,
    stream: &str,
) -> Result<()> {
    let mut pos = continue_from;
    while pos < buf.len() {
        match r.read(&mut buf[pos..]) {
            Ok(0) => bail!("{}: unexpected end-of-file", stream),
            Ok(n) => pos += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(anyhow!("{}: read: {}", stream, e)),
        }
    }
    Ok(())
}

/// Записать буфер целиком.
///
/// Запись, вернувшая 0 байт, считается ошибкой (иначе цикл зависнет на
/// «неберущем» получателе).
pub fn write_full<W: Write>(w: &mut W, buf: &[u8], stream: &str) -> Result<()> {
    let mut pos = 0usize;
    while pos < buf.len() {
        match w.write(&buf[pos..]) {
            Ok(0) => bail!("{}: write returned 0 bytes", stream),
            Ok(n) => pos += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(anyhow!("{}: write: {}", stream, e)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_full_fills_tail_after_continue_from() {
        let mut src = Cursor::new(vec![7u8; 8]);
        let mut buf = vec![1u8; 12];
        read_full(&mut src, &mut buf, 4, "input").expect("read_full");
        assert_eq!(&buf[..4], &[1, 1, 1, 1]);
        assert_eq!(&buf[4..], &[7u8; 8][..]);
    }

    #[test]
    fn read_full_fails_on_short_stream() {
        let mut src = Cursor::new(vec![0u8; 3]);
        let mut buf = vec![0u8; 8];
        let err = read_full(&mut src, &mut buf, 0, "input").unwrap_err();
        assert!(err.to_string().contains("unexpected end-of-file"));
        assert!(err.to_string().contains("input"));
    }

    #[test]
    fn write_full_writes_everything() {
        let mut out = Vec::new();
        write_full(&mut out, &[5u8; 100], "output").expect("write_full");
        assert_eq!(out, vec![5u8; 100]);
    }

    #[test]
    fn write_full_rejects_zero_byte_sink() {
        struct DeadSink;
        impl Write for DeadSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Ok(0)
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let err = write_full(&mut DeadSink, &[1u8; 4], "output").unwrap_err();
        assert!(err.to_string().contains("0 bytes"));
    }
}
