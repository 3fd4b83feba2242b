/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// Wrapping struct that keeps track of the bytes read from or written to a
/// stream. Optionally, prints to standard error information about methods
/// called.
///
/// Failed operations are not counted, but they are printed.
#[derive(Debug, Clone)]
pub struct CountStream<S, const PRINT: bool = false> {
    stream: S,
    /// The number of bytes read so far from the underlying stream.
    pub bytes_read: usize,
    /// The number of bytes written so far to the underlying stream.
    pub bytes_written: usize,
}

impl<S, const PRINT: bool> CountStream<S, PRINT> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            bytes_read: 0,
            bytes_written: 0,
        }
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: EndianSeek, const PRINT: bool> EndianSeek for CountStream<S, PRINT> {
    fn size(&self) -> usize {
        self.stream.size()
    }

    fn position(&self) -> usize {
        self.stream.position()
    }

    fn try_seek(&mut self, position: usize) -> Result<(), StreamError> {
        let res = self.stream.try_seek(position);
        if PRINT {
            eprintln!("seek({}) = {:?}", position, res);
        }
        res
    }
}

impl<E: Endianness, S: EndianRead<E>, const PRINT: bool> EndianRead<E> for CountStream<S, PRINT> {
    fn try_read<W: Width>(&mut self) -> Result<W::Value, StreamError> {
        let position = self.stream.position();
        let res = self.stream.try_read::<W>();
        if res.is_ok() {
            self.bytes_read += W::BYTES;
        }
        if PRINT {
            eprintln!(
                "read<{}, {}>() @ {} = {:?} (total = {})",
                W::NAME,
                E::NAME,
                position,
                res,
                self.bytes_read
            );
        }
        res
    }

    fn try_read_bytes(&mut self, dest: &mut [u8]) -> Result<(), StreamError> {
        let position = self.stream.position();
        let res = self.stream.try_read_bytes(dest);
        if res.is_ok() {
            self.bytes_read += dest.len();
        }
        if PRINT {
            eprintln!(
                "read_bytes({}) @ {} = {:?} (total = {})",
                dest.len(),
                position,
                res,
                self.bytes_read
            );
        }
        res
    }
}

impl<E: Endianness, S: EndianWrite<E>, const PRINT: bool> EndianWrite<E>
    for CountStream<S, PRINT>
{
    fn try_write<W: Width>(&mut self, value: W::Value) -> Result<(), StreamError> {
        let position = self.stream.position();
        let res = self.stream.try_write::<W>(value);
        if res.is_ok() {
            self.bytes_written += W::BYTES;
        }
        if PRINT {
            eprintln!(
                "write<{}, {}>({:#x}) @ {} = {:?} (total = {})",
                W::NAME,
                E::NAME,
                value,
                position,
                res,
                self.bytes_written
            );
        }
        res
    }

    fn try_write_bytes(&mut self, src: &[u8]) -> Result<(), StreamError> {
        let position = self.stream.position();
        let res = self.stream.try_write_bytes(src);
        if res.is_ok() {
            self.bytes_written += src.len();
        }
        if PRINT {
            eprintln!(
                "write_bytes({}) @ {} = {:?} (total = {})",
                src.len(),
                position,
                res,
                self.bytes_written
            );
        }
        res
    }
}
