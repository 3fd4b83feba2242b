/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of endian streams over memory.

[`EndianStreamReader`] reads from a borrowed slice and [`EndianStreamWriter`]
writes into a borrowed mutable slice. Both have a statically selectable
endianness, a size fixed at construction, and a position that moves forward
with each read or write and can be changed with
[`seek`](crate::traits::EndianSeek::seek).

Neither type allocates or owns its buffer: the borrow guarantees that the
stream cannot outlive the memory it reads or writes.

*/

mod stream_reader;
pub use stream_reader::*;

mod stream_writer;
pub use stream_writer::*;
