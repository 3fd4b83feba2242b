/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits

[`Endianness`] selects a byte order at the type level, and [`Width`]
describes a fixed-width integer field; together they form the integer codec.
[`EndianRead`], [`EndianWrite`] and [`EndianSeek`] describe cursors over a
fixed-size buffer.

*/

mod endianness;
pub use endianness::*;

mod width;
pub use width::*;

mod stream;
pub(crate) use stream::check_bounds;
pub use stream::{EndianRead, EndianSeek, EndianWrite, StreamError};
