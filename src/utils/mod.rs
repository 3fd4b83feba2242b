/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Debug helpers.

[`CountStream`] keeps track of the number of bytes read from an
[`EndianRead`](crate::traits::EndianRead) or written to an
[`EndianWrite`](crate::traits::EndianWrite), optionally printing on standard
error the operations performed on the stream.

*/

mod count;
pub use count::*;
