// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Characters eligible for [`crate::random_string`]: digits, then uppercase,
/// then lowercase ASCII letters. Index `i` maps to `ALPHABET[i]`.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Returns `true` if `c` belongs to [`ALPHABET`].
pub fn is_alphabet_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
