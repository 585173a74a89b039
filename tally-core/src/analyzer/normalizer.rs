use std::str;

use tally_types::wordchar;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

// Byte-level fold for the ASCII fast path: uppercase letters map to
// lowercase, word bytes [a-z0-9_] map to themselves, every other byte
// below 0x80 maps to 0x20. Entries at 0x80 and above are identity; the
// fast path never consults them.
#[rustfmt::skip]
const FOLD_TABLE: [u8; 256] = [
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x30,0x31,0x32,0x33,0x34,0x35,0x36,0x37,0x38,0x39,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x20,0x20,0x20,0x20,0x5f,
    0x20,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x20,0x20,0x20,0x20,0x20,
    0x80,0x81,0x82,0x83,0x84,0x85,0x86,0x87,0x88,0x89,0x8a,0x8b,0x8c,0x8d,0x8e,0x8f,
    0x90,0x91,0x92,0x93,0x94,0x95,0x96,0x97,0x98,0x99,0x9a,0x9b,0x9c,0x9d,0x9e,0x9f,
    0xa0,0xa1,0xa2,0xa3,0xa4,0xa5,0xa6,0xa7,0xa8,0xa9,0xaa,0xab,0xac,0xad,0xae,0xaf,
    0xb0,0xb1,0xb2,0xb3,0xb4,0xb5,0xb6,0xb7,0xb8,0xb9,0xba,0xbb,0xbc,0xbd,0xbe,0xbf,
    0xc0,0xc1,0xc2,0xc3,0xc4,0xc5,0xc6,0xc7,0xc8,0xc9,0xca,0xcb,0xcc,0xcd,0xce,0xcf,
    0xd0,0xd1,0xd2,0xd3,0xd4,0xd5,0xd6,0xd7,0xd8,0xd9,0xda,0xdb,0xdc,0xdd,0xde,0xdf,
    0xe0,0xe1,0xe2,0xe3,0xe4,0xe5,0xe6,0xe7,0xe8,0xe9,0xea,0xeb,0xec,0xed,0xee,0xef,
    0xf0,0xf1,0xf2,0xf3,0xf4,0xf5,0xf6,0xf7,0xf8,0xf9,0xfa,0xfb,0xfc,0xfd,0xfe,0xff,
];

/// Writes the folded form of ASCII byte `b` at `buf[*wrote]`.
///
/// Separator bytes (fold value 0x20) are collapsed: a space is written
/// only when the previous output byte was not one.
///
/// # Safety
///
/// Caller must guarantee `*wrote < buf.capacity()`.
#[inline(always)]
unsafe fn emit_folded(buf: &mut Vec<u8>, b: u8, wrote: &mut usize, prev_space: &mut bool) {
    let folded = *FOLD_TABLE.get_unchecked(b as usize);
    if folded == b' ' {
        if !*prev_space {
            *buf.as_mut_ptr().add(*wrote) = b' ';
            *wrote += 1;
            *prev_space = true;
        }
    } else {
        *buf.as_mut_ptr().add(*wrote) = folded;
        *wrote += 1;
        *prev_space = false;
    }
}

/// High-performance word-boundary normalizer.
///
/// Performs the following operations in a single pass:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Replaces every non-word character (anything other than an
///   alphanumeric or an underscore) with a space
/// - Collapses consecutive separator runs into single spaces
/// - Drops leading and trailing separators
///
/// The output therefore contains only lowercase word characters and
/// single interior spaces: exactly the form the tokenizer splits on.
///
/// # Performance
///
/// Uses SIMD (AVX2/SSE2) to gate the ASCII fast path on x86_64. Falls
/// back to scalar processing for non-ASCII content or on other
/// architectures.
///
/// # Examples
///
/// ```
/// use tally_core::analyzer::WordNormalizer;
///
/// let normalizer = WordNormalizer::new();
/// assert_eq!(normalizer.normalize("  HELLO,  WORLD!  "), "hello world");
/// assert_eq!(normalizer.normalize("don't-stop"), "don t stop");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordNormalizer;

impl WordNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when
    /// necessary. Clears the buffer before writing.
    ///
    /// # Safety
    ///
    /// This method uses unsafe code for performance. The implementation
    /// maintains UTF-8 invariants and buffer bounds.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len() + input.len() / 8);

        let bytes = input.as_bytes();
        let mut i = 0usize;
        let mut wrote = 0usize;
        // Starting in the "just wrote a space" state suppresses leading
        // separators entirely.
        let mut prev_space = true;

        unsafe {
            let buf = out.as_mut_vec();

            #[cfg(target_arch = "x86_64")]
            {
                if is_x86_feature_detected!("avx2") {
                    while i + 32 <= bytes.len() {
                        let chunk = _mm256_loadu_si256(bytes.as_ptr().add(i) as *const __m256i);
                        if _mm256_movemask_epi8(chunk) != 0 {
                            break;
                        }

                        for j in 0..32 {
                            let b = *bytes.get_unchecked(i + j);
                            emit_folded(buf, b, &mut wrote, &mut prev_space);
                        }
                        i += 32;
                    }
                }

                while i + 16 <= bytes.len() {
                    let chunk = _mm_loadu_si128(bytes.as_ptr().add(i) as *const __m128i);
                    if _mm_movemask_epi8(chunk) != 0 {
                        break;
                    }

                    for j in 0..16 {
                        let b = *bytes.get_unchecked(i + j);
                        emit_folded(buf, b, &mut wrote, &mut prev_space);
                    }
                    i += 16;
                }
            }

            while i < bytes.len() && bytes[i] < 128 {
                emit_folded(buf, bytes[i], &mut wrote, &mut prev_space);
                i += 1;
            }

            while i < bytes.len() {
                let ch = str::from_utf8_unchecked(&bytes[i..])
                    .chars()
                    .next()
                    .unwrap_unchecked();
                i += ch.len_utf8();

                // Classify each produced character, not the source one:
                // lowercasing can split a letter into a letter plus a
                // combining mark, and the mark is a boundary.
                for lowered in ch.to_lowercase() {
                    if wordchar::is_word_char(lowered) {
                        let mut tmp = [0u8; 4];
                        let enc = lowered.encode_utf8(&mut tmp);

                        if wrote + enc.len() > buf.capacity() {
                            buf.set_len(wrote);
                            buf.reserve(32);
                        }

                        for &byte in enc.as_bytes() {
                            *buf.as_mut_ptr().add(wrote) = byte;
                            wrote += 1;
                        }

                        prev_space = false;
                    } else if !prev_space {
                        if wrote == buf.capacity() {
                            buf.set_len(wrote);
                            buf.reserve(32);
                        }

                        *buf.as_mut_ptr().add(wrote) = b' ';
                        wrote += 1;
                        prev_space = true;
                    }
                }

                // Lowercase expansions can leave less spare capacity than
                // the remaining input needs. Top it up before resuming the
                // unguarded ASCII loop.
                if wrote + (bytes.len() - i) > buf.capacity() {
                    buf.set_len(wrote);
                    buf.reserve(bytes.len() - i);
                }

                while i < bytes.len() && bytes[i] < 128 {
                    emit_folded(buf, bytes[i], &mut wrote, &mut prev_space);
                    i += 1;
                }
            }

            if prev_space && wrote > 0 {
                wrote -= 1;
            }

            buf.set_len(wrote);
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}
