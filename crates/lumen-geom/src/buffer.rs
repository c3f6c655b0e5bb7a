// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-capacity output buffers for renderers.

/// Copies `items` into the front of `buf`, zero-fills the remainder and
/// returns how many slots are occupied.
///
/// Items beyond the buffer's capacity are dropped.
///
/// # Examples
/// ```
/// use lumen_geom::pad_into;
/// let mut buf = [9_u32; 4];
/// assert_eq!(pad_into(&[1, 2], &mut buf), 2);
/// assert_eq!(buf, [1, 2, 0, 0]);
/// ```
pub fn pad_into<T: Copy + Default>(items: &[T], buf: &mut [T]) -> usize {
    let used = items.len().min(buf.len());
    if used < items.len() {
        tracing::warn!(
            items = items.len(),
            capacity = buf.len(),
            "slice truncated to buffer capacity"
        );
    }
    buf[..used].copy_from_slice(&items[..used]);
    buf[used..].fill(T::default());
    used
}
