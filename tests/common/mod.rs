//! Shared helpers for driving cursors in tests.
#![allow(missing_docs, dead_code)]

use bicursor::Cursor;

/// Drains the front end to exhaustion, panicking on any error.
pub fn drain_front<C: Cursor>(cursor: &mut C) -> Vec<C::Item> {
    let mut out = Vec::new();
    while let Some(item) = cursor.consume_front().unwrap() {
        out.push(item);
    }
    out
}

/// Drains the back end to exhaustion, panicking on any error.
pub fn drain_back<C: Cursor>(cursor: &mut C) -> Vec<C::Item> {
    let mut out = Vec::new();
    while let Some(item) = cursor.consume_back().unwrap() {
        out.push(item);
    }
    out
}

/// Drives `cursor` with a call pattern (`true` = front, `false` = back),
/// returning the elements each end yielded.
pub fn drive<C: Cursor>(cursor: &mut C, pattern: &[bool]) -> (Vec<C::Item>, Vec<C::Item>) {
    let mut front = Vec::new();
    let mut back = Vec::new();
    for &take_front in pattern {
        if take_front {
            if let Some(item) = cursor.consume_front().unwrap() {
                front.push(item);
            }
        } else if let Some(item) = cursor.consume_back().unwrap() {
            back.push(item);
        }
    }
    (front, back)
}
