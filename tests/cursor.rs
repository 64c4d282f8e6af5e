#![allow(missing_docs)]
mod common;

use bicursor::{
    Capability, Cursor, CursorError, Direction, ProducerCursor, SeqCursor, from_fn,
};
use common::{drain_back, drain_front};
use std::{cell::Cell, rc::Rc};

#[test]
fn test_interleaved_consumption() {
    let mut cursor = SeqCursor::new([1, 2, 3, 4, 5, 6]);
    assert_eq!(cursor.consume_front().unwrap(), Some(1));
    assert_eq!(cursor.consume_front().unwrap(), Some(2));
    assert_eq!(cursor.consume_back().unwrap(), Some(6));
    assert_eq!(cursor.consume_front().unwrap(), Some(3));
    assert_eq!(cursor.consume_back().unwrap(), Some(5));
    assert_eq!(cursor.consume_back().unwrap(), Some(4));
    assert_eq!(cursor.consume_back().unwrap(), None);
    assert_eq!(cursor.consume_front().unwrap(), None);
}

#[test]
fn test_done_is_monotonic_per_end() {
    let mut cursor = SeqCursor::new([1]);
    assert_eq!(cursor.consume_front().unwrap(), Some(1));
    for _ in 0..3 {
        assert_eq!(cursor.consume_front().unwrap(), None);
        assert_eq!(cursor.consume_back().unwrap(), None);
    }
}

#[test]
fn test_capability_gating_on_base_cursor() {
    let mut forward = SeqCursor::forward_only([1, 2, 3]);
    assert_eq!(forward.capability(), Capability::ForwardOnly);
    let err = forward.consume_back().unwrap_err();
    assert!(matches!(
        err,
        CursorError::UnsupportedDirection {
            requested: Direction::Back,
            capability: Capability::ForwardOnly,
        }
    ));
    // The refusal consumed nothing.
    assert_eq!(drain_front(&mut forward), vec![1, 2, 3]);

    let mut backward = SeqCursor::backward_only([1, 2, 3]);
    assert_eq!(backward.capability(), Capability::BackwardOnly);
    assert!(backward.consume_front().unwrap_err().is_unsupported_direction());
    assert_eq!(drain_back(&mut backward), vec![3, 2, 1]);
}

#[test]
fn test_reverse_swaps_ends() {
    let mut reversed = SeqCursor::new([1, 2, 3, 4]).reverse();
    assert_eq!(reversed.capability(), Capability::DoubleEnded);
    assert_eq!(reversed.consume_front().unwrap(), Some(4));
    assert_eq!(reversed.consume_back().unwrap(), Some(1));
    assert_eq!(reversed.consume_front().unwrap(), Some(3));
    assert_eq!(reversed.consume_front().unwrap(), Some(2));
    assert_eq!(reversed.consume_front().unwrap(), None);
}

#[test]
fn test_reverse_forward_only() {
    let mut reversed = SeqCursor::forward_only([1, 2, 3]).reverse();
    assert_eq!(reversed.capability(), Capability::BackwardOnly);
    assert_eq!(reversed.consume_back().unwrap(), Some(1));
    assert_eq!(reversed.consume_back().unwrap(), Some(2));
    assert_eq!(reversed.consume_back().unwrap(), Some(3));
    assert_eq!(reversed.consume_back().unwrap(), None);

    let err = reversed.consume_front().unwrap_err();
    assert!(matches!(
        err,
        CursorError::UnsupportedDirection {
            requested: Direction::Front,
            capability: Capability::BackwardOnly,
        }
    ));
}

#[test]
fn test_reverse_is_an_involution() {
    let mut cursor = SeqCursor::new([1, 2, 3, 4]).reverse().reverse();
    assert_eq!(cursor.capability(), Capability::DoubleEnded);
    assert_eq!(cursor.consume_front().unwrap(), Some(1));
    assert_eq!(cursor.consume_back().unwrap(), Some(4));
    assert_eq!(cursor.consume_front().unwrap(), Some(2));
    assert_eq!(cursor.consume_back().unwrap(), Some(3));
    assert_eq!(cursor.consume_back().unwrap(), None);
}

#[test]
fn test_close_is_idempotent() {
    let mut cursor = SeqCursor::new([1, 2, 3]);
    assert_eq!(cursor.consume_front().unwrap(), Some(1));
    cursor.close();
    cursor.close();
    assert_eq!(cursor.consume_front().unwrap(), None);
    assert_eq!(cursor.consume_back().unwrap(), None);
}

#[test]
fn test_close_after_exhaustion() {
    let mut cursor = SeqCursor::new([1]);
    assert_eq!(cursor.consume_front().unwrap(), Some(1));
    assert_eq!(cursor.consume_front().unwrap(), None);
    cursor.close();
    assert_eq!(cursor.consume_back().unwrap(), None);
}

#[test]
fn test_producer_cursor_is_forward_only() {
    let mut cursor = ProducerCursor::from_iter([10, 20, 30]);
    assert_eq!(cursor.capability(), Capability::ForwardOnly);
    assert!(cursor.consume_back().unwrap_err().is_unsupported_direction());
    assert_eq!(drain_front(&mut cursor), vec![10, 20, 30]);
    assert_eq!(cursor.consume_front().unwrap(), None);
}

#[test]
fn test_producer_resumes_once_per_call() {
    let resumes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&resumes);
    let mut cursor = ProducerCursor::new(from_fn(move || {
        counter.set(counter.get() + 1);
        Ok(Some(counter.get()))
    }));

    assert_eq!(cursor.consume_front().unwrap(), Some(1));
    assert_eq!(cursor.consume_front().unwrap(), Some(2));
    assert_eq!(resumes.get(), 2);

    // Close must stop the producer without another resume.
    cursor.close();
    assert_eq!(cursor.consume_front().unwrap(), None);
    assert_eq!(resumes.get(), 2);
}

#[test]
fn test_producer_failure_terminates_the_cursor() {
    let mut calls = 0;
    let mut cursor = ProducerCursor::new(from_fn(move || {
        calls += 1;
        match calls {
            1 | 2 => Ok(Some(calls)),
            3 => Err("producer exploded".into()),
            _ => panic!("resumed after failure"),
        }
    }));

    assert_eq!(cursor.consume_front().unwrap(), Some(1));
    assert_eq!(cursor.consume_front().unwrap(), Some(2));

    let err = cursor.consume_front().unwrap_err();
    assert!(matches!(err, CursorError::Producer(_)));
    assert!(!err.is_unsupported_direction());

    // Surfaced once; afterwards the cursor behaves as exhausted.
    assert_eq!(cursor.consume_front().unwrap(), None);
    assert_eq!(cursor.consume_front().unwrap(), None);
}

/// Producer whose drop increments a counter, to observe release-exactly-once.
struct TalliedProducer {
    tally: Rc<Cell<u32>>,
}

impl bicursor::Producer for TalliedProducer {
    type Item = u8;

    fn resume(&mut self) -> Result<Option<u8>, bicursor::BoxError> {
        Ok(Some(7))
    }
}

impl Drop for TalliedProducer {
    fn drop(&mut self) {
        self.tally.set(self.tally.get() + 1);
    }
}

#[test]
fn test_close_releases_the_producer_exactly_once() {
    let drops = Rc::new(Cell::new(0));
    let mut cursor = ProducerCursor::new(TalliedProducer { tally: Rc::clone(&drops) });
    assert_eq!(cursor.consume_front().unwrap(), Some(7));
    assert_eq!(drops.get(), 0);

    cursor.close();
    assert_eq!(drops.get(), 1);
    cursor.close();
    assert_eq!(drops.get(), 1);

    drop(cursor);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_seq_cursor_remaining() {
    let mut cursor = SeqCursor::new([1, 2, 3]);
    assert_eq!(cursor.remaining(), 3);
    cursor.consume_back().unwrap();
    assert_eq!(cursor.remaining(), 2);
    cursor.close();
    assert_eq!(cursor.remaining(), 0);
}
