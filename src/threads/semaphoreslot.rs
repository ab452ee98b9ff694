//! Single-slot hand-off between one writer and one reader.
//!
//! A write completes only once the reader has taken the value, so writes and
//! reads strictly alternate. Dropping either half makes the peer's pending and
//! future operations fail with [`SlotClosed`].

use std::sync::mpsc::{
    Receiver,
    SyncSender,
    sync_channel
};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the other half of the slot is gone")]
pub struct SlotClosed;

#[derive(Debug)]
pub struct SlotWriter<T> {
    sender: SyncSender<T>,
}

#[derive(Debug)]
pub struct SlotReader<T> {
    receiver: Receiver<T>,
}

pub fn semaphore_slot<T>() -> (SlotWriter<T>, SlotReader<T>) {
    let (sender, receiver) = sync_channel(0);
    (SlotWriter { sender }, SlotReader { receiver })
}

impl<T> SlotWriter<T> {
    /// Blocks until the reader takes `value`.
    pub fn write(&self, value: T) -> Result<(), SlotClosed> {
        self.sender.send(value).map_err(|_| SlotClosed)
    }
}

impl<T> SlotReader<T> {
    /// Blocks until the writer provides a value.
    pub fn read(&self) -> Result<T, SlotClosed> {
        self.receiver.recv().map_err(|_| SlotClosed)
    }
}
