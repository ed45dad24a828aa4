//! Pull-based trace protocol shared by both engines.
//!
//! The algorithm body and the event stream are the same control flow: the
//! recursion runs on a worker thread against a rendezvous channel, so
//! producing an event blocks until the consumer pulls it. No event is
//! computed ahead of its consumption and no event is ever re-delivered.
//!
//! Cancellation is cooperative. Dropping a [`Trace`] disconnects the channel;
//! the producer's next [`EventSink::emit`] returns [`Cancelled`], the
//! recursion unwinds via `?`, and the worker thread exits. The remainder of
//! the computation simply never runs.

use std::convert::Infallible;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::JoinHandle;

/// The consumer stopped pulling events; the producer should unwind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cancelled;

/// The seam between an algorithm body and whoever observes its steps.
///
/// Engines are generic over the sink so the traced and untraced runs share
/// one implementation of the recursion.
pub trait EventSink<E> {
    /// Why an emission can stop the recursion. [`NullSink`] uses
    /// [`Infallible`], so untraced runs are statically uninterruptible.
    type Interrupt;

    fn emit(&mut self, event: E) -> Result<(), Self::Interrupt>;
}

/// Sink for untraced runs: emitting is free and can never interrupt.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl<E> EventSink<E> for NullSink {
    type Interrupt = Infallible;

    fn emit(&mut self, _event: E) -> Result<(), Infallible> {
        Ok(())
    }
}

enum Step<E, R> {
    Event(E),
    Done(R),
}

/// Producer half of a [`Trace`].
pub(crate) struct ChannelSink<E, R> {
    tx: SyncSender<Step<E, R>>,
}

impl<E, R> EventSink<E> for ChannelSink<E, R> {
    type Interrupt = Cancelled;

    fn emit(&mut self, event: E) -> Result<(), Cancelled> {
        self.tx.send(Step::Event(event)).map_err(|_| Cancelled)
    }
}

/// A lazy, finite, one-shot sequence of algorithm events.
///
/// Iterate to receive events in exact execution order, then call
/// [`Trace::finish`] for the final result. Dropping the trace at any point
/// cancels the rest of the computation and joins the worker.
pub struct Trace<E, R> {
    rx: Option<Receiver<Step<E, R>>>,
    worker: Option<JoinHandle<()>>,
    result: Option<R>,
}

impl<E, R> Trace<E, R>
where
    E: Send + 'static,
    R: Send + 'static,
{
    /// Run `work` on a worker thread behind a rendezvous channel.
    ///
    /// The zero-capacity channel is what makes the stream strictly pull
    /// based: `send` blocks until the consumer's `recv`, so the producer
    /// computes exactly one event per pull and then suspends.
    pub(crate) fn spawn<F>(work: F) -> Self
    where
        F: FnOnce(&mut ChannelSink<E, R>) -> Result<R, Cancelled> + Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel(0);
        let worker = std::thread::spawn(move || {
            let mut sink = ChannelSink { tx };
            if let Ok(result) = work(&mut sink) {
                // A failed send here means the consumer dropped the trace
                // after the last event; that is ordinary cancellation.
                let _ = sink.tx.send(Step::Done(result));
            }
        });
        Self {
            rx: Some(rx),
            worker: Some(worker),
            result: None,
        }
    }
}

impl<E, R> Trace<E, R> {
    /// Drain any remaining events and return the final result.
    ///
    /// If the worker panicked, the panic resumes on the calling thread.
    pub fn finish(mut self) -> R {
        while self.pull().is_some() {}
        match self.result.take() {
            Some(result) => result,
            None => self.join_failed(),
        }
    }

    fn pull(&mut self) -> Option<E> {
        if self.result.is_some() {
            return None;
        }
        match self.rx.as_ref()?.recv() {
            Ok(Step::Event(event)) => Some(event),
            Ok(Step::Done(result)) => {
                self.result = Some(result);
                None
            }
            Err(_) => None,
        }
    }

    // `recv` can only disconnect before `Done` if the worker died.
    fn join_failed(&mut self) -> ! {
        if let Some(worker) = self.worker.take() {
            if let Err(panic) = worker.join() {
                std::panic::resume_unwind(panic);
            }
        }
        unreachable!("trace worker exited without a result or a panic")
    }
}

impl<E, R> Iterator for Trace<E, R> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.pull()
    }
}

impl<E, R> Drop for Trace<E, R> {
    fn drop(&mut self) {
        // Disconnect first so a producer blocked in `send` observes the
        // cancellation, then join so no worker outlives its trace.
        drop(self.rx.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
