//! Stream adapter that dissects captured frames in arrival order

use futures::{Stream, ready};
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::dissector::{BoardwalkDissector, BoardwalkRecord};
use crate::sink::NullSink;
use crate::types::PacketInfo;
use crate::Result;

/// Extension trait to dissect any stream of captured frames
pub trait DissectExt: Stream {
    /// Dissect every frame with `dissector`, one at a time, in stream order.
    ///
    /// The stream takes ownership of the dissector for the length of the
    /// session; get it back with [`Dissect::into_dissector`].
    fn dissect_with(self, dissector: BoardwalkDissector) -> Dissect<Self>
    where
        Self: Sized,
    {
        Dissect::new(self, dissector)
    }
}

impl<T: Stream> DissectExt for T {}

pin_project! {
    /// A stream combinator yielding one dissection outcome per captured frame
    pub struct Dissect<S> {
        #[pin]
        stream: S,
        dissector: BoardwalkDissector,
        frame_number: u64,
    }
}

impl<S> Dissect<S> {
    pub fn new(stream: S, dissector: BoardwalkDissector) -> Self {
        Self { stream, dissector, frame_number: 0 }
    }

    pub fn dissector(&self) -> &BoardwalkDissector {
        &self.dissector
    }

    /// Number of frames pulled from the source so far
    pub fn frames_seen(&self) -> u64 {
        self.frame_number
    }

    pub fn into_dissector(self) -> BoardwalkDissector {
        self.dissector
    }
}

impl<S, B> Stream for Dissect<S>
where
    S: Stream<Item = B>,
    B: AsRef<[u8]>,
{
    type Item = Result<BoardwalkRecord>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        // Malformed frames come out as Err items; the stream keeps going
        match ready!(this.stream.poll_next(cx)) {
            Some(frame) => {
                *this.frame_number += 1;
                let mut info = PacketInfo::new(*this.frame_number);
                Poll::Ready(Some(this.dissector.dissect(frame.as_ref(), &mut info, &mut NullSink)))
            }
            None => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}
