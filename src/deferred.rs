//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use std::collections::VecDeque;

/// Action postponed to a safe point of the frame. It receives the object that owns the queue.
pub type DeferredAction<T> = Box<dyn FnOnce(&mut T)>;

/// Strict FIFO of postponed actions.
pub struct DeferredQueue<T: ?Sized> {
    actions: VecDeque<DeferredAction<T>>,
}

impl<T: ?Sized> DeferredQueue<T> {
    /// Appends an action to the back of the queue.
    pub fn push<F: FnOnce(&mut T) + 'static>(&mut self, f: F) { self.actions.push_back(Box::new(f)); }

    /// Removes the action at the front of the queue.
    pub fn pop(&mut self) -> Option<DeferredAction<T>> { self.actions.pop_front() }

    /// Number of pending actions.
    pub fn len(&self) -> usize { self.actions.len() }

    /// Returns `true` when nothing is pending.
    pub fn is_empty(&self) -> bool { self.actions.is_empty() }
}

impl<T: ?Sized> Default for DeferredQueue<T> {
    fn default() -> Self { Self { actions: VecDeque::new() } }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// The two drain points of a frame.
pub enum DrainPoint {
    /// Before the UI frame is set up; safe for resizing.
    BeforeDraw,
    /// After the UI frame began; font metrics are available.
    DuringDraw,
}

/// The before-draw and during-draw queues of a window.
pub struct DeferredQueues<T: ?Sized> {
    before_draw: DeferredQueue<T>,
    during_draw: DeferredQueue<T>,
}

impl<T: ?Sized> Default for DeferredQueues<T> {
    fn default() -> Self {
        Self {
            before_draw: DeferredQueue::default(),
            during_draw: DeferredQueue::default(),
        }
    }
}

impl<T: ?Sized> DeferredQueues<T> {
    /// Queues an action for the given drain point.
    pub fn push<F: FnOnce(&mut T) + 'static>(&mut self, point: DrainPoint, f: F) { self.queue_mut(point).push(f); }

    /// Returns the queue for a drain point.
    pub fn queue(&self, point: DrainPoint) -> &DeferredQueue<T> {
        match point {
            DrainPoint::BeforeDraw => &self.before_draw,
            DrainPoint::DuringDraw => &self.during_draw,
        }
    }

    /// Returns the queue for a drain point.
    pub fn queue_mut(&mut self, point: DrainPoint) -> &mut DeferredQueue<T> {
        match point {
            DrainPoint::BeforeDraw => &mut self.before_draw,
            DrainPoint::DuringDraw => &mut self.during_draw,
        }
    }
}

/// Runs the actions of one drain point until that queue is empty, including actions queued by
/// the actions themselves. `queues` projects the owner onto its queues. Returns the number run.
pub fn drain_deferred<T: ?Sized>(owner: &mut T, point: DrainPoint, queues: fn(&mut T) -> &mut DeferredQueues<T>) -> usize {
    let mut count = 0;
    while let Some(action) = queues(owner).queue_mut(point).pop() {
        action(owner);
        count += 1;
    }
    count
}
