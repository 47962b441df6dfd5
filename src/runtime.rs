// src/runtime.rs
//! Single-threaded cooperative runtime around a [`Page`].
//!
//! Interaction behaviors subscribe to events with [`Runtime::on`] and get a
//! [`Binding`] back; dropping a behavior means handing its bindings to
//! [`Runtime::off`]. Events are delivered to their exact target only, there
//! is no bubbling. Side effects that need the host environment (printing,
//! alerts, scrolling) surface as [`HostCommand`]s on the returned
//! [`Dispatch`] instead of happening in place, which keeps every handler
//! testable with synthetic events.

use std::cell::RefCell;
use std::rc::Rc;

use crate::page::{NodeId, Page};

/// An input event, as the host environment would report it.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Click,
    PointerEnter,
    PointerLeave,
    KeyDown { key: char, ctrl: bool, meta: bool },
    Resize { width: f64 },
    /// Viewport intersection report for one observed element.
    Intersection { ratio: f64 },
    Load,
}

/// Discriminant used to match subscriptions against events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    PointerEnter,
    PointerLeave,
    KeyDown,
    Resize,
    Intersection,
    Load,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click => EventKind::Click,
            Event::PointerEnter => EventKind::PointerEnter,
            Event::PointerLeave => EventKind::PointerLeave,
            Event::KeyDown { .. } => EventKind::KeyDown,
            Event::Resize { .. } => EventKind::Resize,
            Event::Intersection { .. } => EventKind::Intersection,
            Event::Load => EventKind::Load,
        }
    }
}

/// What an event is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Node(NodeId),
    Document,
    Window,
}

/// An effect the page asks its host environment to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// Open the native print flow.
    Print,
    /// Show a blocking message to the user.
    Alert(String),
    /// Smooth-scroll the node into view, top-aligned.
    ScrollTo(NodeId),
}

type HandlerFn = Rc<RefCell<dyn FnMut(&mut Page, &Event, &mut Dispatch)>>;
type TimerFn = Box<dyn FnOnce(&mut Page, &mut Dispatch)>;

/// Disposer handle for one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding(u64);

struct Subscription {
    binding: Binding,
    target: Target,
    kind: EventKind,
    handler: HandlerFn,
}

struct Timer {
    due_ms: u64,
    run: TimerFn,
}

/// Outcome of one dispatch or timer pass: whether the default action was
/// suppressed and which host commands were requested.
#[derive(Default)]
pub struct Dispatch {
    default_prevented: bool,
    commands: Vec<HostCommand>,
    scheduled: Vec<(u64, TimerFn)>,
}

impl Dispatch {
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn emit(&mut self, command: HostCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Defers `run` by `delay_ms` on the runtime's timer queue.
    pub fn schedule(&mut self, delay_ms: u64, run: impl FnOnce(&mut Page, &mut Dispatch) + 'static) {
        self.scheduled.push((delay_ms, Box::new(run)));
    }
}

pub struct Runtime {
    pub page: Page,
    subscriptions: Vec<Subscription>,
    next_binding: u64,
    timers: Vec<Timer>,
    clock_ms: u64,
}

impl Runtime {
    pub fn new(page: Page) -> Self {
        Runtime {
            page,
            subscriptions: Vec::new(),
            next_binding: 0,
            timers: Vec::new(),
            clock_ms: 0,
        }
    }

    /// Subscribes `handler` to `kind` events addressed to `target`.
    pub fn on(
        &mut self,
        target: Target,
        kind: EventKind,
        handler: impl FnMut(&mut Page, &Event, &mut Dispatch) + 'static,
    ) -> Binding {
        let binding = Binding(self.next_binding);
        self.next_binding += 1;
        let handler: HandlerFn = Rc::new(RefCell::new(handler));
        self.subscriptions.push(Subscription {
            binding,
            target,
            kind,
            handler,
        });
        binding
    }

    /// Removes one subscription. Unknown bindings are ignored.
    pub fn off(&mut self, binding: Binding) {
        self.subscriptions.retain(|s| s.binding != binding);
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Delivers `event` to every subscription matching (`target`, kind), in
    /// subscription order. A resize updates the page's viewport width before
    /// any handler runs.
    pub fn dispatch(&mut self, target: Target, event: Event) -> Dispatch {
        if let Event::Resize { width } = event {
            self.page.set_viewport_width(width);
        }
        let matching: Vec<HandlerFn> = self
            .subscriptions
            .iter()
            .filter(|s| s.target == target && s.kind == event.kind())
            .map(|s| Rc::clone(&s.handler))
            .collect();
        let mut outcome = Dispatch::default();
        for handler in matching {
            let mut handler = handler.borrow_mut();
            (&mut *handler)(&mut self.page, &event, &mut outcome);
        }
        self.absorb_scheduled(&mut outcome);
        outcome
    }

    /// Moves the clock forward and fires every timer that came due, earliest
    /// first. Work a timer schedules lands back on the queue and fires in the
    /// same pass when already due.
    pub fn advance(&mut self, ms: u64) -> Dispatch {
        self.clock_ms += ms;
        let mut outcome = Dispatch::default();
        loop {
            let due = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due_ms <= self.clock_ms)
                .min_by_key(|(index, t)| (t.due_ms, *index))
                .map(|(index, _)| index);
            let Some(index) = due else {
                break;
            };
            let timer = self.timers.remove(index);
            (timer.run)(&mut self.page, &mut outcome);
            self.absorb_scheduled(&mut outcome);
        }
        outcome
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn absorb_scheduled(&mut self, outcome: &mut Dispatch) {
        for (delay_ms, run) in outcome.scheduled.drain(..) {
            self.timers.push(Timer {
                due_ms: self.clock_ms + delay_ms,
                run,
            });
        }
    }
}
