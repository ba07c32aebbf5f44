/// A single notification emitted by a sort.
///
/// Compare and swap events carry indices into the sorted sequence. Word
/// algorithms only emit [`ArrayUpdated`](Event::ArrayUpdated) and
/// [`LogAdded`](Event::LogAdded).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Event<T> {
    /// Snapshot of the sequence after its element order changed.
    ArrayUpdated(Vec<T>),
    /// Narrative message.
    LogAdded(String),
    /// Two positions were compared.
    ElementsCompared(usize, usize),
    /// Two positions exchanged their elements.
    ElementsSwapped(usize, usize),
}

/// Receives the events of a sort as they happen.
///
/// All methods do nothing by default so implementors only override what they
/// care about. Notifications are synchronous and strictly ordered; nothing is
/// buffered on the sorting side.
///
/// The observer is borrowed for the duration of one `sort` call and released
/// when the call returns, no matter whether it completed or was cancelled.
pub trait Observer<T> {
    fn on_array_updated(&mut self, snapshot: &[T]) {
        let _ = snapshot;
    }

    fn on_log(&mut self, message: &str) {
        let _ = message;
    }

    fn on_compare(&mut self, i: usize, j: usize) {
        let _ = (i, j);
    }

    fn on_swap(&mut self, i: usize, j: usize) {
        let _ = (i, j);
    }
}

/// Discards every event.
impl<T> Observer<T> for () {}

impl<T, O: Observer<T> + ?Sized> Observer<T> for &mut O {
    fn on_array_updated(&mut self, snapshot: &[T]) {
        (**self).on_array_updated(snapshot);
    }

    fn on_log(&mut self, message: &str) {
        (**self).on_log(message);
    }

    fn on_compare(&mut self, i: usize, j: usize) {
        (**self).on_compare(i, j);
    }

    fn on_swap(&mut self, i: usize, j: usize) {
        (**self).on_swap(i, j);
    }
}

/// Observer that records every event in order.
///
/// ```
/// use sort_trace::{numeric::BubbleSort, Event, EventLog, SortOptions};
///
/// # #[cfg(feature = "async_tokio")]
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let mut data = [5, 3, 8, 1];
/// let mut log = EventLog::new();
/// let options = SortOptions::new().delay_ms(0);
///
/// let outcome = BubbleSort.sort(&mut data, &options, &mut log).await;
///
/// assert!(outcome.is_completed());
/// assert_eq!(data, [1, 3, 5, 8]);
/// assert_eq!(log.comparisons().next(), Some((0, 1)));
/// assert_eq!(log.swaps().next(), Some((0, 1)));
/// # });
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventLog<T> {
    events: Vec<Event<T>>,
}

impl<T> EventLog<T> {
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[Event<T>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event<T>> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Index pairs of all [`Event::ElementsCompared`] in order.
    pub fn comparisons(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::ElementsCompared(i, j) => Some((*i, *j)),
            _ => None,
        })
    }

    /// Index pairs of all [`Event::ElementsSwapped`] in order.
    pub fn swaps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::ElementsSwapped(i, j) => Some((*i, *j)),
            _ => None,
        })
    }

    /// All [`Event::ArrayUpdated`] snapshots in order.
    pub fn snapshots(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::ArrayUpdated(snapshot) => Some(snapshot.as_slice()),
            _ => None,
        })
    }

    /// All [`Event::LogAdded`] messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::LogAdded(message) => Some(message.as_str()),
            _ => None,
        })
    }
}

impl<T> Default for EventLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Observer<T> for EventLog<T> {
    fn on_array_updated(&mut self, snapshot: &[T]) {
        self.events.push(Event::ArrayUpdated(snapshot.to_vec()));
    }

    fn on_log(&mut self, message: &str) {
        self.events.push(Event::LogAdded(message.to_owned()));
    }

    fn on_compare(&mut self, i: usize, j: usize) {
        self.events.push(Event::ElementsCompared(i, j));
    }

    fn on_swap(&mut self, i: usize, j: usize) {
        self.events.push(Event::ElementsSwapped(i, j));
    }
}

impl<T> IntoIterator for EventLog<T> {
    type Item = Event<T>;
    type IntoIter = std::vec::IntoIter<Event<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
