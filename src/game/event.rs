//! Timer event payloads.

/// A scheduled moment in the game's cooperative timeline.
///
/// Events replace anonymous deferred callbacks: each timer carries a typed
/// payload, and the controller decides what it means when it fires. An
/// event that arrives in the wrong phase (a stale schedule) is dropped, not
/// executed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    /// The get-ready delay elapsed; playback may begin.
    CountdownFinished,
    /// Flash the sequence signal at this position.
    FlashSignal {
        /// Index into the current target sequence.
        position: usize,
    },
    /// Every flash of the current playback has been shown.
    PlaybackFinished,
    /// The between-round pause elapsed; the next round may begin.
    NextRound,
}
