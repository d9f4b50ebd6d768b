//! Ambient background music.
//!
//! A lookahead scheduler: every 25 ms a timer tick queues pentatonic tones
//! whose start time falls inside the next 100 ms of the output clock. Tones
//! go to a `ToneSink`, the audio output resource. The sink is opened on
//! `start` and closed exactly once on `stop` or when the player is dropped.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// C major pentatonic, Hz.
pub const PENTATONIC_SCALE: [f32; 6] = [261.63, 293.66, 329.63, 392.00, 440.00, 523.25];

pub const DEFAULT_VOLUME: f32 = 0.3;

/// How far ahead of the output clock tones are queued, seconds.
pub const LOOKAHEAD_SECS: f64 = 0.1;

/// Timer period between scheduling passes.
pub const TICK_INTERVAL: Duration = Duration::from_millis(25);

/// Delay before the first tone after starting, seconds.
pub const START_DELAY_SECS: f64 = 0.1;

pub const TONE_DURATION_SECS: f64 = 2.0;
pub const ATTACK_SECS: f64 = 0.1;

/// Gain the envelope decays to at the end of a tone.
pub const RELEASE_GAIN: f32 = 0.001;

const SHORT_STEP_SECS: f64 = 0.25;
const LONG_STEP_SECS: f64 = 0.5;
const SHORT_STEP_PROBABILITY: f64 = 0.3;
const KEEP_OCTAVE_PROBABILITY: f64 = 0.4;

/// A sine tone with a linear attack and exponential decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Start time on the sink's clock, seconds
    pub start: f64,
    pub frequency: f32,
    /// Gain reached at the end of the attack
    pub peak_gain: f32,
    pub attack: f64,
    pub duration: f64,
}

/// Audio output resource.
pub trait ToneSink: Send + 'static {
    /// Output clock, seconds since the sink was opened.
    fn current_time(&self) -> f64;

    fn play(&mut self, tone: Tone);

    /// Release the output. Called exactly once.
    fn close(&mut self);
}

/// Sink that logs tones instead of producing sound.
pub struct TracingSink {
    opened: Instant,
    played: usize,
}

impl TracingSink {
    pub fn open() -> Self {
        debug!("Ambient audio output opened");
        Self {
            opened: Instant::now(),
            played: 0,
        }
    }
}

impl ToneSink for TracingSink {
    fn current_time(&self) -> f64 {
        self.opened.elapsed().as_secs_f64()
    }

    fn play(&mut self, tone: Tone) {
        self.played += 1;
        debug!(
            "Tone {:.2} Hz at {:.3}s (gain {:.2})",
            tone.frequency, tone.start, tone.peak_gain
        );
    }

    fn close(&mut self) {
        info!("Ambient audio output closed after {} tones", self.played);
    }
}

/// Chooses the next tones; owns the random source and the next start time.
pub struct ToneScheduler<R: Rng> {
    next_note_time: f64,
    volume: f32,
    rng: R,
}

impl<R: Rng> ToneScheduler<R> {
    pub fn new(first_note_time: f64, volume: f32, rng: R) -> Self {
        Self {
            next_note_time: first_note_time,
            volume,
            rng,
        }
    }

    pub fn next_note_time(&self) -> f64 {
        self.next_note_time
    }

    /// Queue every tone starting before `now + LOOKAHEAD_SECS`.
    ///
    /// If the clock has run past the next start time (the timer was starved),
    /// scheduling resumes from `now` instead of queueing tones in the past.
    /// Returns the number of tones queued.
    pub fn fill(&mut self, now: f64, sink: &mut dyn ToneSink) -> usize {
        if self.next_note_time < now {
            self.next_note_time = now;
        }

        let mut queued = 0;
        while self.next_note_time < now + LOOKAHEAD_SECS {
            let tone = self.tone_at(self.next_note_time);
            sink.play(tone);
            queued += 1;

            self.next_note_time += if self.rng.random_bool(SHORT_STEP_PROBABILITY) {
                SHORT_STEP_SECS
            } else {
                LONG_STEP_SECS
            };
        }
        queued
    }

    fn tone_at(&mut self, start: f64) -> Tone {
        let base = PENTATONIC_SCALE[self.rng.random_range(0..PENTATONIC_SCALE.len())];
        let octave = if self.rng.random_bool(KEEP_OCTAVE_PROBABILITY) {
            1.0
        } else {
            0.5
        };

        Tone {
            start,
            frequency: base * octave,
            peak_gain: self.volume,
            attack: ATTACK_SECS,
            duration: TONE_DURATION_SECS,
        }
    }
}

struct Running<S: ToneSink> {
    task: JoinHandle<()>,
    // `None` once closed; the timer task stops when it sees that.
    sink: Arc<Mutex<Option<S>>>,
}

impl<S: ToneSink> Running<S> {
    fn shutdown(self) {
        self.task.abort();
        let mut guard = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(mut sink) = guard.take() {
            sink.close();
        }
    }
}

/// Play/pause control for the ambient music.
pub struct AmbientPlayer<S: ToneSink> {
    open_sink: Box<dyn Fn() -> S + Send + Sync>,
    volume: f32,
    running: Option<Running<S>>,
}

impl AmbientPlayer<TracingSink> {
    pub fn tracing() -> Self {
        Self::new(DEFAULT_VOLUME, TracingSink::open)
    }
}

impl<S: ToneSink> AmbientPlayer<S> {
    pub fn new(volume: f32, open_sink: impl Fn() -> S + Send + Sync + 'static) -> Self {
        Self {
            open_sink: Box::new(open_sink),
            volume,
            running: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.running.is_some()
    }

    /// Open the output and start the timer. Must be called inside a tokio
    /// runtime. Does nothing if already playing.
    pub fn start(&mut self) {
        if self.running.is_some() {
            return;
        }

        let sink = (self.open_sink)();
        let first_note = sink.current_time() + START_DELAY_SECS;
        let shared = Arc::new(Mutex::new(Some(sink)));
        let mut scheduler = ToneScheduler::new(first_note, self.volume, StdRng::from_os_rng());

        let task_sink = Arc::clone(&shared);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(TICK_INTERVAL);
            loop {
                ticker.tick().await;
                let mut guard = task_sink.lock().unwrap_or_else(PoisonError::into_inner);
                let Some(sink) = guard.as_mut() else {
                    break;
                };
                let now = sink.current_time();
                scheduler.fill(now, sink);
            }
        });

        info!("Ambient music started");
        self.running = Some(Running { task, sink: shared });
    }

    /// Cancel the pending timer and close the output.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.shutdown();
            info!("Ambient music stopped");
        }
    }

    /// Start if stopped, stop if playing. Returns the new playing state.
    pub fn toggle(&mut self) -> bool {
        if self.is_playing() {
            self.stop();
        } else {
            self.start();
        }
        self.is_playing()
    }
}

impl<S: ToneSink> Drop for AmbientPlayer<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
