use log::debug;
use serde::{Deserialize, Serialize};

use crate::diff::{self, DiffKind, DiffRecord};
use crate::easing::ease_out_quint;
use crate::effect::{EffectContext, EffectKind, MorphEffect};
use crate::layout::{self, Rect, TextAlignment, TextMeasurer};
use crate::limbo::{CharLimbo, Renderer};

/// Ticks past the computed total that absorb `ceil` rounding drift before the
/// transition is declared complete.
const GRACE_FRAMES: u32 = 5;

/// Size floor preventing degenerate glyph renders (emoji in particular).
const MIN_FONT_SIZE: f32 = 0.0001;

/// Driving clock collaborator. The engine starts it when a transition begins
/// and pauses it on completion; the host delivers `on_tick` calls while it
/// runs. Injected so tests can feed synthetic tick sequences.
pub trait Clock {
    fn start(&mut self);
    fn pause(&mut self);
}

/// Transition lifecycle notifications, delivered to every subscribed
/// observer in subscription order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MorphEvent {
    Started,
    Progress(f32),
    Completed,
}

/// Label configuration. Every knob is independently settable and takes
/// effect on the next transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Transition length in seconds.
    pub duration: f32,
    /// Per-character stagger in seconds.
    pub char_delay: f32,
    /// When `false`, text swaps render immediately with no diffing.
    pub enabled: bool,
    pub effect: EffectKind,
    pub alignment: TextAlignment,
    pub font_size: f32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            duration: 0.6,
            char_delay: 0.026,
            enabled: true,
            effect: EffectKind::Scale,
            alignment: TextAlignment::Left,
            font_size: 16.0,
        }
    }
}

/// Stateful per-label morph controller.
///
/// Owns one transition session at a time: the previous and current text, the
/// alignment between them, both baseline rect arrays, and the progress clock.
/// All mutation happens in `set_text` (full reset) and `on_tick` (progress
/// advance); `limbo_of_characters` is read-only and idempotent between ticks.
pub struct MorphLabel<M: TextMeasurer> {
    config: MorphConfig,
    measurer: M,
    clock: Box<dyn Clock>,
    effect: Box<dyn MorphEffect>,
    observers: Vec<Box<dyn FnMut(MorphEvent)>>,

    text: String,
    previous_text: String,
    diff_records: Vec<DiffRecord>,
    previous_rects: Vec<Rect>,
    new_rects: Vec<Rect>,
    bounds: Rect,

    progress: f32,
    current_frame: u32,
    total_frames: u32,
    total_delay_frames: u32,
    skip_frame_counter: u32,
    animating: bool,
}

impl<M: TextMeasurer> MorphLabel<M> {
    pub fn new(measurer: M, clock: Box<dyn Clock>, config: MorphConfig, bounds: Rect) -> Self {
        Self {
            effect: config.effect.overrides(),
            config,
            measurer,
            clock,
            observers: Vec::new(),
            text: String::new(),
            previous_text: String::new(),
            diff_records: Vec::new(),
            previous_rects: Vec::new(),
            new_rects: Vec::new(),
            bounds,
            progress: 0.0,
            current_frame: 0,
            total_frames: 0,
            total_delay_frames: 0,
            skip_frame_counter: 0,
            animating: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn previous_text(&self) -> &str {
        &self.previous_text
    }

    pub fn diff_records(&self) -> &[DiffRecord] {
        &self.diff_records
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    /// Subscribe to transition lifecycle events.
    pub fn observe(&mut self, observer: impl FnMut(MorphEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn set_duration(&mut self, seconds: f32) {
        self.config.duration = seconds;
    }

    pub fn set_char_delay(&mut self, seconds: f32) {
        self.config.char_delay = seconds;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn set_effect(&mut self, kind: EffectKind) {
        self.config.effect = kind;
        self.effect = kind.overrides();
    }

    /// Install an override set outside the stock `EffectKind` roster.
    pub fn set_custom_effect(&mut self, effect: Box<dyn MorphEffect>) {
        self.effect = effect;
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.relayout();
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        // A non-positive size would degenerate every glyph.
        self.config.font_size = font_size.max(MIN_FONT_SIZE);
        self.relayout();
    }

    pub fn set_alignment(&mut self, alignment: TextAlignment) {
        self.config.alignment = alignment;
        self.relayout();
    }

    /// Assign new text, starting a transition from the current text.
    ///
    /// No-op when the text is unchanged. When a transition is already in
    /// flight it is discarded on the spot, without a `Completed` event.
    pub fn set_text(&mut self, new_text: &str) {
        if new_text == self.text {
            return;
        }

        if !self.config.enabled {
            debug!("morphing disabled, swapping text to {new_text:?}");
            self.text = new_text.to_string();
            self.previous_text.clear();
            self.diff_records.clear();
            self.relayout();
            self.animating = false;
            self.clock.pause();
            return;
        }

        self.previous_text = std::mem::replace(&mut self.text, new_text.to_string());
        self.diff_records = diff::align(&self.previous_text, &self.text);
        self.relayout();

        self.progress = 0.0;
        self.current_frame = 0;
        self.total_frames = 0;
        self.total_delay_frames = 0;
        self.skip_frame_counter = 0;
        self.animating = true;

        debug!("morph started: {:?} -> {:?}", self.previous_text, self.text);
        self.clock.start();

        if !self.effect.on_start() {
            self.emit(MorphEvent::Started);
        }
    }

    /// Advance the session by one clock tick.
    ///
    /// `frame_duration` is the tick period in seconds, `frame_interval` the
    /// host's tick multiplier. Returns whether the host should redraw this
    /// frame (subject to the effect's skip-frames throttle).
    pub fn on_tick(&mut self, frame_duration: f32, frame_interval: f32) -> bool {
        if !self.animating {
            return false;
        }

        if frame_duration > 0.0 && self.total_frames == 0 {
            let frame_rate = frame_duration * frame_interval;
            self.total_frames = (self.config.duration / frame_rate).ceil() as u32;

            let total_delay = self.text.chars().count() as f32 * self.config.char_delay;
            self.total_delay_frames = (total_delay / frame_rate).ceil() as u32;
        }

        // A zero duration, or a clock reporting a zero frame time, would make
        // the per-frame increment non-finite. Complete on the spot instead.
        if self.total_frames == 0 {
            self.progress = 1.0;
            return self.complete();
        }

        self.current_frame += 1;

        if self.previous_text != self.text
            && self.current_frame < self.total_frames + self.total_delay_frames + GRACE_FRAMES
        {
            self.progress += 1.0 / self.total_frames as f32;

            let redraw = match self.effect.skip_frames() {
                Some(k) => {
                    self.skip_frame_counter += 1;

                    if self.skip_frame_counter > k {
                        self.skip_frame_counter = 0;
                        true
                    } else {
                        false
                    }
                }
                None => true,
            };

            self.emit(MorphEvent::Progress(self.progress));
            redraw
        } else {
            self.complete()
        }
    }

    fn complete(&mut self) -> bool {
        self.clock.pause();
        self.animating = false;
        debug!("morph completed at frame {}", self.current_frame);
        self.emit(MorphEvent::Completed);
        false
    }

    /// The current frame's draw list: one limbo record per character that
    /// must be painted, old-text pass first, then the new-character pass.
    ///
    /// Pure over session state; repeated calls between ticks produce
    /// identical output.
    pub fn limbo_of_characters(&self) -> Vec<CharLimbo> {
        // No session to interpolate: morphing is off, or the text was last
        // assigned while it was off. Either way the current text renders
        // as-is.
        if !self.config.enabled || self.diff_records.is_empty() {
            return self.static_frame();
        }

        let mut limbo = Vec::new();

        for (i, ch) in self.previous_text.chars().enumerate() {
            let progress = self.char_progress(i, false);
            limbo.push(self.limbo_of_original(ch, i, progress));
        }

        for (i, ch) in self.text.chars().enumerate() {
            if i >= self.diff_records.len() {
                break;
            }

            let record = &self.diff_records[i];

            // Already accounted for by a move arriving at this slot.
            if record.skip {
                continue;
            }

            match record.kind {
                DiffKind::MoveAndAdd | DiffKind::Replace | DiffKind::Add | DiffKind::Delete => {
                    let progress = self.char_progress(i, true);
                    limbo.push(self.limbo_of_new(ch, i, progress));
                }
                DiffKind::Same | DiffKind::Move => {}
            }
        }

        limbo
    }

    /// Draw the current frame through the renderer, honoring the effect's
    /// draw interception.
    pub fn draw_frame(&self, renderer: &mut impl Renderer) {
        for limbo in self.limbo_of_characters() {
            if self.effect.intercept_draw(&limbo) {
                continue;
            }

            renderer.draw(&limbo);
        }
    }

    fn char_progress(&self, index: usize, is_new_char: bool) -> f32 {
        if let Some(p) = self.effect.progress(index, self.progress, is_new_char) {
            return p;
        }

        let stagger = self.config.char_delay * index as f32;
        let p = if is_new_char {
            self.progress - stagger
        } else {
            self.progress + stagger
        };

        p.clamp(0.0, 1.0)
    }

    fn limbo_of_original(&self, ch: char, index: usize, progress: f32) -> CharLimbo {
        let mut rect = self.previous_rects[index];
        let record = &self.diff_records[index];
        let font_size = self.config.font_size;

        match record.kind {
            DiffKind::Move | DiffKind::MoveAndAdd | DiffKind::Same => {
                // Slide toward the destination slot in the new text.
                let dest = (index as isize + record.move_offset) as usize;
                let target_x = self.new_rects[dest].x;
                rect.x = ease_out_quint(progress, rect.x, target_x - rect.x);

                CharLimbo {
                    ch,
                    rect,
                    alpha: 1.0,
                    size: font_size,
                    drawing_progress: 0.0,
                }
            }

            _ => {
                let ctx = EffectContext { rect, font_size };

                if let Some(custom) = self.effect.disappear(ch, index, progress, &ctx) {
                    return custom;
                }

                let size =
                    (font_size - ease_out_quint(progress, 0.0, font_size)).max(MIN_FONT_SIZE);

                CharLimbo {
                    ch,
                    // Drop by the shrinkage so the glyph stays anchored.
                    rect: rect.offset(0.0, font_size - size),
                    alpha: 1.0 - progress,
                    size,
                    drawing_progress: 0.0,
                }
            }
        }
    }

    fn limbo_of_new(&self, ch: char, index: usize, progress: f32) -> CharLimbo {
        let rect = self.new_rects[index];
        let font_size = self.config.font_size;
        let ctx = EffectContext { rect, font_size };

        if let Some(custom) = self.effect.appear(ch, index, progress, &ctx) {
            return custom;
        }

        let size = ease_out_quint(progress, 0.0, font_size).max(MIN_FONT_SIZE);

        CharLimbo {
            ch,
            rect: rect.offset(0.0, font_size - size),
            // Session progress, not the staggered per-character one.
            alpha: self.progress.min(1.0),
            size,
            drawing_progress: 0.0,
        }
    }

    fn static_frame(&self) -> Vec<CharLimbo> {
        self.text
            .chars()
            .zip(self.new_rects.iter())
            .map(|(ch, &rect)| CharLimbo {
                ch,
                rect,
                alpha: 1.0,
                size: self.config.font_size,
                drawing_progress: 0.0,
            })
            .collect()
    }

    /// Recompute both baseline rect arrays and replace them atomically.
    fn relayout(&mut self) {
        self.previous_rects = layout::char_rects(
            &self.previous_text,
            &self.measurer,
            self.config.font_size,
            self.bounds,
            self.config.alignment,
        );
        self.new_rects = layout::char_rects(
            &self.text,
            &self.measurer,
            self.config.font_size,
            self.bounds,
            self.config.alignment,
        );
    }

    fn emit(&mut self, event: MorphEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    const FRAME: f32 = 0.02; // 50 ticks per second

    struct Monospace;

    impl TextMeasurer for Monospace {
        fn measure(&self, _ch: char, font_size: f32) -> (f32, f32) {
            (font_size / 2.0, font_size)
        }

        fn line_height(&self, font_size: f32) -> f32 {
            font_size
        }
    }

    /// Clock double exposing its running flag.
    struct ManualClock {
        running: Rc<Cell<bool>>,
    }

    impl Clock for ManualClock {
        fn start(&mut self) {
            self.running.set(true);
        }

        fn pause(&mut self) {
            self.running.set(false);
        }
    }

    fn make_label(config: MorphConfig) -> (MorphLabel<Monospace>, Rc<Cell<bool>>) {
        let running = Rc::new(Cell::new(false));
        let clock = ManualClock {
            running: running.clone(),
        };
        let bounds = Rect::new(0.0, 0.0, 400.0, 100.0);

        (
            MorphLabel::new(Monospace, Box::new(clock), config, bounds),
            running,
        )
    }

    fn record_events(label: &mut MorphLabel<Monospace>) -> Rc<RefCell<Vec<MorphEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        label.observe(move |event| sink.borrow_mut().push(event));
        events
    }

    fn tick_to_completion(label: &mut MorphLabel<Monospace>) -> u32 {
        let mut ticks = 0;

        while label.is_animating() {
            label.on_tick(FRAME, 1.0);
            ticks += 1;
            assert!(ticks < 10_000, "transition never completed");
        }

        ticks
    }

    #[test]
    fn progress_is_monotonic_and_reaches_one() {
        let (mut label, _) = make_label(MorphConfig::default());
        label.set_text("morphing");

        let mut prev = 0.0;

        while label.is_animating() {
            label.on_tick(FRAME, 1.0);
            assert!(label.progress() >= prev);
            prev = label.progress();
        }

        assert!(label.progress() >= 1.0);
    }

    #[test]
    fn completion_pauses_clock_and_notifies() {
        let (mut label, running) = make_label(MorphConfig::default());
        let events = record_events(&mut label);

        label.set_text("ABC");
        assert!(running.get());

        tick_to_completion(&mut label);

        assert!(!running.get());
        assert_eq!(events.borrow().first(), Some(&MorphEvent::Started));
        assert_eq!(events.borrow().last(), Some(&MorphEvent::Completed));

        let progress_count = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, MorphEvent::Progress(_)))
            .count();
        assert!(progress_count > 0);
    }

    /// Expected tick count for a transition to `text`, using the same f32
    /// arithmetic as the engine so rounding matches.
    fn expected_ticks(config: &MorphConfig, text: &str) -> u32 {
        let total = (config.duration / FRAME).ceil() as u32;
        let delay = ((text.chars().count() as f32 * config.char_delay) / FRAME).ceil() as u32;

        total + delay + GRACE_FRAMES
    }

    #[test]
    fn frame_budget_matches_duration_and_delay() {
        // Duration plus per-character stagger, then the grace window.
        let (mut label, _) = make_label(MorphConfig::default());
        label.set_text("ABC");

        let ticks = tick_to_completion(&mut label);
        assert_eq!(ticks, expected_ticks(label.config(), "ABC"));
    }

    #[test]
    fn unchanged_text_is_a_noop() {
        let (mut label, running) = make_label(MorphConfig::default());
        let events = record_events(&mut label);

        label.set_text("same");
        tick_to_completion(&mut label);
        let count = events.borrow().len();

        label.set_text("same");
        assert!(!label.is_animating());
        assert!(!running.get());
        assert_eq!(events.borrow().len(), count);
    }

    #[test]
    fn restart_discards_session_without_completion() {
        let (mut label, _) = make_label(MorphConfig::default());
        let events = record_events(&mut label);

        label.set_text("first");
        label.on_tick(FRAME, 1.0);
        label.on_tick(FRAME, 1.0);
        assert!(label.progress() > 0.0);

        label.set_text("second");

        assert_eq!(label.progress(), 0.0);
        assert_eq!(label.previous_text(), "first");
        assert!(label.is_animating());
        assert!(!events.borrow().contains(&MorphEvent::Completed));
        assert_eq!(
            events
                .borrow()
                .iter()
                .filter(|e| matches!(e, MorphEvent::Started))
                .count(),
            2
        );
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let config = MorphConfig {
            duration: 0.0,
            ..MorphConfig::default()
        };
        let (mut label, running) = make_label(config);
        let events = record_events(&mut label);

        label.set_text("hi");
        let redraw = label.on_tick(FRAME, 1.0);

        assert!(!redraw);
        assert!(!label.is_animating());
        assert!(!running.get());
        assert_eq!(events.borrow().last(), Some(&MorphEvent::Completed));
    }

    #[test]
    fn zero_frame_duration_completes_immediately() {
        let (mut label, _) = make_label(MorphConfig::default());
        label.set_text("hi");

        label.on_tick(0.0, 1.0);

        assert!(!label.is_animating());
    }

    #[test]
    fn delay_frames_never_negative_when_stagger_exceeds_duration() {
        let config = MorphConfig {
            duration: 0.1,
            char_delay: 0.5,
            ..MorphConfig::default()
        };
        let (mut label, _) = make_label(config);
        label.set_text("abcd");

        // The stagger dwarfs the duration; the budget must grow, not wrap.
        let ticks = tick_to_completion(&mut label);
        let expected = expected_ticks(label.config(), "abcd");
        assert_eq!(ticks, expected);
        assert!(expected > (label.config().duration / FRAME).ceil() as u32 + GRACE_FRAMES);
    }

    #[test]
    fn frame_is_idempotent_between_ticks() {
        let (mut label, _) = make_label(MorphConfig::default());
        label.set_text("idempotent");

        label.on_tick(FRAME, 1.0);
        label.on_tick(FRAME, 1.0);

        assert_eq!(label.limbo_of_characters(), label.limbo_of_characters());
    }

    #[test]
    fn hi_to_hey_draw_list() {
        let (mut label, _) = make_label(MorphConfig::default());
        label.set_text("Hi");
        tick_to_completion(&mut label);

        label.set_text("Hey");
        label.on_tick(FRAME, 1.0);

        // Old pass: 'H' (Same) and 'i' (Replace). New pass: 'e' and 'y';
        // index 0 is Same, which the new pass never draws.
        let limbo = label.limbo_of_characters();
        let chars: Vec<char> = limbo.iter().map(|l| l.ch).collect();
        assert_eq!(chars, vec!['H', 'i', 'e', 'y']);

        // The unchanged 'H' holds full opacity and size.
        assert_eq!(limbo[0].alpha, 1.0);
        assert_eq!(limbo[0].size, 16.0);
    }

    #[test]
    fn new_character_alpha_tracks_session_progress() {
        let (mut label, _) = make_label(MorphConfig::default());
        label.set_text("Hi");
        tick_to_completion(&mut label);

        label.set_text("Hey");
        label.on_tick(FRAME, 1.0);

        let limbo = label.limbo_of_characters();
        let e = limbo.iter().find(|l| l.ch == 'e').unwrap();

        // Session-level alpha, not the staggered per-character progress.
        assert!((e.alpha - label.progress()).abs() < 1e-6);
    }

    #[test]
    fn moved_characters_land_on_destination_rects() {
        let (mut label, _) = make_label(MorphConfig::default());
        label.set_text("AB");
        tick_to_completion(&mut label);

        label.set_text("BA");
        tick_to_completion(&mut label);

        // Monospace advance is font_size / 2 = 8. After completion 'A' sits
        // where new index 1 is, 'B' at new index 0.
        let limbo = label.limbo_of_characters();
        let a = limbo.iter().find(|l| l.ch == 'A').unwrap();
        let b = limbo.iter().find(|l| l.ch == 'B').unwrap();

        assert!((a.rect.x - 8.0).abs() < 1e-4);
        assert!(b.rect.x.abs() < 1e-4);
    }

    #[test]
    fn disabled_label_swaps_without_animating() {
        let config = MorphConfig {
            enabled: false,
            ..MorphConfig::default()
        };
        let (mut label, running) = make_label(config);
        let events = record_events(&mut label);

        label.set_text("instant");

        assert!(!label.is_animating());
        assert!(!running.get());
        assert!(events.borrow().is_empty());

        let limbo = label.limbo_of_characters();
        assert_eq!(limbo.len(), 7);
        assert!(limbo.iter().all(|l| l.alpha == 1.0 && l.size == 16.0));
    }

    #[test]
    fn reenabled_label_still_renders_its_text() {
        let (mut label, _) = make_label(MorphConfig::default());

        label.set_enabled(false);
        label.set_text("hello");
        label.set_enabled(true);

        // No session exists, so the text renders as a static frame.
        let limbo = label.limbo_of_characters();
        assert_eq!(limbo.len(), 5);
        assert!(limbo.iter().all(|l| l.alpha == 1.0 && l.size == 16.0));

        // The next assignment morphs normally.
        let events = record_events(&mut label);
        label.set_text("goodbye");
        assert!(label.is_animating());
        assert_eq!(events.borrow().first(), Some(&MorphEvent::Started));
    }

    #[test]
    fn skip_frames_throttles_redraws_not_progress() {
        struct SkipTwo;

        impl MorphEffect for SkipTwo {
            fn skip_frames(&self) -> Option<u32> {
                Some(2)
            }
        }

        let (mut label, _) = make_label(MorphConfig::default());
        label.set_custom_effect(Box::new(SkipTwo));
        label.set_text("throttled");

        let mut redraws = Vec::new();
        let mut progress = Vec::new();

        for _ in 0..6 {
            redraws.push(label.on_tick(FRAME, 1.0));
            progress.push(label.progress());
        }

        assert_eq!(redraws, vec![false, false, true, false, false, true]);
        assert!(progress.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn progress_override_replaces_stagger() {
        struct Half;

        impl MorphEffect for Half {
            fn progress(&self, _index: usize, _session: f32, _is_new: bool) -> Option<f32> {
                Some(0.5)
            }
        }

        let (mut label, _) = make_label(MorphConfig::default());
        label.set_text("ab");
        tick_to_completion(&mut label);

        label.set_custom_effect(Box::new(Half));
        label.set_text("ba");
        label.on_tick(FRAME, 1.0);

        // With per-character progress pinned at 0.5, both moved characters
        // sit at the eased midpoint regardless of index.
        let limbo = label.limbo_of_characters();
        let expected = ease_out_quint(0.5, 0.0, 8.0);
        assert!((limbo[0].rect.x - expected).abs() < 1e-4);
    }

    #[test]
    fn effect_start_claim_suppresses_started_event() {
        struct Claiming;

        impl MorphEffect for Claiming {
            fn on_start(&self) -> bool {
                true
            }
        }

        let (mut label, _) = make_label(MorphConfig::default());
        label.set_custom_effect(Box::new(Claiming));
        let events = record_events(&mut label);

        label.set_text("quiet");

        assert!(!events.borrow().contains(&MorphEvent::Started));
        assert!(label.is_animating());
    }

    #[test]
    fn draw_interception_filters_records() {
        struct HideVowels;

        impl MorphEffect for HideVowels {
            fn intercept_draw(&self, limbo: &CharLimbo) -> bool {
                matches!(limbo.ch, 'a' | 'e' | 'i' | 'o' | 'u')
            }
        }

        struct Collect(Vec<char>);

        impl Renderer for Collect {
            fn draw(&mut self, limbo: &CharLimbo) {
                self.0.push(limbo.ch);
            }
        }

        let (mut label, _) = make_label(MorphConfig::default());
        label.set_custom_effect(Box::new(HideVowels));
        label.set_text("hand");
        label.on_tick(FRAME, 1.0);

        let mut renderer = Collect(Vec::new());
        label.draw_frame(&mut renderer);

        assert_eq!(renderer.0, vec!['h', 'n', 'd']);
    }

    #[test]
    fn alignment_change_relayouts_both_rect_arrays() {
        let (mut label, _) = make_label(MorphConfig::default());
        label.set_text("ab");
        tick_to_completion(&mut label);

        let left = label.limbo_of_characters();
        label.set_alignment(TextAlignment::Right);
        let right = label.limbo_of_characters();

        // Bounds width 400, text width 16: flush right starts at 384.
        assert!(left[0].rect.x.abs() < 1e-4);
        assert!((right[0].rect.x - 384.0).abs() < 1e-4);
    }

    #[test]
    fn config_round_trips_defaults() {
        let config = MorphConfig::default();

        assert_eq!(config.duration, 0.6);
        assert_eq!(config.char_delay, 0.026);
        assert!(config.enabled);
        assert_eq!(config.effect, EffectKind::Scale);
        assert_eq!(config.alignment, TextAlignment::Left);
    }
}
