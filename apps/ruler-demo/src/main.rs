use std::rc::Rc;

use tape_ruler::{RulerCanvas, RulerConfig, TapeRuler, TickKind, TickMark};
use tape_ruler_foundation::{ManualFrameClock, PointerEvent, ViewConfiguration};

const WIDTH: i32 = 400;
const FRAME_NANOS: u64 = 16_666_667;

/// Renders the ruler into two text rows, one column per 4 px.
struct TextCanvas {
    ticks: Vec<char>,
    labels: Vec<char>,
}

impl TextCanvas {
    const PX_PER_COLUMN: f32 = 4.0;

    fn new(width: i32) -> Self {
        let columns = (width as f32 / Self::PX_PER_COLUMN) as usize + 1;
        Self {
            ticks: vec![' '; columns],
            labels: vec![' '; columns],
        }
    }

    fn column(&self, x: f32) -> Option<usize> {
        let column = (x / Self::PX_PER_COLUMN).round();
        (column >= 0.0 && (column as usize) < self.ticks.len()).then_some(column as usize)
    }

    fn print(&self) {
        println!("{}", self.labels.iter().collect::<String>());
        println!("{}", self.ticks.iter().collect::<String>());
    }
}

impl RulerCanvas for TextCanvas {
    fn draw_baseline(&mut self, _width: f32) {
        self.ticks.iter_mut().for_each(|c| *c = '_');
    }

    fn draw_tick(&mut self, tick: &TickMark) {
        if let Some(column) = self.column(tick.x) {
            self.ticks[column] = match tick.kind {
                TickKind::Major => '|',
                TickKind::Minor => '.',
            };
        }
    }

    fn draw_label(&mut self, value: i32, x: f32) {
        let Some(column) = self.column(x) else {
            return;
        };
        for (offset, digit) in value.to_string().chars().enumerate() {
            if let Some(slot) = self.labels.get_mut(column + offset) {
                *slot = digit;
            }
        }
    }

    fn draw_balance_marker(&mut self, x: f32) {
        if let Some(column) = self.column(x) {
            self.ticks[column] = '$';
        }
    }

    fn draw_indicator(&mut self, x: f32) {
        if let Some(column) = self.column(x) {
            self.ticks[column] = 'V';
        }
    }
}

fn show(title: &str, ruler: &TapeRuler) {
    println!("-- {title}: value={} balance={}", ruler.value(), ruler.balance());
    let mut canvas = TextCanvas::new(WIDTH);
    ruler.draw(&mut canvas);
    canvas.print();
}

fn replay(ruler: &mut TapeRuler, events: &[PointerEvent]) -> tape_ruler::Result<()> {
    for event in events {
        ruler.on_pointer_event(event)?;
    }
    Ok(())
}

fn run() -> tape_ruler::Result<()> {
    let clock = ManualFrameClock::new();
    let config = RulerConfig::default()
        .with_range(150, 50)
        .with_balance(42)
        .with_unit_gap_dp(8.0);
    let mut ruler = TapeRuler::new(config, ViewConfiguration::default(), Rc::new(clock.clone()))?;
    ruler.on_size_changed(WIDTH, 60);
    ruler.set_on_value_changed(|value| log::debug!("value changed: {value}"));
    show("initial", &ruler);

    // Slow drag to the left: settles on the nearest tick.
    replay(
        &mut ruler,
        &[
            PointerEvent::down(200.0, 30.0, 0),
            PointerEvent::moved(180.0, 31.0, 100),
            PointerEvent::moved(170.0, 31.0, 200),
            PointerEvent::moved(165.0, 32.0, 300),
            PointerEvent::up(165.0, 32.0, 400),
        ],
    )?;
    show("after slow drag", &ruler);

    // Tap: nothing changes.
    replay(
        &mut ruler,
        &[
            PointerEvent::down(120.0, 30.0, 1_000),
            PointerEvent::up(122.0, 30.0, 1_050),
        ],
    )?;
    show("after tap", &ruler);

    // Fast swipe to the right: flings toward smaller values.
    replay(
        &mut ruler,
        &[
            PointerEvent::down(100.0, 30.0, 2_000),
            PointerEvent::moved(140.0, 30.0, 2_010),
            PointerEvent::moved(180.0, 30.0, 2_020),
            PointerEvent::moved(220.0, 30.0, 2_030),
            PointerEvent::up(220.0, 30.0, 2_030),
        ],
    )?;
    let mut frame_error = None;
    let frames = clock.run_frames(0, FRAME_NANOS, 600, |time| {
        if let Err(err) = ruler.on_frame(time) {
            if frame_error.is_none() {
                frame_error = Some(err);
            }
        }
    });
    if let Some(err) = frame_error {
        return Err(err);
    }
    log::info!("fling settled after {frames} frames");
    show("after fling", &ruler);

    if let Err(err) = ruler.reconfigure(100, 150, 0, 1, 10) {
        log::info!("reconfigure rejected as expected: {err}");
    }

    ruler.reconfigure(1_000, 500, 250, 5, 10)?;
    ruler.set_balance(333.0)?;
    show("after reconfigure", &ruler);

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Tape Ruler Demo ===");
    println!("RUST_LOG=tape_ruler=trace shows every pointer event and frame.");
    println!();

    if let Err(err) = run() {
        log::error!("demo failed: {err}");
        std::process::exit(1);
    }
}
