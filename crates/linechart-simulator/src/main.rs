//! Desktop simulator for the linechart control.
//!
//! Renders a [`LineChart`] in an SDL2 window via `embedded-graphics-simulator`
//! so labelling, fills and touch highlighting can be tried without hardware.
//!
//! Usage: `linechart-simulator [settings.toml]`
//!
//! # Key bindings
//!
//! | Key | Action                                  |
//! |-----|-----------------------------------------|
//! | 1-5 | Switch demo series                      |
//! | M   | Toggle min/max/average and fixed step   |
//! | G   | Cycle grid fill                         |
//! | F   | Cycle graph fill                        |
//! | H   | Toggle column and abscissa highlight    |
//! | Q   | Quit                                    |
//!
//! Mouse press, drag and release are forwarded as touch events.

mod config;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::info;

use linechart::ui::components::line_chart::constants::DEFAULT_GRADIENT_BANDS;
use linechart::ui::components::line_chart::{
    GraphFillMode, GridFillMode, HighlightMode, LabellingMode, LineChartAppearance,
};
use linechart::ui::styling::{
    GRAPH_BROWN, GRAPHITE_2, GRAPHITE_3, GRAPHITE_4, LabelText, label_text, value_text,
};
use linechart::ui::{Drawable, TouchEvent, TouchPoint, Touchable};
use linechart::{FrameBuffer, LineChart, LineChartDelegate};

use config::load_config;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Samples in the generated sine series
const SINE_SAMPLES: usize = 12;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// ---------------------------------------------------------------------------
// Demo data
// ---------------------------------------------------------------------------

fn demo_series(index: usize) -> Vec<f64> {
    match index {
        0 => vec![1.0, 10.0, 10.0, 11.0, 15.0],
        1 => vec![1.0, 13.0, 40.0, -22.0],
        2 => (0..SINE_SAMPLES)
            .map(|i| 50.0 + 35.0 * (i as f64 / SINE_SAMPLES as f64 * std::f64::consts::TAU).sin())
            .collect(),
        3 => Vec::new(),
        _ => vec![7.0, 7.0, 7.0],
    }
}

/// Weekday titles on every other sample, one decimal for values
struct DemoDelegate;

impl LineChartDelegate for DemoDelegate {
    fn title_for_sample(&self, index: usize) -> Option<LabelText> {
        (index % 2 == 0).then(|| label_text(WEEKDAYS[index % WEEKDAYS.len()]))
    }

    fn format_value(&self, value: f64) -> LabelText {
        value_text(value, Some(1))
    }

    fn should_highlight(&self, _index: usize) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Appearance cycling
// ---------------------------------------------------------------------------

fn next_grid_fill(fill: GridFillMode) -> GridFillMode {
    match fill {
        GridFillMode::AlternateColumns { .. } => GridFillMode::AlternateRows {
            primary: GRAPHITE_3,
            secondary: GRAPHITE_4,
        },
        GridFillMode::AlternateRows { .. } => GridFillMode::Solid(GRAPHITE_2),
        GridFillMode::Solid(_) => GridFillMode::Gradient,
        GridFillMode::Gradient => GridFillMode::AlternateColumns {
            primary: GRAPHITE_3,
            secondary: GRAPHITE_4,
        },
    }
}

fn next_graph_fill(fill: GraphFillMode) -> GraphFillMode {
    match fill {
        GraphFillMode::Solid(_) => GraphFillMode::Gradient {
            top: GRAPH_BROWN,
            bottom: GRAPHITE_2,
            bands: DEFAULT_GRADIENT_BANDS,
        },
        GraphFillMode::Gradient { .. } => GraphFillMode::None,
        GraphFillMode::None => GraphFillMode::Solid(GRAPH_BROWN),
    }
}

fn toggle_labelling(mode: LabellingMode) -> LabellingMode {
    match mode {
        LabellingMode::MinMaxAverage { .. } => LabellingMode::FixedStep { step: 5.0 },
        LabellingMode::FixedStep { .. } => LabellingMode::default(),
    }
}

/// Map an SDL keycode to a demo series index.
fn keycode_to_series(keycode: Keycode) -> Option<usize> {
    match keycode {
        Keycode::Num1 | Keycode::Kp1 => Some(0),
        Keycode::Num2 | Keycode::Kp2 => Some(1),
        Keycode::Num3 | Keycode::Kp3 => Some(2),
        Keycode::Num4 | Keycode::Kp4 => Some(3),
        Keycode::Num5 | Keycode::Kp5 => Some(4),
        _ => None,
    }
}

/// Apply a key press to the chart; returns `false` to quit.
fn handle_key(keycode: Keycode, chart: &mut LineChart<DemoDelegate>) -> bool {
    let mut appearance: LineChartAppearance = *chart.appearance();

    if let Some(index) = keycode_to_series(keycode) {
        info!("Series {}", index + 1);
        chart.set_data_points(demo_series(index));
        return true;
    }

    match keycode {
        Keycode::Q | Keycode::Escape => return false,
        Keycode::M => {
            let mode = toggle_labelling(chart.labelling_mode());
            info!("Labelling {:?}", mode);
            chart.set_labelling_mode(mode);
        }
        Keycode::G => {
            appearance.grid.fill = next_grid_fill(appearance.grid.fill);
            info!("Grid fill {:?}", appearance.grid.fill);
            chart.set_appearance(appearance);
        }
        Keycode::F => {
            appearance.graph.fill = next_graph_fill(appearance.graph.fill);
            info!("Graph fill {:?}", appearance.graph.fill);
            chart.set_appearance(appearance);
        }
        Keycode::H => {
            appearance.highlight_mode = match appearance.highlight_mode {
                HighlightMode::Abscissa => HighlightMode::Column,
                HighlightMode::Column => HighlightMode::Abscissa,
            };
            info!("Highlight mode {:?}", appearance.highlight_mode);
            chart.set_appearance(appearance);
        }
        _ => {}
    }

    true
}

fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = load_config(settings_path.as_deref());
    let size = Size::new(settings.window.width, settings.window.height);

    info!("Starting linechart simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        size.width, size.height, settings.window.scale
    );
    info!("Keys: 1-5=Series  M=Labelling  G=Grid  F=Fill  H=Highlight  Q=Quit");

    let mut display = SimulatorDisplay::<Rgb565>::new(size);
    let output_settings = OutputSettingsBuilder::new()
        .scale(settings.window.scale.max(1))
        .build();
    let mut window = Window::new("Line Chart Simulator", &output_settings);

    let mut framebuffer = FrameBuffer::new(size);
    let mut chart = LineChart::new(Rectangle::new(Point::zero(), size), DemoDelegate)
        .with_config(&settings.chart);
    chart.set_data_points(demo_series(0));

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = chart.draw(&mut framebuffer);
    let _ = framebuffer.flush(&mut display);
    chart.mark_clean();
    window.update(&display);

    let mut pressed = false;

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if !handle_key(keycode, &mut chart) {
                        break 'running;
                    }
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    let result = chart.handle_touch(TouchEvent::Press(touch_point(point)));
                    pressed = true;
                    info!("Press → {:?}, {:?}", result, chart.highlighted());
                }

                SimulatorEvent::MouseMove { point } if pressed => {
                    chart.handle_touch(TouchEvent::Drag(touch_point(point)));
                }

                SimulatorEvent::MouseButtonUp { .. } => {
                    pressed = false;
                    chart.handle_touch(TouchEvent::Release);
                }

                _ => {}
            }
        }

        if chart.is_dirty() {
            let _ = chart.draw(&mut framebuffer);
            if let Err(e) = framebuffer.flush(&mut display) {
                log::error!("Flush error: {:?}", e);
            }
            chart.mark_clean();
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
