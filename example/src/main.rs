mod trace;

use std::{fs, path::PathBuf, sync::Arc, thread, time::Duration};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use swipe_pager::{
    HeightConstraint, Panel, PagerConfig, PagerController, PagerPreset, PointerEvent, Px, PxSize,
    RedrawSignal, SharedPager,
};
use tracing::{debug, info};

use crate::trace::{Step, Trace};

#[derive(Parser)]
#[command(name = "swipe-pager-example")]
#[command(version, about = "Replay touch traces against a swipe pager", long_about = None)]
struct Cli {
    /// Behaviour preset to replay against
    #[arg(short, long, value_enum, default_value_t = Preset::NestedScrolling)]
    preset: Preset,
    /// Replay against every preset instead
    #[arg(long)]
    all_presets: bool,
    /// JSON file holding an array of traces (built-in scenarios otherwise)
    #[arg(short, long)]
    trace: Option<PathBuf>,
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1080)]
    width: i32,
    /// Viewport height in pixels
    #[arg(long, default_value_t = 1920)]
    height: i32,
    /// Number of visible panels
    #[arg(long, default_value_t = 3)]
    panels: usize,
    /// Override the touch slop in pixels
    #[arg(long)]
    touch_slop: Option<f32>,
    /// Simulated frame interval in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    FreeDrag,
    ClampedDrag,
    Snapping,
    NestedScrolling,
}

impl From<Preset> for PagerPreset {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::FreeDrag => PagerPreset::FreeDrag,
            Preset::ClampedDrag => PagerPreset::ClampedDrag,
            Preset::Snapping => PagerPreset::Snapping,
            Preset::NestedScrolling => PagerPreset::NestedScrolling,
        }
    }
}

#[derive(Debug, Serialize)]
struct Outcome {
    scenario: String,
    preset: PagerPreset,
    offset: i32,
    page: usize,
    page_fraction: f32,
    frames: u32,
    local_redraws: usize,
    remote_redraws: usize,
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("warn,swipe_pager_example=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("warn"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let traces = match &cli.trace {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read trace file {}", path.display()))?;
            serde_json::from_str::<Vec<Trace>>(&text)
                .with_context(|| format!("failed to parse trace file {}", path.display()))?
        }
        None => trace::builtin(cli.width as f32),
    };

    let presets: Vec<PagerPreset> = if cli.all_presets {
        PagerPreset::ALL.to_vec()
    } else {
        vec![cli.preset.into()]
    };

    let mut outcomes = Vec::new();
    for &preset in &presets {
        let mut config = PagerConfig::preset(preset);
        if let Some(slop) = cli.touch_slop {
            config = config.touch_slop(slop);
        }
        for trace in &traces {
            outcomes.push(replay(&cli, preset, config.clone(), trace)?);
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            println!(
                "{:<16} {:<28} offset {:>6}  page {} ({:+.2})  {} frames, {} local / {} remote redraws",
                format!("{:?}", outcome.preset),
                outcome.scenario,
                outcome.offset,
                outcome.page,
                outcome.page_fraction,
                outcome.frames,
                outcome.local_redraws,
                outcome.remote_redraws,
            );
        }
    }
    Ok(())
}

#[tracing::instrument(skip_all, fields(scenario = %trace.name, ?preset))]
fn replay(cli: &Cli, preset: PagerPreset, config: PagerConfig, trace: &Trace) -> Result<Outcome> {
    let signal = RedrawSignal::new();
    let mut controller = PagerController::new(config, Arc::new(signal.clone()))?;
    let panels = vec![Panel::visible(Px::new(cli.height * 2 / 3)); cli.panels];
    let height = controller.set_layout(
        PxSize::new(Px::new(cli.width), Px::new(cli.height)),
        &panels,
        HeightConstraint::Wrap {
            max: Some(Px::new(cli.height)),
        },
    )?;
    controller.jump_to_page(trace.start_page);
    debug!(height = height.raw(), start = controller.scroll_offset().raw(), "pager ready");
    signal.take_pending();

    let pager = SharedPager::new(controller);
    let frame = Duration::from_millis(cli.frame_ms);
    let mut claimed = false;
    let mut frames = 0;
    for step in &trace.steps {
        match *step {
            Step::Event(event) => {
                pager.with_mut(|pager| deliver(pager, event, trace.nested, &mut claimed));
            }
            Step::Frames { frames: limit } => {
                frames += pump_frames(&pager, &signal, frame, Some(limit));
            }
        }
    }

    let worker = {
        let pager = pager.clone();
        let signal = signal.clone();
        thread::Builder::new()
            .name("pager-frames".to_owned())
            .spawn(move || pump_frames(&pager, &signal, frame, None))?
    };
    frames += worker
        .join()
        .map_err(|_| anyhow!("frame thread panicked"))?;

    let outcome = pager.with(|pager| Outcome {
        scenario: trace.name.clone(),
        preset,
        offset: pager.scroll_offset().raw(),
        page: pager.current_page(),
        page_fraction: pager.current_page_offset_fraction(),
        frames,
        local_redraws: signal.local_requests(),
        remote_redraws: signal.remote_requests(),
    });
    info!(offset = outcome.offset, page = outcome.page, frames, "replayed");
    Ok(outcome)
}

/// Routes an event the way a host with a nested scroller would: the pager
/// sees it through the interception hook until it claims the sequence.
fn deliver(pager: &mut PagerController, event: PointerEvent, nested: bool, claimed: &mut bool) {
    if nested && !*claimed {
        *claimed = pager.on_intercept_request(event);
        if !*claimed {
            debug!(?event, "event left to child");
        }
    } else {
        pager.on_touch(event);
    }
    if event.ends_sequence() {
        *claimed = false;
    }
}

fn pump_frames(
    pager: &SharedPager,
    signal: &RedrawSignal,
    frame: Duration,
    limit: Option<u32>,
) -> u32 {
    let mut count = 0;
    while limit.is_none_or(|limit| count < limit) && signal.take_pending() {
        pager.with_mut(|pager| pager.compute_frame(frame));
        count += 1;
    }
    count
}
