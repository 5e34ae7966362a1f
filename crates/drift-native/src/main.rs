use clap::Parser;
use drift_core::ParticleEngine;
use instant::Instant;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

mod audio;
mod cli;
mod constants;
mod driver;
mod status;

use cli::Args;
use constants::{MIN_CONTROL_RATE_HZ, STATUS_INTERVAL_MS};
use driver::CvDriver;
use status::HostStatus;

// How often queued events are flushed to the log
const LOG_POLL: Duration = Duration::from_millis(20);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = args.params();
    let engine = match args.seed {
        Some(seed) => ParticleEngine::with_seed(seed),
        None => ParticleEngine::new(),
    };
    log::info!(
        "drift starting: scale={} root={} octave={} fall_speed={} gravity={} max_particles={} wind={}",
        params.scale,
        params.root_note,
        params.octave,
        params.global_fall_speed,
        params.gravity,
        params.max_particles,
        params.wind
    );

    let status = Arc::new(Mutex::new(HostStatus::default()));
    let driver = CvDriver::new(engine, params, Arc::clone(&status));

    if args.headless {
        return run_headless(driver, &args, &status);
    }
    match audio::open_default_output() {
        Ok(output) => {
            // Keep the stream alive for as long as we report on it
            let _stream = audio::start_stream(output, driver)?;
            report_until(&status, args.seconds, LOG_POLL);
            Ok(())
        }
        Err(e) => {
            log::warn!("[audio] {e:#}; falling back to headless ticking");
            run_headless(driver, &args, &status)
        }
    }
}

/// Tick the engine from a timing thread at `--control-rate`.
fn run_headless(
    mut driver: CvDriver,
    args: &Args,
    status: &Arc<Mutex<HostStatus>>,
) -> anyhow::Result<()> {
    let period = Duration::from_secs_f64(1.0 / args.control_rate.max(MIN_CONTROL_RATE_HZ));
    log::info!("[engine] headless at {:.1} Hz", 1.0 / period.as_secs_f64());

    let _ticker = thread::Builder::new()
        .name("drift-ticker".into())
        .spawn(move || {
            let mut last = Instant::now();
            loop {
                thread::sleep(period);
                let now = Instant::now();
                driver.step(now - last);
                last = now;
            }
        })?;

    report_until(status, args.seconds, LOG_POLL.max(period));
    Ok(())
}

/// Flush queued events to the log and print a periodic summary until
/// `seconds` have passed (or forever).
fn report_until(status: &Arc<Mutex<HostStatus>>, seconds: Option<f64>, poll: Duration) {
    let start = Instant::now();
    let summary_every = Duration::from_millis(STATUS_INTERVAL_MS);
    let mut last_summary = start;
    loop {
        thread::sleep(poll);
        let (events, summary_due) = match status.lock() {
            Ok(mut s) => {
                let due = last_summary.elapsed() >= summary_every;
                if due {
                    status::log_summary(&s);
                }
                (s.drain_events(), due)
            }
            Err(_) => {
                log::error!("[engine] status lock poisoned; stopping");
                return;
            }
        };
        for ev in &events {
            status::log_event(ev);
        }
        if summary_due {
            last_summary = Instant::now();
        }
        if seconds.is_some_and(|limit| start.elapsed().as_secs_f64() >= limit) {
            log::info!("drift stopping after {:.1}s", start.elapsed().as_secs_f64());
            return;
        }
    }
}
