// ---------------- CV output over a cpal stream ----------------
//
// The engine is ticked once per audio buffer. Its four outputs are held for
// the whole buffer and written to the first four channels; extra channels
// carry silence.

use crate::driver::{volts_to_sample, CvDriver};
use anyhow::{anyhow, Context};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use drift_core::OUTPUT_COUNT;
use std::time::Duration;

pub struct OutputDevice {
    device: cpal::Device,
    config: cpal::SupportedStreamConfig,
}

/// Find the default output device and its preferred configuration.
pub fn open_default_output() -> anyhow::Result<OutputDevice> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no default output device"))?;
    let config = device
        .default_output_config()
        .context("querying default output config")?;
    Ok(OutputDevice { device, config })
}

pub fn start_stream(output: OutputDevice, driver: CvDriver) -> anyhow::Result<cpal::Stream> {
    let OutputDevice { device, config } = output;
    let sample_format = config.sample_format();
    let stream_config: cpal::StreamConfig = config.into();
    let channels = stream_config.channels as usize;
    let sample_rate = stream_config.sample_rate.0 as f32;

    log::info!(
        "[audio] device={} rate={} channels={} format={:?}",
        device.name().unwrap_or_else(|_| "<unknown>".into()),
        sample_rate,
        channels,
        sample_format
    );
    if channels < OUTPUT_COUNT {
        log::warn!(
            "[audio] device has {} channels; only the first {} outputs are routed",
            channels,
            channels
        );
    }

    let stream = match sample_format {
        cpal::SampleFormat::F32 => {
            build_stream::<f32>(&device, &stream_config, channels, sample_rate, driver)?
        }
        cpal::SampleFormat::I16 => {
            build_stream::<i16>(&device, &stream_config, channels, sample_rate, driver)?
        }
        cpal::SampleFormat::U16 => {
            build_stream::<u16>(&device, &stream_config, channels, sample_rate, driver)?
        }
        other => return Err(anyhow!("unsupported sample format {other:?}")),
    };
    stream.play().context("starting output stream")?;
    Ok(stream)
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    sample_rate: f32,
    mut driver: CvDriver,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    let err_fn = |err| log::error!("[audio] stream error: {err}");
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            fill_buffer(data, channels, sample_rate, &mut driver);
        },
        err_fn,
        None,
    )
}

fn fill_buffer<T>(data: &mut [T], channels: usize, sample_rate: f32, driver: &mut CvDriver)
where
    T: Sample + FromSample<f32>,
{
    let channels = channels.max(1);
    let frames = data.len() / channels;
    let outputs = driver.step(Duration::from_secs_f32(frames as f32 / sample_rate));
    for frame in data.chunks_mut(channels) {
        for (ch, sample) in frame.iter_mut().enumerate() {
            let volts = outputs.get(ch).copied().unwrap_or(0.0);
            *sample = T::from_sample(volts_to_sample(volts));
        }
    }
}
