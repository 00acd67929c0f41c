use crate::domain::models::{ChartFile, FrequencyEntry, VolumeEntry};
use plotters::prelude::*;
use std::path::Path;

pub fn write_frequency_chart(
    dir: &Path,
    entries: &[FrequencyEntry],
    size: (u32, u32),
) -> anyhow::Result<ChartFile> {
    let bars: Vec<(String, f64)> = entries
        .iter()
        .map(|e| (e.exercise.clone(), e.sessions as f64))
        .collect();
    let path = dir.join("frequency.svg");
    render_bar_chart(&path, "Workout frequency", "sessions", &bars, size)?;
    Ok(ChartFile {
        metric: "frequency".to_string(),
        bars: bars.len(),
        path: path.to_string_lossy().to_string(),
    })
}

pub fn write_volume_chart(
    dir: &Path,
    entries: &[VolumeEntry],
    size: (u32, u32),
) -> anyhow::Result<ChartFile> {
    let bars: Vec<(String, f64)> = entries
        .iter()
        .map(|e| (e.exercise.clone(), e.volume))
        .collect();
    let path = dir.join("volume.svg");
    render_bar_chart(&path, "Total volume per exercise", "volume", &bars, size)?;
    Ok(ChartFile {
        metric: "volume".to_string(),
        bars: bars.len(),
        path: path.to_string_lossy().to_string(),
    })
}

fn render_bar_chart(
    path: &Path,
    caption: &str,
    y_desc: &str,
    bars: &[(String, f64)],
    size: (u32, u32),
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = bars.len() as f64;
    let y_max = bars.iter().map(|(_, v)| *v).fold(1.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .margin(25)
        .caption(caption, ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0.0..x_max, 0.0..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len() + 1)
        .x_label_formatter(&|x| {
            let i = x.floor() as usize;
            bars.get(i).map(|(name, _)| name.clone()).unwrap_or_default()
        })
        .y_label_formatter(&|v| format!("{:.0}", v))
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, (_, value))| {
        let x0 = i as f64 + 0.1;
        let x1 = i as f64 + 0.9;
        Rectangle::new([(x0, 0.0), (x1, *value)], RGBColor(70, 130, 180).filled())
    }))?;

    root.present()?;
    Ok(())
}
