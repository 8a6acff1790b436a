use hough_bundler::config::bundle;
use hough_bundler::io::overlay::{render_overlay, OverlayStyle};
use hough_bundler::io::{read_segments_file, retain_finite, write_json_file};
use hough_bundler::HoughBundler;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = bundle::load_config(Path::new(&config_path))?;

    let input = read_segments_file(&config.input)?;
    let single = input.is_single_frame();
    let mut frames = input.into_frames();
    let dropped = retain_finite(&mut frames);
    if dropped > 0 {
        log::warn!(
            "dropped {dropped} segment(s) with non-finite coordinates from {}",
            config.input.display()
        );
    }
    let bundler = HoughBundler::new(config.params);
    let reports = bundler.process_frames(&frames);

    if single {
        write_json_file(&config.output.result_json, &reports[0])?;
    } else {
        write_json_file(&config.output.result_json, &reports)?;
    }

    let lines: usize = reports.iter().map(|r| r.lines.len()).sum();
    let points: usize = reports.iter().map(|r| r.intersections.len()).sum();
    let merged: usize = reports.iter().map(|r| r.merged_detections()).sum();
    println!(
        "Bundled {} frame(s): {} lines ({} detections merged), {} intersections -> {}",
        reports.len(),
        lines,
        merged,
        points,
        config.output.result_json.display()
    );

    if let Some(overlay) = &config.output.overlay {
        if !single {
            return Err("Overlay output requires single-frame input".to_string());
        }
        let mut style = OverlayStyle::default();
        if let Some(w) = overlay.line_half_width {
            style.line_half_width = w;
        }
        if let Some(r) = overlay.point_radius {
            style.point_radius = r;
        }
        render_overlay(&overlay.image, &reports[0], &overlay.path, style)?;
        println!("Saved overlay to {}", overlay.path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: bundle_lines <config.json>".to_string()
}
