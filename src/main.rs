mod assets;
mod constants;
mod recolor;
mod types;
mod utils;

use crate::assets::{all_pngs, appicon_dir};
use crate::constants::VERSION;
use crate::recolor::recolor_file;
use crate::types::HueShift;

use std::path::Path;

use anyhow::Result;
use clap::App;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Recolored,
    Skipped,
}

fn main() -> Result<()> {
    App::new("icon-recolor")
        .version(VERSION)
        .about("Recolors the app icon PNGs from a green accent to teal/blue")
        .get_matches();

    println!("Recoloring icon PNGs: green -> teal/blue");
    println!();

    let shift = HueShift::green_to_teal();
    let outcomes = run(&appicon_dir(), &all_pngs(), &shift)?;

    let recolored = outcomes.iter().filter(|o| **o == Outcome::Recolored).count();
    let skipped = outcomes.len() - recolored;

    println!();
    println!(
        "Done. {} recolored, {} skipped. Verify visually by building the app.",
        recolored, skipped
    );

    Ok(())
}

fn run(base_dir: &Path, paths: &[&str], shift: &HueShift) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(paths.len());

    for rel_path in paths {
        let full_path = base_dir.join(rel_path);
        if !full_path.exists() {
            println!("  SKIPPED (not found): {}", rel_path);
            outcomes.push(Outcome::Skipped);
            continue;
        }

        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {percent}% {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message(format!("Processing: {}", rel_path));

        recolor_file(&full_path, shift, &pb)?;

        // Clear the bar so only the result line stays on screen.
        pb.finish_and_clear();
        println!("  Recolored: {}", rel_path);
        outcomes.push(Outcome::Recolored);
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn missing_files_are_skipped_in_list_order() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 255, 0, 255]));
        img.save(dir.path().join("a.png")).unwrap();
        img.save(dir.path().join("c.png")).unwrap();

        let shift = HueShift::green_to_teal();
        let outcomes = run(dir.path(), &["a.png", "b.png", "c.png"], &shift).unwrap();

        assert_eq!(
            outcomes,
            vec![Outcome::Recolored, Outcome::Skipped, Outcome::Recolored]
        );
    }

    #[test]
    fn empty_run_reports_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let shift = HueShift::green_to_teal();
        assert!(run(dir.path(), &[], &shift).unwrap().is_empty());
    }
}
