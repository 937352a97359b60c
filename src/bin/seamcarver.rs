// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use anyhow::{Context, Result};
use clap::{value_t, App, Arg};
use itertools::Itertools;
use seamcarver::{SeamCarver, SeamFinder, TwoDimensionalMap};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(PartialEq, Copy, Clone)]
enum Direction {
    Vertical,
    Horizontal,
}

// Prints the energy of every pixel, starring the ones on the seam, and
// the sum of the starred energies.
fn print_seam(energy: &TwoDimensionalMap<f64>, seam: &[u32], direction: Direction) {
    let mut total = 0.0;
    for y in 0..energy.height() {
        for x in 0..energy.width() {
            let on_seam = match direction {
                Direction::Vertical => seam[y as usize] == x,
                Direction::Horizontal => seam[x as usize] == y,
            };
            if on_seam {
                total += energy[(x, y)];
            }
            print!("{:7.2}{} ", energy[(x, y)], if on_seam { "*" } else { " " });
        }
        println!();
    }
    println!("Total energy = {:.6}", total);
    println!();
    println!();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = App::new("seamcarver")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Dual-gradient energy tables and seam carving")
        .arg(
            Arg::with_name("image")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("columns")
                .help("Vertical seams to remove after the report")
                .short("c")
                .long("columns")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("rows")
                .help("Horizontal seams to remove after the report")
                .short("r")
                .long("rows")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .short("o")
                .long("output")
                .takes_value(true),
        )
        .get_matches();

    let path = matches.value_of("image").context("no image given")?;
    let columns = value_t!(matches, "columns", u32).unwrap_or_else(|e| e.exit());
    let rows = value_t!(matches, "rows", u32).unwrap_or_else(|e| e.exit());

    let source = image::open(path).with_context(|| format!("cannot read {}", path))?;
    let mut carver = SeamCarver::new(&source)?;

    println!("{} ({}-by-{} image)", path, carver.width(), carver.height());
    println!();
    println!("The table gives the dual-gradient energies of each pixel.");
    println!("The asterisks denote a minimum energy vertical or horizontal seam.");
    println!();

    let energy = carver.energy_map();

    let vertical = carver.find_vertical_seam();
    println!("Vertical seam: {{ {} }}", vertical.iter().join(" "));
    print_seam(&energy, &vertical, Direction::Vertical);

    let horizontal = carver.find_horizontal_seam();
    println!("Horizontal seam: {{ {} }}", horizontal.iter().join(" "));
    print_seam(&energy, &horizontal, Direction::Horizontal);

    for removed in 0..columns {
        let seam = carver.find_vertical_seam();
        carver
            .remove_vertical_seam(&seam)
            .with_context(|| format!("cannot remove column {} of {}", removed + 1, columns))?;
    }
    for removed in 0..rows {
        let seam = carver.find_horizontal_seam();
        carver
            .remove_horizontal_seam(&seam)
            .with_context(|| format!("cannot remove row {} of {}", removed + 1, rows))?;
    }
    info!(columns, rows, width = carver.width(), height = carver.height(), "carved");

    if let Some(output) = matches.value_of("output") {
        carver
            .picture()
            .save(output)
            .with_context(|| format!("cannot write {}", output))?;
        println!(
            "Wrote {}-by-{} image to {}",
            carver.width(),
            carver.height(),
            output
        );
    }
    Ok(())
}
