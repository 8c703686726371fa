extern crate clap;
extern crate failure;
extern crate image;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num;
extern crate simplog;

use clap::{App, Arg, ArgMatches};
use failure::{err_msg, Error};
use image::{GenericImageView, RgbaImage};
use mandelbrot::{MandelbrotImage, Renderer, Viewport};
use num::Complex;
use simplog::simplog::SimpleLogger;
use std::process::exit;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_positive<T: FromStr + PartialOrd + Default>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(v) if v > T::default() => Ok(()),
        _ => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const CENTER: &str = "center";
const MAGNIFICATION: &str = "magnification";
const ITERATIONS: &str = "iterations";
const ON_DEMAND: &str = "on-demand";
const VERBOSITY: &str = "verbosity";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandel")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; the format follows the extension"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_pair::<u32>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(CENTER)
                .required(false)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.5,0.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse center point"))
                .help("Point of the complex plane at the center of the image"),
        )
        .arg(
            Arg::with_name(MAGNIFICATION)
                .required(false)
                .long(MAGNIFICATION)
                .short("m")
                .takes_value(true)
                .default_value("1.0")
                .validator(|s| {
                    validate_positive::<f64>(&s, "Magnification must be a positive number")
                })
                .help("Zoom factor; 1.0 fits 4 units across the shorter side"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_positive::<usize>(&s, "Iteration count must be a positive integer")
                })
                .help("Number of iterations before a point is considered inside the set"),
        )
        .arg(
            Arg::with_name(ON_DEMAND)
                .long(ON_DEMAND)
                .short("d")
                .help("Compute pixels as the encoder asks for them instead of all at once"),
        )
        .arg(
            Arg::with_name(VERBOSITY)
                .required(false)
                .long(VERBOSITY)
                .short("v")
                .takes_value(true)
                .help("Set verbosity level for output (trace, debug, info, warn, error (default))"),
        )
        .get_matches()
}

fn viewport(matches: &ArgMatches) -> Result<Viewport, Error> {
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<u32>(s, 'x'))
        .ok_or_else(|| err_msg("Error parsing image dimensions"))?;
    let center = matches
        .value_of(CENTER)
        .and_then(parse_complex)
        .ok_or_else(|| err_msg("Error parsing center point"))?;
    let magnification = f64::from_str(matches.value_of(MAGNIFICATION).unwrap_or("1.0"))?;
    let limit = usize::from_str(matches.value_of(ITERATIONS).unwrap_or("1000"))?;
    Ok(Viewport::new(width, height, center, magnification, limit)?)
}

fn run() -> Result<(), Error> {
    let matches = args();
    SimpleLogger::init(matches.value_of(VERBOSITY));

    let viewport = viewport(&matches)?;
    let output = matches
        .value_of(OUTPUT)
        .ok_or_else(|| err_msg("No output file given"))?;

    let img = if matches.is_present(ON_DEMAND) {
        info!("Sampling pixels on demand");
        let lazy = MandelbrotImage::new(viewport);
        RgbaImage::from_fn(lazy.width(), lazy.height(), |x, y| lazy.color_at(x, y))
    } else {
        Renderer::new(viewport).render_image()
    };

    img.save(output)?;
    info!("Wrote {}", output);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Render failure: {}", e);
        exit(1);
    }
}
