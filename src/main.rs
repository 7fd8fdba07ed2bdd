extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use num::Complex;
use std::fs::File;
use std::process;
use std::str::FromStr;
use std::time::Instant;

use mandelbrot::{encode, RenderError, Renderer, Viewport};

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

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_number(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const MIN: &str = "min";
const MAX: &str = "max";
const CENTER: &str = "center";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelbrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output PNG file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x800")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(MIN)
                .required(false)
                .long(MIN)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.84")
                .validator(|s| validate_number(&s, "Could not parse plane minimum"))
                .help("Lower bound of the mapped region of the complex plane"),
        )
        .arg(
            Arg::with_name(MAX)
                .required(false)
                .long(MAX)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("2.04")
                .validator(|s| validate_number(&s, "Could not parse plane maximum"))
                .help("Upper bound of the mapped region of the complex plane"),
        )
        .arg(
            Arg::with_name(CENTER)
                .required(false)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.0,0.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse center offset"))
                .help("Center offset, subtracted from every mapped point"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of worker threads; defaults to the CPU count"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("200")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 200000",
                    )
                })
                .help("Iteration cap; orbits that survive this long count as interior"),
        )
        .get_matches()
}

fn main() {
    env_logger::init();

    let matches = args();
    let (width, height) = parse_pair(matches.value_of(SIZE).unwrap(), 'x')
        .expect("Error parsing image dimensions");
    let min = f64::from_str(matches.value_of(MIN).unwrap()).expect("Error parsing plane minimum");
    let max = f64::from_str(matches.value_of(MAX).unwrap()).expect("Error parsing plane maximum");
    let center = parse_pair::<f64>(matches.value_of(CENTER).unwrap(), ',')
        .map(|(re, im)| Complex::new(re, im))
        .expect("Error parsing center offset");
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Error parsing iteration count");
    let threads = match matches.value_of(THREADS) {
        Some(s) => usize::from_str(s).expect("Error parsing thread count"),
        None => num_cpus::get(),
    };

    let viewport = match Viewport::new(width, height, min, max, iterations, center) {
        Ok(viewport) => viewport,
        Err(e) => {
            eprintln!("Configuration failure: {}", e);
            process::exit(1);
        }
    };

    info!(
        "rendering {}x{} pixels at {} iterations on {} threads",
        width, height, iterations, threads
    );
    let start = Instant::now();
    let renderer = Renderer::new(viewport);
    let pixels = match renderer.render(threads) {
        Ok(pixels) => pixels,
        Err(e) => {
            eprintln!("Render failure: {}", e);
            process::exit(1);
        }
    };
    debug!("render finished in {:?}", start.elapsed());

    let outfile = matches.value_of(OUTPUT).unwrap();
    let written = File::create(outfile)
        .map_err(RenderError::Encoding)
        .and_then(|file| encode::write_png(file, &pixels, width, height));
    if let Err(e) = written {
        eprintln!("Could not write image to {}: {}", outfile, e);
        process::exit(1);
    }
}
