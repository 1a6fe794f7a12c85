/*
Copyright 2020 Anish Jewalikar

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use std::fs;
use std::process;

use anyhow::anyhow;
use ch8_core::{Chip8Error, Cpu, RunOptions};
use clap::{App, Arg};

mod audio;
mod config;
mod input;
mod surface;

use config::Config;
use surface::SdlSurface;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{:#}", err);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let matches = App::new("Chip-8")
        .version("0.2.0")
        .about("A Chip-8 interpreter, fronted by SDL2.")
        .arg(
            Arg::with_name("file")
                .help("The ROM file to execute")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("scale")
                .help("Integer scale factor applied to each Chip-8 pixel")
                .long("scale")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ips")
                .help("Instructions executed per second")
                .long("ips")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("fg")
                .help("Foreground color, as 8 hex digits RRGGBBAA")
                .long("fg")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("bg")
                .help("Background color, as 8 hex digits RRGGBBAA")
                .long("bg")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("pixel_outlines")
                .help("Draw a grid outline around each lit pixel")
                .long("pixel-outlines"),
        )
        .get_matches();

    let config = Config::from_matches(&matches).map_err(|e| anyhow!(e))?;

    let rom = fs::read(&config.rom_path)
        .map_err(|e| Chip8Error::RomUnreadable(format!("{}: {}", config.rom_path, e)))?;

    let mut cpu = Cpu::new();
    cpu.load_rom(&rom)?;

    let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut surface = SdlSurface::new(&sdl_context, config.scale).map_err(|e| anyhow!(e))?;

    let options = RunOptions {
        ips: config.ips,
        scale: config.scale,
        fg: config.fg,
        bg: config.bg,
        outlines: config.pixel_outlines,
    };

    log::info!(
        "running `{}` at {} instructions/sec",
        config.rom_path,
        config.ips
    );

    ch8_core::run(&mut cpu, &mut surface, &options)?;

    Ok(())
}
